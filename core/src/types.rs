//! Resource names and typed views over the service's JSON.
//!
//! # Design
//! The helper returns untyped `serde_json::Value`s. Scenarios that want to
//! assert on fields build one of these views with `view`. The structs are
//! defined independently of the mock server's records; the scenario suites
//! catch any drift between the two.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;

/// The five collections exposed by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Albums,
    Comments,
    Photos,
    Posts,
    Todos,
}

impl Resource {
    pub const ALL: [Resource; 5] = [
        Resource::Albums,
        Resource::Comments,
        Resource::Photos,
        Resource::Posts,
        Resource::Todos,
    ];

    /// Collection path segment, e.g. `albums`.
    pub fn collection(&self) -> &'static str {
        match self {
            Resource::Albums => "albums",
            Resource::Comments => "comments",
            Resource::Photos => "photos",
            Resource::Posts => "posts",
            Resource::Todos => "todos",
        }
    }

    pub fn singular(&self) -> &'static str {
        match self {
            Resource::Albums => "album",
            Resource::Comments => "comment",
            Resource::Photos => "photo",
            Resource::Posts => "post",
            Resource::Todos => "todo",
        }
    }

    pub fn item_path(&self, id: u64) -> String {
        format!("{}/{id}", self.collection())
    }
}

/// Implemented by every typed view so `view` can name it in errors.
pub trait ResourceView: DeserializeOwned {
    const RESOURCE: Resource;
}

/// Builds a typed view from a JSON value returned by the helper.
pub fn view<T: ResourceView>(value: &Value) -> Result<T, ApiError> {
    T::deserialize(value).map_err(|source| ApiError::View {
        resource: T::RESOURCE.singular(),
        source,
    })
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub id: u64,
    pub user_id: u64,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u64,
    pub post_id: u64,
    pub name: String,
    pub email: String,
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: u64,
    pub album_id: u64,
    pub title: String,
    pub url: String,
    pub thumbnail_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    pub user_id: u64,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u64,
    pub user_id: u64,
    pub title: String,
    pub completed: bool,
}

impl ResourceView for Album {
    const RESOURCE: Resource = Resource::Albums;
}

impl ResourceView for Comment {
    const RESOURCE: Resource = Resource::Comments;
}

impl ResourceView for Photo {
    const RESOURCE: Resource = Resource::Photos;
}

impl ResourceView for Post {
    const RESOURCE: Resource = Resource::Posts;
}

impl ResourceView for Todo {
    const RESOURCE: Resource = Resource::Todos;
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn every_resource_has_distinct_paths() {
        for resource in Resource::ALL {
            assert_eq!(
                resource.collection(),
                format!("{}s", resource.singular()),
                "{resource:?}"
            );
            assert_eq!(
                resource.item_path(7),
                format!("{}/7", resource.collection())
            );
        }
        let mut collections: Vec<_> = Resource::ALL.iter().map(Resource::collection).collect();
        collections.sort_unstable();
        collections.dedup();
        assert_eq!(collections.len(), Resource::ALL.len());
    }

    #[test]
    fn paths_and_names() {
        assert_eq!(Resource::Photos.collection(), "photos");
        assert_eq!(Resource::Photos.singular(), "photo");
        assert_eq!(Resource::Comments.item_path(500), "comments/500");
    }

    #[test]
    fn photo_view_reads_camel_case() {
        let value = json!({
            "albumId": 1,
            "id": 1,
            "title": "accusamus beatae ad facilis cum similique qui sunt",
            "url": "https://via.placeholder.com/600/92c952",
            "thumbnailUrl": "https://via.placeholder.com/150/92c952"
        });
        let photo: Photo = view(&value).unwrap();
        assert_eq!(photo.album_id, 1);
        assert_eq!(photo.thumbnail_url, "https://via.placeholder.com/150/92c952");
    }

    #[test]
    fn view_error_names_resource() {
        let err = view::<Todo>(&json!({ "id": 1, "title": "x" })).unwrap_err();
        assert!(matches!(err, ApiError::View { resource: "todo", .. }));
        assert!(err.to_string().starts_with("failed to read todo view"));
    }
}
