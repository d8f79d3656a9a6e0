//! Record types served by the mock and their validation rules.
//!
//! Every field is `#[serde(default)]` so a body with missing fields still
//! deserializes; `validate` then reports what is wrong and the handler
//! answers 400 instead of axum's 422.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::{Db, Table};

/// A collection the mock serves under `/<COLLECTION>`.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    const COLLECTION: &'static str;

    fn id(&self) -> u64;
    fn set_id(&mut self, id: u64);
    fn validate(&self) -> Result<(), String>;
    fn table(db: &Db) -> &RwLock<Table<Self>>;
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Album {
    pub user_id: u64,
    pub id: u64,
    pub title: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Comment {
    pub post_id: u64,
    pub id: u64,
    pub name: String,
    pub email: String,
    pub body: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Photo {
    pub album_id: u64,
    pub id: u64,
    pub title: String,
    pub url: String,
    pub thumbnail_url: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Post {
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    pub body: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Todo {
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

fn require_text(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{field} is required"));
    }
    Ok(())
}

fn require_owner(field: &str, value: u64) -> Result<(), String> {
    if value == 0 {
        return Err(format!("{field} is required"));
    }
    Ok(())
}

impl Record for Album {
    const COLLECTION: &'static str = "albums";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }

    fn validate(&self) -> Result<(), String> {
        require_owner("userId", self.user_id)?;
        require_text("title", &self.title)
    }

    fn table(db: &Db) -> &RwLock<Table<Self>> {
        &db.albums
    }
}

impl Record for Comment {
    const COLLECTION: &'static str = "comments";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }

    fn validate(&self) -> Result<(), String> {
        require_owner("postId", self.post_id)?;
        require_text("name", &self.name)?;
        require_text("body", &self.body)?;
        require_text("email", &self.email)?;
        if !self.email.contains('@') {
            return Err("email is invalid".to_string());
        }
        Ok(())
    }

    fn table(db: &Db) -> &RwLock<Table<Self>> {
        &db.comments
    }
}

impl Record for Photo {
    const COLLECTION: &'static str = "photos";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }

    fn validate(&self) -> Result<(), String> {
        require_owner("albumId", self.album_id)?;
        require_text("title", &self.title)?;
        require_text("url", &self.url)?;
        require_text("thumbnailUrl", &self.thumbnail_url)
    }

    fn table(db: &Db) -> &RwLock<Table<Self>> {
        &db.photos
    }
}

impl Record for Post {
    const COLLECTION: &'static str = "posts";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }

    fn validate(&self) -> Result<(), String> {
        require_owner("userId", self.user_id)?;
        require_text("title", &self.title)?;
        require_text("body", &self.body)
    }

    fn table(db: &Db) -> &RwLock<Table<Self>> {
        &db.posts
    }
}

impl Record for Todo {
    const COLLECTION: &'static str = "todos";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }

    fn validate(&self) -> Result<(), String> {
        require_owner("userId", self.user_id)?;
        require_text("title", &self.title)
    }

    fn table(db: &Db) -> &RwLock<Table<Self>> {
        &db.todos
    }
}
