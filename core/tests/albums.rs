//! Albums API scenarios.

mod common;

use common::{assert_http_error, assert_matches_object, assert_non_empty_collection, helper};
use placeholder_core::{view, Album, ApiError, IdSlot, Resource};
use serde_json::json;

#[test]
fn get_all_albums() {
    let response = helper().get("albums").unwrap();
    let first = assert_non_empty_collection(&response);
    assert_matches_object(
        first,
        &json!({ "userId": 1, "id": 1, "title": "quidem molestiae enim" }),
    );
}

#[test]
fn get_album_1() {
    let response = helper().get("albums/1").unwrap();
    let album: Album = view(&response).unwrap();
    assert_eq!(
        album,
        Album {
            id: 1,
            user_id: 1,
            title: "quidem molestiae enim".to_string(),
        }
    );
}

#[test]
fn album_lifecycle() {
    let helper = helper();
    let mut album_id = IdSlot::new(Resource::Albums);

    // create
    let data = json!({ "userId": 1, "title": "foo" });
    let created = helper.post("albums", &data).unwrap();
    assert_eq!(created["title"], data["title"]);
    assert_eq!(created["userId"], data["userId"]);
    let id = album_id.capture(&created).unwrap();

    // update
    let data = json!({ "id": id, "userId": 1, "title": "updated title" });
    let updated = helper.put(&album_id.item_path().unwrap(), &data).unwrap();
    assert_eq!(updated["title"], "updated title");
    assert_eq!(updated["id"], id);

    // update with invalid data
    let data = json!({ "id": id, "title": "", "userId": 1 });
    assert_http_error(helper.put(&album_id.item_path().unwrap(), &data), 400);

    // delete
    let deleted = helper.delete(&album_id.item_path().unwrap()).unwrap();
    assert_eq!(deleted, json!({}));

    assert_http_error(helper.get(&album_id.item_path().unwrap()), 404);
    helper.close();
}

#[test]
fn update_without_created_album_fails_fast() {
    let album_id = IdSlot::new(Resource::Albums);
    let err = album_id.item_path().unwrap_err();
    assert!(matches!(err, ApiError::IdNotSet { resource: "album" }));
    assert_eq!(err.to_string(), "albumId is not set");
}

#[test]
fn post_album_with_invalid_data() {
    let data = json!({ "title": "" });
    assert_http_error(helper().post("albums", &data), 400);
}

#[test]
fn delete_non_existing_album() {
    assert_http_error(helper().delete("albums/999999"), 404);
}
