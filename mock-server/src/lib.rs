//! In-process stand-in for the JSONPlaceholder service.
//!
//! Serves albums, comments, photos, posts and todos with the public
//! service's routes, plus the landing page and guide. Unlike the public
//! service it persists writes and rejects invalid bodies with 400, so the
//! scenario suites can exercise both paths hermetically.

pub mod pages;
pub mod records;
pub mod seed;

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;

pub use records::{Album, Comment, Photo, Post, Record, Todo};

/// Rows of one collection, keyed and ordered by id.
///
/// `next_id` only grows, so an id freed by a delete is never handed out again.
#[derive(Debug)]
pub struct Table<R> {
    rows: BTreeMap<u64, R>,
    next_id: u64,
}

impl<R: Record> Table<R> {
    fn seeded(records: Vec<R>) -> Self {
        let rows: BTreeMap<u64, R> = records.into_iter().map(|r| (r.id(), r)).collect();
        let next_id = rows.keys().next_back().map_or(1, |id| id + 1);
        Self { rows, next_id }
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

#[derive(Debug)]
pub struct Db {
    pub albums: RwLock<Table<Album>>,
    pub comments: RwLock<Table<Comment>>,
    pub photos: RwLock<Table<Photo>>,
    pub posts: RwLock<Table<Post>>,
    pub todos: RwLock<Table<Todo>>,
}

impl Db {
    pub fn seeded() -> Self {
        Self {
            albums: RwLock::new(Table::seeded(seed::albums())),
            comments: RwLock::new(Table::seeded(seed::comments())),
            photos: RwLock::new(Table::seeded(seed::photos())),
            posts: RwLock::new(Table::seeded(seed::posts())),
            todos: RwLock::new(Table::seeded(seed::todos())),
        }
    }
}

pub type SharedDb = Arc<Db>;

/// Failure answered with a status and `{"error": ...}`.
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    BadRequest(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, reason) = match self {
            ServerError::NotFound => (StatusCode::NOT_FOUND, "not found".to_string()),
            ServerError::BadRequest(reason) => (StatusCode::BAD_REQUEST, reason),
        };
        (status, Json(json!({ "error": reason }))).into_response()
    }
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        ServerError::BadRequest(rejection.body_text())
    }
}

pub fn app() -> Router {
    let db: SharedDb = Arc::new(Db::seeded());
    let router = Router::new()
        .route("/", get(pages::landing))
        .route("/guide", get(pages::guide));
    let router = resource_routes::<Album>(router);
    let router = resource_routes::<Comment>(router);
    let router = resource_routes::<Photo>(router);
    let router = resource_routes::<Post>(router);
    let router = resource_routes::<Todo>(router);
    router.with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn resource_routes<R: Record>(router: Router<SharedDb>) -> Router<SharedDb> {
    router
        .route(
            &format!("/{}", R::COLLECTION),
            get(list::<R>).post(create::<R>),
        )
        .route(
            &format!("/{}/{{id}}", R::COLLECTION),
            get(fetch::<R>).put(replace::<R>).delete(remove::<R>),
        )
}

async fn list<R: Record>(State(db): State<SharedDb>) -> Json<Vec<R>> {
    let table = R::table(&db).read().await;
    Json(table.rows.values().cloned().collect())
}

async fn fetch<R: Record>(
    State(db): State<SharedDb>,
    Path(id): Path<u64>,
) -> Result<Json<R>, ServerError> {
    let table = R::table(&db).read().await;
    table.rows.get(&id).cloned().map(Json).ok_or(ServerError::NotFound)
}

async fn create<R: Record>(
    State(db): State<SharedDb>,
    payload: Result<Json<R>, JsonRejection>,
) -> Result<(StatusCode, Json<R>), ServerError> {
    let Json(mut record) = payload?;
    record.validate().map_err(ServerError::BadRequest)?;

    let mut table = R::table(&db).write().await;
    let id = table.allocate_id();
    record.set_id(id);
    table.rows.insert(id, record.clone());
    info!(collection = R::COLLECTION, id, "created record");
    Ok((StatusCode::CREATED, Json(record)))
}

async fn replace<R: Record>(
    State(db): State<SharedDb>,
    Path(id): Path<u64>,
    payload: Result<Json<R>, JsonRejection>,
) -> Result<Json<R>, ServerError> {
    let mut table = R::table(&db).write().await;
    let row = table.rows.get_mut(&id).ok_or(ServerError::NotFound)?;

    let Json(mut record) = payload?;
    record.validate().map_err(ServerError::BadRequest)?;
    record.set_id(id);
    *row = record.clone();
    info!(collection = R::COLLECTION, id, "replaced record");
    Ok(Json(record))
}

async fn remove<R: Record>(
    State(db): State<SharedDb>,
    Path(id): Path<u64>,
) -> Result<Json<Value>, ServerError> {
    let mut table = R::table(&db).write().await;
    table.rows.remove(&id).ok_or(ServerError::NotFound)?;
    info!(collection = R::COLLECTION, id, "deleted record");
    Ok(Json(json!({})))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_tables_are_keyed_by_id() {
        let db = Db::seeded();
        let posts = db.posts.try_read().unwrap();
        assert!(posts.rows.contains_key(&7));
        assert_eq!(posts.next_id, 8);
    }

    #[test]
    fn empty_table_starts_at_one() {
        let mut table: Table<Todo> = Table::seeded(Vec::new());
        assert_eq!(table.allocate_id(), 1);
        assert_eq!(table.allocate_id(), 2);
    }

    #[test]
    fn freed_ids_are_not_reused() {
        let mut table = Table::seeded(seed::posts());
        let id = table.allocate_id();
        table.rows.insert(id, Post { id, ..Post::default() });
        table.rows.remove(&id);
        assert_ne!(table.allocate_id(), id);
    }

    #[test]
    fn not_found_maps_to_404() {
        let resp = ServerError::NotFound.into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn bad_request_maps_to_400() {
        let resp = ServerError::BadRequest("title is required".into()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
