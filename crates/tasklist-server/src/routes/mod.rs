mod pages;

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Router;
use tasklist_db::Db;

/// Build the application router.
///
/// Unknown paths answer 404 by default; a method mismatch on a known path
/// (e.g. `POST /`) answers 404 as well rather than 405, so the surface is
/// exactly the table below and nothing else:
///
/// - `GET  /`             task page, `?status=all|active|done`
/// - `POST /add`          create from form body
/// - `POST /toggle/{id}`  flip completion
/// - `POST /delete/{id}`  hard delete
pub fn build_router(db: Db) -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/add", post(pages::add))
        .route("/toggle/{id}", post(pages::toggle))
        .route("/delete/{id}", post(pages::delete))
        .method_not_allowed_fallback(|| async { StatusCode::NOT_FOUND })
        .with_state(db)
}
