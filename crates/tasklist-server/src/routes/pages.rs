use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, Redirect};
use axum::Form;
use serde::Deserialize;

use tasklist_core::StatusFilter;
use tasklist_db::{Db, DbError};

use crate::render::render_page;

#[derive(Debug, Deserialize)]
pub struct IndexQuery {
    status: Option<String>,
}

pub async fn index(
    State(db): State<Db>,
    Query(q): Query<IndexQuery>,
) -> Result<Html<String>, StatusCode> {
    // Unrecognized filter values coerce to showing everything.
    let filter = q
        .status
        .as_deref()
        .and_then(StatusFilter::parse_str)
        .unwrap_or_default();
    let tasks = db.list_tasks(filter).map_err(internal_error)?;
    Ok(Html(render_page(&tasks, filter)))
}

#[derive(Debug, Deserialize)]
pub struct AddForm {
    #[serde(default)]
    title: String,
}

pub async fn add(State(db): State<Db>, Form(form): Form<AddForm>) -> Result<Redirect, StatusCode> {
    db.add_task(&form.title).map_err(internal_error)?;
    Ok(Redirect::to("/"))
}

pub async fn toggle(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Redirect, StatusCode> {
    if let Some(id) = parse_task_id(&id) {
        db.toggle_task(id).map_err(internal_error)?;
    }
    Ok(Redirect::to("/"))
}

pub async fn delete(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Redirect, StatusCode> {
    if let Some(id) = parse_task_id(&id) {
        db.delete_task(id).map_err(internal_error)?;
    }
    Ok(Redirect::to("/"))
}

/// Path ids must be all ASCII digits; anything else skips the mutation but
/// still redirects home.
fn parse_task_id(raw: &str) -> Option<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

fn internal_error(err: DbError) -> StatusCode {
    tracing::error!("storage error: {err}");
    StatusCode::INTERNAL_SERVER_ERROR
}
