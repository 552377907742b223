use crate::naming::{camelize_keys, decamelize_keys};
use crate::{error::AppError, AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use database::BookFields;
use serde_json::Value;
use std::sync::Arc;

/// # GET /books
/// Fetches every book, ordered by title ascending, keys camelized.
pub async fn list_books(State(state): State<Arc<AppState>>) -> Result<Json<Value>, AppError> {
    let rows = state.store.list_books().await?;
    Ok(Json(camelize_keys(serde_json::to_value(rows)?)))
}

/// # GET /books/:id
/// Fetches a single book. A missing row is a 404 with an empty body, not an
/// error payload.
pub async fn get_book(
    Path(id): Path<i32>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, AppError> {
    match state.store.get_book(id).await? {
        Some(row) => Ok(Json(camelize_keys(serde_json::to_value(row)?)).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

/// # POST /books
/// Inserts a new book from the five client-supplied fields. Anything else in
/// the body (a client-sent id, timestamps) is dropped by deserialization into
/// `BookFields`; the store assigns id and timestamps.
pub async fn create_book(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let fields: BookFields = serde_json::from_value(decamelize_keys(body))?;
    let row = state.store.insert_book(&fields).await?;
    Ok(Json(camelize_keys(serde_json::to_value(row)?)))
}

/// # PATCH /books/:id
/// Overwrites the five mutable fields of one book.
///
/// The id is taken as a raw path segment and parsed here: a non-integer id
/// behaves like an unmatched route (404, nothing written). The read before
/// the update is the existence check, so a missing row is also a clean 404
/// rather than an empty update result.
pub async fn update_book(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<Response, AppError> {
    let id: i32 = match id.parse() {
        Ok(id) => id,
        Err(_) => return Ok(StatusCode::NOT_FOUND.into_response()),
    };

    if state.store.get_book(id).await?.is_none() {
        return Ok(StatusCode::NOT_FOUND.into_response());
    }

    let fields: BookFields = serde_json::from_value(decamelize_keys(body))?;
    match state.store.update_book(id, &fields).await? {
        Some(row) => Ok(Json(camelize_keys(serde_json::to_value(row)?)).into_response()),
        // The row vanished between the existence check and the update.
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

/// # DELETE /books/:id
/// Removes a book and responds with the deleted record, minus its `id` key.
/// A missing row is a 404 with an empty body; store failures propagate like
/// every other handler.
pub async fn delete_book(
    Path(id): Path<i32>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, AppError> {
    let Some(row) = state.store.get_book(id).await? else {
        return Ok(StatusCode::NOT_FOUND.into_response());
    };

    state.store.delete_book(id).await?;

    let mut body = camelize_keys(serde_json::to_value(row)?);
    if let Value::Object(map) = &mut body {
        map.remove("id");
    }
    Ok(Json(body).into_response())
}
