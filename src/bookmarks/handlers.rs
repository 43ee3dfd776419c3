use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, patch, post},
    Json, Router,
};
use tracing::instrument;

use crate::auth::jwt::AuthUser;
use crate::bookmarks::dto::{CreateBookmarkRequest, EditBookmarkRequest};
use crate::bookmarks::repo::Bookmark;
use crate::bookmarks::services;
use crate::error::ApiError;
use crate::state::AppState;

pub fn bookmark_routes() -> Router<AppState> {
    Router::new()
        .route("/bookmarks", get(list_bookmarks))
        .route("/bookmarks", post(create_bookmark))
        .route("/bookmarks/:id", get(get_bookmark))
        .route("/bookmarks/:id", patch(edit_bookmark))
        .route("/bookmarks/:id", delete(delete_bookmark))
}

#[instrument(skip(state, auth), fields(user_id = auth.id))]
async fn list_bookmarks(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<Bookmark>>, ApiError> {
    let bookmarks = services::list(&state.db, auth.id).await?;
    Ok(Json(bookmarks))
}

#[instrument(skip(state, auth), fields(user_id = auth.id))]
async fn get_bookmark(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<Bookmark>, ApiError> {
    services::get_by_id(&state.db, auth.id, id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("bookmark not found".into()))
}

#[instrument(skip(state, auth, body), fields(user_id = auth.id))]
async fn create_bookmark(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<CreateBookmarkRequest>,
) -> Result<(StatusCode, Json<Bookmark>), ApiError> {
    if body.title.trim().is_empty() {
        return Err(ApiError::Validation("title must not be empty".into()));
    }
    if body.link.trim().is_empty() {
        return Err(ApiError::Validation("link must not be empty".into()));
    }

    let bookmark = services::create(&state.db, auth.id, &body).await?;
    Ok((StatusCode::CREATED, Json(bookmark)))
}

#[instrument(skip(state, auth, patch), fields(user_id = auth.id))]
async fn edit_bookmark(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
    Json(patch): Json<EditBookmarkRequest>,
) -> Result<Json<Bookmark>, ApiError> {
    let bookmark = services::edit_by_id(&state.db, auth.id, id, &patch).await?;
    Ok(Json(bookmark))
}

#[instrument(skip(state, auth), fields(user_id = auth.id))]
async fn delete_bookmark(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    services::delete_by_id(&state.db, auth.id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
