use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use tracing::instrument;

use crate::auth::dto::{AuthRequest, TokenResponse};
use crate::auth::jwt::JwtKeys;
use crate::auth::repo::User;
use crate::auth::services;
use crate::error::ApiError;
use crate::state::AppState;

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/signin", post(signin))
}

/// Boundary validation shared by signup and signin: normalized email of a
/// plausible shape, password of at least 8 characters.
fn validate(payload: &mut AuthRequest) -> Result<(), ApiError> {
    payload.email = payload.email.trim().to_lowercase();

    if !services::is_valid_email(&payload.email) {
        return Err(ApiError::Validation("invalid email".into()));
    }
    if payload.password.len() < 8 {
        return Err(ApiError::Validation("password too short".into()));
    }
    Ok(())
}

#[instrument(skip(state, payload))]
async fn signup(
    State(state): State<AppState>,
    Json(mut payload): Json<AuthRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    validate(&mut payload)?;
    let user = services::signup(&state.db, &payload.email, &payload.password).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

#[instrument(skip(state, payload))]
async fn signin(
    State(state): State<AppState>,
    Json(mut payload): Json<AuthRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    validate(&mut payload)?;
    let keys = JwtKeys::from_ref(&state);
    let access_token = services::signin(&state.db, &keys, &payload.email, &payload.password).await?;
    Ok(Json(TokenResponse { access_token }))
}
