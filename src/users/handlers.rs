use axum::{
    extract::State,
    routing::{get, patch},
    Json, Router,
};
use tracing::{instrument, warn};

use crate::auth::jwt::AuthUser;
use crate::auth::repo::{is_unique_violation, ProfilePatch, User};
use crate::auth::services::is_valid_email;
use crate::error::ApiError;
use crate::state::AppState;

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/me", get(get_me))
        .route("/users", patch(edit_user))
}

#[instrument(skip(state, auth), fields(user_id = auth.id))]
async fn get_me(State(state): State<AppState>, auth: AuthUser) -> Result<Json<User>, ApiError> {
    let user = User::find_by_id(&state.db, auth.id)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("user no longer exists".into()))?;
    Ok(Json(user))
}

#[instrument(skip(state, auth, patch), fields(user_id = auth.id))]
async fn edit_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(mut patch): Json<ProfilePatch>,
) -> Result<Json<User>, ApiError> {
    if let Some(email) = &patch.email {
        let email = email.trim().to_lowercase();
        if !is_valid_email(&email) {
            return Err(ApiError::Validation("invalid email".into()));
        }
        patch.email = Some(email);
    }

    match User::update_profile(&state.db, auth.id, &patch).await {
        Ok(user) => Ok(Json(user)),
        Err(e) if is_unique_violation(&e) => {
            warn!(user_id = auth.id, "profile edit onto taken email");
            Err(ApiError::EmailInUse)
        }
        Err(e) => Err(e.into()),
    }
}
