use axum::{
    extract::State,
    routing::{get, patch},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::jwt::AuthUser,
    error::ApiError,
    state::AppState,
    users::{dto::EditUserRequest, repo::{self, User}},
};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/me", get(get_me))
        .route("/users", patch(edit_user))
}

/// The guard already resolved the profile; hand it straight back.
#[instrument(skip(user), fields(user_id = %user.id))]
pub async fn get_me(AuthUser(user): AuthUser) -> Json<User> {
    Json(user)
}

#[instrument(skip(state, user, payload), fields(user_id = %user.id))]
pub async fn edit_user(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(payload): Json<EditUserRequest>,
) -> Result<Json<User>, ApiError> {
    let payload = payload.validate()?;

    let updated = match User::update(
        &state.db,
        user.id,
        payload.email.as_deref(),
        payload.first_name.as_deref(),
        payload.last_name.as_deref(),
    )
    .await
    {
        Ok(updated) => updated,
        Err(e) if repo::is_unique_violation(&e) => {
            warn!(user_id = %user.id, "profile edit with taken email");
            return Err(ApiError::forbidden("Credentials taken"));
        }
        Err(e) => return Err(e.into()),
    };

    info!(user_id = %updated.id, "profile updated");
    Ok(Json(updated))
}
