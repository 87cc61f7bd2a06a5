use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{AuthRequest, TokenResponse},
        jwt::JwtKeys,
        password::{hash_password, verify_password},
    },
    error::ApiError,
    state::AppState,
    users::repo::{self, User},
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/signin", post(signin))
}

#[instrument(skip(state, payload))]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<AuthRequest>,
) -> Result<(StatusCode, Json<TokenResponse>), ApiError> {
    let creds = payload.validate()?;

    let hash = hash_password(&creds.password)?;

    let user = match User::create(&state.db, &creds.email, &hash).await {
        Ok(user) => user,
        Err(e) if repo::is_unique_violation(&e) => {
            warn!(email = %creds.email, "signup with taken email");
            return Err(ApiError::forbidden("Credentials taken"));
        }
        Err(e) => return Err(e.into()),
    };

    let token = JwtKeys::from_ref(&state).sign(user.id, &user.email)?;

    info!(user_id = %user.id, email = %user.email, "user signed up");
    Ok((StatusCode::CREATED, Json(TokenResponse { access_token: token })))
}

#[instrument(skip(state, payload))]
pub async fn signin(
    State(state): State<AppState>,
    Json(payload): Json<AuthRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let creds = payload.validate()?;

    let user = User::find_by_email(&state.db, &creds.email)
        .await?
        .ok_or_else(|| {
            warn!(email = %creds.email, "signin unknown email");
            ApiError::forbidden("Credentials incorrect")
        })?;

    if !verify_password(&creds.password, &user.password_hash)? {
        warn!(user_id = %user.id, "signin invalid password");
        return Err(ApiError::forbidden("Credentials incorrect"));
    }

    let token = JwtKeys::from_ref(&state).sign(user.id, &user.email)?;

    info!(user_id = %user.id, "user signed in");
    Ok(Json(TokenResponse { access_token: token }))
}
