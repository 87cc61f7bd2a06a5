use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::jwt::AuthUser,
    bookmarks::{
        dto::{CreateBookmarkRequest, EditBookmarkRequest},
        repo::Bookmark,
    },
    error::ApiError,
    state::AppState,
};

pub fn bookmark_routes() -> Router<AppState> {
    Router::new()
        .route("/bookmarks", get(list_bookmarks).post(create_bookmark))
        .route(
            "/bookmarks/:id",
            get(get_bookmark)
                .patch(edit_bookmark)
                .delete(delete_bookmark),
        )
}

#[instrument(skip(state, user), fields(user_id = %user.id))]
pub async fn list_bookmarks(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<Bookmark>>, ApiError> {
    let bookmarks = Bookmark::list_by_user(&state.db, user.id).await?;
    Ok(Json(bookmarks))
}

/// Read path: absent and foreign bookmarks both come back as `null`.
#[instrument(skip(state, user), fields(user_id = %user.id))]
pub async fn get_bookmark(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<Option<Bookmark>>, ApiError> {
    let bookmark = Bookmark::find_by_id_for_user(&state.db, user.id, id).await?;
    Ok(Json(bookmark))
}

#[instrument(skip(state, user, payload), fields(user_id = %user.id))]
pub async fn create_bookmark(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(payload): Json<CreateBookmarkRequest>,
) -> Result<(StatusCode, Json<Bookmark>), ApiError> {
    let new = payload.validate()?;

    // Owner always comes from the token, never from the body.
    let bookmark = Bookmark::create(
        &state.db,
        user.id,
        &new.title,
        new.description.as_deref(),
        &new.link,
    )
    .await?;

    info!(bookmark_id = %bookmark.id, "bookmark created");
    Ok((StatusCode::CREATED, Json(bookmark)))
}

#[instrument(skip(state, user, payload), fields(user_id = %user.id))]
pub async fn edit_bookmark(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<EditBookmarkRequest>,
) -> Result<Json<Bookmark>, ApiError> {
    check_ownership(&state, user.id, id).await?;

    let bookmark = Bookmark::update(
        &state.db,
        id,
        payload.title.as_deref(),
        payload.description.as_deref(),
        payload.link.as_deref(),
    )
    .await?;

    info!(bookmark_id = %bookmark.id, "bookmark updated");
    Ok(Json(bookmark))
}

#[instrument(skip(state, user), fields(user_id = %user.id))]
pub async fn delete_bookmark(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    check_ownership(&state, user.id, id).await?;

    Bookmark::delete(&state.db, id).await?;

    info!(bookmark_id = %id, "bookmark deleted");
    Ok(StatusCode::OK)
}

/// Mutation paths report denial on both a missing and a foreign bookmark,
/// unlike the read path which reports absence.
async fn check_ownership(state: &AppState, user_id: i64, id: i64) -> Result<(), ApiError> {
    let bookmark = Bookmark::find_by_id(&state.db, id).await?;
    match bookmark {
        Some(b) if b.user_id == user_id => Ok(()),
        _ => {
            warn!(bookmark_id = %id, "denied access to bookmark");
            Err(ApiError::forbidden("Access to resources denied"))
        }
    }
}
