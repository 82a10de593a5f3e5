//! User CRUD handlers.
//!
//! Handlers validate request shape only and delegate everything touching
//! storage to the repository on `AppState`. Failures not handled locally
//! propagate to `AppError`, the terminal formatting stage.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use usuarios_core::storage::RepositoryError;
use usuarios_core::user::{NewUser, User, UserUpdate};

use crate::{handlers::AppError, state::AppState};

/// 400 envelope for malformed or incomplete request bodies.
fn validation_error(message: &'static str) -> Response {
    tracing::warn!(message = %message, "Request validation failed");
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({
            "success": false,
            "message": message,
        })),
    )
        .into_response()
}

/// Create a new user (POST /usuarios).
pub async fn create_user(
    State(state): State<AppState>,
    body: Result<Json<NewUser>, JsonRejection>,
) -> Result<impl IntoResponse, Response> {
    let Json(payload) = body.map_err(|e| {
        tracing::debug!(error = %e, "Rejected create body");
        validation_error("Faltan campos")
    })?;

    if !payload.is_complete() {
        return Err(validation_error("Faltan campos"));
    }

    let user = state
        .user_repo
        .create_user(&payload)
        .await
        .map_err(|e| AppError::from(e).into_response())?;

    tracing::info!(user_id = user.id, email = %user.email, "Created new user");

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "success": true,
            "id": user.id,
            "name": user.name,
            "email": user.email,
        })),
    ))
}

/// List all users (GET /usuarios).
///
/// Returns JSON array of all users, passwords excluded.
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let users = state.user_repo.list_users().await?;

    Ok(Json(users))
}

/// Get a single user by id (GET /usuarios/{id}).
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<User>, AppError> {
    let user = state.user_repo.get_user(id).await?;

    match user {
        Some(user) => Ok(Json(user)),
        None => Err(RepositoryError::NotFound { id }.into()),
    }
}

/// Update a user by id (PUT /usuarios/{id}).
///
/// Name and email are required; the stored password only changes when the
/// body carries one.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: Result<Json<UserUpdate>, JsonRejection>,
) -> Result<Json<serde_json::Value>, Response> {
    let Json(payload) = body.map_err(|e| {
        tracing::debug!(error = %e, "Rejected update body");
        validation_error("Faltan campos")
    })?;

    if !payload.is_complete() {
        return Err(validation_error("Faltan campos"));
    }

    let changes = state
        .user_repo
        .update_user(id, &payload)
        .await
        .map_err(|e| AppError::from(e).into_response())?;

    tracing::info!(user_id = id, "Updated user");

    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Usuario actualizado correctamente",
        "changes": changes,
    })))
}

/// Delete a user by id (DELETE /usuarios/{id}).
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    let changes = state.user_repo.delete_user(id).await?;

    tracing::info!(user_id = id, "Deleted user");

    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Usuario eliminado correctamente",
        "changes": changes,
    })))
}
