//! Development-only inspection handlers.
//!
//! The listing here includes stored passwords, which are kept in clear
//! text. It exists for inspecting the database file during local
//! development and is compiled out of release builds; never route to it
//! in a production configuration.

use axum::{extract::State, Json};

use usuarios_core::user::UserRecord;

use crate::{handlers::AppError, state::AppState};

/// GET /debug/usuarios - full rows, passwords included.
#[axum::debug_handler]
pub async fn list_users_debug(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserRecord>>, AppError> {
    let users = state.user_repo.list_users_with_password().await?;

    Ok(Json(users))
}
