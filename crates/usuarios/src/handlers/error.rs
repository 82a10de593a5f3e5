use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use usuarios_core::storage::{repository_error_to_status_code, RepositoryError};

/// Application error type that wraps `anyhow::Error`.
///
/// This is the terminal formatting stage: every failure a handler
/// propagates with `?` lands here and is rendered as the
/// `{success, message}` envelope. Using `?` on functions returning
/// `Result<_, anyhow::Error>` converts into `AppError` automatically.
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0.downcast_ref::<RepositoryError>() {
            Some(repo_error) => {
                let code = repository_error_to_status_code(repo_error);
                let status =
                    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                (status, user_message(repo_error))
            }
            None => (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_MESSAGE),
        };

        if status.is_server_error() {
            tracing::error!(error = %self.0, "Unhandled storage failure");
        } else {
            tracing::warn!(status = %status, error = %self.0, "Request failed");
        }

        (
            status,
            Json(serde_json::json!({
                "success": false,
                "message": message,
            })),
        )
            .into_response()
    }
}

const GENERIC_MESSAGE: &str = "Error interno del servidor";

/// Message shown to the caller. Storage detail stays in the logs.
fn user_message(error: &RepositoryError) -> &'static str {
    match error {
        RepositoryError::NotFound { .. } => "Usuario no encontrado",
        RepositoryError::AlreadyExists { .. } => "El correo ya está registrado",
        RepositoryError::ConnectionFailed(_) | RepositoryError::QueryFailed(_) => GENERIC_MESSAGE,
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
