//! Root greeting endpoint.

/// GET / - plain text greeting.
#[axum::debug_handler]
pub async fn index() -> &'static str {
    "HOLA MUNDO!"
}
