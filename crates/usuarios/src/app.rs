use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{
        root::index,
        usuarios::{create_user, delete_user, get_user, list_users, update_user},
    },
    state::AppState,
};

#[cfg(debug_assertions)]
use crate::handlers::debug::list_users_debug;

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // Every route answers cross-origin requests from any origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    let router = Router::new()
        .route("/", get(index))
        .route("/usuarios", get(list_users).post(create_user))
        .route(
            "/usuarios/{id}",
            get(get_user).put(update_user).delete(delete_user),
        );

    // Full-row listing, passwords included. Debug builds only.
    #[cfg(debug_assertions)]
    let router = router.route("/debug/usuarios", get(list_users_debug));

    router
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
