use crate::api::auth::auth::{login, register};
use crate::api::suppliers::suppliers::{
    create_supplier, delete_supplier, get_supplier, list_suppliers, update_supplier,
};
use crate::app_state::AppState;
use crate::health;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints.
///
/// The auth routes are mounted only when a token issuer is configured;
/// otherwise /registro and /login respond 404.
pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        // Health check endpoint
        .route("/health", get(health::health))
        // Supplier CRUD endpoints
        .route("/fornecedor", get(list_suppliers).post(create_supplier))
        .route(
            "/fornecedor/{id}",
            get(get_supplier)
                .put(update_supplier)
                .delete(delete_supplier),
        );

    if state.token_issuer.is_some() {
        router = router
            .route("/registro", post(register))
            .route("/login", post(login));
    }

    router
        // Add shared state
        .with_state(state)
        // CORS middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
