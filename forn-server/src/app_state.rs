use forn_auth::TokenIssuer;
use forn_directory::UserDirectory;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared application state for REST handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub directory: Arc<UserDirectory>,
    /// Set when auth is enabled; the auth routes are only mounted then
    pub token_issuer: Option<Arc<TokenIssuer>>,
}
