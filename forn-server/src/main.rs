pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

pub use api::{
    api_json::ApiJson,
    auth::{
        auth::{login, register},
        login_request::LoginRequest,
        register_request::RegisterRequest,
        token_response::TokenResponse,
    },
    error::ApiError,
    error::Result as ApiResult,
    suppliers::{
        create_supplier_request::CreateSupplierRequest,
        supplier_dto::SupplierDto,
        suppliers::{
            create_supplier, delete_supplier, get_supplier, list_suppliers, update_supplier,
        },
        update_supplier_request::UpdateSupplierRequest,
    },
};

pub use crate::app_state::AppState;
pub use crate::routes::build_router;

use forn_auth::{TokenIssuer, TokenSettings};
use forn_directory::{LockoutPolicy, UserDirectory};

use std::error::Error;
use std::sync::Arc;

use log::{info, warn};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = forn_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = forn_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting forn-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(database_path)
                .create_if_missing(true)
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
                .busy_timeout(std::time::Duration::from_secs(5)),
        )
        .await?;

    info!("Database connection established");

    // Run migrations
    info!("Running database migrations...");
    sqlx::migrate!("../crates/forn-db/migrations")
        .run(&pool)
        .await?;
    info!("Migrations complete");

    // Create token issuer (optional based on auth.enabled)
    let token_issuer: Option<Arc<TokenIssuer>> = if config.auth.enabled {
        let Some(secret) = config.auth.jwt_secret.clone() else {
            unreachable!("validate() ensures a JWT secret when auth.enabled")
        };
        let settings = TokenSettings {
            secret,
            issuer: config.auth.issuer.clone(),
            audience: config.auth.audience.clone(),
            lifetime_secs: config.auth.token_lifetime_secs,
        };
        info!("JWT: HS256 token issuance enabled");
        Some(Arc::new(TokenIssuer::from_settings(&settings)?))
    } else {
        warn!("Authentication DISABLED - /registro and /login will not be mounted");
        None
    };

    // Build the user directory with the configured lockout policy
    let directory = Arc::new(UserDirectory::new(
        pool.clone(),
        LockoutPolicy {
            max_failures: config.auth.lockout_max_failures,
            lockout_secs: config.auth.lockout_secs,
        },
    ));

    // Build application state
    let app_state = AppState {
        pool,
        directory,
        token_issuer,
    };

    // Build router
    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown on SIGINT
    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                log::error!("Failed to listen for SIGINT: {}", e);
            }
            info!("Received SIGINT (Ctrl+C), shutting down");
        })
        .await?;

    Ok(())
}
