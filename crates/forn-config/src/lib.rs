mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

#[cfg(test)]
mod tests;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "fornecedor.db";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;
const MIN_DATABASE_MAX_CONNECTIONS: u32 = 1;
const MAX_DATABASE_MAX_CONNECTIONS: u32 = 64;

const DEFAULT_AUTH_ENABLED: bool = false;
const DEFAULT_TOKEN_ISSUER: &str = "fornecedor-api";
const DEFAULT_TOKEN_AUDIENCE: &str = "fornecedor-api";
const DEFAULT_TOKEN_LIFETIME_SECS: u64 = 3600;
/// Minimum accepted HS256 secret length
const MIN_JWT_SECRET_BYTES: usize = 32;
const DEFAULT_LOCKOUT_MAX_FAILURES: i32 = 5;
const DEFAULT_LOCKOUT_SECS: u64 = 300;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
