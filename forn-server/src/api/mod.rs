pub mod api_json;
pub mod auth;
pub mod error;
pub mod suppliers;
