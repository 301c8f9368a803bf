//! Auth REST API handlers
//!
//! Registration and login both end with a freshly issued bearer token,
//! so a new user can call the API without a separate login round-trip.

use crate::{ApiError, ApiJson, ApiResult, AppState, LoginRequest, RegisterRequest, TokenResponse};

use forn_auth::TokenIssuer;
use forn_core::ErrorLocation;
use forn_directory::DirectoryIssue;

use std::panic::Location;

use axum::{Json, extract::State};

// =============================================================================
// Handlers
// =============================================================================

/// POST /registro
///
/// Register a new user and return a bearer token
pub async fn register(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<RegisterRequest>,
) -> ApiResult<Json<TokenResponse>> {
    if req.password != req.confirm_password {
        return Err(ApiError::Rejected {
            issues: vec![DirectoryIssue::new(
                "PasswordMismatch",
                "Password and confirmation do not match",
            )],
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let identity = state.directory.register(&req.email, &req.password).await?;

    log::info!("Registered user {}", identity.email);

    let issued = issuer(&state)?.issue(&identity)?;
    Ok(Json(issued.into()))
}

/// POST /login
///
/// Verify credentials and return a bearer token
pub async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let identity = state
        .directory
        .authenticate(&req.email, &req.password)
        .await?;

    log::info!("User {} logged in", identity.email);

    let issued = issuer(&state)?.issue(&identity)?;
    Ok(Json(issued.into()))
}

// =============================================================================
// Helpers
// =============================================================================

/// The auth routes are only mounted when the issuer is configured, so a
/// missing issuer here is a wiring bug, not a client error.
#[track_caller]
fn issuer(state: &AppState) -> ApiResult<&TokenIssuer> {
    state
        .token_issuer
        .as_deref()
        .ok_or_else(|| ApiError::Internal {
            message: "Token issuer is not configured".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
}
