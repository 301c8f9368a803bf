//! JSON body extractor that keeps rejections inside the API error shape
//!
//! axum's `Json` answers malformed or missing bodies with a plain-text
//! response. Routing the rejection through `ApiError::Validation` keeps
//! every per-request failure in the `{error:{...}}` envelope.

use crate::ApiError;

use forn_core::ErrorLocation;

use std::panic::Location;

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err(ApiError::Validation {
                message: rejection.body_text(),
                field: None,
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
