//! Supplier REST API handlers
//!
//! Every write checks the reported affected-row count: an update or
//! delete that passed the existence check but touched zero rows is
//! surfaced as a save error instead of a silent success.

use crate::{
    ApiError, ApiJson, ApiResult, AppState, CreateSupplierRequest, SupplierDto,
    UpdateSupplierRequest,
};

use forn_core::{ErrorLocation, Supplier};
use forn_db::SupplierRepository;

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

// =============================================================================
// Handlers
// =============================================================================

/// GET /fornecedor
///
/// List all suppliers
pub async fn list_suppliers(State(state): State<AppState>) -> ApiResult<Json<Vec<SupplierDto>>> {
    let repo = SupplierRepository::new(state.pool.clone());
    let suppliers = repo.find_all().await?;

    Ok(Json(suppliers.into_iter().map(SupplierDto::from).collect()))
}

/// GET /fornecedor/{id}
///
/// Get a single supplier by ID
pub async fn get_supplier(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<SupplierDto>> {
    let supplier_id = Uuid::parse_str(&id)?;

    let repo = SupplierRepository::new(state.pool.clone());
    let supplier = repo
        .find_by_id(supplier_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Supplier {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(supplier.into()))
}

/// POST /fornecedor
///
/// Create a new supplier. Returns 201 with the stored record.
pub async fn create_supplier(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateSupplierRequest>,
) -> ApiResult<(StatusCode, Json<SupplierDto>)> {
    let name = req.name.trim().to_string();
    if name.is_empty() {
        return Err(ApiError::Validation {
            message: "Supplier name cannot be empty".to_string(),
            field: Some("name".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let supplier = match req.id {
        Some(ref id) => {
            let supplier_id = Uuid::parse_str(id).map_err(|_| ApiError::Validation {
                message: format!("Invalid id: '{}'", id),
                field: Some("id".into()),
                location: ErrorLocation::from(Location::caller()),
            })?;
            Supplier::with_id(supplier_id, name, req.document, req.active)
        }
        None => {
            let mut supplier = Supplier::new(name, req.document);
            supplier.active = req.active;
            supplier
        }
    };

    let repo = SupplierRepository::new(state.pool.clone());
    let affected = repo.insert(&supplier).await.map_err(|e| {
        if e.is_unique_violation() {
            ApiError::Validation {
                message: format!("Supplier {} already exists", supplier.id),
                field: Some("id".into()),
                location: ErrorLocation::from(Location::caller()),
            }
        } else {
            e.into()
        }
    })?;

    if affected == 0 {
        return Err(save_error("create", supplier.id));
    }

    log::info!("Created supplier {} ({})", supplier.id, supplier.name);

    Ok((StatusCode::CREATED, Json(supplier.into())))
}

/// PUT /fornecedor/{id}
///
/// Replace a supplier. The body id, when present, must match the path id.
pub async fn update_supplier(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<UpdateSupplierRequest>,
) -> ApiResult<StatusCode> {
    let supplier_id = Uuid::parse_str(&id)?;

    if let Some(ref body_id) = req.id {
        if *body_id != id {
            return Err(ApiError::Validation {
                message: format!("Body id '{}' does not match path id '{}'", body_id, id),
                field: Some("id".into()),
                location: ErrorLocation::from(Location::caller()),
            });
        }
    }

    let name = req.name.trim().to_string();
    if name.is_empty() {
        return Err(ApiError::Validation {
            message: "Supplier name cannot be empty".to_string(),
            field: Some("name".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let repo = SupplierRepository::new(state.pool.clone());
    if repo.find_by_id(supplier_id).await?.is_none() {
        return Err(ApiError::NotFound {
            message: format!("Supplier {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let supplier = Supplier::with_id(supplier_id, name, req.document, req.active);
    let affected = repo.replace(&supplier).await?;

    if affected == 0 {
        return Err(save_error("update", supplier_id));
    }

    log::info!("Updated supplier {} ({})", supplier.id, supplier.name);

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /fornecedor/{id}
///
/// Delete a supplier
pub async fn delete_supplier(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let supplier_id = Uuid::parse_str(&id)?;

    let repo = SupplierRepository::new(state.pool.clone());
    if repo.find_by_id(supplier_id).await?.is_none() {
        return Err(ApiError::NotFound {
            message: format!("Supplier {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let affected = repo.delete(supplier_id).await?;

    if affected == 0 {
        return Err(save_error("delete", supplier_id));
    }

    log::info!("Deleted supplier {}", supplier_id);

    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Helpers
// =============================================================================

#[track_caller]
fn save_error(operation: &str, id: Uuid) -> ApiError {
    ApiError::Save {
        message: format!("Supplier {} {} affected zero rows", id, operation),
        location: ErrorLocation::from(Location::caller()),
    }
}
