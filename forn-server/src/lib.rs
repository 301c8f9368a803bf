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
