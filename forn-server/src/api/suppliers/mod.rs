pub mod create_supplier_request;
pub mod supplier_dto;
pub mod suppliers;
pub mod update_supplier_request;
