pub mod supplier_repository;
pub mod user_repository;
