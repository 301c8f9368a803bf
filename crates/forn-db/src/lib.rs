pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::supplier_repository::SupplierRepository;
pub use repositories::user_repository::UserRepository;
