pub mod error;
pub mod models;

pub use error::error_location::ErrorLocation;
pub use models::supplier::Supplier;
pub use models::user_account::UserAccount;
pub use models::user_claim::UserClaim;
pub use models::user_identity::UserIdentity;

#[cfg(test)]
mod tests;
