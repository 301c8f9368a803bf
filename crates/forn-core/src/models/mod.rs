pub mod supplier;
pub mod user_account;
pub mod user_claim;
pub mod user_identity;
