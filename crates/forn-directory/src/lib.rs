pub mod directory;
pub mod error;
pub mod lockout_policy;
pub mod password_policy;

pub use directory::UserDirectory;
pub use error::{DirectoryError, DirectoryIssue, Result};
pub use lockout_policy::LockoutPolicy;
pub use password_policy::PasswordPolicy;

#[cfg(test)]
mod tests;
