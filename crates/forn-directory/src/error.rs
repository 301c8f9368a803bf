use forn_core::ErrorLocation;
use forn_db::DbError;

use serde::Serialize;
use thiserror::Error;

/// One rejection reason, shaped for direct inclusion in an error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryIssue {
    pub code: String,
    pub description: String,
}

impl DirectoryIssue {
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
        }
    }

    pub fn invalid_email() -> Self {
        Self::new("InvalidEmail", "Email is not a valid address")
    }

    pub fn duplicate_email() -> Self {
        Self::new("DuplicateEmail", "Email is already registered")
    }

    pub fn password_too_short(min_length: usize) -> Self {
        Self::new(
            "PasswordTooShort",
            format!("Passwords must be at least {} characters", min_length),
        )
    }

    pub fn password_requires_digit() -> Self {
        Self::new(
            "PasswordRequiresDigit",
            "Passwords must have at least one digit",
        )
    }

    pub fn password_requires_upper() -> Self {
        Self::new(
            "PasswordRequiresUpper",
            "Passwords must have at least one uppercase letter",
        )
    }

    pub fn invalid_credentials() -> Self {
        Self::new("InvalidCredentials", "Incorrect email or password")
    }

    pub fn locked_out() -> Self {
        Self::new("LockedOut", "Account is temporarily locked")
    }
}

#[derive(Error, Debug)]
pub enum DirectoryError {
    /// The request was well-formed but refused; `issues` lists every reason
    #[error("Request rejected: {}", format_issues(issues))]
    Rejected { issues: Vec<DirectoryIssue> },

    #[error("Password hashing failed: {message} {location}")]
    Hash {
        message: String,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Db(#[from] DbError),
}

impl DirectoryError {
    pub fn rejected(issues: Vec<DirectoryIssue>) -> Self {
        Self::Rejected { issues }
    }

    pub fn rejected_with(issue: DirectoryIssue) -> Self {
        Self::Rejected {
            issues: vec![issue],
        }
    }
}

fn format_issues(issues: &[DirectoryIssue]) -> String {
    issues
        .iter()
        .map(|i| i.code.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, DirectoryError>;
