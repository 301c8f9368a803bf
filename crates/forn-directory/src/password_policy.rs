use crate::DirectoryIssue;

/// Default minimum password length
pub const DEFAULT_MIN_LENGTH: usize = 8;

/// Password acceptance rules, checked at registration
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub require_digit: bool,
    pub require_uppercase: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            require_digit: true,
            require_uppercase: true,
        }
    }
}

impl PasswordPolicy {
    /// Collect every violated rule; an empty list means the password passes
    pub fn check(&self, password: &str) -> Vec<DirectoryIssue> {
        let mut issues = Vec::new();

        if password.chars().count() < self.min_length {
            issues.push(DirectoryIssue::password_too_short(self.min_length));
        }
        if self.require_digit && !password.chars().any(|c| c.is_ascii_digit()) {
            issues.push(DirectoryIssue::password_requires_digit());
        }
        if self.require_uppercase && !password.chars().any(|c| c.is_uppercase()) {
            issues.push(DirectoryIssue::password_requires_upper());
        }

        issues
    }
}
