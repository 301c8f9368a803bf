use chrono::Duration;

/// Failed-login lockout rules
#[derive(Debug, Clone, Copy)]
pub struct LockoutPolicy {
    /// Consecutive failures before the lockout engages
    pub max_failures: i32,
    /// Lockout duration in seconds
    pub lockout_secs: u64,
}

impl Default for LockoutPolicy {
    fn default() -> Self {
        Self {
            max_failures: 5,
            lockout_secs: 300,
        }
    }
}

impl LockoutPolicy {
    pub fn lockout_duration(&self) -> Duration {
        Duration::seconds(self.lockout_secs as i64)
    }
}
