use crate::UserAccount;

use chrono::{Duration, Utc};

fn account() -> UserAccount {
    UserAccount::new(
        "user@example.com".to_string(),
        "hash".to_string(),
        true,
    )
}

#[test]
fn given_no_lockout_end_then_not_locked_out() {
    let account = account();

    assert!(!account.is_locked_out(Utc::now()));
}

#[test]
fn given_future_lockout_end_then_locked_out() {
    let mut account = account();
    account.lockout_end = Some(Utc::now() + Duration::minutes(5));

    assert!(account.is_locked_out(Utc::now()));
}

#[test]
fn given_past_lockout_end_then_not_locked_out() {
    let mut account = account();
    account.lockout_end = Some(Utc::now() - Duration::minutes(5));

    assert!(!account.is_locked_out(Utc::now()));
}
