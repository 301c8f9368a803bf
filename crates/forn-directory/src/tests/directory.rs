use crate::tests::create_test_pool;
use crate::{DirectoryError, LockoutPolicy, UserDirectory};

use forn_core::UserClaim;

const GOOD_PASSWORD: &str = "Sup3rSecret";

fn directory(pool: sqlx::SqlitePool) -> UserDirectory {
    UserDirectory::new(pool, LockoutPolicy::default())
}

fn issue_codes(err: &DirectoryError) -> Vec<String> {
    match err {
        DirectoryError::Rejected { issues } => issues.iter().map(|i| i.code.clone()).collect(),
        other => panic!("expected Rejected, got {other}"),
    }
}

#[tokio::test]
async fn given_valid_registration_when_register_then_identity_returned() {
    let dir = directory(create_test_pool().await);

    let identity = dir.register("user@example.com", GOOD_PASSWORD).await.unwrap();

    assert_eq!(identity.email, "user@example.com");
    assert!(identity.email_confirmed);
    assert!(identity.roles.is_empty());
    assert!(identity.claims.is_empty());
}

#[tokio::test]
async fn given_malformed_email_when_register_then_invalid_email_issue() {
    let dir = directory(create_test_pool().await);

    let err = dir.register("not-an-email", GOOD_PASSWORD).await.unwrap_err();

    assert_eq!(issue_codes(&err), vec!["InvalidEmail"]);
}

#[tokio::test]
async fn given_weak_password_when_register_then_all_issues_collected() {
    let dir = directory(create_test_pool().await);

    let err = dir.register("user@example.com", "abc").await.unwrap_err();

    assert_eq!(
        issue_codes(&err),
        vec![
            "PasswordTooShort",
            "PasswordRequiresDigit",
            "PasswordRequiresUpper",
        ]
    );
}

#[tokio::test]
async fn given_registered_email_when_register_again_then_duplicate_email_issue() {
    let dir = directory(create_test_pool().await);
    dir.register("user@example.com", GOOD_PASSWORD).await.unwrap();

    let err = dir
        .register("USER@EXAMPLE.COM", GOOD_PASSWORD)
        .await
        .unwrap_err();

    assert_eq!(issue_codes(&err), vec!["DuplicateEmail"]);
}

#[tokio::test]
async fn given_correct_credentials_when_authenticate_then_identity_returned() {
    let dir = directory(create_test_pool().await);
    dir.register("user@example.com", GOOD_PASSWORD).await.unwrap();

    let identity = dir
        .authenticate("user@example.com", GOOD_PASSWORD)
        .await
        .unwrap();

    assert_eq!(identity.email, "user@example.com");
}

#[tokio::test]
async fn given_unknown_email_when_authenticate_then_invalid_credentials() {
    let dir = directory(create_test_pool().await);

    let err = dir
        .authenticate("nobody@example.com", GOOD_PASSWORD)
        .await
        .unwrap_err();

    assert_eq!(issue_codes(&err), vec!["InvalidCredentials"]);
}

#[tokio::test]
async fn given_wrong_password_when_authenticate_then_invalid_credentials() {
    let dir = directory(create_test_pool().await);
    dir.register("user@example.com", GOOD_PASSWORD).await.unwrap();

    let err = dir
        .authenticate("user@example.com", "Wr0ngPassword")
        .await
        .unwrap_err();

    assert_eq!(issue_codes(&err), vec!["InvalidCredentials"]);
}

#[tokio::test]
async fn given_repeated_failures_when_threshold_reached_then_locked_out() {
    let pool = create_test_pool().await;
    let dir = UserDirectory::new(
        pool,
        LockoutPolicy {
            max_failures: 3,
            lockout_secs: 300,
        },
    );
    dir.register("user@example.com", GOOD_PASSWORD).await.unwrap();

    for _ in 0..2 {
        let err = dir
            .authenticate("user@example.com", "Wr0ngPassword")
            .await
            .unwrap_err();
        assert_eq!(issue_codes(&err), vec!["InvalidCredentials"]);
    }

    // Third failure engages the lockout
    let err = dir
        .authenticate("user@example.com", "Wr0ngPassword")
        .await
        .unwrap_err();
    assert_eq!(issue_codes(&err), vec!["LockedOut"]);

    // Correct password is refused while the lockout is active
    let err = dir
        .authenticate("user@example.com", GOOD_PASSWORD)
        .await
        .unwrap_err();
    assert_eq!(issue_codes(&err), vec!["LockedOut"]);
}

#[tokio::test]
async fn given_failures_then_success_when_authenticate_then_counter_resets() {
    let pool = create_test_pool().await;
    let dir = UserDirectory::new(
        pool,
        LockoutPolicy {
            max_failures: 3,
            lockout_secs: 300,
        },
    );
    dir.register("user@example.com", GOOD_PASSWORD).await.unwrap();

    for _ in 0..2 {
        dir.authenticate("user@example.com", "Wr0ngPassword")
            .await
            .unwrap_err();
    }
    dir.authenticate("user@example.com", GOOD_PASSWORD)
        .await
        .unwrap();

    // Two more failures must not lock: the counter restarted at zero
    for _ in 0..2 {
        let err = dir
            .authenticate("user@example.com", "Wr0ngPassword")
            .await
            .unwrap_err();
        assert_eq!(issue_codes(&err), vec!["InvalidCredentials"]);
    }
}

#[tokio::test]
async fn given_granted_roles_and_claims_when_authenticate_then_identity_carries_them() {
    let dir = directory(create_test_pool().await);
    let identity = dir.register("user@example.com", GOOD_PASSWORD).await.unwrap();

    dir.grant_role(identity.id, "admin").await.unwrap();
    dir.grant_role(identity.id, "admin").await.unwrap();
    dir.grant_claim(identity.id, &UserClaim::new("department", "purchasing"))
        .await
        .unwrap();

    let identity = dir
        .authenticate("user@example.com", GOOD_PASSWORD)
        .await
        .unwrap();

    assert_eq!(identity.roles, vec!["admin".to_string()]);
    assert_eq!(
        identity.claims,
        vec![UserClaim::new("department", "purchasing")]
    );
}
