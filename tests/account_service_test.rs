//! Account service unit tests over a mocked store.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use account_service::domain::{Password, Role, User, UserRegistration};
use account_service::errors::AppError;
use account_service::infra::{MockAccountStore, NewAccount};
use account_service::services::{AccountManager, AccountService, PrincipalLoader};
use account_service::Config;

fn registration(email: &str, password: &str) -> UserRegistration {
    UserRegistration {
        email: email.to_string(),
        password: password.to_string(),
        name: "Test User".to_string(),
    }
}

/// Simulate the store persisting a new account
fn persisted(account: NewAccount) -> User {
    let now = Utc::now();
    User {
        id: Uuid::new_v4(),
        email: account.email,
        password_hash: account.password_hash,
        name: account.name,
        role: account.role,
        created_at: now,
        updated_at: now,
    }
}

fn create_test_user(email: &str) -> User {
    let now = Utc::now();
    User {
        id: Uuid::new_v4(),
        email: email.to_string(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$aGFzaGhhc2hoYXNoaGFzaA".to_string(),
        name: "Test User".to_string(),
        role: Role::User,
        created_at: now,
        updated_at: now,
    }
}

#[tokio::test]
async fn test_register_user_success() {
    let mut store = MockAccountStore::new();
    store
        .expect_insert()
        .withf(|account| account.email == "new@example.com" && account.role == Role::User)
        .returning(|account| Ok(persisted(account)));

    let service = AccountManager::new(Arc::new(store), Config::default());
    let user = service
        .register_user(registration("new@example.com", "SecurePass123!"))
        .await
        .unwrap();

    assert!(!user.id.is_nil());
    assert_eq!(user.email, "new@example.com");
}

#[tokio::test]
async fn test_register_user_stores_hash_not_plaintext() {
    let mut store = MockAccountStore::new();
    store
        .expect_insert()
        .returning(|account| Ok(persisted(account)));

    let service = AccountManager::new(Arc::new(store), Config::default());
    let plain = "SecurePass123!";
    let user = service
        .register_user(registration("new@example.com", plain))
        .await
        .unwrap();

    assert_ne!(user.password_hash, plain);
    assert!(Password::from_hash(user.password_hash).verify(plain));
}

#[tokio::test]
async fn test_register_user_duplicate_email() {
    let mut store = MockAccountStore::new();
    store.expect_insert().returning(|_| {
        Err(AppError::ConstraintViolation(
            "email already exists".to_string(),
        ))
    });

    let service = AccountManager::new(Arc::new(store), Config::default());
    let result = service
        .register_user(registration("taken@example.com", "SecurePass123!"))
        .await;

    assert!(matches!(result, Err(AppError::DuplicateAccount)));
}

#[tokio::test]
async fn test_register_user_empty_email_skips_store() {
    // No expectations set: any store call fails the test
    let store = MockAccountStore::new();

    let service = AccountManager::new(Arc::new(store), Config::default());
    let result = service
        .register_user(registration("", "SecurePass123!"))
        .await;

    assert!(matches!(result, Err(AppError::InvalidInput(_))));
}

#[tokio::test]
async fn test_register_user_empty_password_skips_store() {
    let store = MockAccountStore::new();

    let service = AccountManager::new(Arc::new(store), Config::default());
    let result = service.register_user(registration("new@example.com", "")).await;

    assert!(matches!(result, Err(AppError::InvalidInput(_))));
}

#[tokio::test]
async fn test_register_user_short_password_skips_store() {
    let store = MockAccountStore::new();

    let service = AccountManager::new(Arc::new(store), Config::default());
    let result = service
        .register_user(registration("new@example.com", "short"))
        .await;

    assert!(matches!(result, Err(AppError::InvalidInput(_))));
}

#[tokio::test]
async fn test_load_principal_success() {
    let user = create_test_user("known@example.com");
    let expected_id = user.id;
    let expected_hash = user.password_hash.clone();

    let mut store = MockAccountStore::new();
    store
        .expect_find_by_email()
        .withf(|email| email == "known@example.com")
        .returning(move |_| Ok(Some(user.clone())));

    let service = AccountManager::new(Arc::new(store), Config::default());
    let principal = service
        .load_principal_by_identifier("known@example.com")
        .await
        .unwrap();

    assert_eq!(principal.id, expected_id);
    assert_eq!(principal.credential, expected_hash);
    assert_eq!(principal.authorities, vec![Role::User]);
}

#[tokio::test]
async fn test_load_principal_not_found() {
    let mut store = MockAccountStore::new();
    store.expect_find_by_email().returning(|_| Ok(None));

    let service = AccountManager::new(Arc::new(store), Config::default());
    let result = service
        .load_principal_by_identifier("missing@example.com")
        .await;

    assert!(matches!(result, Err(AppError::PrincipalNotFound)));
}
