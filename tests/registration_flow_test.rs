//! End-to-end registration and principal loading over the in-memory store.

use std::sync::Arc;

use account_service::domain::{Password, Role, UserRegistration};
use account_service::errors::AppError;
use account_service::infra::{AccountStore, InMemoryAccountStore};
use account_service::services::{AccountManager, AccountService, PrincipalLoader};
use account_service::Config;

fn registration(email: &str) -> UserRegistration {
    UserRegistration {
        email: email.to_string(),
        password: "SecurePass123!".to_string(),
        name: "Test User".to_string(),
    }
}

fn service_with_store() -> (Arc<InMemoryAccountStore>, AccountManager<InMemoryAccountStore>) {
    let store = Arc::new(InMemoryAccountStore::new());
    let service = AccountManager::new(store.clone(), Config::default());
    (store, service)
}

#[tokio::test]
async fn test_register_then_load_principal() {
    let (_store, service) = service_with_store();

    let user = service
        .register_user(registration("jane@example.com"))
        .await
        .unwrap();
    assert!(!user.id.is_nil());
    assert_eq!(user.email, "jane@example.com");

    let principal = service
        .load_principal_by_identifier("jane@example.com")
        .await
        .unwrap();

    assert_eq!(principal.id, user.id);
    assert_eq!(principal.authorities, vec![Role::User]);
    // The stored credential is a verifiable hash, never the plaintext
    assert_ne!(principal.credential, "SecurePass123!");
    assert!(Password::from_hash(principal.credential).verify("SecurePass123!"));
}

#[tokio::test]
async fn test_duplicate_registration_keeps_single_record() {
    let (store, service) = service_with_store();

    service
        .register_user(registration("jane@example.com"))
        .await
        .unwrap();
    let second = service.register_user(registration("jane@example.com")).await;

    assert!(matches!(second, Err(AppError::DuplicateAccount)));
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_load_principal_unregistered_email() {
    let (_store, service) = service_with_store();

    let result = service
        .load_principal_by_identifier("nobody@example.com")
        .await;
    assert!(matches!(result, Err(AppError::PrincipalNotFound)));
}

#[tokio::test]
async fn test_invalid_registration_leaves_store_untouched() {
    let (store, service) = service_with_store();

    let bad_email = service
        .register_user(UserRegistration {
            email: "".to_string(),
            password: "SecurePass123!".to_string(),
            name: "Test User".to_string(),
        })
        .await;
    assert!(matches!(bad_email, Err(AppError::InvalidInput(_))));

    let bad_password = service
        .register_user(UserRegistration {
            email: "jane@example.com".to_string(),
            password: "".to_string(),
            name: "Test User".to_string(),
        })
        .await;
    assert!(matches!(bad_password, Err(AppError::InvalidInput(_))));

    assert!(store.is_empty());
}

#[tokio::test]
async fn test_default_role_is_configurable() {
    let store = Arc::new(InMemoryAccountStore::new());
    let config = Config {
        default_role: Role::Admin,
        ..Config::default()
    };
    let service = AccountManager::new(store, config);

    let user = service
        .register_user(registration("admin@example.com"))
        .await
        .unwrap();
    assert_eq!(user.role, Role::Admin);

    let principal = service
        .load_principal_by_identifier("admin@example.com")
        .await
        .unwrap();
    assert_eq!(principal.authorities, vec![Role::Admin]);
}

#[tokio::test]
async fn test_find_by_id_round_trip() {
    let (store, service) = service_with_store();

    let user = service
        .register_user(registration("jane@example.com"))
        .await
        .unwrap();

    let found = store.find_by_id(user.id).await.unwrap();
    assert_eq!(found.map(|u| u.email), Some("jane@example.com".to_string()));
}

#[tokio::test]
async fn test_concurrent_registration_single_winner() {
    let (store, service) = service_with_store();
    let service = Arc::new(service);

    let handles: Vec<_> = (0..2)
        .map(|_| {
            let svc = service.clone();
            tokio::spawn(async move { svc.register_user(registration("race@example.com")).await })
        })
        .collect();

    let mut results = Vec::new();
    for handle in handles {
        results.push(handle.await.unwrap());
    }

    let successes = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1);
    assert!(results
        .iter()
        .any(|r| matches!(r, Err(AppError::DuplicateAccount))));
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_user_serialization_omits_password_hash() {
    let (_store, service) = service_with_store();

    let user = service
        .register_user(registration("jane@example.com"))
        .await
        .unwrap();

    let json = serde_json::to_value(&user).unwrap();
    assert!(json.get("password_hash").is_none());
    assert_eq!(json["email"], "jane@example.com");
}
