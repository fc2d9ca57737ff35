use crate::{CredentialRepository, DbError, open_in_memory};

use hc_core::{Role, User};

use uuid::Uuid;

async fn setup_repo() -> CredentialRepository {
    let pool = open_in_memory().await.expect("Failed to open test database");
    CredentialRepository::new(pool)
}

fn user_with_credentials(identifier: &str, role: Role) -> User {
    let mut user = User::new(identifier, "Test User", role);
    user.secret_hash = vec![0xAA; 64];
    user.secret_salt = vec![0xBB; 64];
    user
}

#[tokio::test]
async fn given_created_user_when_found_by_identifier_then_all_fields_survive() {
    let repo = setup_repo().await;
    let user = user_with_credentials("dr.silva@example.com", Role::Provider);
    repo.create(&user).await.unwrap();

    let found = repo
        .find_by_identifier("dr.silva@example.com")
        .await
        .unwrap()
        .expect("user not found");

    assert_eq!(found.id, user.id);
    assert_eq!(found.identifier, "dr.silva@example.com");
    assert_eq!(found.display_name, "Test User");
    assert_eq!(found.secret_hash, user.secret_hash);
    assert_eq!(found.secret_salt, user.secret_salt);
    assert_eq!(found.role, Role::Provider);
    assert!(found.active);
}

#[tokio::test]
async fn given_mixed_case_lookup_when_found_then_matches_lowercase_record() {
    let repo = setup_repo().await;
    repo.create(&user_with_credentials("user@example.com", Role::Patient))
        .await
        .unwrap();

    let found = repo.find_by_identifier("User@Example.COM").await.unwrap();

    assert!(found.is_some());
}

#[tokio::test]
async fn given_unknown_identifier_when_found_then_none() {
    let repo = setup_repo().await;

    let found = repo.find_by_identifier("nobody@example.com").await.unwrap();

    assert!(found.is_none());
}

#[tokio::test]
async fn given_existing_identifier_when_created_again_then_duplicate_error() {
    let repo = setup_repo().await;
    repo.create(&user_with_credentials("taken@example.com", Role::Patient))
        .await
        .unwrap();

    // Fresh id, same identifier after normalization.
    let dup = user_with_credentials("Taken@Example.com", Role::Family);
    let result = repo.create(&dup).await;

    assert!(matches!(
        result,
        Err(DbError::DuplicateIdentifier { identifier, .. }) if identifier == "taken@example.com"
    ));
}

#[tokio::test]
async fn given_deactivated_user_when_exists_checked_then_still_true() {
    let repo = setup_repo().await;
    let user = user_with_credentials("inactive@example.com", Role::Patient);
    repo.create(&user).await.unwrap();
    assert!(repo.set_active(user.id, false).await.unwrap());

    assert!(repo.exists("inactive@example.com").await.unwrap());

    let found = repo
        .find_by_identifier("inactive@example.com")
        .await
        .unwrap()
        .unwrap();
    assert!(!found.active);
}

#[tokio::test]
async fn given_unknown_id_when_set_active_then_false() {
    let repo = setup_repo().await;

    let updated = repo.set_active(Uuid::new_v4(), false).await.unwrap();

    assert!(!updated);
}

#[tokio::test]
async fn given_updated_secret_when_found_then_new_hash_and_salt() {
    let repo = setup_repo().await;
    let user = user_with_credentials("rotate@example.com", Role::Provider);
    repo.create(&user).await.unwrap();

    let new_hash = vec![0x11; 64];
    let new_salt = vec![0x22; 64];
    let updated = repo
        .update_secret(user.id, &new_hash, &new_salt)
        .await
        .unwrap();

    assert!(updated);
    let found = repo
        .find_by_identifier("rotate@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.secret_hash, new_hash);
    assert_eq!(found.secret_salt, new_salt);
}
