use crate::{Role, User};

#[test]
fn given_mixed_case_identifier_when_created_then_stored_lowercase() {
    let user = User::new("Dr.Silva@Example.COM", "Dr. Silva", Role::Provider);

    assert_eq!(user.identifier, "dr.silva@example.com");
}

#[test]
fn given_new_user_then_active_with_empty_credentials() {
    let user = User::new("a@b.c", "A", Role::Patient);

    assert!(user.active);
    assert!(user.secret_hash.is_empty());
    assert!(user.secret_salt.is_empty());
}

#[test]
fn given_user_with_credentials_when_debug_formatted_then_secrets_redacted() {
    let mut user = User::new("a@b.c", "A", Role::Patient);
    user.secret_hash = vec![0xde, 0xad, 0xbe, 0xef];
    user.secret_salt = vec![0x01, 0x02, 0x03, 0x04];

    let output = format!("{:?}", user);

    assert!(output.contains("<redacted>"));
    // 0xde = 222: the raw byte values must not leak into the output.
    assert!(!output.contains("222"));
}
