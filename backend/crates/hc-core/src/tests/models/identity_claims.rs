use crate::{IdentityClaims, Role, User};

#[test]
fn given_user_when_converted_to_claims_then_identity_fields_carried() {
    let mut user = User::new("dr.silva@example.com", "Dr. Silva", Role::Provider);
    user.secret_hash = vec![1; 64];
    user.secret_salt = vec![2; 64];

    let claims = IdentityClaims::from(&user);

    assert_eq!(claims.id, user.id);
    assert_eq!(claims.identifier, "dr.silva@example.com");
    assert_eq!(claims.display_name, "Dr. Silva");
    assert_eq!(claims.role, Role::Provider);
}
