use crate::{CoreError, Role};

use std::str::FromStr;

#[test]
fn given_every_role_when_round_tripped_through_str_then_identical() {
    for role in Role::all() {
        let parsed = Role::from_str(role.as_str()).unwrap();
        assert_eq!(parsed, *role);
    }
}

#[test]
fn given_unknown_role_string_when_parsed_then_invalid_role_error() {
    let result = Role::from_str("superuser");

    assert!(matches!(result, Err(CoreError::InvalidRole { .. })));
}

#[test]
fn given_mixed_case_role_string_when_parsed_then_rejected() {
    // Persistence always writes as_str() output; anything else is corrupt.
    assert!(Role::from_str("Provider").is_err());
}
