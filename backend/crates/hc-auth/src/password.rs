//! Salted secret hashing: HMAC-SHA512 keyed by a per-record random salt.
//!
//! The salt doubles as the HMAC key, is generated fresh for every
//! registration and secret change, and never leaves the credential store.

use hmac::{Hmac, Mac};
use rand::RngCore;
use sha2::Sha512;

type HmacSha512 = Hmac<Sha512>;

/// Matches the HMAC-SHA512 block-derived key length; far above the
/// 128-bit entropy floor.
pub const SALT_LEN: usize = 64;

/// Fresh random salt from the OS-seeded CSPRNG.
pub fn generate_salt() -> Vec<u8> {
    let mut salt = vec![0u8; SALT_LEN];
    rand::rng().fill_bytes(&mut salt);
    salt
}

pub fn hash_secret(secret: &str, salt: &[u8]) -> Vec<u8> {
    let mut mac =
        HmacSha512::new_from_slice(salt).expect("HMAC-SHA512 accepts keys of any length");
    mac.update(secret.as_bytes());
    mac.finalize().into_bytes().to_vec()
}

/// Recompute and compare. `verify_slice` is constant-time, so the position
/// of the first mismatching byte never shows up in the timing.
pub fn verify_secret(secret: &str, salt: &[u8], expected_hash: &[u8]) -> bool {
    let Ok(mut mac) = HmacSha512::new_from_slice(salt) else {
        return false;
    };
    mac.update(secret.as_bytes());
    mac.verify_slice(expected_hash).is_ok()
}
