//! Salted password hashing & opaque token generation.

use rand::Rng;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

const SALT_BYTES: usize = 16;
const TOKEN_BYTES: usize = 32;

fn random_hex(len: usize) -> String {
    let mut rng = rand::rng();
    let bytes: Vec<u8> = (0..len).map(|_| rng.random()).collect();
    to_hex(&bytes)
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Generates a new hex encoded random salt.
pub fn generate_salt() -> String {
    random_hex(SALT_BYTES)
}

/// Generates a 64 character hex bearer token.
pub fn generate_token() -> String {
    random_hex(TOKEN_BYTES)
}

/// Hashes `password` with `salt` using SHA-256, returning lowercase hex.
pub fn hash_password(password: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    to_hex(&hasher.finalize())
}

/// Checks `password` against a stored hash in constant time.
pub fn verify_password(password: &str, salt: &str, expected_hash: &str) -> bool {
    let actual = hash_password(password, salt);
    actual.as_bytes().ct_eq(expected_hash.as_bytes()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verifies_matching_password() {
        let salt = generate_salt();
        let hash = hash_password("hunter22", &salt);

        assert!(verify_password("hunter22", &salt, &hash));
        assert!(!verify_password("hunter23", &salt, &hash));
    }

    #[test]
    fn salt_changes_hash() {
        assert_ne!(hash_password("secret", "aa"), hash_password("secret", "bb"));
    }

    #[test]
    fn generates_hex_of_expected_length() {
        let token = generate_token();
        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(generate_salt().len(), 32);
        assert_ne!(generate_token(), token);
    }
}
