//! One-way salted password hashing (argon2, PHC string format).
//! Plaintext equality is never used anywhere in the credential path.

use argon2::{Argon2, PasswordHasher, PasswordVerifier};
use password_hash::{PasswordHash, SaltString};

use crate::error::MonitorError;

pub fn hash(password: &str) -> Result<String, MonitorError> {
    let mut salt_bytes = [0u8; 16];
    getrandom::getrandom(&mut salt_bytes)
        .map_err(|e| MonitorError::PasswordHash(e.to_string()))?;
    let salt = SaltString::encode_b64(&salt_bytes)
        .map_err(|e| MonitorError::PasswordHash(e.to_string()))?;
    let phc = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| MonitorError::PasswordHash(e.to_string()))?
        .to_string();
    Ok(phc)
}

pub fn verify(hash: &str, password: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_round_trip() {
        let phc = hash("admin123").expect("hashing failed");
        assert_ne!(phc, "admin123");
        assert!(verify(&phc, "admin123"));
        assert!(!verify(&phc, "admin124"));
    }

    #[test]
    fn verify_rejects_garbage_hash() {
        assert!(!verify("not-a-phc-string", "whatever"));
    }

    #[test]
    fn same_password_salts_differently() {
        let a = hash("admin123").expect("hashing failed");
        let b = hash("admin123").expect("hashing failed");
        assert_ne!(a, b);
    }
}
