//! Password hashing for stored user accounts.
//!
//! Accounts carry an Argon2id hash in PHC string format. The plaintext is
//! hashed with a fresh random salt on every call and never persisted.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

use crate::error::{Error, Result};

/// Hash a plaintext password into a PHC-format string.
///
/// # Errors
/// Returns `Error::Hash` if the hasher rejects its input, which does not
/// happen for ordinary passwords.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| Error::Hash(e.to_string()))
}

/// Check a plaintext password against a stored PHC hash.
///
/// Returns `Ok(false)` for a wrong password; `Err` only when the stored
/// hash itself cannot be parsed.
pub fn verify_password(password: &str, stored: &str) -> Result<bool> {
    let parsed = PasswordHash::new(stored).map_err(|e| Error::Hash(e.to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
