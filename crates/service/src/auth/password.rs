//! Password hashing. Plaintext never leaves this module in any stored form.

use argon2::{Argon2, password_hash::{PasswordHasher, PasswordVerifier, SaltString}, PasswordHash};
use rand::rngs::OsRng;

use super::errors::AuthError;

pub const ALGORITHM: &str = "argon2";

/// Hash into a PHC string (algorithm, params and salt embedded).
pub fn hash_password(plaintext: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(plaintext.as_bytes(), &salt)
        .map_err(|e| AuthError::HashError(e.to_string()))?
        .to_string();
    Ok(hash)
}

/// `Ok(false)` on mismatch; `Err` only when the stored digest is unreadable.
pub fn verify_password(plaintext: &str, digest: &str) -> Result<bool, AuthError> {
    let parsed = PasswordHash::new(digest).map_err(|e| AuthError::HashError(e.to_string()))?;
    Ok(Argon2::default().verify_password(plaintext.as_bytes(), &parsed).is_ok())
}
