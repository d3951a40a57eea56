//! Salted password hashing with Argon2.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::domain::entities::CredentialTable;

/// Demo accounts seeded at startup.
pub const DEMO_USERS: [(&str, &str); 2] = [("admin", "admin123"), ("usuario", "pass123")];

/// Hashes `password` with a fresh random salt.
///
/// Returns the PHC string form (`$argon2id$v=19$...`).
///
/// # Errors
///
/// Returns the underlying [`argon2::password_hash::Error`] if hashing fails.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
}

/// Checks `password` against a stored PHC hash.
///
/// A malformed hash never verifies.
pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(hash) else {
        tracing::warn!("Stored password hash is malformed");
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

/// Hashes each `(username, password)` pair into a [`CredentialTable`].
///
/// # Errors
///
/// Fails if any password cannot be hashed.
pub fn seed_credentials(
    users: &[(&str, &str)],
) -> Result<CredentialTable, argon2::password_hash::Error> {
    let entries = users
        .iter()
        .map(|(username, password)| Ok((*username, hash_password(password)?)))
        .collect::<Result<Vec<_>, argon2::password_hash::Error>>()?;

    Ok(CredentialTable::new(entries))
}
