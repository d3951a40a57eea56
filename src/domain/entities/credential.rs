//! Static credential table.

use std::collections::HashMap;

/// Username to password-hash mapping, fixed for the lifetime of the process.
///
/// Hashes are PHC strings as produced by
/// [`crate::infrastructure::security::hash_password`].
#[derive(Debug, Clone, Default)]
pub struct CredentialTable {
    hashes: HashMap<String, String>,
}

impl CredentialTable {
    /// Builds a table from `(username, password_hash)` pairs.
    pub fn new<I, U, H>(entries: I) -> Self
    where
        I: IntoIterator<Item = (U, H)>,
        U: Into<String>,
        H: Into<String>,
    {
        Self {
            hashes: entries
                .into_iter()
                .map(|(user, hash)| (user.into(), hash.into()))
                .collect(),
        }
    }

    /// Stored hash for `username`, if the user exists.
    pub fn password_hash(&self, username: &str) -> Option<&str> {
        self.hashes.get(username).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }
}
