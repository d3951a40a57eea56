//! Credential hashing helpers.

pub mod password;

pub use password::{DEMO_USERS, hash_password, seed_credentials, verify_password};
