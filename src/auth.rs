// Password hashing for seeded users

use anyhow::{Context, Result};
use bcrypt::{hash, verify};

/// bcrypt cost factor used for every seeded password
pub const SEED_HASH_COST: u32 = 10;

// Hash a password using bcrypt
pub fn hash_password(password: &str) -> Result<String> {
    hash(password, SEED_HASH_COST).context("Failed to hash password")
}

// Verify a password against a hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    verify(password, hash).context("Failed to verify password")
}
