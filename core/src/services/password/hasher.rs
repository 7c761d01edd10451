use bt_shared::config::DEFAULT_PASSWORD_HASH_COST;

use crate::errors::DomainError;

/// Lowest work factor bcrypt accepts
const MIN_COST: u32 = 4;

/// Adaptive one-way password hasher
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self {
            cost: DEFAULT_PASSWORD_HASH_COST,
        }
    }
}

impl PasswordHasher {
    /// Create a hasher with the given bcrypt cost, clamped to what bcrypt accepts
    pub fn new(cost: u32) -> Self {
        Self {
            cost: cost.clamp(MIN_COST, 31),
        }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext password with a fresh random salt
    pub fn hash(&self, plaintext: &str) -> Result<String, DomainError> {
        bcrypt::hash(plaintext, self.cost).map_err(|e| DomainError::Internal {
            message: format!("Password hashing failed: {}", e),
        })
    }

    /// Check a plaintext password against a stored digest
    ///
    /// A malformed digest is a mismatch, not an error.
    pub fn verify(&self, plaintext: &str, digest: &str) -> bool {
        bcrypt::verify(plaintext, digest).unwrap_or(false)
    }
}
