//! Password hashing port.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;

/// One-way password hashing.
///
/// Hashing is deliberately slow; implementations must keep that work off the
/// async executor.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password into a self-describing string (PHC format).
    async fn hash(&self, password: &str) -> Result<String, DomainError>;

    /// Check a plaintext password against a stored hash.
    ///
    /// Returns `Ok(false)` on mismatch; `Err` only when the stored hash is
    /// unreadable.
    async fn verify(&self, password: &str, hash: &str) -> Result<bool, DomainError>;

    /// Spend the cost of one `verify` when there is no stored hash to check.
    ///
    /// Always `Ok(false)`. Login calls this for unknown accounts so they take
    /// as long to reject as a wrong password.
    async fn verify_absent(&self, password: &str) -> Result<bool, DomainError>;
}
