//! User repository port.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::user::{NewUser, User};

/// Credential store. Reached through a [`super::UnitOfWork`].
#[async_trait]
pub trait UserRepository: Send {
    /// Find a user by normalized email.
    ///
    /// Returns `None` if no account uses the address.
    async fn find_by_email(&mut self, email: &str) -> Result<Option<User>, DomainError>;

    /// Insert a new user and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// - `EmailAlreadyRegistered` if the email is taken
    /// - `DatabaseError` on persistence failure
    async fn insert(&mut self, user: NewUser) -> Result<User, DomainError>;
}
