//! Unit of work port.
//!
//! A unit of work is begun by a handler for each request, gives access to the
//! repositories inside one transaction, and is committed on success. Dropping
//! it without committing discards its writes.
//!
//! # Example
//!
//! ```ignore
//! let mut uow = self.uow_factory.begin().await?;
//! if uow.users().find_by_email(email).await?.is_some() {
//!     return Err(RegisterError::EmailTaken);
//! }
//! let user = uow.users().insert(new_user).await?;
//! uow.commit().await?;
//! ```

use async_trait::async_trait;

use crate::domain::foundation::DomainError;

use super::{PlanRepository, UserRepository};

/// Starts transactions.
#[async_trait]
pub trait UnitOfWorkFactory: Send + Sync {
    /// Begin a new unit of work.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` if a connection or transaction cannot be obtained
    async fn begin(&self) -> Result<Box<dyn UnitOfWork>, DomainError>;
}

/// One transaction's worth of repository access.
#[async_trait]
pub trait UnitOfWork: Send {
    fn users(&mut self) -> &mut dyn UserRepository;

    fn plans(&mut self) -> &mut dyn PlanRepository;

    /// Make every write visible.
    ///
    /// # Errors
    ///
    /// - `EmailAlreadyRegistered` / `PlanAlreadyExists` if a concurrent
    ///   transaction claimed the same unique value first
    /// - `DatabaseError` on persistence failure
    async fn commit(self: Box<Self>) -> Result<(), DomainError>;

    /// Discard every write. Equivalent to dropping the unit of work.
    async fn rollback(self: Box<Self>) -> Result<(), DomainError>;
}
