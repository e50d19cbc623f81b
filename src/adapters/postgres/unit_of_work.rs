//! PostgreSQL unit of work.
//!
//! Each unit of work owns one `sqlx` transaction. Repository calls run on it;
//! dropping the unit of work without committing rolls the transaction back.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};

use crate::domain::foundation::DomainError;
use crate::ports::{PlanRepository, UnitOfWork, UnitOfWorkFactory, UserRepository};

/// Begins transactions on a shared connection pool.
#[derive(Clone)]
pub struct PgUnitOfWorkFactory {
    pool: PgPool,
}

impl PgUnitOfWorkFactory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UnitOfWorkFactory for PgUnitOfWorkFactory {
    async fn begin(&self) -> Result<Box<dyn UnitOfWork>, DomainError> {
        let tx = self.pool.begin().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to begin transaction");
            DomainError::database(format!("Failed to begin transaction: {}", e))
        })?;
        Ok(Box::new(PgUnitOfWork { tx }))
    }
}

/// One open transaction.
pub struct PgUnitOfWork {
    pub(super) tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl UnitOfWork for PgUnitOfWork {
    fn users(&mut self) -> &mut dyn UserRepository {
        self
    }

    fn plans(&mut self) -> &mut dyn PlanRepository {
        self
    }

    async fn commit(self: Box<Self>) -> Result<(), DomainError> {
        let uow = *self;
        uow.tx
            .commit()
            .await
            .map_err(|e| DomainError::database(format!("Failed to commit transaction: {}", e)))
    }

    async fn rollback(self: Box<Self>) -> Result<(), DomainError> {
        let uow = *self;
        uow.tx
            .rollback()
            .await
            .map_err(|e| DomainError::database(format!("Failed to roll back transaction: {}", e)))
    }
}

/// Returns the constraint name when `err` is a unique violation.
pub(super) fn unique_violation(err: &sqlx::Error) -> Option<String> {
    match err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            db_err.constraint().map(str::to_string)
        }
        _ => None,
    }
}
