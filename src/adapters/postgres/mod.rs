//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PgUnitOfWorkFactory` - begins one transaction per unit of work
//! - `PgUnitOfWork` - implements `UserRepository` and `PlanRepository` on
//!   that transaction
//!
//! Tables are described in `sql/schema.sql`.

mod plan_repository;
mod unit_of_work;
mod user_repository;

pub use unit_of_work::{PgUnitOfWork, PgUnitOfWorkFactory};
