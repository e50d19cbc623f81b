//! In-memory adapters for tests and local runs without a database.

mod unit_of_work;

pub use unit_of_work::{InMemoryUnitOfWork, InMemoryUnitOfWorkFactory};
