//! Pricing plan repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, PlanId};
use crate::domain::plan::{NewPricingPlan, PricingPlan};

/// Plan store. Reached through a [`super::UnitOfWork`].
#[async_trait]
pub trait PlanRepository: Send {
    /// Find a plan by its exact name.
    async fn find_by_name(&mut self, name: &str) -> Result<Option<PricingPlan>, DomainError>;

    /// Find a plan by id.
    async fn find_by_id(&mut self, id: PlanId) -> Result<Option<PricingPlan>, DomainError>;

    /// All plans, ordered by id.
    async fn list(&mut self) -> Result<Vec<PricingPlan>, DomainError>;

    /// Insert a new plan and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// - `PlanAlreadyExists` if the name is taken
    /// - `DatabaseError` on persistence failure
    async fn insert(&mut self, plan: NewPricingPlan) -> Result<PricingPlan, DomainError>;
}
