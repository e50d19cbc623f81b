//! ListPlansHandler - Query handler for all pricing plans.

use std::sync::Arc;

use crate::domain::plan::{PlanError, PricingPlan};
use crate::ports::UnitOfWorkFactory;

/// Handler returning every plan ordered by id.
pub struct ListPlansHandler {
    uow_factory: Arc<dyn UnitOfWorkFactory>,
}

impl ListPlansHandler {
    pub fn new(uow_factory: Arc<dyn UnitOfWorkFactory>) -> Self {
        Self { uow_factory }
    }

    pub async fn handle(&self) -> Result<Vec<PricingPlan>, PlanError> {
        let mut uow = self.uow_factory.begin().await?;
        Ok(uow.plans().list().await?)
    }
}
