//! GetPlanHandler - Query handler for a single pricing plan.

use std::sync::Arc;

use crate::domain::foundation::PlanId;
use crate::domain::plan::{PlanError, PricingPlan};
use crate::ports::UnitOfWorkFactory;

/// Query for one plan by id.
#[derive(Debug, Clone, Copy)]
pub struct GetPlanQuery {
    pub plan_id: PlanId,
}

pub struct GetPlanHandler {
    uow_factory: Arc<dyn UnitOfWorkFactory>,
}

impl GetPlanHandler {
    pub fn new(uow_factory: Arc<dyn UnitOfWorkFactory>) -> Self {
        Self { uow_factory }
    }

    pub async fn handle(&self, query: GetPlanQuery) -> Result<PricingPlan, PlanError> {
        let mut uow = self.uow_factory.begin().await?;
        uow.plans()
            .find_by_id(query.plan_id)
            .await?
            .ok_or(PlanError::NotFound(query.plan_id))
    }
}
