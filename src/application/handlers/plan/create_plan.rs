//! CreatePlanHandler - Command handler for creating pricing plans.

use std::sync::Arc;

use crate::domain::plan::{NewPricingPlan, PlanDraft, PlanError, PricingPlan};
use crate::ports::{PaymentGateway, UnitOfWorkFactory};

/// Command to create a pricing plan.
#[derive(Debug, Clone)]
pub struct CreatePlanCommand {
    pub draft: PlanDraft,
    /// Subject of the bearer token that authorized the request.
    pub requested_by: String,
}

/// Handler for creating pricing plans.
///
/// The plan is mirrored to the gateway before it is stored locally. A
/// duplicate name is refused before any remote call or write. No unit of work
/// is open during the gateway call.
pub struct CreatePlanHandler {
    uow_factory: Arc<dyn UnitOfWorkFactory>,
    gateway: Arc<dyn PaymentGateway>,
}

impl CreatePlanHandler {
    pub fn new(uow_factory: Arc<dyn UnitOfWorkFactory>, gateway: Arc<dyn PaymentGateway>) -> Self {
        Self {
            uow_factory,
            gateway,
        }
    }

    pub async fn handle(&self, cmd: CreatePlanCommand) -> Result<PricingPlan, PlanError> {
        let new_plan = NewPricingPlan::from_draft(cmd.draft)?;

        let mut uow = self.uow_factory.begin().await?;
        let existing = uow.plans().find_by_name(&new_plan.name).await?;
        drop(uow);
        if existing.is_some() {
            return Err(PlanError::already_exists(new_plan.name));
        }

        let remote = self.gateway.create_plan(&new_plan).await?;
        let remote_id = remote
            .pointer("/data/id")
            .and_then(|id| id.as_str())
            .unwrap_or_default();

        // A concurrent create with the same name fails here as AlreadyExists.
        let mut uow = self.uow_factory.begin().await?;
        let plan = uow.plans().insert(new_plan).await?;
        uow.commit().await?;

        tracing::info!(
            plan_id = %plan.id,
            gateway_plan_id = remote_id,
            requested_by = %cmd.requested_by,
            "Pricing plan created"
        );

        Ok(plan)
    }
}
