//! Request/response bodies for pricing plan endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::plan::{PlanDraft, PricingPlan};

/// Body of `POST /plan/create`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlanRequest {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub max_users: Option<i32>,
    #[serde(default)]
    pub billing_cycle: Option<i32>,
}

impl From<CreatePlanRequest> for PlanDraft {
    fn from(req: CreatePlanRequest) -> Self {
        PlanDraft {
            name: req.name,
            price: req.price,
            description: req.description,
            is_active: req.is_active,
            max_users: req.max_users,
            billing_cycle: req.billing_cycle,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanResponse {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
    pub is_active: bool,
    pub max_users: i32,
    pub billing_cycle: i32,
}

impl From<PricingPlan> for PlanResponse {
    fn from(plan: PricingPlan) -> Self {
        Self {
            id: plan.id.value(),
            name: plan.name,
            price: plan.price,
            description: plan.description,
            is_active: plan.is_active,
            max_users: plan.max_users,
            billing_cycle: plan.billing_cycle,
        }
    }
}
