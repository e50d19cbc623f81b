//! HTTP handlers for pricing plan endpoints.

use axum::extract::{Path, State};
use axum::Json;

use crate::application::handlers::{CreatePlanCommand, GetPlanQuery};
use crate::domain::foundation::PlanId;

use super::super::error::ApiError;
use super::super::middleware::RequireAuth;
use super::super::state::AppState;
use super::dto::{CreatePlanRequest, PlanResponse};

/// POST /plan/create - Create a plan and mirror it to the gateway
pub async fn create_plan(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(request): Json<CreatePlanRequest>,
) -> Result<Json<PlanResponse>, ApiError> {
    let plan = state
        .create_plan_handler()
        .handle(CreatePlanCommand {
            draft: request.into(),
            requested_by: user.email,
        })
        .await?;

    Ok(Json(plan.into()))
}

/// GET /plan - All plans
pub async fn list_plans(State(state): State<AppState>) -> Result<Json<Vec<PlanResponse>>, ApiError> {
    let plans = state.list_plans_handler().handle().await?;
    Ok(Json(plans.into_iter().map(PlanResponse::from).collect()))
}

/// GET /plan/:id - One plan
pub async fn get_plan(
    State(state): State<AppState>,
    Path(plan_id): Path<i64>,
) -> Result<Json<PlanResponse>, ApiError> {
    let plan = state
        .get_plan_handler()
        .handle(GetPlanQuery {
            plan_id: PlanId::new(plan_id),
        })
        .await?;

    Ok(Json(plan.into()))
}
