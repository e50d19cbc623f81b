//! HTTP adapter for pricing plans.

mod dto;
mod handlers;
mod routes;

pub use dto::{CreatePlanRequest, PlanResponse};
pub use routes::plan_routes;
