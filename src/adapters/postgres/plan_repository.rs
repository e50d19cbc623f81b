//! PostgreSQL implementation of PlanRepository.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, PlanId};
use crate::domain::plan::{NewPricingPlan, PricingPlan};
use crate::ports::PlanRepository;

use super::unit_of_work::{unique_violation, PgUnitOfWork};

/// Database row representation of a pricing plan.
#[derive(Debug, sqlx::FromRow)]
struct PlanRow {
    id: i64,
    name: String,
    price: f64,
    description: Option<String>,
    is_active: bool,
    max_users: i32,
    billing_cycle: i32,
}

impl From<PlanRow> for PricingPlan {
    fn from(row: PlanRow) -> Self {
        PricingPlan {
            id: PlanId::new(row.id),
            name: row.name,
            price: row.price,
            description: row.description,
            is_active: row.is_active,
            max_users: row.max_users,
            billing_cycle: row.billing_cycle,
        }
    }
}

const PLAN_COLUMNS: &str = "id, name, price, description, is_active, max_users, billing_cycle";

#[async_trait]
impl PlanRepository for PgUnitOfWork {
    async fn find_by_name(&mut self, name: &str) -> Result<Option<PricingPlan>, DomainError> {
        let sql = format!("SELECT {} FROM pricing_plans WHERE name = $1", PLAN_COLUMNS);
        let row: Option<PlanRow> = sqlx::query_as(&sql)
            .bind(name)
            .fetch_optional(&mut *self.tx)
            .await
            .map_err(|e| DomainError::database(format!("Failed to find plan: {}", e)))?;

        Ok(row.map(PricingPlan::from))
    }

    async fn find_by_id(&mut self, id: PlanId) -> Result<Option<PricingPlan>, DomainError> {
        let sql = format!("SELECT {} FROM pricing_plans WHERE id = $1", PLAN_COLUMNS);
        let row: Option<PlanRow> = sqlx::query_as(&sql)
            .bind(id.value())
            .fetch_optional(&mut *self.tx)
            .await
            .map_err(|e| DomainError::database(format!("Failed to find plan: {}", e)))?;

        Ok(row.map(PricingPlan::from))
    }

    async fn list(&mut self) -> Result<Vec<PricingPlan>, DomainError> {
        let sql = format!("SELECT {} FROM pricing_plans ORDER BY id", PLAN_COLUMNS);
        let rows: Vec<PlanRow> = sqlx::query_as(&sql)
            .fetch_all(&mut *self.tx)
            .await
            .map_err(|e| DomainError::database(format!("Failed to list plans: {}", e)))?;

        Ok(rows.into_iter().map(PricingPlan::from).collect())
    }

    async fn insert(&mut self, plan: NewPricingPlan) -> Result<PricingPlan, DomainError> {
        let sql = format!(
            r#"
            INSERT INTO pricing_plans (name, price, description, is_active, max_users, billing_cycle)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {}
            "#,
            PLAN_COLUMNS
        );
        let row: PlanRow = sqlx::query_as(&sql)
            .bind(&plan.name)
            .bind(plan.price)
            .bind(&plan.description)
            .bind(plan.is_active)
            .bind(plan.max_users)
            .bind(plan.billing_cycle)
            .fetch_one(&mut *self.tx)
            .await
            .map_err(|e| {
                if unique_violation(&e).as_deref() == Some("pricing_plans_name_key") {
                    return DomainError::new(
                        ErrorCode::PlanAlreadyExists,
                        "Pricing plan with this name already exists",
                    )
                    .with_detail("name", plan.name.clone());
                }
                DomainError::database(format!("Failed to save plan: {}", e))
            })?;

        Ok(row.into())
    }
}
