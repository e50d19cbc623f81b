//! Plan module - subscription pricing plans.
//!
//! A plan is created locally and mirrored to the payment gateway as a
//! subscription plan. Names are unique.

mod errors;

pub use errors::PlanError;

use serde::Serialize;

use super::foundation::{PlanId, ValidationError};
use super::gateway::to_centavos;

/// A stored pricing plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingPlan {
    pub id: PlanId,
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
    pub is_active: bool,
    pub max_users: i32,
    /// Months between charges.
    pub billing_cycle: i32,
}

/// A validated plan ready to insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPricingPlan {
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
    pub is_active: bool,
    pub max_users: i32,
    pub billing_cycle: i32,
}

/// Plan fields as submitted; optional fields take their defaults.
#[derive(Debug, Clone, Default)]
pub struct PlanDraft {
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
    pub is_active: Option<bool>,
    pub max_users: Option<i32>,
    pub billing_cycle: Option<i32>,
}

impl NewPricingPlan {
    /// Validates a draft and applies defaults.
    pub fn from_draft(draft: PlanDraft) -> Result<Self, ValidationError> {
        let name = draft.name.trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if !draft.price.is_finite() || draft.price <= 0.0 {
            return Err(ValidationError::not_positive("price"));
        }

        let max_users = draft.max_users.unwrap_or(1);
        if max_users < 1 {
            return Err(ValidationError::below_minimum("max_users", 1, max_users.into()));
        }
        let billing_cycle = draft.billing_cycle.unwrap_or(1);
        if billing_cycle < 1 {
            return Err(ValidationError::below_minimum(
                "billing_cycle",
                1,
                billing_cycle.into(),
            ));
        }

        let description = draft
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        Ok(Self {
            name,
            price: draft.price,
            description,
            is_active: draft.is_active.unwrap_or(true),
            max_users,
            billing_cycle,
        })
    }

    pub fn price_in_centavos(&self) -> i64 {
        to_centavos(self.price)
    }

    pub fn into_plan(self, id: PlanId) -> PricingPlan {
        PricingPlan {
            id,
            name: self.name,
            price: self.price,
            description: self.description,
            is_active: self.is_active,
            max_users: self.max_users,
            billing_cycle: self.billing_cycle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, price: f64) -> PlanDraft {
        PlanDraft {
            name: name.to_string(),
            price,
            ..Default::default()
        }
    }

    #[test]
    fn defaults_are_applied() {
        let plan = NewPricingPlan::from_draft(draft("Basic", 199.0)).unwrap();
        assert_eq!(plan.description, None);
        assert!(plan.is_active);
        assert_eq!(plan.max_users, 1);
        assert_eq!(plan.billing_cycle, 1);
    }

    #[test]
    fn name_is_trimmed() {
        let plan = NewPricingPlan::from_draft(draft("  Pro  ", 10.0)).unwrap();
        assert_eq!(plan.name, "Pro");
    }

    #[test]
    fn blank_name_rejected() {
        assert!(matches!(
            NewPricingPlan::from_draft(draft("   ", 10.0)),
            Err(ValidationError::EmptyField { .. })
        ));
    }

    #[test]
    fn non_positive_price_rejected() {
        assert!(NewPricingPlan::from_draft(draft("Free", 0.0)).is_err());
        assert!(NewPricingPlan::from_draft(draft("Neg", -1.0)).is_err());
        assert!(NewPricingPlan::from_draft(draft("NaN", f64::NAN)).is_err());
    }

    #[test]
    fn zero_max_users_rejected() {
        let d = PlanDraft {
            max_users: Some(0),
            ..draft("Team", 10.0)
        };
        assert!(matches!(
            NewPricingPlan::from_draft(d),
            Err(ValidationError::BelowMinimum { .. })
        ));
    }

    #[test]
    fn zero_billing_cycle_rejected() {
        let d = PlanDraft {
            billing_cycle: Some(0),
            ..draft("Team", 10.0)
        };
        assert!(NewPricingPlan::from_draft(d).is_err());
    }

    #[test]
    fn blank_description_becomes_none() {
        let d = PlanDraft {
            description: Some("  ".to_string()),
            ..draft("Team", 10.0)
        };
        assert_eq!(NewPricingPlan::from_draft(d).unwrap().description, None);
    }

    #[test]
    fn price_converts_to_centavos() {
        let plan = NewPricingPlan::from_draft(draft("Basic", 499.99)).unwrap();
        assert_eq!(plan.price_in_centavos(), 49999);
    }
}
