//! In-memory unit of work.
//!
//! Writes are staged inside the unit of work and applied to the shared store
//! on commit. Ids come from shared sequences, so a rolled-back insert still
//! consumes its id, as a `BIGSERIAL` would. Uniqueness is checked at insert
//! time against committed and staged rows, and again at commit.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::foundation::{DomainError, ErrorCode, PlanId, UserId};
use crate::domain::plan::{NewPricingPlan, PricingPlan};
use crate::domain::user::{NewUser, User};
use crate::ports::{PlanRepository, UnitOfWork, UnitOfWorkFactory, UserRepository};

#[derive(Debug, Default)]
struct StoreState {
    users: BTreeMap<i64, User>,
    plans: BTreeMap<i64, PricingPlan>,
    user_seq: i64,
    plan_seq: i64,
}

/// Shared in-memory store handing out units of work.
#[derive(Clone, Default)]
pub struct InMemoryUnitOfWorkFactory {
    state: Arc<Mutex<StoreState>>,
    open: Arc<AtomicUsize>,
}

impl InMemoryUnitOfWorkFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of committed users.
    pub async fn user_count(&self) -> usize {
        self.state.lock().await.users.len()
    }

    /// Number of committed plans.
    pub async fn plan_count(&self) -> usize {
        self.state.lock().await.plans.len()
    }

    /// Units of work begun and not yet committed, rolled back or dropped.
    /// Stands in for checked-out pool connections.
    pub fn open_units(&self) -> usize {
        self.open.load(Ordering::SeqCst)
    }
}

/// Counts one open unit of work for as long as it lives.
struct OpenUnit(Arc<AtomicUsize>);

impl OpenUnit {
    fn acquire(open: &Arc<AtomicUsize>) -> Self {
        open.fetch_add(1, Ordering::SeqCst);
        Self(Arc::clone(open))
    }
}

impl Drop for OpenUnit {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl UnitOfWorkFactory for InMemoryUnitOfWorkFactory {
    async fn begin(&self) -> Result<Box<dyn UnitOfWork>, DomainError> {
        Ok(Box::new(InMemoryUnitOfWork {
            state: Arc::clone(&self.state),
            staged_users: Vec::new(),
            staged_plans: Vec::new(),
            _open: OpenUnit::acquire(&self.open),
        }))
    }
}

/// Unit of work over the shared in-memory store.
pub struct InMemoryUnitOfWork {
    state: Arc<Mutex<StoreState>>,
    staged_users: Vec<User>,
    staged_plans: Vec<PricingPlan>,
    _open: OpenUnit,
}

fn email_taken() -> DomainError {
    DomainError::new(ErrorCode::EmailAlreadyRegistered, "Email already registered")
}

fn plan_name_taken(name: &str) -> DomainError {
    DomainError::new(ErrorCode::PlanAlreadyExists, "Pricing plan with this name already exists")
        .with_detail("name", name)
}

#[async_trait]
impl UnitOfWork for InMemoryUnitOfWork {
    fn users(&mut self) -> &mut dyn UserRepository {
        self
    }

    fn plans(&mut self) -> &mut dyn PlanRepository {
        self
    }

    async fn commit(self: Box<Self>) -> Result<(), DomainError> {
        let uow = *self;
        let mut state = uow.state.lock().await;

        for user in &uow.staged_users {
            if state.users.values().any(|u| u.email == user.email) {
                return Err(email_taken());
            }
        }
        for plan in &uow.staged_plans {
            if state.plans.values().any(|p| p.name == plan.name) {
                return Err(plan_name_taken(&plan.name));
            }
        }

        for user in uow.staged_users {
            state.users.insert(user.id.value(), user);
        }
        for plan in uow.staged_plans {
            state.plans.insert(plan.id.value(), plan);
        }
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<(), DomainError> {
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUnitOfWork {
    async fn find_by_email(&mut self, email: &str) -> Result<Option<User>, DomainError> {
        if let Some(user) = self.staged_users.iter().find(|u| u.email.as_str() == email) {
            return Ok(Some(user.clone()));
        }
        let state = self.state.lock().await;
        Ok(state
            .users
            .values()
            .find(|u| u.email.as_str() == email)
            .cloned())
    }

    async fn insert(&mut self, user: NewUser) -> Result<User, DomainError> {
        let mut state = self.state.lock().await;
        let taken = state.users.values().any(|u| u.email == user.email)
            || self.staged_users.iter().any(|u| u.email == user.email);
        if taken {
            return Err(email_taken());
        }

        state.user_seq += 1;
        let user = User {
            id: UserId::new(state.user_seq),
            email: user.email,
            password_hash: user.password_hash,
        };
        drop(state);

        self.staged_users.push(user.clone());
        Ok(user)
    }
}

#[async_trait]
impl PlanRepository for InMemoryUnitOfWork {
    async fn find_by_name(&mut self, name: &str) -> Result<Option<PricingPlan>, DomainError> {
        if let Some(plan) = self.staged_plans.iter().find(|p| p.name == name) {
            return Ok(Some(plan.clone()));
        }
        let state = self.state.lock().await;
        Ok(state.plans.values().find(|p| p.name == name).cloned())
    }

    async fn find_by_id(&mut self, id: PlanId) -> Result<Option<PricingPlan>, DomainError> {
        if let Some(plan) = self.staged_plans.iter().find(|p| p.id == id) {
            return Ok(Some(plan.clone()));
        }
        let state = self.state.lock().await;
        Ok(state.plans.get(&id.value()).cloned())
    }

    async fn list(&mut self) -> Result<Vec<PricingPlan>, DomainError> {
        let state = self.state.lock().await;
        let mut plans: Vec<PricingPlan> = state
            .plans
            .values()
            .cloned()
            .chain(self.staged_plans.iter().cloned())
            .collect();
        plans.sort_by_key(|p| p.id);
        Ok(plans)
    }

    async fn insert(&mut self, plan: NewPricingPlan) -> Result<PricingPlan, DomainError> {
        let mut state = self.state.lock().await;
        let taken = state.plans.values().any(|p| p.name == plan.name)
            || self.staged_plans.iter().any(|p| p.name == plan.name);
        if taken {
            return Err(plan_name_taken(&plan.name));
        }

        state.plan_seq += 1;
        let plan = plan.into_plan(PlanId::new(state.plan_seq));
        drop(state);

        self.staged_plans.push(plan.clone());
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::plan::PlanDraft;
    use crate::domain::user::Email;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            email: Email::parse(email).unwrap(),
            password_hash: "hash".to_string(),
        }
    }

    fn new_plan(name: &str) -> NewPricingPlan {
        NewPricingPlan::from_draft(PlanDraft {
            name: name.to_string(),
            price: 100.0,
            ..Default::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn committed_user_is_visible_to_later_units() {
        let factory = InMemoryUnitOfWorkFactory::new();

        let mut uow = factory.begin().await.unwrap();
        let user = uow.users().insert(new_user("a@b.com")).await.unwrap();
        uow.commit().await.unwrap();

        let mut uow = factory.begin().await.unwrap();
        let found = uow.users().find_by_email("a@b.com").await.unwrap();
        assert_eq!(found, Some(user));
    }

    #[tokio::test]
    async fn dropped_unit_discards_writes() {
        let factory = InMemoryUnitOfWorkFactory::new();

        {
            let mut uow = factory.begin().await.unwrap();
            uow.plans().insert(new_plan("Basic")).await.unwrap();
        }

        assert_eq!(factory.plan_count().await, 0);
    }

    #[tokio::test]
    async fn staged_writes_visible_inside_unit() {
        let factory = InMemoryUnitOfWorkFactory::new();
        let mut uow = factory.begin().await.unwrap();

        let plan = uow.plans().insert(new_plan("Basic")).await.unwrap();

        assert_eq!(uow.plans().find_by_id(plan.id).await.unwrap(), Some(plan.clone()));
        assert_eq!(uow.plans().list().await.unwrap(), vec![plan]);
    }

    #[tokio::test]
    async fn duplicate_email_rejected() {
        let factory = InMemoryUnitOfWorkFactory::new();
        let mut uow = factory.begin().await.unwrap();
        uow.users().insert(new_user("a@b.com")).await.unwrap();
        uow.commit().await.unwrap();

        let mut uow = factory.begin().await.unwrap();
        let err = uow.users().insert(new_user("a@b.com")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::EmailAlreadyRegistered);
    }

    #[tokio::test]
    async fn concurrent_duplicate_plan_fails_at_commit() {
        let factory = InMemoryUnitOfWorkFactory::new();
        let mut first = factory.begin().await.unwrap();
        let mut second = factory.begin().await.unwrap();

        first.plans().insert(new_plan("Basic")).await.unwrap();
        second.plans().insert(new_plan("Basic")).await.unwrap();

        first.commit().await.unwrap();
        let err = second.commit().await.unwrap_err();
        assert_eq!(err.code, ErrorCode::PlanAlreadyExists);
        assert_eq!(factory.plan_count().await, 1);
    }

    #[tokio::test]
    async fn ids_are_sequential() {
        let factory = InMemoryUnitOfWorkFactory::new();
        let mut uow = factory.begin().await.unwrap();
        let a = uow.plans().insert(new_plan("A")).await.unwrap();
        let b = uow.plans().insert(new_plan("B")).await.unwrap();

        assert_eq!(a.id, PlanId::new(1));
        assert_eq!(b.id, PlanId::new(2));
    }

    #[tokio::test]
    async fn open_units_track_begin_commit_and_drop() {
        let factory = InMemoryUnitOfWorkFactory::new();
        assert_eq!(factory.open_units(), 0);

        let committed = factory.begin().await.unwrap();
        let dropped = factory.begin().await.unwrap();
        assert_eq!(factory.open_units(), 2);

        committed.commit().await.unwrap();
        assert_eq!(factory.open_units(), 1);

        drop(dropped);
        assert_eq!(factory.open_units(), 0);
    }
}
