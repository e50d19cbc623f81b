//! Shared application state for every router.

use std::sync::Arc;

use crate::application::handlers::{
    CreateCheckoutHandler, CreatePlanHandler, ExpireCheckoutHandler, GetPlanHandler,
    ListPlansHandler, LoginUserHandler, ReceivePaymentWebhookHandler, RegisterUserHandler,
    RetrieveCheckoutHandler, WebhookSubscriptionsHandler,
};
use crate::domain::webhook::WebhookVerifier;
use crate::ports::{
    PasswordHasher, PaymentEventSink, PaymentGateway, TokenService, UnitOfWorkFactory,
};

/// Arc-wrapped collaborators, cloned into each request.
#[derive(Clone)]
pub struct AppState {
    pub uow_factory: Arc<dyn UnitOfWorkFactory>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub tokens: Arc<dyn TokenService>,
    pub gateway: Arc<dyn PaymentGateway>,
    pub webhook_verifier: Arc<WebhookVerifier>,
    pub payment_events: Arc<dyn PaymentEventSink>,
}

impl AppState {
    pub fn new(
        uow_factory: Arc<dyn UnitOfWorkFactory>,
        password_hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenService>,
        gateway: Arc<dyn PaymentGateway>,
        webhook_verifier: WebhookVerifier,
        payment_events: Arc<dyn PaymentEventSink>,
    ) -> Self {
        Self {
            uow_factory,
            password_hasher,
            tokens,
            gateway,
            webhook_verifier: Arc::new(webhook_verifier),
            payment_events,
        }
    }

    // Handlers are built on demand from the shared state.

    pub fn register_user_handler(&self) -> RegisterUserHandler {
        RegisterUserHandler::new(
            self.uow_factory.clone(),
            self.password_hasher.clone(),
            self.tokens.clone(),
        )
    }

    pub fn login_user_handler(&self) -> LoginUserHandler {
        LoginUserHandler::new(
            self.uow_factory.clone(),
            self.password_hasher.clone(),
            self.tokens.clone(),
        )
    }

    pub fn create_plan_handler(&self) -> CreatePlanHandler {
        CreatePlanHandler::new(self.uow_factory.clone(), self.gateway.clone())
    }

    pub fn list_plans_handler(&self) -> ListPlansHandler {
        ListPlansHandler::new(self.uow_factory.clone())
    }

    pub fn get_plan_handler(&self) -> GetPlanHandler {
        GetPlanHandler::new(self.uow_factory.clone())
    }

    pub fn create_checkout_handler(&self) -> CreateCheckoutHandler {
        CreateCheckoutHandler::new(self.gateway.clone())
    }

    pub fn retrieve_checkout_handler(&self) -> RetrieveCheckoutHandler {
        RetrieveCheckoutHandler::new(self.gateway.clone())
    }

    pub fn expire_checkout_handler(&self) -> ExpireCheckoutHandler {
        ExpireCheckoutHandler::new(self.gateway.clone())
    }

    pub fn receive_webhook_handler(&self) -> ReceivePaymentWebhookHandler {
        ReceivePaymentWebhookHandler::new(
            self.webhook_verifier.clone(),
            self.payment_events.clone(),
        )
    }

    pub fn webhook_subscriptions_handler(&self) -> WebhookSubscriptionsHandler {
        WebhookSubscriptionsHandler::new(self.gateway.clone())
    }
}
