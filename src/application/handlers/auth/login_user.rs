//! LoginUserHandler - exchanges email and password for an access token.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::foundation::{AccessToken, AuthError, DomainError};
use crate::domain::user::normalize_email;
use crate::ports::{PasswordHasher, TokenService, UnitOfWorkFactory};

/// Command to log a user in.
#[derive(Debug, Clone)]
pub struct LoginUserCommand {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Error)]
pub enum LoginUserError {
    /// Unknown email or wrong password; the two are not distinguished.
    #[error("Incorrect email or password")]
    InvalidCredentials,

    #[error(transparent)]
    Token(AuthError),

    #[error("Error: {0}")]
    Infrastructure(String),
}

impl From<DomainError> for LoginUserError {
    fn from(err: DomainError) -> Self {
        LoginUserError::Infrastructure(err.to_string())
    }
}

/// Handler for password login.
pub struct LoginUserHandler {
    uow_factory: Arc<dyn UnitOfWorkFactory>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenService>,
}

impl LoginUserHandler {
    pub fn new(
        uow_factory: Arc<dyn UnitOfWorkFactory>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            uow_factory,
            hasher,
            tokens,
        }
    }

    pub async fn handle(&self, cmd: LoginUserCommand) -> Result<AccessToken, LoginUserError> {
        let email = normalize_email(&cmd.username);

        let mut uow = self.uow_factory.begin().await?;
        let user = uow.users().find_by_email(&email).await?;
        drop(uow);

        let Some(user) = user else {
            self.hasher.verify_absent(&cmd.password).await?;
            tracing::info!("Login failed: unknown email");
            return Err(LoginUserError::InvalidCredentials);
        };

        if !self.hasher.verify(&cmd.password, &user.password_hash).await? {
            tracing::info!(user_id = %user.id, "Login failed: wrong password");
            return Err(LoginUserError::InvalidCredentials);
        }

        self.tokens.issue(user.email.as_str()).map_err(|e| match e {
            AuthError::InvalidCredentials => LoginUserError::InvalidCredentials,
            other => LoginUserError::Token(other),
        })
    }
}
