//! RegisterUserHandler - Command handler for creating an account.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::foundation::{AccessToken, AuthError, DomainError, ValidationError};
use crate::domain::user::{NewUser, Registration, UserProfile};
use crate::ports::{PasswordHasher, TokenService, UnitOfWorkFactory};

/// Command to register a new user.
#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    /// Email address (submitted as the form's `username`).
    pub username: String,
    pub password: String,
}

/// Result of successful registration.
#[derive(Debug, Clone)]
pub struct RegisterUserResult {
    pub user: UserProfile,
    pub token: AccessToken,
}

#[derive(Debug, Error)]
pub enum RegisterUserError {
    #[error("Email already registered")]
    EmailAlreadyRegistered,

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Token(#[from] AuthError),

    #[error("Error: {0}")]
    Infrastructure(String),
}

impl From<DomainError> for RegisterUserError {
    fn from(err: DomainError) -> Self {
        match err.code {
            crate::domain::foundation::ErrorCode::EmailAlreadyRegistered => {
                RegisterUserError::EmailAlreadyRegistered
            }
            _ => RegisterUserError::Infrastructure(err.to_string()),
        }
    }
}

/// Handler for registering users.
///
/// Checks the email is free, hashes the password, stores the account and
/// issues a token for it. No unit of work is open while the password hashes.
pub struct RegisterUserHandler {
    uow_factory: Arc<dyn UnitOfWorkFactory>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenService>,
}

impl RegisterUserHandler {
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

    pub async fn handle(
        &self,
        cmd: RegisterUserCommand,
    ) -> Result<RegisterUserResult, RegisterUserError> {
        let registration = Registration::new(&cmd.username, &cmd.password)?;

        let mut uow = self.uow_factory.begin().await?;
        let existing = uow
            .users()
            .find_by_email(registration.email.as_str())
            .await?;
        drop(uow);
        if existing.is_some() {
            return Err(RegisterUserError::EmailAlreadyRegistered);
        }

        let password_hash = self.hasher.hash(&registration.password).await?;

        // Losing a race for the email surfaces as EmailAlreadyRegistered here.
        let mut uow = self.uow_factory.begin().await?;
        let user = uow
            .users()
            .insert(NewUser {
                email: registration.email,
                password_hash,
            })
            .await?;
        uow.commit().await?;

        let token = self.tokens.issue(user.email.as_str())?;

        tracing::info!(user_id = %user.id, "User registered");

        Ok(RegisterUserResult {
            user: user.profile(),
            token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::{Argon2PasswordHasher, JwtTokenService};
    use crate::adapters::memory::InMemoryUnitOfWorkFactory;
    use secrecy::SecretString;
    use std::time::Duration;

    fn handler(factory: &InMemoryUnitOfWorkFactory) -> (RegisterUserHandler, Arc<JwtTokenService>) {
        let tokens = Arc::new(JwtTokenService::new(
            &SecretString::new("test-secret".to_string()),
            Duration::from_secs(3600),
        ));
        let handler = RegisterUserHandler::new(
            Arc::new(factory.clone()),
            Arc::new(Argon2PasswordHasher::new()),
            tokens.clone(),
        );
        (handler, tokens)
    }

    fn cmd(username: &str, password: &str) -> RegisterUserCommand {
        RegisterUserCommand {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn registers_user_and_issues_token_for_email() {
        let factory = InMemoryUnitOfWorkFactory::new();
        let (handler, tokens) = handler(&factory);

        let result = handler.handle(cmd("New@Example.com", "pw")).await.unwrap();

        assert_eq!(result.user.email, "new@example.com");
        assert!(result.user.is_active);
        assert_eq!(tokens.verify(result.token.as_str()).unwrap(), "new@example.com");
        assert_eq!(factory.user_count().await, 1);
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected_without_write() {
        let factory = InMemoryUnitOfWorkFactory::new();
        let (handler, _) = handler(&factory);
        handler.handle(cmd("a@b.com", "pw")).await.unwrap();

        let err = handler.handle(cmd("A@B.com", "other")).await.unwrap_err();

        assert!(matches!(err, RegisterUserError::EmailAlreadyRegistered));
        assert_eq!(factory.user_count().await, 1);
    }

    #[tokio::test]
    async fn invalid_email_is_validation_error() {
        let factory = InMemoryUnitOfWorkFactory::new();
        let (handler, _) = handler(&factory);

        let err = handler.handle(cmd("nope", "pw")).await.unwrap_err();

        assert!(matches!(err, RegisterUserError::Validation(_)));
        assert_eq!(factory.user_count().await, 0);
    }

    #[tokio::test]
    async fn empty_password_is_validation_error() {
        let factory = InMemoryUnitOfWorkFactory::new();
        let (handler, _) = handler(&factory);

        let err = handler.handle(cmd("a@b.com", "")).await.unwrap_err();

        assert!(matches!(err, RegisterUserError::Validation(_)));
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Connection Usage
    // ════════════════════════════════════════════════════════════════════════════

    /// Records how many units of work were open when a hash was requested.
    struct ObservingHasher {
        factory: InMemoryUnitOfWorkFactory,
        open_while_hashing: std::sync::Mutex<Vec<usize>>,
    }

    #[async_trait::async_trait]
    impl PasswordHasher for ObservingHasher {
        async fn hash(&self, password: &str) -> Result<String, DomainError> {
            self.open_while_hashing
                .lock()
                .unwrap()
                .push(self.factory.open_units());
            Ok(format!("hashed:{}", password))
        }

        async fn verify(&self, password: &str, hash: &str) -> Result<bool, DomainError> {
            Ok(hash == format!("hashed:{}", password))
        }

        async fn verify_absent(&self, _password: &str) -> Result<bool, DomainError> {
            Ok(false)
        }
    }

    #[tokio::test]
    async fn no_unit_of_work_is_open_while_hashing() {
        let factory = InMemoryUnitOfWorkFactory::new();
        let hasher = Arc::new(ObservingHasher {
            factory: factory.clone(),
            open_while_hashing: std::sync::Mutex::new(Vec::new()),
        });
        let handler = RegisterUserHandler::new(
            Arc::new(factory.clone()),
            hasher.clone(),
            Arc::new(JwtTokenService::new(
                &SecretString::new("test-secret".to_string()),
                Duration::from_secs(3600),
            )),
        );

        handler.handle(cmd("a@b.com", "pw")).await.unwrap();

        assert_eq!(*hasher.open_while_hashing.lock().unwrap(), vec![0]);
        assert_eq!(factory.open_units(), 0);
        assert_eq!(factory.user_count().await, 1);
    }
}
