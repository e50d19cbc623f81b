//! Argon2id implementation of the `PasswordHasher` port.
//!
//! Hashing and verification run on tokio's blocking pool.

use std::sync::Arc;

use argon2::password_hash::{
    rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
};
use argon2::Argon2;
use async_trait::async_trait;
use tokio::sync::OnceCell;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::PasswordHasher;

/// Plaintext behind the hash that absent accounts are checked against.
const ABSENT_ACCOUNT_PASSWORD: &str = "absent-account";

/// Argon2id password hasher with the crate's default parameters.
#[derive(Debug, Default, Clone)]
pub struct Argon2PasswordHasher {
    absent_hash: Arc<OnceCell<String>>,
}

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self::default()
    }
}

fn hashing_error(err: impl std::fmt::Display) -> DomainError {
    DomainError::new(ErrorCode::HashingError, err.to_string())
}

fn hash_blocking(password: &str) -> Result<String, DomainError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(hashing_error)
}

fn verify_blocking(password: &str, hash: &str) -> Result<bool, DomainError> {
    let parsed = PasswordHash::new(hash).map_err(hashing_error)?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(hashing_error(e)),
    }
}

async fn run_blocking<T, F>(work: F) -> Result<T, DomainError>
where
    F: FnOnce() -> Result<T, DomainError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(hashing_error)?
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, password: &str) -> Result<String, DomainError> {
        let password = password.to_owned();
        run_blocking(move || hash_blocking(&password)).await
    }

    async fn verify(&self, password: &str, hash: &str) -> Result<bool, DomainError> {
        let password = password.to_owned();
        let hash = hash.to_owned();
        run_blocking(move || verify_blocking(&password, &hash)).await
    }

    async fn verify_absent(&self, password: &str) -> Result<bool, DomainError> {
        let absent_hash = self
            .absent_hash
            .get_or_try_init(|| self.hash(ABSENT_ACCOUNT_PASSWORD))
            .await?;
        self.verify(password, absent_hash).await?;
        Ok(false)
    }
}
