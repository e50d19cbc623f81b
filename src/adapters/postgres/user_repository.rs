//! PostgreSQL implementation of UserRepository.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::user::{Email, NewUser, User};
use crate::ports::UserRepository;

use super::unit_of_work::{unique_violation, PgUnitOfWork};

/// Database row representation of a user.
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: i64,
    email: String,
    password_hash: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: UserId::new(row.id),
            email: Email::from_trusted(row.email),
            password_hash: row.password_hash,
        }
    }
}

#[async_trait]
impl UserRepository for PgUnitOfWork {
    async fn find_by_email(&mut self, email: &str) -> Result<Option<User>, DomainError> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT id, email, password_hash
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(|e| DomainError::database(format!("Failed to find user: {}", e)))?;

        Ok(row.map(User::from))
    }

    async fn insert(&mut self, user: NewUser) -> Result<User, DomainError> {
        let row: UserRow = sqlx::query_as(
            r#"
            INSERT INTO users (email, password_hash)
            VALUES ($1, $2)
            RETURNING id, email, password_hash
            "#,
        )
        .bind(user.email.as_str())
        .bind(&user.password_hash)
        .fetch_one(&mut *self.tx)
        .await
        .map_err(|e| {
            if unique_violation(&e).as_deref() == Some("users_email_key") {
                return DomainError::new(
                    ErrorCode::EmailAlreadyRegistered,
                    "Email already registered",
                );
            }
            DomainError::database(format!("Failed to save user: {}", e))
        })?;

        Ok(row.into())
    }
}
