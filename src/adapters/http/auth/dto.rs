//! Request/response bodies for the auth endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::user::UserProfile;

/// OAuth2 password-style form: the email travels as `username`.
#[derive(Debug, Clone, Deserialize)]
pub struct CredentialsForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
}

impl TokenResponse {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
    pub message: &'static str,
    pub user: UserProfile,
    pub token: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserResponse {
    pub email: String,
}
