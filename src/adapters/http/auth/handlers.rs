//! HTTP handlers for auth endpoints.

use axum::extract::{Form, State};
use axum::Json;

use crate::application::handlers::{LoginUserCommand, RegisterUserCommand};

use super::super::error::ApiError;
use super::super::middleware::RequireAuth;
use super::super::state::AppState;
use super::dto::{CredentialsForm, CurrentUserResponse, RegisterResponse, TokenResponse};

/// POST /auth/login - Exchange credentials for a bearer token
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<CredentialsForm>,
) -> Result<Json<TokenResponse>, ApiError> {
    let token = state
        .login_user_handler()
        .handle(LoginUserCommand {
            username: form.username,
            password: form.password,
        })
        .await?;

    Ok(Json(TokenResponse::bearer(token.into_string())))
}

/// POST /auth/register - Create an account and return a token for it
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<CredentialsForm>,
) -> Result<Json<RegisterResponse>, ApiError> {
    let result = state
        .register_user_handler()
        .handle(RegisterUserCommand {
            username: form.username,
            password: form.password,
        })
        .await?;

    Ok(Json(RegisterResponse {
        message: "User registered successfully",
        user: result.user,
        token: result.token.into_string(),
    }))
}

/// GET /auth/me - The subject of the presented token
pub async fn me(RequireAuth(user): RequireAuth) -> Json<CurrentUserResponse> {
    Json(CurrentUserResponse { email: user.email })
}
