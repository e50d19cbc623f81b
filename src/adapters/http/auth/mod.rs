//! HTTP adapter for registration and login.

mod dto;
mod handlers;
mod routes;

pub use dto::{CredentialsForm, CurrentUserResponse, RegisterResponse, TokenResponse};
pub use routes::auth_routes;
