//! Auth handlers.
//!
//! ## Commands
//! - Registering an account
//! - Logging in with email and password

mod login_user;
mod register_user;

pub use login_user::{LoginUserCommand, LoginUserError, LoginUserHandler};
pub use register_user::{
    RegisterUserCommand, RegisterUserError, RegisterUserHandler, RegisterUserResult,
};
