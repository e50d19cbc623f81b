//! Authentication adapters.
//!
//! Implementations of the `TokenService` and `PasswordHasher` ports:
//!
//! - `jwt` - HS256 access tokens on `jsonwebtoken`
//! - `argon2_hasher` - Argon2id password hashes

mod argon2_hasher;
mod jwt;

pub use argon2_hasher::Argon2PasswordHasher;
pub use jwt::{Claims, JwtTokenService};
