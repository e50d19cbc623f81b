//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Each use case gets its own handler holding the ports it needs.

pub mod handlers;
