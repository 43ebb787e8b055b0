//! Todo API server library.
//!
//! Exposes the building blocks (CLI, config, state, error handling, routes)
//! so integration tests and the binary entrypoint share one router.

pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;
