//! Shared domain primitives for the todo service.
//!
//! No I/O lives here: only the id type, the domain error enum and the
//! pagination rules that both the storage and HTTP layers agree on.

pub mod error;
pub mod pagination;
pub mod types;
