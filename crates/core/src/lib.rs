//! `storeroom-core` — catalog domain building blocks.
//!
//! This crate contains **pure domain** primitives shared by the product and
//! catalog crates: the error model, the diagnostic output stream and the
//! representation / construction-logging helpers.

pub mod diagnostics;
pub mod error;
pub mod repr;

pub use error::{DomainError, DomainResult};
pub use repr::{Described, Representation, log_construction};
