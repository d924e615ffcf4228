//! Catalog domain module.
//!
//! Categories own ordered lists of products and report to shared
//! [`CatalogStats`] counters.

pub mod category;
pub mod stats;

pub use category::{Category, MSG_ONLY_PRODUCTS};
pub use stats::CatalogStats;
