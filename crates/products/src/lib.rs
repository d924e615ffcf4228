//! Products domain module.
//!
//! This crate contains the sellable items of the catalog: a generic product
//! and its specialized variants, implemented purely as in-memory domain logic
//! (no IO beyond the diagnostic stream, no storage).

pub mod factory;
pub mod product;

pub use factory::ProductData;
pub use product::{
    LawnGrassSpec, PriceUpdate, Product, ProductKind, SmartphoneSpec, MSG_KIND_MISMATCH,
    MSG_NOT_A_PRODUCT, MSG_PRICE_REJECTED, MSG_ZERO_QUANTITY,
};
