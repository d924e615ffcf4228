use core::any::Any;
use core::fmt;
use std::sync::Arc;

use storeroom_core::{DomainError, DomainResult};
use storeroom_products::Product;

use crate::stats::CatalogStats;

/// Insertion of something that is not a product.
pub const MSG_ONLY_PRODUCTS: &str =
    "Можно добавлять только объекты класса Product или его наследников";

/// A named, ordered collection of products.
///
/// Products are owned by the category and kept in insertion order. There is
/// no removal: the list only grows.
#[derive(Debug)]
pub struct Category {
    name: String,
    description: String,
    products: Vec<Product>,
    stats: Arc<CatalogStats>,
}

impl Category {
    /// Create a category reporting to the process-wide [`CatalogStats`].
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        products: impl IntoIterator<Item = Product>,
    ) -> Self {
        Self::with_stats(CatalogStats::global(), name, description, products)
    }

    /// Create a category reporting to `stats`.
    ///
    /// Initial products go through [`Category::add_product`] one at a time;
    /// the category counter is bumped once afterwards, even for an empty list.
    pub fn with_stats(
        stats: Arc<CatalogStats>,
        name: impl Into<String>,
        description: impl Into<String>,
        products: impl IntoIterator<Item = Product>,
    ) -> Self {
        let mut category = Self {
            name: name.into(),
            description: description.into(),
            products: Vec::new(),
            stats,
        };

        for product in products {
            category.add_product(product);
        }

        category.stats.record_category();
        tracing::debug!(
            category = %category.name,
            products = category.products.len(),
            "category created"
        );
        category
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn stats(&self) -> &Arc<CatalogStats> {
        &self.stats
    }

    /// Append a product.
    pub fn add_product(&mut self, product: Product) {
        tracing::debug!(category = %self.name, product = %product.name(), "product added");
        self.products.push(product);
        self.stats.record_product();
    }

    /// Append an untyped value, which must be a [`Product`].
    ///
    /// Anything else is rejected with [`DomainError::NotAProduct`]; the
    /// category and its counters are left untouched.
    pub fn add_any(&mut self, item: Box<dyn Any>) -> DomainResult<()> {
        let product = item
            .downcast::<Product>()
            .map_err(|_| DomainError::not_a_product(MSG_ONLY_PRODUCTS))?;
        self.add_product(*product);
        Ok(())
    }

    /// One line per product, in insertion order. Empty for an empty category.
    pub fn products(&self) -> String {
        self.products
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Read-only view of the contained products.
    pub fn product_list(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Sum of the quantities of all contained products.
    ///
    /// Widened to `i128` so that any number of valid `i64` quantities adds up
    /// without overflow.
    pub fn total_quantity(&self) -> i128 {
        self.products
            .iter()
            .map(|product| i128::from(product.quantity()))
            .sum()
    }

    /// Mean price of the contained products, `0.0` when there are none.
    pub fn average_price(&self) -> f64 {
        if self.products.is_empty() {
            return 0.0;
        }
        let total: f64 = self.products.iter().map(Product::price).sum();
        total / self.products.len() as f64
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, количество продуктов: {} шт.",
            self.name,
            self.total_quantity()
        )
    }
}
