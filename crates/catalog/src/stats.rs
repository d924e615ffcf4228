//! Catalog-wide counters shared by every category.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, LazyLock};

static GLOBAL: LazyLock<Arc<CatalogStats>> = LazyLock::new(CatalogStats::new);

/// Counts of categories created and products added.
///
/// Counters only grow; [`CatalogStats::reset`] is the single way back to zero.
/// Categories hold an `Arc` to the instance they report to, either the
/// process-wide one from [`CatalogStats::global`] or an isolated one.
#[derive(Debug, Default)]
pub struct CatalogStats {
    category_count: AtomicU64,
    product_count: AtomicU64,
}

impl CatalogStats {
    /// A fresh, isolated set of counters.
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// The process-wide counters.
    pub fn global() -> Arc<Self> {
        Arc::clone(&GLOBAL)
    }

    /// Total categories ever created.
    pub fn category_count(&self) -> u64 {
        self.category_count.load(Ordering::SeqCst)
    }

    /// Total products ever added across all categories.
    pub fn product_count(&self) -> u64 {
        self.product_count.load(Ordering::SeqCst)
    }

    pub fn record_category(&self) {
        self.category_count.fetch_add(1, Ordering::SeqCst);
    }

    pub fn record_product(&self) {
        self.product_count.fetch_add(1, Ordering::SeqCst);
    }

    /// Zero both counters.
    pub fn reset(&self) {
        self.category_count.store(0, Ordering::SeqCst);
        self.product_count.store(0, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_start_at_zero_and_grow() {
        let stats = CatalogStats::new();
        assert_eq!(stats.category_count(), 0);
        assert_eq!(stats.product_count(), 0);

        stats.record_category();
        stats.record_product();
        stats.record_product();

        assert_eq!(stats.category_count(), 1);
        assert_eq!(stats.product_count(), 2);
    }

    #[test]
    fn reset_zeroes_both_counters() {
        let stats = CatalogStats::new();
        stats.record_category();
        stats.record_product();
        stats.reset();
        assert_eq!(stats.category_count(), 0);
        assert_eq!(stats.product_count(), 0);
    }

    #[test]
    fn global_is_shared() {
        assert!(Arc::ptr_eq(&CatalogStats::global(), &CatalogStats::global()));
    }

    #[test]
    fn concurrent_updates_are_not_lost() {
        let stats = CatalogStats::new();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let stats = Arc::clone(&stats);
                std::thread::spawn(move || {
                    for _ in 0..1000 {
                        stats.record_product();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(stats.product_count(), 4000);
    }
}
