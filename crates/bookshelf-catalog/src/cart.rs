//! Session-spanning cart counter.

use bookshelf_core::traits::KeyValueStore;
use tracing::warn;

pub const CART_KEY: &str = "cartCount";

/// A single non-negative counter, persisted under [`CART_KEY`] on every
/// mutation. Initialization reads the persisted value back, defaulting to 0
/// when it is absent or not numeric.
pub struct CartCounter<K: KeyValueStore> {
    kv: K,
    count: u64,
}

impl<K: KeyValueStore> CartCounter<K> {
    pub fn new(kv: K) -> Self {
        let count = kv
            .get(CART_KEY)
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite())
            .map_or(0, |v| v.max(0.0).floor() as u64);
        Self { kv, count }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Hand the backing store back, e.g. to reuse it for other keys.
    pub fn into_store(self) -> K {
        self.kv
    }

    pub fn increment(&mut self) -> u64 {
        self.set_count(self.count as f64 + 1.0)
    }

    /// Set the counter to `max(0, floor(n))`; the counter never goes negative
    /// and never holds a fraction.
    pub fn set(&mut self, n: f64) -> u64 {
        self.set_count(n)
    }

    fn set_count(&mut self, n: f64) -> u64 {
        let clamped = if n.is_finite() { n.max(0.0).floor() } else { 0.0 };
        self.count = clamped as u64;
        if let Err(e) = self.kv.set(CART_KEY, &self.count.to_string()) {
            warn!("failed to persist cart count: {e}");
        }
        self.count
    }
}
