use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use stockroom_products::Product;

use super::r#trait::{ProductStore, StorageError};

/// In-memory product store for tests/dev.
///
/// Writes can be switched off to exercise failure paths.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    products: RwLock<Vec<Product>>,
    fail_writes: AtomicBool,
    writes: AtomicU64,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
            ..Self::default()
        }
    }

    /// Make every subsequent `write_all` fail (or succeed again).
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of successful `write_all` calls.
    pub fn write_count(&self) -> u64 {
        self.writes.load(Ordering::SeqCst)
    }

    /// What a fresh reader would load right now.
    pub fn snapshot(&self) -> Vec<Product> {
        self.products.read().map(|p| p.clone()).unwrap_or_default()
    }
}

impl ProductStore for InMemoryProductStore {
    fn read_all(&self) -> Result<Vec<Product>, StorageError> {
        let products = self
            .products
            .read()
            .map_err(|_| StorageError::Unavailable("lock poisoned".to_string()))?;
        Ok(products.clone())
    }

    fn write_all(&self, products: &[Product]) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("writes disabled".to_string()));
        }

        let mut stored = self
            .products
            .write()
            .map_err(|_| StorageError::Unavailable("lock poisoned".to_string()))?;
        *stored = products.to_vec();
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
