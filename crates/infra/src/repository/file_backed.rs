use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use std::collections::HashSet;

use stockroom_core::{DomainError, DomainResult, Entity, ProductId};
use stockroom_products::{Product, ProductData, ProductRepository};

use crate::product_store::ProductStore;

#[derive(Debug)]
struct Collection {
    products: Vec<Product>,
    /// Highest id ever assigned in this process (or loaded at startup).
    last_id: u64,
}

impl Collection {
    fn position(&self, id: ProductId) -> Option<usize> {
        self.products.iter().position(|p| p.id() == id)
    }

    fn code_taken(&self, code: &str, except: Option<ProductId>) -> bool {
        self.products
            .iter()
            .any(|p| p.code_value == code && Some(p.id()) != except)
    }
}

/// Product collection held in memory and mirrored to a [`ProductStore`].
///
/// One lock guards the collection: reads share it, each mutation holds it
/// exclusively across the in-memory change *and* the store write. When the
/// write fails the in-memory change is rolled back, so memory never runs ahead
/// of the file.
#[derive(Debug)]
pub struct FileProductRepository<S> {
    store: S,
    inner: RwLock<Collection>,
}

impl<S> FileProductRepository<S>
where
    S: ProductStore,
{
    /// Load the collection from `store`.
    ///
    /// `last_id` starts at the highest stored id (0 when empty). A stored
    /// collection with a repeated id or code value is rejected.
    pub fn open(store: S) -> DomainResult<Self> {
        let products = store.read_all().map_err(|e| {
            tracing::error!(location = %store.location(), error = %e, "failed to load products");
            e.into_read_error()
        })?;

        if let Err(e) = check_unique(&products) {
            tracing::error!(location = %store.location(), error = %e, "stored products are inconsistent");
            return Err(e);
        }

        let last_id = products.iter().map(|p| p.id.get()).max().unwrap_or(0);
        tracing::info!(
            location = %store.location(),
            products = products.len(),
            last_id,
            "product collection loaded"
        );

        Ok(Self {
            store,
            inner: RwLock::new(Collection { products, last_id }),
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn read(&self) -> DomainResult<RwLockReadGuard<'_, Collection>> {
        self.inner
            .read()
            .map_err(|_| DomainError::storage_read("product collection lock poisoned"))
    }

    fn write(&self) -> DomainResult<RwLockWriteGuard<'_, Collection>> {
        self.inner
            .write()
            .map_err(|_| DomainError::storage_write("product collection lock poisoned"))
    }

    fn persist(&self, products: &[Product]) -> DomainResult<()> {
        self.store.write_all(products).map_err(|e| {
            tracing::error!(location = %self.store.location(), error = %e, "failed to write products");
            e.into_write_error()
        })
    }
}

fn check_unique(products: &[Product]) -> DomainResult<()> {
    let mut ids = HashSet::with_capacity(products.len());
    let mut codes = HashSet::with_capacity(products.len());
    for p in products {
        if !ids.insert(p.id()) {
            return Err(DomainError::storage_read(format!("duplicate product id {}", p.id())));
        }
        if !codes.insert(p.code_value.as_str()) {
            return Err(DomainError::storage_read(format!(
                "duplicate code value {:?}",
                p.code_value
            )));
        }
    }
    Ok(())
}

impl<S> ProductRepository for FileProductRepository<S>
where
    S: ProductStore,
{
    fn all(&self) -> DomainResult<Vec<Product>> {
        Ok(self.read()?.products.clone())
    }

    fn get_by_id(&self, id: ProductId) -> DomainResult<Product> {
        self.read()?
            .products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(DomainError::not_found)
    }

    fn price_greater_than(&self, threshold: f64) -> DomainResult<Vec<Product>> {
        if threshold.is_nan() || threshold < 0.0 {
            return Err(DomainError::invalid_price(format!(
                "threshold {threshold} must be a non-negative number"
            )));
        }

        Ok(self
            .read()?
            .products
            .iter()
            .filter(|p| p.price > threshold)
            .cloned()
            .collect())
    }

    fn create(&self, data: ProductData) -> DomainResult<Product> {
        let mut col = self.write()?;

        if col.code_taken(&data.code_value, None) {
            return Err(DomainError::duplicate_code(data.code_value));
        }

        let id = ProductId::new(col.last_id + 1)?;
        let product = data.with_id(id);

        col.products.push(product.clone());
        if let Err(e) = self.persist(&col.products) {
            col.products.pop();
            return Err(e);
        }
        col.last_id = id.get();

        tracing::debug!(product_id = %id, "product stored");
        Ok(product)
    }

    fn update(&self, product: Product) -> DomainResult<()> {
        let mut col = self.write()?;

        let idx = col.position(product.id).ok_or_else(DomainError::not_found)?;
        if col.code_taken(&product.code_value, Some(product.id)) {
            return Err(DomainError::duplicate_code(product.code_value));
        }

        let id = product.id;
        let previous = std::mem::replace(&mut col.products[idx], product);
        if let Err(e) = self.persist(&col.products) {
            col.products[idx] = previous;
            return Err(e);
        }

        tracing::debug!(product_id = %id, "product replaced");
        Ok(())
    }

    fn partial_update(
        &self,
        id: ProductId,
        apply: &dyn Fn(&Product) -> DomainResult<Product>,
    ) -> DomainResult<Product> {
        let mut col = self.write()?;

        let idx = col.position(id).ok_or_else(DomainError::not_found)?;

        let mut product = apply(&col.products[idx])?;
        product.id = id;
        if col.code_taken(&product.code_value, Some(id)) {
            return Err(DomainError::duplicate_code(product.code_value));
        }

        let previous = std::mem::replace(&mut col.products[idx], product.clone());
        if let Err(e) = self.persist(&col.products) {
            col.products[idx] = previous;
            return Err(e);
        }

        tracing::debug!(product_id = %id, "product patched");
        Ok(product)
    }

    fn delete(&self, id: ProductId) -> DomainResult<()> {
        let mut col = self.write()?;

        let idx = col.position(id).ok_or_else(DomainError::not_found)?;

        let removed = col.products.remove(idx);
        if let Err(e) = self.persist(&col.products) {
            col.products.insert(idx, removed);
            return Err(e);
        }

        tracing::debug!(product_id = %id, "product removed");
        Ok(())
    }
}
