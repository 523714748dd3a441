//! Repository port for the product collection.

use std::sync::Arc;

use stockroom_core::{DomainResult, ProductId};

use crate::product::{Product, ProductData};

/// Authoritative product collection.
///
/// Implementations own identity assignment and code-value uniqueness on every
/// mutation. Every mutation is persisted before it returns `Ok`.
pub trait ProductRepository: Send + Sync {
    /// Snapshot of the whole collection, in stored order.
    fn all(&self) -> DomainResult<Vec<Product>>;

    fn get_by_id(&self, id: ProductId) -> DomainResult<Product>;

    /// Products priced strictly above `threshold`, in stored order.
    ///
    /// Fails with `InvalidPrice` when `threshold` is negative or NaN.
    fn price_greater_than(&self, threshold: f64) -> DomainResult<Vec<Product>>;

    /// Store a new product under `last_id + 1`. Fails with `DuplicateCode`
    /// if another product already uses the code value.
    fn create(&self, data: ProductData) -> DomainResult<Product>;

    /// Replace the record with the same id. Fails with `DuplicateCode` if a
    /// different record uses the new code value.
    fn update(&self, product: Product) -> DomainResult<()>;

    /// Read-modify-write of the record `id` as one exclusive step.
    ///
    /// `apply` receives the stored record and returns its replacement; it runs
    /// while the collection is locked, so no other mutation can interleave
    /// between the read and the write. The replacement keeps `id` and fails
    /// with `DuplicateCode` if a different record uses its code value.
    fn partial_update(
        &self,
        id: ProductId,
        apply: &dyn Fn(&Product) -> DomainResult<Product>,
    ) -> DomainResult<Product>;

    fn delete(&self, id: ProductId) -> DomainResult<()>;
}

impl<R> ProductRepository for Arc<R>
where
    R: ProductRepository + ?Sized,
{
    fn all(&self) -> DomainResult<Vec<Product>> {
        (**self).all()
    }

    fn get_by_id(&self, id: ProductId) -> DomainResult<Product> {
        (**self).get_by_id(id)
    }

    fn price_greater_than(&self, threshold: f64) -> DomainResult<Vec<Product>> {
        (**self).price_greater_than(threshold)
    }

    fn create(&self, data: ProductData) -> DomainResult<Product> {
        (**self).create(data)
    }

    fn update(&self, product: Product) -> DomainResult<()> {
        (**self).update(product)
    }

    fn partial_update(
        &self,
        id: ProductId,
        apply: &dyn Fn(&Product) -> DomainResult<Product>,
    ) -> DomainResult<Product> {
        (**self).partial_update(id, apply)
    }

    fn delete(&self, id: ProductId) -> DomainResult<()> {
        (**self).delete(id)
    }
}
