//! Product use cases: validation in front of the repository, plus pricing.

use chrono::NaiveDate;

use stockroom_core::{DomainError, DomainResult, ProductId};

use crate::expiration;
use crate::pricing::{self, ConsumerPrice, OrderQuantities};
use crate::product::{Product, ProductDraft, ProductPatch};
use crate::repository::ProductRepository;

/// Business orchestration over a [`ProductRepository`].
#[derive(Debug, Clone)]
pub struct ProductService<R> {
    repo: R,
    today: fn() -> NaiveDate,
}

impl<R> ProductService<R>
where
    R: ProductRepository,
{
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            today: expiration::today,
        }
    }

    /// Use a fixed calendar for expiration checks (tests, replays).
    pub fn with_calendar(repo: R, today: fn() -> NaiveDate) -> Self {
        Self { repo, today }
    }

    pub fn all(&self) -> DomainResult<Vec<Product>> {
        self.repo.all()
    }

    pub fn get_by_id(&self, id: ProductId) -> DomainResult<Product> {
        self.repo.get_by_id(id)
    }

    pub fn price_greater_than(&self, threshold: f64) -> DomainResult<Vec<Product>> {
        if threshold.is_nan() || threshold < 0.0 {
            return Err(DomainError::invalid_price(format!(
                "threshold {threshold} must be a non-negative number"
            )));
        }
        self.repo.price_greater_than(threshold)
    }

    pub fn create(&self, draft: ProductDraft) -> DomainResult<Product> {
        let data = draft.validate((self.today)())?;
        let product = self.repo.create(data)?;
        tracing::info!(product_id = %product.id, code_value = %product.code_value, "product created");
        Ok(product)
    }

    pub fn update(&self, id: ProductId, draft: ProductDraft) -> DomainResult<Product> {
        let product = draft.validate((self.today)())?.with_id(id);
        self.repo.update(product.clone())?;
        tracing::info!(product_id = %id, "product updated");
        Ok(product)
    }

    /// Merge `patch` over the stored record and validate the result exactly
    /// like a full update, including code-value uniqueness.
    ///
    /// The merge runs inside the repository's write step, so concurrent
    /// patches to the same record each see the other's committed fields.
    pub fn partial_update(&self, id: ProductId, patch: ProductPatch) -> DomainResult<Product> {
        if patch.is_empty() {
            return self.repo.get_by_id(id);
        }

        let today = (self.today)();
        let product = self.repo.partial_update(id, &|current: &Product| {
            Ok(patch.merge_into(current).validate(today)?.with_id(id))
        })?;

        tracing::info!(product_id = %id, "product partially updated");
        Ok(product)
    }

    pub fn delete(&self, id: ProductId) -> DomainResult<()> {
        self.repo.delete(id)?;
        tracing::info!(product_id = %id, "product deleted");
        Ok(())
    }

    /// Price an order of `quantities`, checking lines in ascending id order.
    ///
    /// Per line: unknown id fails with `NotFound`, more units than in stock with
    /// `NoStock`, an unpublished product with `NotPublished`.
    pub fn consumer_price(&self, quantities: &OrderQuantities) -> DomainResult<ConsumerPrice> {
        let snapshot = self.repo.all()?;

        let mut lines: Vec<(Product, u32)> = Vec::with_capacity(quantities.len());
        for (&id, &requested) in quantities {
            let product = snapshot
                .iter()
                .find(|p| p.id == id)
                .ok_or_else(DomainError::not_found)?;

            if requested > product.quantity {
                return Err(DomainError::NoStock {
                    id,
                    requested,
                    available: product.quantity,
                });
            }
            if !product.is_published {
                return Err(DomainError::NotPublished(id));
            }

            lines.push((product.clone(), requested));
        }

        let total_price = pricing::price_lines(lines.iter().map(|(p, n)| (p, *n)));
        tracing::debug!(lines = lines.len(), total_price, "consumer price computed");

        Ok(ConsumerPrice {
            products: lines.into_iter().map(|(p, _)| p).collect(),
            total_price,
        })
    }
}
