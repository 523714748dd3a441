use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, Entity, ProductId};

use crate::expiration::Expiration;

/// Entity: a stored product.
///
/// Only the repository assigns `id`. Every other field is validated before it
/// reaches storage (see [`ProductDraft::validate`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub quantity: u32,
    pub code_value: String,
    pub is_published: bool,
    pub expiration: Expiration,
    pub price: f64,
}

impl Product {
    /// Whether the product can still be sold today (local date).
    pub fn is_expiration_valid(&self) -> bool {
        self.expiration.is_valid_now()
    }

    /// Strip the identity, e.g. to run a merged record back through validation.
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            quantity: i64::from(self.quantity),
            code_value: self.code_value.clone(),
            is_published: self.is_published,
            expiration: self.expiration.to_canonical(),
            price: self.price,
        }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Validated product fields, not yet stored.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductData {
    pub name: String,
    pub quantity: u32,
    pub code_value: String,
    pub is_published: bool,
    pub expiration: Expiration,
    pub price: f64,
}

impl ProductData {
    pub fn with_id(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            quantity: self.quantity,
            code_value: self.code_value,
            is_published: self.is_published,
            expiration: self.expiration,
            price: self.price,
        }
    }
}

/// Raw product fields as supplied by a caller.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub quantity: i64,
    pub code_value: String,
    pub is_published: bool,
    pub expiration: String,
    pub price: f64,
}

impl ProductDraft {
    /// Check every field and canonicalize the expiration date.
    ///
    /// `today` is the reference date for the expiration check.
    pub fn validate(self, today: NaiveDate) -> DomainResult<ProductData> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DomainError::invalid_data("name cannot be empty"));
        }

        if self.quantity < 1 {
            return Err(DomainError::invalid_data("quantity must be at least 1"));
        }
        let quantity = u32::try_from(self.quantity)
            .map_err(|_| DomainError::invalid_data("quantity is too large"))?;

        validate_code_value(&self.code_value)?;

        if !self.price.is_finite() || self.price < 0.0 {
            return Err(DomainError::invalid_data("price must be a non-negative number"));
        }

        let expiration = Expiration::parse(&self.expiration)?;
        if !expiration.is_valid_on(today) {
            return Err(DomainError::invalid_data(format!(
                "expiration {expiration} is in the past"
            )));
        }

        Ok(ProductData {
            name: name.to_string(),
            quantity,
            code_value: self.code_value,
            is_published: self.is_published,
            expiration,
            price: self.price,
        })
    }
}

/// Code values are non-empty, ASCII alphanumeric and contain no lowercase letters.
pub fn validate_code_value(code: &str) -> DomainResult<()> {
    if code.is_empty() {
        return Err(DomainError::invalid_data("code_value cannot be empty"));
    }
    if !code.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()) {
        return Err(DomainError::invalid_data(format!(
            "code_value {code:?} must be uppercase alphanumeric"
        )));
    }
    Ok(())
}

/// Field-level patch; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub quantity: Option<i64>,
    pub code_value: Option<String>,
    pub is_published: Option<bool>,
    pub expiration: Option<String>,
    pub price: Option<f64>,
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Merge this patch over `current`, producing a draft for full validation.
    pub fn merge_into(&self, current: &Product) -> ProductDraft {
        let base = current.to_draft();
        ProductDraft {
            name: self.name.clone().unwrap_or(base.name),
            quantity: self.quantity.unwrap_or(base.quantity),
            code_value: self.code_value.clone().unwrap_or(base.code_value),
            is_published: self.is_published.unwrap_or(base.is_published),
            expiration: self.expiration.clone().unwrap_or(base.expiration),
            price: self.price.unwrap_or(base.price),
        }
    }
}
