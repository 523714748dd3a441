//! Domain error model.

use thiserror::Error;

use crate::id::ProductId;

/// Result type used across the repository and service layers.
pub type DomainResult<T> = Result<T, DomainError>;

/// Error taxonomy shared by every layer that touches products.
///
/// All variants are value-level failures; none of them is fatal on its own.
/// The HTTP layer maps each variant to a status code.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A product identifier was malformed or out of range.
    #[error("invalid product id: {0}")]
    InvalidId(String),

    /// A price threshold was negative or not a number.
    #[error("invalid product price: {0}")]
    InvalidPrice(String),

    /// Product fields failed validation (expiration, code format, ...).
    #[error("invalid product data: {0}")]
    InvalidData(String),

    /// Another stored product already uses this code value.
    #[error("duplicated product code value: {0}")]
    DuplicateCode(String),

    /// No stored product has the requested id.
    #[error("unable to find product")]
    NotFound,

    /// The requested quantity exceeds the available stock.
    #[error("not enough stock for product {id} (requested {requested}, available {available})")]
    NoStock {
        id: ProductId,
        requested: u32,
        available: u32,
    },

    /// The product exists but is not published for sale.
    #[error("product {0} is not published")]
    NotPublished(ProductId),

    /// Reading the backing file failed.
    #[error("unable to read products file: {0}")]
    StorageRead(String),

    /// Writing the backing file failed.
    #[error("unable to write products file: {0}")]
    StorageWrite(String),
}

impl DomainError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn invalid_price(msg: impl Into<String>) -> Self {
        Self::InvalidPrice(msg.into())
    }

    pub fn invalid_data(msg: impl Into<String>) -> Self {
        Self::InvalidData(msg.into())
    }

    pub fn duplicate_code(code: impl Into<String>) -> Self {
        Self::DuplicateCode(code.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn storage_read(msg: impl Into<String>) -> Self {
        Self::StorageRead(msg.into())
    }

    pub fn storage_write(msg: impl Into<String>) -> Self {
        Self::StorageWrite(msg.into())
    }

    /// Short machine-readable code used in error responses and logs.
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::InvalidId(_) => "invalid_id",
            DomainError::InvalidPrice(_) => "invalid_price",
            DomainError::InvalidData(_) => "invalid_data",
            DomainError::DuplicateCode(_) => "duplicated_code_value",
            DomainError::NotFound => "not_found",
            DomainError::NoStock { .. } => "no_stock",
            DomainError::NotPublished(_) => "not_published",
            DomainError::StorageRead(_) => "storage_read_error",
            DomainError::StorageWrite(_) => "storage_write_error",
        }
    }

    /// True for failures caused by the backing file rather than the caller.
    pub fn is_storage(&self) -> bool {
        matches!(self, DomainError::StorageRead(_) | DomainError::StorageWrite(_))
    }
}
