use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use stockroom_core::DomainError;
use stockroom_products::Product;

/// Whole-collection persistence for products.
///
/// A store has no notion of individual records: every read returns the full
/// collection and every write replaces it.
pub trait ProductStore: Send + Sync {
    fn read_all(&self) -> Result<Vec<Product>, StorageError>;

    fn write_all(&self, products: &[Product]) -> Result<(), StorageError>;

    /// Human-readable location for logs (a path, or `memory`).
    fn location(&self) -> String;
}

impl<S> ProductStore for Arc<S>
where
    S: ProductStore + ?Sized,
{
    fn read_all(&self) -> Result<Vec<Product>, StorageError> {
        (**self).read_all()
    }

    fn write_all(&self, products: &[Product]) -> Result<(), StorageError> {
        (**self).write_all(products)
    }

    fn location(&self) -> String {
        (**self).location()
    }
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("file format {0:?} not supported (expected .json or .csv)")]
    UnsupportedFormat(String),

    #[error("io error on {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv: {0}")]
    Csv(#[from] csv::Error),

    /// Store deliberately refusing work (in-memory fault injection).
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StorageError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn into_read_error(self) -> DomainError {
        DomainError::storage_read(self.to_string())
    }

    pub fn into_write_error(self) -> DomainError {
        DomainError::storage_write(self.to_string())
    }
}
