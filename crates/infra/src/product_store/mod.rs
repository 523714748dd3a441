//! Flat-file product storage.
//!
//! The whole collection lives in one file whose extension picks the codec:
//! `.json` (array of products) or `.csv` (one product per row, no header).
//! Writes go to a sibling temporary file that is renamed over the target, so a
//! failed write never leaves a truncated file behind.

pub mod csv_codec;
pub mod in_memory;
pub mod json_codec;
pub mod r#trait;

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use stockroom_products::Product;

pub use in_memory::InMemoryProductStore;
pub use r#trait::{ProductStore, StorageError};

/// On-disk encoding of the product collection.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Csv,
}

impl FileFormat {
    pub fn from_path(path: &Path) -> Result<Self, StorageError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "json" => Ok(FileFormat::Json),
            "csv" => Ok(FileFormat::Csv),
            _ => Err(StorageError::UnsupportedFormat(ext)),
        }
    }

    fn decode(self, bytes: &[u8]) -> Result<Vec<Product>, StorageError> {
        match self {
            FileFormat::Json => json_codec::decode(bytes),
            FileFormat::Csv => csv_codec::decode(bytes),
        }
    }

    fn encode(self, products: &[Product]) -> Result<Vec<u8>, StorageError> {
        match self {
            FileFormat::Json => json_codec::encode(products),
            FileFormat::Csv => csv_codec::encode(products),
        }
    }
}

/// Product store backed by a single JSON or CSV file.
#[derive(Debug, Clone)]
pub struct FlatFileStore {
    path: PathBuf,
    format: FileFormat,
}

impl FlatFileStore {
    /// Bind to `path`; the file itself is only touched on read/write.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let format = FileFormat::from_path(&path)?;
        Ok(Self { path, format })
    }
}

impl ProductStore for FlatFileStore {
    fn read_all(&self) -> Result<Vec<Product>, StorageError> {
        let bytes = match fs::read(&self.path) {
            Ok(b) => b,
            // A store that was never written holds no products yet.
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StorageError::io(&self.path, e)),
        };
        self.format.decode(&bytes)
    }

    fn write_all(&self, products: &[Product]) -> Result<(), StorageError> {
        let bytes = self.format.encode(products)?;
        replace_file(&self.path, &bytes)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

fn replace_file(path: &Path, bytes: &[u8]) -> Result<(), StorageError> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| StorageError::io(dir, e))?;
    tmp.write_all(bytes)
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| StorageError::io(tmp.path(), e))?;
    tmp.persist(path)
        .map_err(|e| StorageError::io(path, e.error))?;
    Ok(())
}
