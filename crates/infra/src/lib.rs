//! Infrastructure layer: flat-file persistence for the product collection.

pub mod product_store;
pub mod repository;


pub use product_store::{FileFormat, FlatFileStore, InMemoryProductStore, ProductStore, StorageError};
pub use repository::FileProductRepository;
