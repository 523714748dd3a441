//! Repository implementations of the products port.

pub mod file_backed;

pub use file_backed::FileProductRepository;
