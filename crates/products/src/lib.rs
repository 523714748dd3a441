//! Products domain module.
//!
//! Business rules for the product catalog: field validation, expiration dates,
//! consumer pricing and the repository port. No IO, no HTTP, no storage.

pub mod expiration;
pub mod pricing;
pub mod product;
pub mod repository;
pub mod service;

pub use expiration::{EXPIRATION_FORMAT, Expiration};
pub use pricing::{ConsumerPrice, OrderQuantities, PriceTier, parse_id_list};
pub use product::{Product, ProductData, ProductDraft, ProductPatch, validate_code_value};
pub use repository::ProductRepository;
pub use service::ProductService;
