use std::sync::Arc;

use stockroom_core::DomainResult;
use stockroom_infra::{FileProductRepository, FlatFileStore};
use stockroom_products::{ProductRepository, ProductService};

/// Shared handle to whatever repository backs the running service.
pub type SharedRepository = Arc<dyn ProductRepository>;

/// Services injected into every handler through an `Extension`.
#[derive(Clone)]
pub struct AppServices {
    pub products: ProductService<SharedRepository>,
}

impl AppServices {
    pub fn new(repository: SharedRepository) -> Self {
        Self {
            products: ProductService::new(repository),
        }
    }
}

/// Open the flat file named by `path` and load it into a repository.
pub fn build_services(path: &std::path::Path) -> DomainResult<AppServices> {
    let store = FlatFileStore::new(path).map_err(|e| e.into_read_error())?;
    let repository = FileProductRepository::open(store)?;
    Ok(AppServices::new(Arc::new(repository)))
}
