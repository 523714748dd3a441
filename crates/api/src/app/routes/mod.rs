use axum::{routing::get, Router};

use crate::middleware::TokenAuthState;

pub mod products;
pub mod system;

/// Router for every endpoint that touches the product catalog.
pub fn router(auth: TokenAuthState) -> Router {
    Router::new()
        .route("/ping", get(system::ping))
        .nest("/products", products::router(auth))
}
