use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Extension, Path, Query,
    },
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};

use stockroom_core::{DomainError, ProductId};
use stockroom_products::parse_id_list;

use crate::app::dto::{self, DataResponse};
use crate::app::errors;
use crate::app::services::AppServices;
use crate::middleware::{self, TokenAuthState};

/// `/products` routes. Reads are public; writes need the `token` header.
pub fn router(auth: TokenAuthState) -> Router {
    let require_token = axum::middleware::from_fn_with_state(auth, middleware::token_auth);

    Router::new()
        .route(
            "/",
            post(create_product)
                .route_layer(require_token.clone())
                .get(list_products),
        )
        .route("/search", get(search_products))
        .route("/consumer_price", get(consumer_price))
        .route(
            "/:id",
            put(update_product)
                .patch(patch_product)
                .delete(delete_product)
                .route_layer(require_token)
                .get(get_product),
        )
}

fn parse_id(raw: &str) -> Result<ProductId, axum::response::Response> {
    raw.parse::<ProductId>()
        .map_err(errors::domain_error_to_response)
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.products.all() {
        Ok(products) => Json(DataResponse::new(products)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.products.get_by_id(id) {
        Ok(product) => Json(DataResponse::new(product)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn search_products(
    Extension(services): Extension<Arc<AppServices>>,
    query: Result<Query<dto::SearchQuery>, QueryRejection>,
) -> axum::response::Response {
    let Query(query) = match query {
        Ok(q) => q,
        Err(rejection) => return errors::query_rejection_to_response(rejection),
    };

    let threshold = match query.price_gt.as_deref().map(str::trim) {
        Some(raw) => match raw.parse::<f64>() {
            Ok(v) => v,
            Err(_) => {
                return errors::domain_error_to_response(DomainError::invalid_price(format!(
                    "{raw:?} is not a number"
                )));
            }
        },
        None => {
            return errors::domain_error_to_response(DomainError::invalid_price(
                "priceGt is required",
            ));
        }
    };

    match services.products.price_greater_than(threshold) {
        Ok(products) => Json(DataResponse::new(products)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn consumer_price(
    Extension(services): Extension<Arc<AppServices>>,
    query: Result<Query<dto::ConsumerPriceQuery>, QueryRejection>,
) -> axum::response::Response {
    let Query(query) = match query {
        Ok(q) => q,
        Err(rejection) => return errors::query_rejection_to_response(rejection),
    };

    let Some(list) = query.list else {
        return errors::domain_error_to_response(DomainError::invalid_data("list is required"));
    };

    let quantities = match parse_id_list(&list) {
        Ok(q) => q,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.products.consumer_price(&quantities) {
        Ok(price) => Json(DataResponse::new(price)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::ProductRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    match services.products.create(body.into()) {
        Ok(product) => (StatusCode::CREATED, Json(DataResponse::new(product))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<dto::ProductRequest>, JsonRejection>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    match services.products.update(id, body.into()) {
        Ok(product) => Json(DataResponse::new(product)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn patch_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<dto::ProductPatchRequest>, JsonRejection>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    match services.products.partial_update(id, body.into()) {
        Ok(product) => Json(DataResponse::new(product)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.products.delete(id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
