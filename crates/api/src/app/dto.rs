use serde::{Deserialize, Serialize};

use stockroom_products::{ProductDraft, ProductPatch};

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /products` and `PUT /products/:id`.
#[derive(Debug, Deserialize)]
pub struct ProductRequest {
    pub name: String,
    pub quantity: i64,
    pub code_value: String,
    #[serde(default)]
    pub is_published: bool,
    pub expiration: String,
    pub price: f64,
}

impl From<ProductRequest> for ProductDraft {
    fn from(body: ProductRequest) -> Self {
        ProductDraft {
            name: body.name,
            quantity: body.quantity,
            code_value: body.code_value,
            is_published: body.is_published,
            expiration: body.expiration,
            price: body.price,
        }
    }
}

/// Body of `PATCH /products/:id`; absent fields keep their stored value.
#[derive(Debug, Default, Deserialize)]
pub struct ProductPatchRequest {
    pub name: Option<String>,
    pub quantity: Option<i64>,
    pub code_value: Option<String>,
    pub is_published: Option<bool>,
    pub expiration: Option<String>,
    pub price: Option<f64>,
}

impl From<ProductPatchRequest> for ProductPatch {
    fn from(body: ProductPatchRequest) -> Self {
        ProductPatch {
            name: body.name,
            quantity: body.quantity,
            code_value: body.code_value,
            is_published: body.is_published,
            expiration: body.expiration,
            price: body.price,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(rename = "priceGt")]
    pub price_gt: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ConsumerPriceQuery {
    pub list: Option<String>,
}

// -------------------------
// Response DTOs
// -------------------------

/// Success envelope: every 2xx body is `{"data": ...}`.
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}
