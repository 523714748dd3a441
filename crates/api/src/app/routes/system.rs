use axum::{http::StatusCode, Json};

use crate::app::dto::DataResponse;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn ping() -> Json<DataResponse<&'static str>> {
    Json(DataResponse::new("pong"))
}
