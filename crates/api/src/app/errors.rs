use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use stockroom_core::DomainError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    let status = match &err {
        DomainError::InvalidId(_) | DomainError::InvalidPrice(_) | DomainError::InvalidData(_) => {
            StatusCode::BAD_REQUEST
        }
        DomainError::NotFound => StatusCode::NOT_FOUND,
        DomainError::DuplicateCode(_) => StatusCode::CONFLICT,
        DomainError::NoStock { .. } | DomainError::NotPublished(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        DomainError::StorageRead(_) | DomainError::StorageWrite(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    if err.is_storage() {
        tracing::error!(error = %err, "request failed");
    }

    json_error(status, err.code(), err.to_string())
}

pub fn json_rejection_to_response(rejection: JsonRejection) -> axum::response::Response {
    json_error(StatusCode::BAD_REQUEST, "invalid_data", rejection.body_text())
}

pub fn query_rejection_to_response(rejection: QueryRejection) -> axum::response::Response {
    json_error(StatusCode::BAD_REQUEST, "invalid_data", rejection.body_text())
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "status": status.as_u16(),
            "code": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::ProductId;

    fn status_of(err: DomainError) -> StatusCode {
        domain_error_to_response(err).status()
    }

    #[test]
    fn domain_errors_map_to_statuses() {
        let id = ProductId::new(7).unwrap();
        assert_eq!(status_of(DomainError::invalid_id("x")), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(DomainError::invalid_price("x")), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(DomainError::invalid_data("x")), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(DomainError::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_of(DomainError::duplicate_code("A1")), StatusCode::CONFLICT);
        assert_eq!(
            status_of(DomainError::NoStock {
                id,
                requested: 5,
                available: 1
            }),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(status_of(DomainError::NotPublished(id)), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            status_of(DomainError::storage_write("disk full")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
