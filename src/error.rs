use axum::{http::StatusCode, response::Json};
use serde::Serialize;
use serde_json::json;
use utoipa::ToSchema;

use crate::validation::FieldError;

/// Body shape of a validation failure, as advertised in the OpenAPI doc.
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorsResponse {
    /// Every violated rule, in rule order
    pub errors: Vec<FieldError>,
}

/// Body shape of a server error, as advertised in the OpenAPI doc.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorResponse {
    /// Error message
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Validation failed")]
    Validation(Vec<FieldError>),
    /// A write addressed an id with no row behind it.
    #[error("Record not present")]
    AbsentRecord,
    #[error("Database error: {0}")]
    Database(#[from] diesel::result::Error),
    #[error("Connection error: {0}")]
    Connection(#[from] diesel::result::ConnectionError),
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match &self {
            ApiError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors })))
            }
            ApiError::AbsentRecord
            | ApiError::Database(_)
            | ApiError::Connection(_)
            | ApiError::Template(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": self.to_string() })),
            ),
        };

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn validation_errors_render_as_a_400_array() {
        let error = ApiError::Validation(vec![FieldError {
            field: "name",
            message: "name must not be empty".to_string(),
            value: None,
        }]);

        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["errors"][0]["field"], "name");
        assert_eq!(body["errors"][0]["message"], "name must not be empty");
    }

    #[tokio::test]
    async fn absent_record_is_a_server_error() {
        let response = ApiError::AbsentRecord.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Record not present");
    }
}
