use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use domain::common::error::DomainError;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub(crate) struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub(crate) struct ErrorDetail {
    /// Machine-readable error code (e.g. `RECORD_NOT_FOUND`).
    #[schema(value_type = String)]
    code: &'static str,
    /// Human-readable description of the error.
    message: String,
}

/// Standard API error type.
///
/// All variants produce a JSON response matching:
/// `{"error":{"code":"SCREAMING_SNAKE","message":"human-readable"}}`.
#[derive(Debug)]
pub enum ApiError {
    NotFound { code: &'static str, message: String },
    BadRequest { code: &'static str, message: String },
    Internal { message: String },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            Self::NotFound { code, message } => (StatusCode::NOT_FOUND, code, message),
            Self::BadRequest { code, message } => (StatusCode::BAD_REQUEST, code, message),
            Self::Internal { message } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", message)
            }
        };

        (
            status,
            Json(ErrorBody {
                error: ErrorDetail { code, message },
            }),
        )
            .into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match &err {
            DomainError::NotFound(_) => Self::NotFound {
                code: "RECORD_NOT_FOUND",
                message: err.to_string(),
            },
            DomainError::InvalidRecord(_) => Self::BadRequest {
                code: "VALIDATION_ERROR",
                message: err.to_string(),
            },
            DomainError::StoreFailure(_) => Self::Internal {
                message: err.to_string(),
            },
        }
    }
}
