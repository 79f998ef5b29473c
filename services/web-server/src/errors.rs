use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use shared::{
    errors::{ErrorCategory, ServiceError},
    FlipError,
};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Flip error: {0}")]
    Flip(#[from] FlipError),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    fn into_service_error(self) -> ServiceError {
        match self {
            AppError::Flip(e) => e.into(),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {:?}", e);
                ServiceError::internal("Internal server error")
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error = self.into_service_error();

        let status = StatusCode::from_u16(error.category.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        match error.category {
            ErrorCategory::Validation => tracing::warn!(
                error_code = %error.code,
                error_message = %error.message,
                "Request rejected"
            ),
            ErrorCategory::Internal => tracing::error!(
                error_code = %error.code,
                error_message = %error.message,
                "Request failed"
            ),
        }

        metrics::counter!(
            "errors_total",
            "category" => error.category.as_str(),
            "code" => error.code.clone()
        )
        .increment(1);

        let body = Json(json!({
            "error": {
                "code": error.code,
                "message": error.message,
                "category": error.category,
            }
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
