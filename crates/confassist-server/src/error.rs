//! Mapping of service errors to HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

use confassist_core::errors::{AssistErrorCode, ServiceError};
use confassist_core::models::api::ErrorResponse;

/// A [`ServiceError`] on its way to the client.
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        Self(e)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            ServiceError::FeatureDisabled { .. } | ServiceError::DoubleBlindRequired => {
                StatusCode::FORBIDDEN
            }
            ServiceError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = if status == StatusCode::INTERNAL_SERVER_ERROR {
            // Details stay in the server log.
            tracing::error!(error = %self.0.coded_string(), "request failed");
            ErrorResponse {
                error: "Internal server error".to_string(),
                detail: "An unexpected error occurred".to_string(),
                feature: None,
            }
        } else {
            ErrorResponse {
                error: self.0.to_string(),
                detail: self.0.coded_string(),
                feature: self.0.feature().map(|f| f.as_str().to_string()),
            }
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use confassist_core::models::AiFeature;

    #[test]
    fn statuses() {
        let disabled = ApiError(ServiceError::FeatureDisabled {
            feature: AiFeature::AuthorPolish,
        });
        assert_eq!(disabled.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            ApiError(ServiceError::DoubleBlindRequired).status(),
            StatusCode::FORBIDDEN
        );
        let invalid = ApiError(ServiceError::Validation {
            field: "text".to_string(),
            message: "too long".to_string(),
        });
        assert_eq!(invalid.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let internal = ApiError(ServiceError::Internal {
            message: "boom".to_string(),
        });
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
