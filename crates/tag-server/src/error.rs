use application::TagServiceError;
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use domain::DomainError;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};

/// Errors as the HTTP layer reports them
#[derive(Debug, Error, PartialEq)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{message}")]
    Unauthorized { message: String, realm: String },

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Internal(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Unauthorized { .. } => "UNAUTHORIZED",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Conflict(_) => "CONFLICT",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<TagServiceError> for ApiError {
    fn from(err: TagServiceError) -> Self {
        match err {
            TagServiceError::Validation(msg) => Self::BadRequest(msg),
            TagServiceError::NotFound => Self::NotFound(err.to_string()),
            TagServiceError::Conflict(msg) => Self::Conflict(msg),
            // Store failures on lookups and writes are reported as bad requests
            TagServiceError::Store(msg) => Self::BadRequest(msg),
            TagServiceError::RemoveFailed(_) => Self::Internal(err.to_string()),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        TagServiceError::from(err).into()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(status = %status, error = %self, "request failed");
        } else {
            debug!(status = %status, error = %self, "request rejected");
        }

        let www_authenticate = match &self {
            Self::Unauthorized { realm, .. } => {
                HeaderValue::from_str(&format!("Basic realm=\"{realm}\"")).ok()
            }
            _ => None,
        };

        let body = ErrorBody {
            code: self.code(),
            message: self.to_string(),
        };
        let mut response = (status, Json(body)).into_response();

        if let Some(value) = www_authenticate {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, value);
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_mapping() {
        let cases = [
            (TagServiceError::Validation("skip".into()), StatusCode::BAD_REQUEST),
            (TagServiceError::NotFound, StatusCode::NOT_FOUND),
            (TagServiceError::Conflict("ABC".into()), StatusCode::CONFLICT),
            (TagServiceError::Store("down".into()), StatusCode::BAD_REQUEST),
            (
                TagServiceError::RemoveFailed("down".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(ApiError::from(err.clone()).status(), expected, "{err:?}");
        }
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(
            ApiError::from(TagServiceError::NotFound),
            ApiError::NotFound("Tag not found".to_string())
        );
    }

    #[test]
    fn test_remove_failure_hides_store_detail() {
        let err = ApiError::from(TagServiceError::RemoveFailed("disk on fire".into()));
        assert_eq!(err.to_string(), "Error removing tag");
    }

    #[test]
    fn test_unauthorized_sets_challenge_header() {
        let response = ApiError::Unauthorized {
            message: "Missing Authorization header".into(),
            realm: "tags".into(),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Basic realm=\"tags\""
        );
    }
}
