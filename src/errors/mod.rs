use actix_web::{HttpResponse, ResponseError};
use std::fmt;

use crate::constants::{CODE_INTERNAL_ERROR, CODE_INVALID_ARGUMENT, CODE_VALIDATION_FAILED};
use crate::models::ErrorResponse;
use crate::pagination::PaginationError;

#[derive(Debug)]
pub enum ApiError {
    BadRequest { code: String, message: String },
    NotFound { code: String, message: String },
    Conflict { code: String, message: String },
    InternalServerError { code: String, message: String },
    ValidationError { code: String, errors: Vec<String> },
}

impl ApiError {
    pub fn bad_request(code: &str, message: impl Into<String>) -> Self {
        ApiError::BadRequest {
            code: code.to_string(),
            message: message.into(),
        }
    }

    pub fn not_found(code: &str, message: impl Into<String>) -> Self {
        ApiError::NotFound {
            code: code.to_string(),
            message: message.into(),
        }
    }

    pub fn conflict(code: &str, message: impl Into<String>) -> Self {
        ApiError::Conflict {
            code: code.to_string(),
            message: message.into(),
        }
    }

    pub fn validation(errors: Vec<String>) -> Self {
        ApiError::ValidationError {
            code: CODE_VALIDATION_FAILED.to_string(),
            errors,
        }
    }

    /// Machine-readable error code.
    pub fn code(&self) -> &str {
        match self {
            ApiError::BadRequest { code, .. }
            | ApiError::NotFound { code, .. }
            | ApiError::Conflict { code, .. }
            | ApiError::InternalServerError { code, .. }
            | ApiError::ValidationError { code, .. } => code,
        }
    }

    fn body(&self) -> ErrorResponse {
        let (message, errors) = match self {
            ApiError::BadRequest { message, .. }
            | ApiError::NotFound { message, .. }
            | ApiError::Conflict { message, .. }
            | ApiError::InternalServerError { message, .. } => (message.clone(), None),
            ApiError::ValidationError { errors, .. } => {
                ("Validation failed".to_string(), Some(errors.clone()))
            }
        };

        ErrorResponse {
            success: false,
            code: self.code().to_string(),
            message,
            errors,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest { code, message } => {
                write!(f, "Bad Request [{}]: {}", code, message)
            }
            ApiError::NotFound { code, message } => {
                write!(f, "Not Found [{}]: {}", code, message)
            }
            ApiError::Conflict { code, message } => {
                write!(f, "Conflict [{}]: {}", code, message)
            }
            ApiError::InternalServerError { code, message } => {
                write!(f, "Internal Server Error [{}]: {}", code, message)
            }
            ApiError::ValidationError { code, errors } => {
                write!(f, "Validation Error [{}]: {:?}", code, errors)
            }
        }
    }
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        let body = self.body();
        match self {
            ApiError::BadRequest { .. } | ApiError::ValidationError { .. } => {
                HttpResponse::BadRequest().json(body)
            }
            ApiError::NotFound { .. } => HttpResponse::NotFound().json(body),
            ApiError::Conflict { .. } => HttpResponse::Conflict().json(body),
            ApiError::InternalServerError { .. } => {
                HttpResponse::InternalServerError().json(body)
            }
        }
    }
}

impl From<PaginationError> for ApiError {
    fn from(err: PaginationError) -> Self {
        ApiError::bad_request(CODE_INVALID_ARGUMENT, err.to_string())
    }
}

impl From<bcrypt::BcryptError> for ApiError {
    fn from(err: bcrypt::BcryptError) -> Self {
        ApiError::InternalServerError {
            code: CODE_INTERNAL_ERROR.to_string(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_pagination_error_maps_to_bad_request() {
        let err: ApiError = PaginationError::InvalidArgument("page_size".to_string()).into();
        assert_eq!(err.code(), CODE_INVALID_ARGUMENT);
        assert_eq!(err.error_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::not_found("USER_NOT_FOUND", "User not found")
                .error_response()
                .status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::conflict("EMAIL_EXISTS", "Email already registered")
                .error_response()
                .status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::validation(vec!["Invalid email.".to_string()])
                .error_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_validation_body_lists_errors() {
        let body = ApiError::validation(vec!["Name is required.".to_string()]).body();
        assert!(!body.success);
        assert_eq!(body.code, CODE_VALIDATION_FAILED);
        assert_eq!(body.errors, Some(vec!["Name is required.".to_string()]));
    }
}
