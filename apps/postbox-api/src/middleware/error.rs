//! Error handling - maps failures onto the API's 404 and 422 bodies.

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode, web};
use postbox_core::error::RepoError;
use postbox_shared::{NotFoundResponse, ValidationErrorDetail, ValidationErrorResponse};
use serde_json::error::Category;
use std::fmt;

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    NotFound(i64),
    Validation(Vec<ValidationErrorDetail>),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(id) => write!(f, "Item with id: {} was not found", id),
            AppError::Validation(errors) => write!(f, "Validation errors: {:?}", errors),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut res = HttpResponse::build(self.status_code());
        match self {
            AppError::NotFound(_) => res.json(NotFoundResponse {
                detail: self.to_string(),
            }),
            AppError::Validation(errors) => {
                tracing::debug!(?errors, "Rejected request input");
                res.json(ValidationErrorResponse {
                    detail: errors.clone(),
                })
            }
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound { id } => AppError::NotFound(id),
        }
    }
}

impl AppError {
    /// Turn a body that is not valid JSON into a 422. An empty body is
    /// reported as missing.
    pub fn from_json_error(err: &serde_json::Error) -> Self {
        let empty = err.classify() == Category::Eof && err.line() == 1 && err.column() == 0;
        let detail = if empty {
            body_error("Field required", "missing")
        } else {
            body_error(err.to_string(), "json_invalid")
        };

        AppError::Validation(vec![detail])
    }

    /// Turn a body extractor failure into a 422.
    pub fn from_payload_error(err: &JsonPayloadError) -> Self {
        let detail = match err {
            JsonPayloadError::Deserialize(e) => return Self::from_json_error(e),
            JsonPayloadError::ContentType => body_error(
                "Input should be a valid dictionary or object to extract fields from",
                "model_attributes_type",
            ),
            other => body_error(other.to_string(), "json_invalid"),
        };

        AppError::Validation(vec![detail])
    }
}

fn body_error(msg: impl Into<String>, kind: &str) -> ValidationErrorDetail {
    ValidationErrorDetail::new(vec!["body".to_string()], msg, kind)
}

/// JSON body extractor config.
///
/// Bodies without a content type are parsed as JSON; every failure is a 422.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
            AppError::from_payload_error(&err).into()
        })
}

/// Path extractor config that reports a non-integer id as 422.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err: PathError, _req: &HttpRequest| {
        AppError::Validation(vec![ValidationErrorDetail::new(
            vec!["path".to_string(), "id".to_string()],
            format!("Input should be a valid integer: {}", err),
            "int_parsing",
        )])
        .into()
    })
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn validation_details(err: AppError) -> Vec<ValidationErrorDetail> {
        match err {
            AppError::Validation(details) => details,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_body_is_missing() {
        let err = serde_json::from_str::<Value>("").unwrap_err();
        let details = validation_details(AppError::from_json_error(&err));
        assert_eq!(details[0].loc, vec!["body"]);
        assert_eq!(details[0].kind, "missing");
    }

    #[test]
    fn test_malformed_json_is_json_invalid() {
        let err = serde_json::from_str::<Value>(r#"{"title": "#).unwrap_err();
        let details = validation_details(AppError::from_json_error(&err));
        assert_eq!(details[0].kind, "json_invalid");
    }

    #[test]
    fn test_wrong_content_type_is_unprocessable() {
        let err = AppError::from_payload_error(&JsonPayloadError::ContentType);
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(validation_details(err)[0].kind, "model_attributes_type");
    }

    #[test]
    fn test_not_found_status_and_message() {
        let err = AppError::from(RepoError::NotFound { id: 12 });
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Item with id: 12 was not found");
    }
}
