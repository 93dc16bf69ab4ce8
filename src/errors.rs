use std::fmt;

use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse,
};
use derive_more::Display;
use validator::ValidationErrors;

use crate::entities::contact::{ContactResponse, FieldErrors};

/// Every way the contact pipeline can stop short of accepting a request.
///
/// Client-facing messages are fixed strings; the detail carried by
/// `InternalError` is for the log only.
#[derive(Debug)]
pub enum ContactError {
    RateLimited,
    MalformedRequest,
    ValidationError(FieldErrors),
    MissingRequiredFields(Vec<String>),
    InternalError(String),
}

impl ContactError {
    pub fn client_message(&self) -> &'static str {
        match self {
            ContactError::RateLimited => "Too many requests. Please try again later.",
            ContactError::MalformedRequest => "Invalid request format. Please check your submission.",
            ContactError::ValidationError(_) => "Please correct the errors in your submission.",
            ContactError::MissingRequiredFields(_) => {
                "Missing required fields. Please complete all required fields."
            }
            ContactError::InternalError(_) => "An unexpected error occurred. Please try again later.",
        }
    }
}

impl fmt::Display for ContactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactError::RateLimited => write!(f, "Rate limit exceeded"),
            ContactError::MalformedRequest => write!(f, "Malformed request body"),
            ContactError::ValidationError(errors) => {
                let fields = errors.keys().cloned().collect::<Vec<_>>().join(", ");
                write!(f, "validation error: {}", fields)
            }
            ContactError::MissingRequiredFields(fields) => {
                write!(f, "Missing required fields: {}", fields.join(", "))
            }
            ContactError::InternalError(msg) => write!(f, "Internal server error: {}", msg),
        }
    }
}

impl ResponseError for ContactError {
    fn error_response(&self) -> HttpResponse {
        let errors = match self {
            ContactError::ValidationError(errors) => Some(errors.clone()),
            _ => None,
        };

        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(ContactResponse::rejected(self.client_message(), errors))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ContactError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ContactError::MalformedRequest
            | ContactError::ValidationError(_)
            | ContactError::MissingRequiredFields(_) => StatusCode::BAD_REQUEST,
            ContactError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationErrors> for ContactError {
    fn from(errors: ValidationErrors) -> Self {
        let field_errors = errors
            .field_errors()
            .into_iter()
            .map(|(field, errors)| {
                let messages = errors
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|s| s.to_string())
                            .unwrap_or_else(|| "Invalid value".to_string())
                    })
                    .collect();
                (field.to_string(), messages)
            })
            .collect();

        ContactError::ValidationError(field_errors)
    }
}

/// Errors from the content endpoints.
#[derive(Debug, Display)]
pub enum AppError {
    #[display("Not found: {_0}")]
    NotFound(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(ContactResponse::rejected(self.to_string(), None))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

/// Failure reported by a notification collaborator.
#[derive(Debug, Display)]
pub enum NotifyError {
    #[display("Notification provider rejected the message: {_0}")]
    Rejected(String),

    #[display("Notification provider unavailable: {_0}")]
    Unavailable(String),

    #[display("Notification timed out after {_0:?}")]
    TimedOut(std::time::Duration),
}

impl std::error::Error for NotifyError {}
