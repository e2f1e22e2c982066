//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into the uniform `{"detail": ...}`
//! envelope. Conflicts are client errors distinguished by their message,
//! so they share 400 with validation failures.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Message returned in place of internal failure details.
pub const INTERNAL_ERROR_DETAIL: &str = "Internal server error.";
/// Message returned in place of store outage details.
pub const UNAVAILABLE_DETAIL: &str = "Service temporarily unavailable.";
/// Message returned when a route exists but not for the request method.
pub const METHOD_NOT_ALLOWED_DETAIL: &str = "Method not allowed.";

/// Uniform body of every error and acknowledgement response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Detail {
    /// Human-readable message.
    #[schema(example = "Event not found.")]
    pub detail: String,
}

impl Detail {
    /// Wrap a message.
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest | ErrorCode::Conflict => StatusCode::BAD_REQUEST,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn public_detail(error: &Error) -> Detail {
    match error.code() {
        ErrorCode::InternalError => {
            error!(message = error.message(), "internal error");
            Detail::new(INTERNAL_ERROR_DETAIL)
        }
        ErrorCode::ServiceUnavailable => {
            error!(message = error.message(), "backing store unavailable");
            Detail::new(UNAVAILABLE_DETAIL)
        }
        _ => Detail::new(error.message()),
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        builder.json(public_detail(self))
    }
}

/// Fallback handler for resources hit with an unsupported method.
pub async fn method_not_allowed() -> ApiResult<HttpResponse> {
    Err(Error::method_not_allowed(METHOD_NOT_ALLOWED_DETAIL))
}

#[cfg(test)]
mod tests;
