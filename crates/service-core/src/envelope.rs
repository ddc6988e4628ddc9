//! JSON response envelope and HTTP error mapping.
//!
//! Every endpoint in both services answers with the same wrapper: successes
//! carry `{"success":true,"data":...}` and failures carry
//! `{"success":false,"error":"..."}`. Domain code stays transport agnostic;
//! [`ApiError`] is the only place where [`DomainError`] meets status codes.

use crate::error::{DomainError, ErrorCode};
use crate::trace::{TraceId, TRACE_ID_HEADER};
use actix_web::{http::StatusCode, HttpRequest, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

/// Success envelope wrapping a response payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Always `true` for success responses.
    pub success: bool,
    /// The payload produced by the operation.
    pub data: T,
}

impl<T> Envelope<T> {
    /// Wrap a payload in the success envelope.
    pub const fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Failure envelope returned by HTTP adapters.
///
/// Serialises as `{"success":false,"error":"<message>"}`. The originating
/// [`ErrorCode`] selects the status code but never appears in the body; the
/// request's trace identifier travels in the `Trace-Id` response header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ErrorEnvelope", into = "ErrorEnvelope")]
pub struct ApiError {
    code: ErrorCode,
    message: String,
    trace_id: Option<String>,
}

impl ApiError {
    /// Construct an API error from a domain failure, capturing any ambient
    /// trace identifier for the response header.
    #[must_use]
    pub fn from_domain(error: &DomainError) -> Self {
        Self {
            code: error.code(),
            message: error.message().to_owned(),
            trace_id: TraceId::current().map(|id| id.to_string()),
        }
    }

    /// Convenience constructor for a 400 validation failure.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::from_domain(&DomainError::invalid_request(message))
    }

    /// Convenience constructor for a 404 failure.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::from_domain(&DomainError::not_found(message))
    }

    /// Convenience constructor for a 502 dependency failure.
    pub fn dependency_failure(message: impl Into<String>) -> Self {
        Self::from_domain(&DomainError::dependency_failure(message))
    }

    /// Convenience constructor for a 500 internal failure.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::from_domain(&DomainError::internal(message))
    }

    /// Stable machine-readable error code.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human readable message placed in the `error` field.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Trace identifier propagated into the response header, if one was in
    /// scope when the error was constructed.
    #[must_use]
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    const fn to_status_code(&self) -> StatusCode {
        match self.code {
            ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::DependencyFailure => StatusCode::BAD_GATEWAY,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(value: DomainError) -> Self {
        Self::from_domain(&value)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.to_status_code()
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = &self.trace_id {
            builder.insert_header((TRACE_ID_HEADER, id.clone()));
        }
        if matches!(self.code, ErrorCode::InternalError) {
            error!(message = %self.message, "internal error surfaced to client");
            let mut redacted = self.clone();
            redacted.message = "Internal server error".to_owned();
            return builder.json(redacted);
        }
        builder.json(self)
    }
}

/// Convenience alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Map JSON body extraction failures onto the failure envelope so malformed
/// payloads never surface as unformatted Actix errors.
///
/// Register via `web::JsonConfig::default().error_handler(json_error_handler)`.
pub fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    _req: &HttpRequest,
) -> actix_web::Error {
    ApiError::invalid_request(err.to_string()).into()
}

/// Wire shape of the failure envelope; also registered as the OpenAPI error
/// schema for every documented endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorEnvelope {
    /// Always `false` for failure responses.
    pub success: bool,
    /// Human readable description of the failure.
    #[schema(example = "User not found")]
    pub error: String,
}

impl From<ApiError> for ErrorEnvelope {
    fn from(value: ApiError) -> Self {
        Self {
            success: false,
            error: value.message,
        }
    }
}

impl TryFrom<ErrorEnvelope> for ApiError {
    type Error = std::convert::Infallible;

    // Decoded errors lose the status class; callers only see the envelope, so
    // a generic internal code is the honest reconstruction.
    fn try_from(value: ErrorEnvelope) -> Result<Self, Self::Error> {
        Ok(Self {
            code: ErrorCode::InternalError,
            message: value.error,
            trace_id: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::{json, Value};

    #[test]
    fn success_envelope_serialises_with_success_flag() {
        let body = serde_json::to_value(Envelope::ok(vec![1, 2, 3])).expect("serialise envelope");
        assert_eq!(body, json!({ "success": true, "data": [1, 2, 3] }));
    }

    #[test]
    fn failure_envelope_serialises_success_false_and_error() {
        let err = ApiError::not_found("User not found");
        let body = serde_json::to_value(&err).expect("serialise error");
        assert_eq!(body, json!({ "success": false, "error": "User not found" }));
    }

    #[rstest]
    #[case(ApiError::invalid_request("bad"), StatusCode::BAD_REQUEST)]
    #[case(ApiError::not_found("missing"), StatusCode::NOT_FOUND)]
    #[case(ApiError::dependency_failure("down"), StatusCode::BAD_GATEWAY)]
    #[case(ApiError::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
    fn error_codes_map_to_expected_statuses(#[case] err: ApiError, #[case] expected: StatusCode) {
        assert_eq!(err.status_code(), expected);
    }

    #[test]
    fn internal_errors_are_redacted_in_the_response_body() {
        let err = ApiError::internal("connection string leaked");
        let response = err.error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = actix_web::body::to_bytes_limited(response.into_body(), 4096);
        let bytes = futures_util::future::FutureExt::now_or_never(bytes)
            .expect("body is ready")
            .expect("body within limit")
            .expect("body readable");
        let value: Value = serde_json::from_slice(&bytes).expect("error payload");
        assert_eq!(
            value.get("error").and_then(Value::as_str),
            Some("Internal server error")
        );
        assert_eq!(value.get("success").and_then(Value::as_bool), Some(false));
    }

    #[test]
    fn dependency_failures_keep_their_message() {
        let err = ApiError::dependency_failure("user directory unreachable");
        let body = serde_json::to_value(&err).expect("serialise error");
        assert_eq!(
            body.get("error").and_then(Value::as_str),
            Some("user directory unreachable")
        );
    }
}
