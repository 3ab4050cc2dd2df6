//! Domain-level error type.
//!
//! Errors are transport agnostic. The HTTP adapter maps them to status codes
//! and JSON bodies; nothing in here knows about Actix.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::TraceId;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// The requested resource does not exist.
    NotFound,
    /// A concurrent writer kept winning and the mutation was abandoned.
    Conflict,
    /// A backing store could not be reached.
    ServiceUnavailable,
    /// An unexpected error occurred inside the domain.
    InternalError,
}

/// Error payload shared by the domain and its adapters.
///
/// Captures the current [`TraceId`] on construction when one is in scope.
///
/// # Examples
/// ```
/// use userbase::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("user not found");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert_eq!(err.message(), "user not found");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Error {
    code: ErrorCode,
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    trace_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl Error {
    /// Create a new error, correlating it with the active trace identifier.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            trace_id: TraceId::current().map(|id| id.to_string()),
            details: None,
        }
    }

    /// Stable machine-readable error code.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Trace identifier captured when the error was built.
    #[must_use]
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Supplementary error details.
    #[must_use]
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Attach a trace identifier to the error.
    #[must_use]
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Attach structured details to the error.
    ///
    /// # Examples
    /// ```
    /// use userbase::domain::Error;
    /// use serde_json::json;
    ///
    /// let err = Error::invalid_request("bad").with_details(json!({ "field": "email" }));
    /// assert!(err.details().is_some());
    /// ```
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::Conflict`].
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Conflict, message)
    }

    /// Convenience constructor for [`ErrorCode::ServiceUnavailable`].
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServiceUnavailable, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
    #[case(Error::not_found("missing"), ErrorCode::NotFound)]
    #[case(Error::conflict("raced"), ErrorCode::Conflict)]
    #[case(Error::service_unavailable("down"), ErrorCode::ServiceUnavailable)]
    #[case(Error::internal("boom"), ErrorCode::InternalError)]
    fn constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
        assert_eq!(error.code(), expected);
    }

    #[tokio::test]
    async fn captures_trace_id_in_scope() {
        let trace_id = TraceId::generate();
        let error = TraceId::scope(trace_id, async { Error::not_found("missing") }).await;
        let expected = trace_id.to_string();
        assert_eq!(error.trace_id(), Some(expected.as_str()));
    }

    #[test]
    fn serialises_camel_case_and_omits_empty_fields() {
        let error = Error::invalid_request("bad").with_trace_id("abc");
        let value = serde_json::to_value(&error).expect("serialise error");
        assert_eq!(
            value,
            json!({ "code": "invalid_request", "message": "bad", "traceId": "abc" })
        );
    }
}
