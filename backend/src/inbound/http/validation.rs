//! Shared validation helpers for inbound HTTP adapters.

use actix_web::{HttpRequest, error::JsonPayloadError, web};
use serde_json::json;
use tracing::debug;

use crate::domain::{Error, RecordId, UserId, UserValidationError};

/// Validation error codes reported in `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    MissingField,
    InvalidUuid,
    InvalidJson,
    EmptyValue,
    InvalidEmail,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::InvalidUuid => "invalid_uuid",
            Self::InvalidJson => "invalid_json",
            Self::EmptyValue => "empty_value",
            Self::InvalidEmail => "invalid_email",
        }
    }
}

fn field_error(field: &str, code: ValidationCode, message: String) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field,
        "code": code.as_str(),
    }))
}

pub(crate) fn missing_field_error(field: &str) -> Error {
    field_error(
        field,
        ValidationCode::MissingField,
        format!("missing required field: {field}"),
    )
}

pub(crate) fn invalid_uuid_error(field: &str, value: &str) -> Error {
    Error::invalid_request(format!("{field} must be a valid UUID")).with_details(json!({
        "field": field,
        "value": value,
        "code": ValidationCode::InvalidUuid.as_str(),
    }))
}

/// Map a domain validation failure onto the field that caused it.
pub(crate) fn user_field_error(field: &str, error: &UserValidationError) -> Error {
    let code = match error {
        UserValidationError::EmptyId | UserValidationError::InvalidId => {
            ValidationCode::InvalidUuid
        }
        UserValidationError::EmptyEmail | UserValidationError::EmptyName => {
            ValidationCode::EmptyValue
        }
        UserValidationError::InvalidEmail => ValidationCode::InvalidEmail,
    };
    field_error(field, code, format!("{field}: {error}"))
}

pub(crate) fn require<T>(value: Option<T>, field: &str) -> Result<T, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

pub(crate) fn parse_user_id(value: &str, field: &str) -> Result<UserId, Error> {
    UserId::new(value).map_err(|_| invalid_uuid_error(field, value))
}

pub(crate) fn parse_optional_user_id(
    value: Option<&str>,
    field: &str,
) -> Result<Option<UserId>, Error> {
    value.map(|raw| parse_user_id(raw, field)).transpose()
}

pub(crate) fn parse_record_id(value: &str, field: &str) -> Result<RecordId, Error> {
    uuid::Uuid::parse_str(value)
        .map(RecordId::from)
        .map_err(|_| invalid_uuid_error(field, value))
}

fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, path = req.path(), "rejected request body");
    field_error(
        "body",
        ValidationCode::InvalidJson,
        format!("invalid JSON body: {err}"),
    )
    .into()
}

/// JSON extractor configuration mapping body errors onto `invalid_request`.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use userbase::inbound::http::validation::json_config;
///
/// let _app = App::new().app_data(json_config());
/// ```
#[must_use]
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}
