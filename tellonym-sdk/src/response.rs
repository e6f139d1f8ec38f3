//! Decoded response bodies and the helpers that pull out the value an
//! endpoint returns.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tellonym_common::constants::OK_TOKEN;

use crate::errors::{
    Error, RequestError, Result, UNKNOWN_ERROR_CODE, UNKNOWN_ERROR_MESSAGE,
};

/// Name of the field that signals an application-level failure.
pub const ERROR_ENVELOPE_FIELD: &str = "err";

/// Placeholder field name for endpoints that return the whole body.
pub const WHOLE_BODY: &str = "<body>";

/// A successfully decoded response body.
#[derive(Clone, Debug, PartialEq)]
pub enum Decoded {
    /// Body parsed as JSON.
    Json(Value),
    /// Body read as text.
    Text(String),
}

impl Decoded {
    /// The JSON value, if this body was decoded as JSON.
    pub fn into_json(self) -> Option<Value> {
        match self {
            Decoded::Json(value) => Some(value),
            Decoded::Text(_) => None,
        }
    }

    /// The text, if this body was read as text.
    pub fn into_text(self) -> Option<String> {
        match self {
            Decoded::Text(text) => Some(text),
            Decoded::Json(_) => None,
        }
    }

    /// The application failure carried by this body, if any.
    ///
    /// Only JSON bodies are inspected. A present, non-null `err` field is a
    /// failure; its `msg` and `code` fall back to `"Unknown Error"` and `"??"`.
    pub fn error_envelope(&self) -> Option<RequestError> {
        let Decoded::Json(value) = self else {
            return None;
        };
        let err = value.get(ERROR_ENVELOPE_FIELD).filter(|err| !err.is_null())?;

        let message = match err.get("msg") {
            Some(Value::String(msg)) => msg.clone(),
            Some(Value::Null) | None => UNKNOWN_ERROR_MESSAGE.to_string(),
            Some(other) => other.to_string(),
        };
        let code = match err.get("code") {
            Some(Value::String(code)) => code.clone(),
            Some(Value::Null) | None => UNKNOWN_ERROR_CODE.to_string(),
            Some(other) => other.to_string(),
        };

        Some(RequestError::Application { message, code })
    }
}

/// Take `field` out of `value` and deserialize it.
///
/// An absent or null field is a [`Error::MissingField`] labelled with
/// `operation`; a field of the wrong shape is a JSON decode failure.
pub fn unwrap_field<T: DeserializeOwned>(
    mut value: Value,
    field: &'static str,
    operation: &'static str,
) -> Result<T> {
    let inner = value
        .get_mut(field)
        .map(Value::take)
        .filter(|inner| !inner.is_null())
        .ok_or(Error::MissingField { operation, field })?;

    serde_json::from_value(inner).map_err(|e| RequestError::json_decode(e).into())
}

/// Deserialize the whole body. A null body is a [`Error::MissingField`].
pub fn unwrap_whole<T: DeserializeOwned>(value: Value, operation: &'static str) -> Result<T> {
    if value.is_null() {
        return Err(Error::MissingField {
            operation,
            field: WHOLE_BODY,
        });
    }

    serde_json::from_value(value).map_err(|e| RequestError::json_decode(e).into())
}

/// Compare a text body against the literal success token `"ok"` (quotes
/// included). An empty body is a [`Error::MissingField`].
pub fn is_ok_token(text: &str, operation: &'static str) -> Result<bool> {
    if text.is_empty() {
        return Err(Error::MissingField {
            operation,
            field: WHOLE_BODY,
        });
    }

    Ok(text == OK_TOKEN)
}
