//! Maps failed responses onto [`ApiError`] kinds.

use serde_json::Value;

use crate::errors::{ApiError, ApiErrorKind};

/// Extracts the API's own error detail from a decoded body.
///
/// Only bodies of the form `{"success": false, "detail": ...}` carry one;
/// everything else yields an empty string so the kind's default applies.
pub fn error_message(decoded: Option<&Value>) -> String {
    let Some(Value::Object(body)) = decoded else {
        return String::new();
    };
    let (Some(success), Some(detail)) = (body.get("success"), body.get("detail")) else {
        return String::new();
    };
    if success.is_null() || detail.is_null() || is_truthy(success) {
        return String::new();
    }
    match detail {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Builds the error for a non-success response.
///
/// A detail of `""` or `"0"` counts as missing and the kind's default is used.
/// `raw` is only consulted for unmapped statuses whose body did not decode.
pub fn classify(status: u16, decoded: Option<&Value>, raw: &str) -> ApiError {
    let kind = ApiErrorKind::from_status(status);
    let message = match kind.default_message() {
        Some(default) => {
            let detail = error_message(decoded);
            if !is_truthy(&Value::String(detail.clone())) {
                default.to_string()
            } else {
                detail
            }
        }
        None => encode_body(decoded, raw),
    };
    ApiError {
        kind,
        status,
        message,
    }
}

/// The wire format's flags are loosely typed: `0`, `"0"`, `""` and `[]`
/// mean false just like `false` does.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !(s.is_empty() || s == "0"),
        Value::Array(a) => !a.is_empty(),
        Value::Object(_) => true,
    }
}

/// Message for unmapped statuses.
///
/// Departs from the older PHP client on purpose in two cases: a non-JSON
/// body is kept as a JSON string literal instead of `null`, and an empty
/// object stays `{}` instead of becoming `[]`.
fn encode_body(decoded: Option<&Value>, raw: &str) -> String {
    match decoded {
        Some(value) => value.to_string(),
        None if raw.trim().is_empty() => "[]".to_string(),
        None => Value::String(raw.to_string()).to_string(),
    }
}
