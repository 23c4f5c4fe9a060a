//! Per-call request descriptions.

use reqwest::Method;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::Error;

pub const SECURITY_CODE_1_HEADER: &str = "X-SECURITY-CODE-1";
pub const SECURITY_CODE_2_HEADER: &str = "X-SECURITY-CODE-2";

/// One outgoing call: endpoint relative to the versioned API root, method,
/// JSON body and extra headers that win over the client's base headers.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestSpec {
    pub endpoint: String,
    pub method: Method,
    pub body: Map<String, Value>,
    pub headers: Vec<(String, String)>,
}

impl RequestSpec {
    pub fn new(method: Method, endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            method,
            body: Map::new(),
            headers: Vec::new(),
        }
    }

    pub fn get(endpoint: impl Into<String>) -> Self {
        Self::new(Method::GET, endpoint)
    }

    pub fn post(endpoint: impl Into<String>) -> Self {
        Self::new(Method::POST, endpoint)
    }

    pub fn delete(endpoint: impl Into<String>) -> Self {
        Self::new(Method::DELETE, endpoint)
    }

    pub fn with_body(mut self, body: Map<String, Value>) -> Self {
        self.body = body;
        self
    }

    /// Serializes `payload` into the body. It must serialize to a JSON object.
    pub fn with_json<T: Serialize + ?Sized>(self, payload: &T) -> Result<Self, Error> {
        let value = serde_json::to_value(payload)
            .map_err(|e| Error::InvalidRequest(format!("payload is not serializable: {}", e)))?;
        match value {
            Value::Object(map) => Ok(self.with_body(map)),
            other => Err(Error::InvalidRequest(format!(
                "payload must be a JSON object, got {}",
                json_type_name(&other)
            ))),
        }
    }

    /// Adds a header; a later header with the same name replaces an earlier one.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn with_security_codes(self, codes: &SecurityCodes) -> Self {
        self.with_header(
            SECURITY_CODE_1_HEADER,
            codes.code_1.clone().unwrap_or_default(),
        )
        .with_header(
            SECURITY_CODE_2_HEADER,
            codes.code_2.clone().unwrap_or_default(),
        )
    }
}

/// Access codes for protected documents and attachments.
///
/// Both headers are always sent; a missing code goes out as an empty value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SecurityCodes {
    pub code_1: Option<String>,
    pub code_2: Option<String>,
}

impl SecurityCodes {
    pub fn new(code_1: impl Into<String>, code_2: impl Into<String>) -> Self {
        Self {
            code_1: Some(code_1.into()),
            code_2: Some(code_2.into()),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
