//! Raw HTTP responses and their success/failure split.

use serde_json::Value;

use crate::{classify::classify, Error};

/// Status and body of one response, decoded as JSON when possible.
#[derive(Clone, Debug, PartialEq)]
pub struct ResponseEnvelope {
    pub status: u16,
    pub raw_body: String,
    pub decoded_body: Option<Value>,
}

impl ResponseEnvelope {
    pub fn new(status: u16, raw_body: String) -> Self {
        let decoded_body = serde_json::from_str::<Value>(&raw_body).ok();
        Self {
            status,
            raw_body,
            decoded_body,
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Returns the untouched body for 2xx, or the classified API error.
    pub fn into_result(self) -> Result<String, Error> {
        if self.is_success() {
            return Ok(self.raw_body);
        }
        let err = classify(self.status, self.decoded_body.as_ref(), &self.raw_body);
        tracing::error!(
            "Request failed with status {} ({}): {}",
            err.status,
            err.kind,
            truncate(&err.message)
        );
        Err(Error::Api(err))
    }
}

fn truncate(text: &str) -> String {
    const MAX: usize = 2000;
    match text.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...[truncated]", &text[..idx]),
        None => text.to_string(),
    }
}
