//! Error types for the API client.

use std::fmt;

/// The closed set of failure kinds the API reports through HTTP status codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    /// HTTP 400: a parameter is missing or the endpoint is invalid.
    Validation,
    /// HTTP 403: the API key was rejected.
    Authentication,
    /// HTTP 405: the HTTP method is not allowed on the resource.
    MethodNotAllowed,
    /// HTTP 415: the request content type was refused.
    UnsupportedContentType,
    /// HTTP 503: the server failed while handling the request.
    Server,
    /// Any other non-success status.
    GenericRest,
}

impl ApiErrorKind {
    /// Maps a non-success status code to its error kind.
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => Self::Validation,
            403 => Self::Authentication,
            405 => Self::MethodNotAllowed,
            415 => Self::UnsupportedContentType,
            503 => Self::Server,
            _ => Self::GenericRest,
        }
    }

    /// Message used when the response body carries no detail.
    ///
    /// `GenericRest` has none: its message is always the encoded body.
    pub fn default_message(&self) -> Option<&'static str> {
        match self {
            Self::Validation => Some("A parameter is missing or invalid endpoint"),
            Self::Authentication => Some("Failed to authenticate while accessing resource"),
            Self::MethodNotAllowed => Some("HTTP method used is not allowed to access resource"),
            Self::UnsupportedContentType => Some("Request content-type is not valid."),
            Self::Server => Some("A server error occurred while accessing resource"),
            Self::GenericRest => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "ValidationError",
            Self::Authentication => "AuthenticationError",
            Self::MethodNotAllowed => "MethodNotAllowedError",
            Self::UnsupportedContentType => "UnsupportedContentTypeError",
            Self::Server => "ServerError",
            Self::GenericRest => "GenericRestError",
        }
    }
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified non-success response.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiError {
    pub kind: ApiErrorKind,
    /// HTTP status code of the response.
    pub status: u16,
    /// Detail from the response body, or the kind's default message.
    pub message: String,
}

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The client configuration was rejected at construction.
    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),
    /// The request could not be composed (bad payload, header or endpoint).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    /// The network call itself failed (DNS, connection, timeout, body read).
    #[error("Request failed: {0}")]
    Transport(#[source] reqwest::Error),
    /// The API answered with a non-success status.
    #[error("{} (HTTP {}): {}", .0.kind, .0.status, .0.message)]
    Api(#[from] ApiError),
}

impl Error {
    /// The HTTP status code, when the API produced a response.
    pub fn status(&self) -> Option<u16> {
        self.api_error().map(|e| e.status)
    }

    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }

    /// True when the configured timeout elapsed before a response arrived.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }
}
