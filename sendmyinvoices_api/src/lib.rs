//! Async client for the SendMyInvoices document API.
//!
//! [`Client`] sends one request per call and returns the raw response body.
//! Non-success statuses are classified into an [`ApiError`] with a fixed
//! [`ApiErrorKind`] per status code.

mod classify;
mod client;
mod config;
mod errors;
mod request;
mod response;
pub mod types;

pub use self::classify::{classify, error_message};
pub use self::client::{Client, API_KEY_HEADER, LANG_CODE_HEADER};
pub use self::config::{
    ClientConfig, ClientConfigBuilder, DEFAULT_API_VERSION, DEFAULT_BASE_URL, DEFAULT_TIMEOUT,
};
pub use self::errors::{ApiError, ApiErrorKind, Error};
pub use self::request::{RequestSpec, SecurityCodes, SECURITY_CODE_1_HEADER, SECURITY_CODE_2_HEADER};
pub use self::response::ResponseEnvelope;
