//! Connection settings for the SendMyInvoices API.

use std::fmt;
use std::time::Duration;

use url::Url;

use crate::Error;

/// Production API root. The version segment is appended per request.
pub const DEFAULT_BASE_URL: &str = "https://api.sendmyinvoices.com/";

pub const DEFAULT_API_VERSION: &str = "v1";

/// Whole-call timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Immutable client settings, validated once by [`ClientConfigBuilder::build`].
#[derive(Clone)]
pub struct ClientConfig {
    base_url: Url,
    api_version: String,
    api_key: String,
    timeout: Duration,
    tls_verify: bool,
    lang_code: Option<String>,
}

impl ClientConfig {
    /// Starts a builder for the given API key. All other settings default.
    pub fn builder(api_key: impl Into<String>) -> ClientConfigBuilder {
        ClientConfigBuilder {
            api_key: api_key.into(),
            base_url: None,
            api_version: None,
            timeout: None,
            tls_verify: true,
            lang_code: None,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn tls_verify(&self) -> bool {
        self.tls_verify
    }

    /// Locale tag sent as `X-LANG-CODE`, e.g. `en_us` or `de_de`.
    pub fn lang_code(&self) -> Option<&str> {
        self.lang_code.as_deref()
    }

    /// Versioned API root, e.g. `https://api.sendmyinvoices.com/v1/`.
    pub fn versioned_url(&self) -> Result<Url, Error> {
        self.base_url
            .join(&format!("{}/", self.api_version))
            .map_err(|e| Error::InvalidConfig(format!("invalid api version: {}", e)))
    }
}

// Hand-written so the API key never ends up in logs.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url.as_str())
            .field("api_version", &self.api_version)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("tls_verify", &self.tls_verify)
            .field("lang_code", &self.lang_code)
            .finish()
    }
}

/// Builder for [`ClientConfig`].
///
/// Empty strings and a zero timeout leave the corresponding default in place.
#[derive(Clone)]
pub struct ClientConfigBuilder {
    api_key: String,
    base_url: Option<String>,
    api_version: Option<String>,
    timeout: Option<Duration>,
    tls_verify: bool,
    lang_code: Option<String>,
}

impl ClientConfigBuilder {
    /// Overrides the API root. Used for testing with wiremock.
    pub fn base_url(mut self, base_url: &str) -> Self {
        if !base_url.trim().is_empty() {
            self.base_url = Some(base_url.trim().to_string());
        }
        self
    }

    pub fn api_version(mut self, api_version: &str) -> Self {
        let version = api_version.trim().trim_matches('/');
        if !version.is_empty() {
            self.api_version = Some(version.to_string());
        }
        self
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self {
        if secs > 0 {
            self.timeout = Some(Duration::from_secs(secs));
        }
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        if !timeout.is_zero() {
            self.timeout = Some(timeout);
        }
        self
    }

    pub fn lang_code(mut self, lang_code: &str) -> Self {
        if !lang_code.trim().is_empty() {
            self.lang_code = Some(lang_code.trim().to_string());
        }
        self
    }

    pub fn tls_verify(mut self, verify: bool) -> Self {
        self.tls_verify = verify;
        self
    }

    /// Accepts any server certificate. Only for local or staging endpoints.
    pub fn danger_disable_tls_verify(self) -> Self {
        self.tls_verify(false)
    }

    pub fn build(self) -> Result<ClientConfig, Error> {
        if self.api_key.trim().is_empty() {
            return Err(Error::InvalidConfig("API key is required".to_string()));
        }

        let raw = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        let mut base_url = Url::parse(raw)
            .map_err(|e| Error::InvalidConfig(format!("invalid base url '{}': {}", raw, e)))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(Error::InvalidConfig(format!(
                "unsupported base url scheme '{}'",
                base_url.scheme()
            )));
        }
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let config = ClientConfig {
            base_url,
            api_version: self
                .api_version
                .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            api_key: self.api_key,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            tls_verify: self.tls_verify,
            lang_code: self.lang_code,
        };
        if !config.tls_verify {
            tracing::warn!("TLS certificate verification is disabled");
        }
        Ok(config)
    }
}
