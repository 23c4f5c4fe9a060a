//! Client settings read from the environment (and `.env`, via dotenvy).

use anyhow::{anyhow, Context, Result};
use sendmyinvoices_api::ClientConfig;

pub const API_KEY_VAR: &str = "SENDMYINVOICES_API_KEY";
pub const BASE_URL_VAR: &str = "SENDMYINVOICES_BASE_URL";
pub const API_VERSION_VAR: &str = "SENDMYINVOICES_API_VERSION";
pub const TIMEOUT_VAR: &str = "SENDMYINVOICES_TIMEOUT";
pub const LANG_CODE_VAR: &str = "SENDMYINVOICES_LANG_CODE";
pub const INSECURE_VAR: &str = "SENDMYINVOICES_INSECURE";

/// Raw settings before validation. Unset or empty values keep library defaults.
#[derive(Debug, Default)]
pub struct EnvConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub api_version: Option<String>,
    pub timeout: Option<String>,
    pub lang_code: Option<String>,
    pub insecure: Option<String>,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            api_key: lookup(API_KEY_VAR),
            base_url: lookup(BASE_URL_VAR),
            api_version: lookup(API_VERSION_VAR),
            timeout: lookup(TIMEOUT_VAR),
            lang_code: lookup(LANG_CODE_VAR),
            insecure: lookup(INSECURE_VAR),
        }
    }

    pub fn into_client_config(self) -> Result<ClientConfig> {
        let api_key = self
            .api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| anyhow!("{} is not set (or pass --api-key)", API_KEY_VAR))?;

        let mut builder = ClientConfig::builder(api_key)
            .base_url(self.base_url.as_deref().unwrap_or_default())
            .api_version(self.api_version.as_deref().unwrap_or_default())
            .lang_code(self.lang_code.as_deref().unwrap_or_default());

        if let Some(raw) = self.timeout.as_deref().filter(|t| !t.trim().is_empty()) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("{} must be a number of seconds, got '{}'", TIMEOUT_VAR, raw))?;
            builder = builder.timeout_secs(secs);
        }

        if self.insecure.as_deref().is_some_and(is_enabled) {
            builder = builder.danger_disable_tls_verify();
        }

        Ok(builder.build()?)
    }
}

fn is_enabled(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
