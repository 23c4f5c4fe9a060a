//! HTTP client for the SendMyInvoices REST API.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use serde::Serialize;
use url::Url;

use crate::{
    config::ClientConfig,
    request::{RequestSpec, SecurityCodes},
    response::ResponseEnvelope,
    types::CodeRequest,
    Error,
};

const USER_AGENT: &str = concat!("sendmyinvoices-rust/", env!("CARGO_PKG_VERSION"));

pub const API_KEY_HEADER: &str = "X-API-KEY";
pub const LANG_CODE_HEADER: &str = "X-LANG-CODE";

/// HTTP client for the SendMyInvoices API.
///
/// Holds one pooled `reqwest::Client` built from the [`ClientConfig`]. Every
/// call issues exactly one request and never retries. Safe to share between
/// tasks.
pub struct Client {
    config: ClientConfig,
    http: reqwest::Client,
}

impl Client {
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout())
            .danger_accept_invalid_certs(!config.tls_verify())
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::InvalidConfig(format!("failed to build HTTP client: {}", e))
            })?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Resolves an endpoint such as `documents/abc` against the versioned root.
    pub fn endpoint_url(&self, endpoint: &str) -> Result<Url, Error> {
        let mut url = self.config.versioned_url()?;
        url.path_segments_mut()
            .map_err(|_| Error::InvalidConfig("base url cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(endpoint.trim_matches('/').split('/'));
        Ok(url)
    }

    fn headers(&self, extra: &[(String, String)]) -> Result<HeaderMap, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut api_key = header_value(API_KEY_HEADER, self.config.api_key())?;
        api_key.set_sensitive(true);
        headers.insert(HeaderName::from_static("x-api-key"), api_key);

        if let Some(lang) = self.config.lang_code() {
            headers.insert(
                HeaderName::from_static("x-lang-code"),
                header_value(LANG_CODE_HEADER, lang)?,
            );
        }

        for (name, value) in extra {
            let header = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| Error::InvalidRequest(format!("invalid header name '{}': {}", name, e)))?;
            headers.insert(header, header_value(name, value)?);
        }
        Ok(headers)
    }

    /// Composes the outgoing request without sending it.
    pub fn build_request(&self, spec: &RequestSpec) -> Result<reqwest::Request, Error> {
        let url = self.endpoint_url(&spec.endpoint)?;
        let mut builder = self
            .http
            .request(spec.method.clone(), url)
            .headers(self.headers(&spec.headers)?);
        if !spec.body.is_empty() {
            builder = builder.json(&spec.body);
        }
        builder
            .build()
            .map_err(|e| Error::InvalidRequest(format!("failed to build request: {}", e)))
    }

    /// Sends one request and returns the raw body of a 2xx response.
    ///
    /// Non-2xx responses become [`Error::Api`]; network failures and timeouts
    /// become [`Error::Transport`].
    pub async fn send(&self, spec: RequestSpec) -> Result<String, Error> {
        let request = self.build_request(&spec)?;
        tracing::debug!("{} {}", request.method(), request.url());

        let resp = self.http.execute(request).await.map_err(|e| {
            tracing::error!("Failed to send {} {}: {}", spec.method, spec.endpoint, e);
            Error::Transport(e)
        })?;

        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Transport(e)
        })?;

        ResponseEnvelope::new(status, body).into_result()
    }

    /// Checks that the API is reachable and the key is accepted.
    pub async fn check_status(&self) -> Result<String, Error> {
        self.send(RequestSpec::get("apiStatus")).await
    }

    /// Reserves a document retrieval code, optionally with a QR code.
    pub async fn issue_document_code(&self, request: &CodeRequest) -> Result<String, Error> {
        self.send(RequestSpec::post("getCode").with_json(request)?)
            .await
    }

    /// Fetches one document by its retrieval code.
    pub async fn fetch_document(
        &self,
        document_id: &str,
        codes: &SecurityCodes,
    ) -> Result<String, Error> {
        let endpoint = format!("documents/{}", path_segment(document_id)?);
        self.send(RequestSpec::get(endpoint).with_security_codes(codes))
            .await
    }

    /// Uploads a new document. `document` must serialize to a JSON object,
    /// usually a [`DocumentUpload`](crate::types::DocumentUpload).
    pub async fn create_document<T: Serialize + ?Sized>(
        &self,
        document: &T,
    ) -> Result<String, Error> {
        self.send(RequestSpec::post("documents").with_json(document)?)
            .await
    }

    pub async fn delete_document(&self, document_id: &str) -> Result<String, Error> {
        let endpoint = format!("documents/{}", path_segment(document_id)?);
        self.send(RequestSpec::delete(endpoint)).await
    }

    /// Fetches one attachment of a document.
    pub async fn fetch_attachment(
        &self,
        document_id: &str,
        attachment_id: &str,
        codes: &SecurityCodes,
    ) -> Result<String, Error> {
        let endpoint = format!(
            "documents/{}/attachments/{}",
            path_segment(document_id)?,
            path_segment(attachment_id)?
        );
        self.send(RequestSpec::get(endpoint).with_security_codes(codes))
            .await
    }

    /// Adds an attachment to an existing document.
    pub async fn create_attachment<T: Serialize + ?Sized>(
        &self,
        document_id: &str,
        attachment: &T,
    ) -> Result<String, Error> {
        let endpoint = format!("documents/{}/attachments", path_segment(document_id)?);
        self.send(RequestSpec::post(endpoint).with_json(attachment)?)
            .await
    }

    pub async fn delete_attachment(
        &self,
        document_id: &str,
        attachment_id: &str,
    ) -> Result<String, Error> {
        let endpoint = format!(
            "documents/{}/attachments/{}",
            path_segment(document_id)?,
            path_segment(attachment_id)?
        );
        self.send(RequestSpec::delete(endpoint)).await
    }
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue, Error> {
    HeaderValue::from_str(value)
        .map_err(|_| Error::InvalidRequest(format!("invalid value for header '{}'", name)))
}

/// Ids are single path segments. An empty id, a `/`, or a dot segment
/// (`.`, `..`) would resolve to another resource.
fn path_segment(id: &str) -> Result<&str, Error> {
    let id = id.trim();
    if id.is_empty() || id.contains('/') || id == "." || id == ".." {
        return Err(Error::InvalidRequest(format!("invalid resource id '{}'", id)));
    }
    Ok(id)
}
