use serde::{Deserialize, Serialize};

/// Body of `POST getCode`: reserves a retrieval code before an upload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeRequest {
    /// Retrieval domain the QR code should point at.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(rename = "QRCode")]
    pub qr_code: bool,
}

impl Default for CodeRequest {
    fn default() -> Self {
        Self {
            domain: None,
            qr_code: true,
        }
    }
}

impl CodeRequest {
    pub fn with_domain(mut self, domain: &str) -> Self {
        self.domain = Some(domain.to_string());
        self
    }

    pub fn with_qr_code(mut self, qr_code: bool) -> Self {
        self.qr_code = qr_code;
        self
    }
}
