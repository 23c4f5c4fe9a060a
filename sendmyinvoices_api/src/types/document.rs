use serde::{Deserialize, Serialize};

/// Body of `POST documents`. Only PDF files are accepted by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentUpload {
    /// File name including extension.
    pub file_name: String,
    /// Base64-encoded file bytes.
    pub file_content: String,
    /// Whether a QR code should be generated along with the document.
    #[serde(rename = "QRCode", skip_serializing_if = "Option::is_none")]
    pub qr_code: Option<bool>,
}

impl DocumentUpload {
    pub fn new(file_name: &str, file_content: String) -> Self {
        Self {
            file_name: file_name.to_string(),
            file_content,
            qr_code: None,
        }
    }

    pub fn with_qr_code(mut self, qr_code: bool) -> Self {
        self.qr_code = Some(qr_code);
        self
    }
}

/// Body of `POST documents/{id}/attachments`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentUpload {
    pub file_name: String,
    /// Base64-encoded file bytes.
    pub file_content: String,
}

impl AttachmentUpload {
    pub fn new(file_name: &str, file_content: String) -> Self {
        Self {
            file_name: file_name.to_string(),
            file_content,
        }
    }
}
