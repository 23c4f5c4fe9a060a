//! CLI subcommand implementations.

pub mod attachments;
pub mod code;
pub mod documents;
pub mod status;

use std::path::Path;

use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

/// Reads a file for upload, returning its name and base64-encoded content.
pub(crate) fn read_encoded(path: &Path, name: Option<&str>) -> Result<(String, String)> {
    let bytes = std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let file_name = match name {
        Some(name) => name.to_string(),
        None => path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .with_context(|| format!("cannot derive a file name from {}", path.display()))?,
    };
    Ok((file_name, BASE64.encode(bytes)))
}
