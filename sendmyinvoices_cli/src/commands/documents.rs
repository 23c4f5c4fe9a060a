use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};
use sendmyinvoices_api::types::DocumentUpload;
use sendmyinvoices_api::{Client, SecurityCodes};

use super::read_encoded;
use crate::output::{print_body, OutputFormat};

#[derive(Args)]
pub struct DocumentsArgs {
    #[command(subcommand)]
    pub command: DocumentCommand,
}

#[derive(Subcommand)]
pub enum DocumentCommand {
    /// Get one document by its retrieval code
    Get(GetArgs),
    /// Upload a PDF document
    Upload(UploadArgs),
    /// Delete one document
    Delete(DeleteArgs),
}

#[derive(Args)]
pub struct GetArgs {
    /// Document retrieval code
    pub code: String,

    /// First security code for protected documents
    #[arg(long)]
    pub security_code_1: Option<String>,

    /// Second security code for protected documents
    #[arg(long)]
    pub security_code_2: Option<String>,
}

#[derive(Args)]
pub struct UploadArgs {
    /// Path of the PDF to upload
    pub file: PathBuf,

    /// File name to report (defaults to the file's own name)
    #[arg(long)]
    pub name: Option<String>,

    /// Also generate a QR code for the document
    #[arg(long)]
    pub qr_code: bool,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Document retrieval code
    pub code: String,
}

pub async fn run(args: &DocumentsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let body = match &args.command {
        DocumentCommand::Get(get) => {
            let codes = SecurityCodes {
                code_1: get.security_code_1.clone(),
                code_2: get.security_code_2.clone(),
            };
            client.fetch_document(&get.code, &codes).await?
        }
        DocumentCommand::Upload(upload) => {
            let (file_name, content) = read_encoded(&upload.file, upload.name.as_deref())?;
            let mut document = DocumentUpload::new(&file_name, content);
            if upload.qr_code {
                document = document.with_qr_code(true);
            }
            client.create_document(&document).await?
        }
        DocumentCommand::Delete(delete) => client.delete_document(&delete.code).await?,
    };
    print_body(&body, format);
    Ok(())
}
