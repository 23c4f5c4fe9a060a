use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};
use sendmyinvoices_api::types::AttachmentUpload;
use sendmyinvoices_api::{Client, SecurityCodes};

use super::read_encoded;
use crate::output::{print_body, OutputFormat};

#[derive(Args)]
pub struct AttachmentsArgs {
    #[command(subcommand)]
    pub command: AttachmentCommand,
}

#[derive(Subcommand)]
pub enum AttachmentCommand {
    /// Get one attachment of a document
    Get(GetArgs),
    /// Attach a file to a document
    Upload(UploadArgs),
    /// Remove an attachment from a document
    Delete(DeleteArgs),
}

#[derive(Args)]
pub struct GetArgs {
    /// Document retrieval code
    pub document: String,

    /// Attachment id
    pub attachment: String,

    #[arg(long)]
    pub security_code_1: Option<String>,

    #[arg(long)]
    pub security_code_2: Option<String>,
}

#[derive(Args)]
pub struct UploadArgs {
    /// Document retrieval code
    pub document: String,

    /// Path of the file to attach
    pub file: PathBuf,

    /// File name to report (defaults to the file's own name)
    #[arg(long)]
    pub name: Option<String>,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Document retrieval code
    pub document: String,

    /// Attachment id
    pub attachment: String,
}

pub async fn run(args: &AttachmentsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let body = match &args.command {
        AttachmentCommand::Get(get) => {
            let codes = SecurityCodes {
                code_1: get.security_code_1.clone(),
                code_2: get.security_code_2.clone(),
            };
            client
                .fetch_attachment(&get.document, &get.attachment, &codes)
                .await?
        }
        AttachmentCommand::Upload(upload) => {
            let (file_name, content) = read_encoded(&upload.file, upload.name.as_deref())?;
            let attachment = AttachmentUpload::new(&file_name, content);
            client.create_attachment(&upload.document, &attachment).await?
        }
        AttachmentCommand::Delete(delete) => {
            client
                .delete_attachment(&delete.document, &delete.attachment)
                .await?
        }
    };
    print_body(&body, format);
    Ok(())
}
