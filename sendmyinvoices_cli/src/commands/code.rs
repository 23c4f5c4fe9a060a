use anyhow::Result;
use clap::Args;
use sendmyinvoices_api::types::CodeRequest;
use sendmyinvoices_api::Client;

use crate::output::{print_body, OutputFormat};

#[derive(Args)]
pub struct CodeArgs {
    /// Retrieval domain for the QR code (e.g. fetchbill.com, belegsuche.de)
    #[arg(long)]
    pub domain: Option<String>,

    /// Reserve the code without generating a QR code
    #[arg(long)]
    pub no_qr_code: bool,
}

pub async fn run(args: &CodeArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut request = CodeRequest::default().with_qr_code(!args.no_qr_code);
    if let Some(domain) = &args.domain {
        request = request.with_domain(domain);
    }
    let body = client.issue_document_code(&request).await?;
    print_body(&body, format);
    Ok(())
}
