use anyhow::Result;
use sendmyinvoices_api::Client;

use crate::output::{print_body, OutputFormat};

pub async fn run(client: &Client, format: &OutputFormat) -> Result<()> {
    let body = client.check_status().await?;
    print_body(&body, format);
    Ok(())
}
