mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use sendmyinvoices_api::Client;

use crate::config::EnvConfig;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "sendmyinvoices")]
#[command(about = "Manage documents on SendMyInvoices from the command line")]
struct Cli {
    /// Output format: raw or pretty
    #[arg(long, default_value = "raw", global = true)]
    output: String,

    /// API key (defaults to SENDMYINVOICES_API_KEY)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Language code sent with each request, e.g. en_us or de_de
    #[arg(long, global = true)]
    lang: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check API status
    Status,
    /// Reserve a document code before uploading
    Code(commands::code::CodeArgs),
    /// Fetch, upload or delete documents
    Documents(commands::documents::DocumentsArgs),
    /// Fetch, upload or delete document attachments
    Attachments(commands::attachments::AttachmentsArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sendmyinvoices=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = OutputFormat::parse(&cli.output);

    let mut env = EnvConfig::from_env();
    if let Some(key) = cli.api_key {
        env.api_key = Some(key);
    }
    if let Some(lang) = cli.lang {
        env.lang_code = Some(lang);
    }
    let client = Client::new(env.into_client_config()?)?;

    match &cli.command {
        Commands::Status => commands::status::run(&client, &format).await?,
        Commands::Code(args) => commands::code::run(args, &client, &format).await?,
        Commands::Documents(args) => commands::documents::run(args, &client, &format).await?,
        Commands::Attachments(args) => commands::attachments::run(args, &client, &format).await?,
    }

    Ok(())
}
