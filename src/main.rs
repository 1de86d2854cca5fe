use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;

mod auth;
mod config;
mod output;
mod prune;
mod telemetry;
mod wp;

use wp::{WpClient, WpClientConfig};

#[derive(Parser)]
#[command(name = "pruner", about = "Bulk-delete WordPress posts by permalink")]
struct Cli {
    #[command(flatten)]
    site: config::SiteArgs,
    /// Emit a single JSON envelope to stdout; logs go to stderr
    #[arg(global = true, long, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve permalinks and delete the matching posts
    Prune(prune::PruneCmd),
    /// Check that the credentials can obtain a token
    Auth(auth::AuthCmd),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();
    telemetry::config::set_json_mode(cli.json);

    // initialize logging/tracing (stderr). Respect RUST_LOG and PRUNER_LOG_FORMAT
    telemetry::config::init_tracing();

    let creds = cli.site.resolve();
    let client = WpClient::new(WpClientConfig::from_env())?;

    match cli.command {
        Commands::Prune(args) => prune::run(client, &creds, args).await?,
        Commands::Auth(args) => auth::run(client, &creds, args).await?,
    }

    Ok(())
}
