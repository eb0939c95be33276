//! wxh CLI - look up places and summarize their daily temperature history.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "wxh-cli",
    version,
    about = "Daily temperature history toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: wxh_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    wxh_cmd::run(cli.command).await
}
