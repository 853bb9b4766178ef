//! EMAP CLI - Command line tool for electricity map zone details.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "emap-cli",
    version,
    about = "Electricity map zone breakdown toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: emap_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("[EMAP] starting emap-cli");
    emap_cmd::run(cli.command).await
}
