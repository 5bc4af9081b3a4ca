//! GMSL CLI - command line tool for the NOAA STAR global mean sea level dataset.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "gmsl-cli",
    version,
    about = "Global mean sea level rise toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: gmsl_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    gmsl_cmd::run(cli.command).await
}
