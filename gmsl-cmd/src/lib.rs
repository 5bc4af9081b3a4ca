//! Command implementations for the sea level CLI.
//!
//! Provides subcommands for estimating the rate of global sea level rise
//! from the NOAA STAR dataset and for downloading the raw CSV.

use clap::Subcommand;
use gmsl_star::table::SEA_LEVEL_CSV_URL;

pub mod chart;
pub mod fetch;
pub mod rate;

#[derive(Subcommand)]
pub enum Command {
    /// Estimate the rate of global mean sea level rise
    Rate {
        /// Source URL for the sea level CSV
        #[arg(long, default_value = SEA_LEVEL_CSV_URL)]
        url: String,

        /// Output path for the minimum sea level series chart
        #[arg(long, default_value = "sea_level_minimum.png")]
        series_png: String,

        /// Output path for the series chart with the fitted trend overlay
        #[arg(long, default_value = "sea_level_trend.png")]
        trend_png: String,
    },

    /// Download the raw sea level CSV
    Fetch {
        /// Source URL for the sea level CSV
        #[arg(long, default_value = SEA_LEVEL_CSV_URL)]
        url: String,

        /// Output path for the downloaded CSV
        #[arg(short = 'o', long)]
        output: String,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Rate {
            url,
            series_png,
            trend_png,
        } => rate::run_rate(&url, &series_png, &trend_png).await,
        Command::Fetch { url, output } => fetch::run_fetch(&url, &output).await,
    }
}
