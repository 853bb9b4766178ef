//! Command implementations for the electricity map CLI.
//!
//! Provides subcommands for printing and exporting the bar breakdown of a
//! zone details snapshot, listing its data sources, and downloading fresh
//! snapshots from the API.

use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};
use emap_chart::{Locale, MixMode, TimeAverage};

pub mod breakdown;
pub mod fetch;

/// How a snapshot should be read and presented.
#[derive(Args, Debug, Clone)]
pub struct ViewArgs {
    /// Zone details JSON snapshot
    #[arg(short = 'f', long)]
    pub file: String,

    /// State to show (RFC 3339); defaults to the latest state
    #[arg(long)]
    pub datetime: Option<DateTime<Utc>>,

    /// `production` or `consumption`
    #[arg(long, default_value = "consumption")]
    pub mix_mode: MixMode,

    /// Show tCO₂eq instead of power
    #[arg(long)]
    pub emissions: bool,

    /// Aggregation window of the snapshot
    #[arg(long, default_value = "hourly")]
    pub time_average: TimeAverage,

    #[arg(long, default_value = "en")]
    pub locale: Locale,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the breakdown rows of a zone state
    Breakdown {
        #[command(flatten)]
        view: ViewArgs,
    },

    /// Write the breakdown rows of a zone state to CSV
    Export {
        #[command(flatten)]
        view: ViewArgs,

        /// Output path for the CSV
        #[arg(short = 'o', long)]
        output: String,
    },

    /// List capacity, generation and emission factor sources
    Sources {
        #[command(flatten)]
        view: ViewArgs,
    },

    /// Download zone details from the API
    Fetch {
        /// Zone key, e.g. DE or US-CAL-CISO
        #[arg(short = 'z', long)]
        zone: String,

        /// Output path for the JSON snapshot
        #[arg(short = 'o', long)]
        output: String,

        #[arg(long, default_value = fetch::DEFAULT_API_URL)]
        api_url: String,

        #[arg(long, default_value = "hourly")]
        time_average: TimeAverage,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Breakdown { view } => breakdown::run_breakdown(&view),
        Command::Export { view, output } => breakdown::run_export(&view, &output),
        Command::Sources { view } => breakdown::run_sources(&view),
        Command::Fetch {
            zone,
            output,
            api_url,
            time_average,
        } => fetch::run_fetch(&api_url, &zone, time_average, &output).await,
    }
}
