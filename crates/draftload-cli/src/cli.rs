//! CLI definition using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use draftload_types::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "draftload")]
#[command(version)]
#[command(about = "Draft load parser: driver/broker rates, margin and rate per mile")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output (debug logging)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a draft load and print its summary.
    ///
    /// One value per line: driver name, carrier name, driver rate,
    /// broker rate, empty miles, loaded miles.
    Parse {
        /// Draft file (reads stdin if omitted)
        file: Option<PathBuf>,
    },

    /// Type a draft line by line; the summary refreshes once input settles
    Live {
        /// Debounce delay in milliseconds. Uses config value if not specified.
        #[arg(long)]
        debounce_ms: Option<u64>,
    },

    /// Resolve pickup/delivery ZIP codes and show the map markers
    Route {
        /// Pickup location (5-digit ZIP)
        #[arg(long)]
        pickup: String,

        /// Delivery location (5-digit ZIP)
        #[arg(long)]
        delivery: String,

        /// ZIP directory CSV (zip,city,state,longitude,latitude). Uses config value if not specified.
        #[arg(long)]
        zips: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set live-mode debounce delay (ms)
        #[arg(long)]
        set_debounce_ms: Option<u64>,

        /// Set ZIP directory CSV path
        #[arg(long)]
        set_zip_directory: Option<PathBuf>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
