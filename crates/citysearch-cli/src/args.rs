use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for citysearch
#[derive(Debug, Parser)]
#[command(
    name = "citysearch",
    version,
    about = "CLI for searching a city catalog by name prefix or by coordinate"
)]
pub struct CliArgs {
    /// Path to the catalog (.json or .json.gz)
    #[arg(short = 'i', long = "input", global = true, default_value = "cities.json")]
    pub input: PathBuf,

    /// Distance metric used by `nearest`
    #[arg(short = 'm', long = "metric", global = true, value_enum, default_value_t = Metric::GreatCircle)]
    pub metric: Metric,

    /// Match names without diacritics (e.g. "zurich" finds "Zürich")
    #[arg(long = "fold-accents", global = true)]
    pub fold_accents: bool,

    /// Accept catalogs whose ids are not their positions or whose big cities are not listed first
    #[arg(long = "lenient", global = true)]
    pub lenient: bool,

    /// Print responses as JSON
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short = 'v', long = "verbose", global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Metric {
    /// Haversine distance in kilometres
    GreatCircle,
    /// Euclidean distance on degree pairs
    Planar,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the catalog
    Stats,

    /// Show the default (empty query) response
    Default,

    /// Search cities by word prefixes
    Search {
        /// Query words (e.g. `san jo`)
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// Find the city nearest to a coordinate
    Nearest {
        /// Latitude in degrees
        #[arg(allow_negative_numbers = true)]
        latitude: f64,
        /// Longitude in degrees
        #[arg(allow_negative_numbers = true)]
        longitude: f64,
    },
}
