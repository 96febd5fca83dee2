//! citysearch — Command-line interface for citysearch-core
//!
//! This binary loads a city catalog and answers the three queries the
//! engine supports: the default response, prefix search, and nearest city.
//!
//! Usage examples
//! --------------
//!
//! - Show catalog stats
//!   $ citysearch --input cities.json stats
//!
//! - Show the default (landing) response
//!   $ citysearch default
//!
//! - Search by word prefixes (case-insensitive)
//!   $ citysearch search san jo
//!   $ citysearch --fold-accents search zur
//!
//! - Find the nearest city (latitude, longitude)
//!   $ citysearch nearest 37.3 -121.9
//!   $ citysearch --metric planar nearest 0 0.4
//!
//! Catalog format
//! --------------
//!
//! A JSON array (optionally gzip-compressed, `.json.gz`) of
//! `{ "id", "name", "size": "big"|"middle"|"small", "latitude", "longitude" }`.
//! Ids must equal positions and big cities must come first unless
//! `--lenient` is given.
mod args;

use crate::args::{CliArgs, Commands, Metric};
use anyhow::Context;
use citysearch_core::prelude::*;
use citysearch_core::{load_catalog, KeyNormalization, Validation};
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose)?;

    let config = EngineConfig::default()
        .with_key_normalization(if args.fold_accents {
            KeyNormalization::AsciiFolded
        } else {
            KeyNormalization::Lowercase
        })
        .with_validation(if args.lenient {
            Validation::Lenient
        } else {
            Validation::Strict
        });

    let cities = load_catalog(&args.input)
        .with_context(|| format!("failed to load catalog {}", args.input.display()))?;
    info!(cities = cities.len(), metric = ?args.metric, "catalog loaded");

    match args.metric {
        Metric::GreatCircle => run(CitySearchEngine::<GreatCircle>::build(cities, config)?, &args),
        Metric::Planar => run(CitySearchEngine::<Planar>::build(cities, config)?, &args),
    }
}

fn init_logging(verbose: u8) -> anyhow::Result<()> {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level.to_string()))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn run<M: DistanceMetric>(engine: CitySearchEngine<M>, args: &CliArgs) -> anyhow::Result<()> {
    match &args.command {
        Commands::Stats => {
            let stats = engine.stats();
            if args.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("Catalog statistics:");
                println!("  Cities: {}", stats.cities);
                println!("  Big:    {}", stats.big);
                println!("  Middle: {}", stats.middle);
                println!("  Small:  {}", stats.small);
            }
        }

        Commands::Default => print_response(engine.default_response(), args.json)?,

        Commands::Search { query } => {
            let query = query.join(" ");
            let response = engine.search(&query);
            print_response(&response, args.json)?;
        }

        Commands::Nearest {
            latitude,
            longitude,
        } => {
            let found = engine.find_nearest_city(Some(Coordinate::new(*latitude, *longitude)));
            match (found, args.json) {
                (Some(city), true) => println!("{}", serde_json::to_string_pretty(city)?),
                (Some(city), false) => print_city(city),
                (None, true) => println!("null"),
                (None, false) => eprintln!("Catalog is empty"),
            }
        }
    }
    Ok(())
}

fn print_response(response: &SearchResponse, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(response)?);
        return Ok(());
    }
    if response.is_found_nothing() {
        println!("No cities found matching: {}", response.query());
        return Ok(());
    }
    for section in response.sections() {
        println!("[{}]", section_title(section.kind));
        for city in &section.cities {
            print_city(city);
        }
    }
    println!("({} ids highlighted)", response.ids().len());
    Ok(())
}

fn section_title(kind: SectionKind) -> &'static str {
    use citysearch_core::CombinedCitySizes;
    match kind {
        SectionKind::BigCities => "Big cities",
        SectionKind::Untitled => "Results",
        SectionKind::CombinedSizes(CombinedCitySizes::BigAndMiddle) => "Big and middle cities",
        SectionKind::CombinedSizes(CombinedCitySizes::Small) => "Small cities",
    }
}

fn print_city(city: &City) {
    println!(
        "{:>6}  {} ({:?}) @ {:.4}, {:.4}",
        city.id, city.name, city.size, city.coordinate.latitude, city.coordinate.longitude
    );
}
