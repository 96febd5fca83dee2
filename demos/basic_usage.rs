//! Basic usage example for citysearch-rs
//!
//! This example demonstrates how to:
//! - Build an engine from an in-memory catalog
//! - Show the default (landing) response
//! - Run prefix searches and read the sections
//! - Find the nearest city to a coordinate

use citysearch_core::prelude::*;

fn main() -> Result<()> {
    println!("=== citysearch-rs Basic Usage Example ===\n");

    let cities = vec![
        City::new(0, "San Francisco", CitySize::Big, Coordinate::new(37.7749, -122.4194)),
        City::new(1, "Los Angeles", CitySize::Big, Coordinate::new(34.0522, -118.2437)),
        City::new(2, "San Jose", CitySize::Small, Coordinate::new(37.3382, -121.8863)),
        City::new(3, "Santa Cruz", CitySize::Middle, Coordinate::new(36.9741, -122.0308)),
        City::new(4, "San Diego", CitySize::Middle, Coordinate::new(32.7157, -117.1611)),
        City::new(5, "Los Gatos", CitySize::Small, Coordinate::new(37.2358, -121.9624)),
    ];
    let engine = CitySearchEngine::new(cities)?;
    println!("✓ Engine built with {} cities\n", engine.len());

    println!("--- Example 1: Default response ---");
    print_response(engine.default_response());

    for query in ["san", "san j", "los", "oakland"] {
        println!("--- Search: {query:?} ---");
        print_response(&engine.search(query));
    }

    println!("--- Nearest city to (37.0, -122.0) ---");
    match engine.find_nearest_city(Some(Coordinate::new(37.0, -122.0))) {
        Some(city) => println!("  {}\n", city.name()),
        None => println!("  none\n"),
    }

    Ok(())
}

fn print_response(response: &SearchResponse) {
    if response.is_found_nothing() {
        println!("  nothing found\n");
        return;
    }
    for section in response.sections() {
        println!("  {:?}", section.kind);
        for city in &section.cities {
            println!("    - {} ({:?})", city.name(), city.size);
        }
    }
    println!();
}
