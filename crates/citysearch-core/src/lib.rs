// crates/citysearch-core/src/lib.rs

//! # citysearch-core
//!
//! In-memory, read-mostly search over a fixed catalog of cities, built for
//! location pickers. Three queries are answered:
//!
//! - the default (landing) response: big cities, alphabetically;
//! - multi-word prefix search, sectioned by size tier;
//! - nearest city to a coordinate.
//!
//! ```rust
//! use citysearch_core::{City, CitySearchEngine, CitySize, Coordinate};
//!
//! let engine = CitySearchEngine::new(vec![
//!     City::new(0, "San Francisco", CitySize::Big, Coordinate::new(37.77, -122.42)),
//!     City::new(1, "San Jose", CitySize::Small, Coordinate::new(37.34, -121.89)),
//! ])?;
//!
//! let response = engine.search("san jo");
//! assert_eq!(response.ids().len(), 1);
//! # Ok::<(), citysearch_core::CatalogError>(())
//! ```

pub mod common;
pub mod config;
pub mod error;
#[cfg(feature = "json")]
pub mod loader;
pub mod model;
pub mod search;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::{CatalogStats, GreatCircle, Planar};
pub use crate::config::{EngineConfig, KeyNormalization, Validation};
pub use crate::error::{CatalogError, Result};
pub use crate::model::{
    City, CityRaw, CitySize, CombinedCitySizes, Coordinate, ListSection, SectionKind,
};
pub use crate::search::{CitySearchEngine, SearchResponse, SearchResult};
pub use crate::traits::DistanceMetric;

#[cfg(feature = "json")]
pub use crate::loader::load_catalog;

pub mod prelude {
    //! Everything a typical caller needs in one import.
    pub use crate::{
        City, CitySearchEngine, CitySize, Coordinate, DistanceMetric, EngineConfig, GreatCircle,
        ListSection, Planar, Result, SearchResponse, SectionKind,
    };
}
