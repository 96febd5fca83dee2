// crates/citysearch-core/src/loader/mod.rs

//! # Catalog Loader
//!
//! Handles the physical layer (I/O, decompression) and decodes a JSON array
//! of [`CityRaw`] records into the catalog an engine is built from.
//! The catalog file must already satisfy the ordering rules the engine
//! checks; the loader does not reorder.

use crate::config::EngineConfig;
use crate::error::{CatalogError, Result};
use crate::model::{City, CityRaw};
use crate::search::CitySearchEngine;
use crate::traits::DistanceMetric;
use std::io::Read;
use std::path::Path;
use std::time::Instant;
use tracing::debug;

pub mod common_io;

/// Reads a catalog from a `.json` or `.json.gz` file.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<City>> {
    let path = path.as_ref();
    let started = Instant::now();
    let reader = common_io::open_stream(path)?;
    let cities = read_catalog(reader)?;
    debug!(
        path = %path.display(),
        cities = cities.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "loaded catalog"
    );
    Ok(cities)
}

/// Decodes a catalog from any reader yielding JSON.
///
/// Failures of the reader itself (including a corrupt gzip stream) are
/// reported as [`CatalogError::Io`], malformed JSON as [`CatalogError::Json`].
pub fn read_catalog<R: Read>(reader: R) -> Result<Vec<City>> {
    let raw: Vec<CityRaw> = serde_json::from_reader(reader).map_err(|e| {
        if e.is_io() {
            CatalogError::Io(e.into())
        } else {
            CatalogError::Json(e)
        }
    })?;
    Ok(raw.into_iter().map(City::from).collect())
}

impl<M: DistanceMetric> CitySearchEngine<M> {
    /// Loads a catalog file and builds an engine from it.
    pub fn load_from_path(path: impl AsRef<Path>, config: EngineConfig) -> Result<Self> {
        Self::build(load_catalog(path)?, config)
    }
}
