// crates/citysearch-core/src/error.rs
use thiserror::Error;

/// Everything that can go wrong while loading a catalog or building an engine.
///
/// Queries themselves never fail; absence is expressed with empty results
/// or `None`.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate city id {id} at positions {first} and {second}")]
    DuplicateId { id: u32, first: usize, second: usize },

    #[error("City id {id} does not match its catalog position {position}")]
    IdNotPosition { id: u32, position: usize },

    #[error("Big city {name:?} at position {position} follows a smaller city")]
    BigCityOutOfOrder { name: String, position: usize },

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
