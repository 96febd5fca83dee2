// crates/citysearch-core/src/search/mod.rs

//! # Search
//!
//! The engine and the pieces it is built from, leaves first:
//! [`range`] (binary-search primitives), [`matcher`] (token comparator),
//! [`index`] (sorted catalog projection), [`sections`] (size grouping),
//! [`nearest`] (coordinate lookup) and [`response`].

mod engine;
pub mod index;
pub mod matcher;
pub mod nearest;
pub mod range;
pub mod response;
pub mod sections;

pub use engine::CitySearchEngine;
pub use response::{SearchResponse, SearchResult};
