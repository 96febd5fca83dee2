// crates/citysearch-core/src/search/response.rs
use super::sections::partition_by_size;
use crate::model::{City, ListSection};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Sections for the list plus the ids to highlight on the map.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub sections: Vec<ListSection>,
    pub ids: BTreeSet<u32>,
}

impl SearchResult {
    pub fn new(sections: Vec<ListSection>, ids: BTreeSet<u32>) -> Self {
        Self { sections, ids }
    }

    /// Builds the result for matched catalog positions given in
    /// alphabetical order.
    pub fn from_matches(cities: &[City], positions: &[usize]) -> Self {
        Self {
            sections: partition_by_size(cities, positions),
            ids: positions.iter().map(|&p| cities[p].id).collect(),
        }
    }

    pub fn into_response(self, query: impl Into<String>) -> SearchResponse {
        SearchResponse {
            result: self,
            query: query.into(),
        }
    }
}

/// A [`SearchResult`] together with the query that produced it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub result: SearchResult,
    pub query: String,
}

impl SearchResponse {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sections(&self) -> &[ListSection] {
        &self.result.sections
    }

    pub fn ids(&self) -> &BTreeSet<u32> {
        &self.result.ids
    }

    /// Cities of all sections, in section order.
    pub fn cities(&self) -> impl Iterator<Item = &City> {
        self.result.sections.iter().flat_map(|s| s.cities.iter())
    }

    /// `true` when a non-empty query matched nothing.
    pub fn is_found_nothing(&self) -> bool {
        !self.query.is_empty() && self.result.ids.is_empty()
    }
}
