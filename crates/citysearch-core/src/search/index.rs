// crates/citysearch-core/src/search/index.rs
use super::matcher::{prefix_compare, TokenQuery};
use super::range::{equal_range_by, linear_matches_by};
use crate::config::KeyNormalization;
use crate::model::City;
use std::ops::Range;

#[derive(Debug, Clone)]
struct IndexEntry {
    /// Position of the city in the catalog.
    position: usize,
    key: String,
}

/// Alphabetical projection of a catalog: one normalised key per city,
/// sorted ascending. Built once, never mutated.
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    entries: Vec<IndexEntry>,
}

impl CatalogIndex {
    /// Builds the index. Equal keys keep their catalog order.
    pub fn build(cities: &[City], normalization: KeyNormalization) -> Self {
        let mut entries: Vec<IndexEntry> = cities
            .iter()
            .enumerate()
            .map(|(position, city)| IndexEntry {
                position,
                key: normalization.key(&city.name),
            })
            .collect();
        entries.sort_by(|a, b| a.key.cmp(&b.key));
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Normalised keys in index order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    /// Catalog positions in index (alphabetical) order.
    pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.iter().map(|e| e.position)
    }

    /// Index range of the keys starting with the query's leading token.
    ///
    /// Every match of `query` lies inside this range. For single-token
    /// queries the range holds exactly the matches.
    pub fn candidate_range(&self, query: &TokenQuery<'_>) -> Range<usize> {
        let leading = query.leading_token();
        equal_range_by(&self.entries, |entry| prefix_compare(&entry.key, leading))
    }

    /// Catalog positions of all keys matching `query`, alphabetically.
    ///
    /// O(log n) to locate the candidate range, then linear in its size.
    pub fn matching_positions(&self, query: &TokenQuery<'_>) -> Vec<usize> {
        let range = self.candidate_range(query);
        let candidates = &self.entries[range];
        if query.tokens().len() == 1 {
            return candidates.iter().map(|e| e.position).collect();
        }
        candidates
            .iter()
            .filter(|e| query.matches(&e.key))
            .map(|e| e.position)
            .collect()
    }

    /// Same result as [`CatalogIndex::matching_positions`] by full scan.
    pub fn matching_positions_linear(&self, query: &TokenQuery<'_>) -> Vec<usize> {
        linear_matches_by(&self.entries, |entry| query.compare(&entry.key))
            .into_iter()
            .map(|i| self.entries[i].position)
            .collect()
    }
}
