// crates/citysearch-core/src/search/engine.rs
use super::index::CatalogIndex;
use super::matcher::TokenQuery;
use super::nearest::nearest;
use super::response::{SearchResponse, SearchResult};
use crate::common::{CatalogStats, GreatCircle};
use crate::config::{EngineConfig, Validation};
use crate::error::{CatalogError, Result};
use crate::model::{City, CitySize, Coordinate, ListSection, SectionKind};
use crate::traits::DistanceMetric;
use std::collections::HashMap;
use std::marker::PhantomData;
use std::time::Instant;
use tracing::{debug, trace};

/// Search engine over an immutable city catalog.
///
/// Everything is computed at construction: the alphabetical index, the
/// id lookup and the default response. Queries only read, so a shared
/// `&CitySearchEngine` can serve any number of threads without locking.
///
/// `M` is the distance metric used by [`CitySearchEngine::find_nearest_city`].
#[derive(Clone, Debug)]
pub struct CitySearchEngine<M: DistanceMetric = GreatCircle> {
    cities: Vec<City>,
    positions: HashMap<u32, usize>,
    index: CatalogIndex,
    default_response: SearchResponse,
    config: EngineConfig,
    _metric: PhantomData<fn() -> M>,
}

impl CitySearchEngine {
    /// Builds a great-circle engine with the default (strict) configuration.
    ///
    /// # Errors
    /// Fails when the catalog breaks the ordering rules checked by
    /// [`Validation::Strict`].
    pub fn new(cities: Vec<City>) -> Result<Self> {
        Self::build(cities, EngineConfig::default())
    }

    /// Builds a great-circle engine with `config`.
    pub fn with_config(cities: Vec<City>, config: EngineConfig) -> Result<Self> {
        Self::build(cities, config)
    }
}

impl<M: DistanceMetric> Default for CitySearchEngine<M> {
    fn default() -> Self {
        Self::assemble(Vec::new(), HashMap::new(), EngineConfig::default())
    }
}

impl<M: DistanceMetric> CitySearchEngine<M> {
    /// Builds an engine for any metric.
    ///
    /// ```rust
    /// use citysearch_core::{CitySearchEngine, EngineConfig, Planar};
    ///
    /// let engine = CitySearchEngine::<Planar>::build(Vec::new(), EngineConfig::default())?;
    /// assert!(engine.is_empty());
    /// # Ok::<(), citysearch_core::CatalogError>(())
    /// ```
    pub fn build(cities: Vec<City>, config: EngineConfig) -> Result<Self> {
        let started = Instant::now();
        let positions = validate(&cities, config.validation)?;
        let engine = Self::assemble(cities, positions, config);
        debug!(
            cities = engine.cities.len(),
            big_cities = engine.default_response.result.sections[0].cities.len(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "built city search engine"
        );
        Ok(engine)
    }

    fn assemble(cities: Vec<City>, positions: HashMap<u32, usize>, config: EngineConfig) -> Self {
        let index = CatalogIndex::build(&cities, config.key_normalization);
        let default_response = make_default_response(&cities);
        Self {
            cities,
            positions,
            index,
            default_response,
            config,
            _metric: PhantomData,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// The catalog, in the order it was supplied.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn index(&self) -> &CatalogIndex {
        &self.index
    }

    /// Looks a city up by id.
    pub fn city(&self, id: u32) -> Option<&City> {
        self.positions.get(&id).map(|&p| &self.cities[p])
    }

    pub fn stats(&self) -> CatalogStats {
        let mut stats = CatalogStats::default();
        for city in &self.cities {
            stats.count(city.size);
        }
        stats
    }

    /// Response for an empty query: the leading big cities in alphabetical
    /// order, with every catalog id highlighted.
    pub fn default_response(&self) -> &SearchResponse {
        &self.default_response
    }

    /// Prefix search.
    ///
    /// The query is trimmed and normalised like the index keys. A blank
    /// query returns a copy of [`CitySearchEngine::default_response`]; a
    /// query that normalises to nothing (e.g. a lone combining accent under
    /// [`KeyNormalization::AsciiFolded`]) matches nothing.
    ///
    /// [`KeyNormalization::AsciiFolded`]: crate::KeyNormalization::AsciiFolded
    pub fn search(&self, query: &str) -> SearchResponse {
        let query = query.trim();
        if query.is_empty() {
            return self.default_response.clone();
        }

        let normalized = self.config.key_normalization.key(query);
        let normalized = normalized.trim();
        if normalized.is_empty() {
            trace!(query, "query normalises to nothing");
            return SearchResult::default().into_response(query);
        }
        let token_query = TokenQuery::new(normalized);
        let positions = self.index.matching_positions(&token_query);
        let result = SearchResult::from_matches(&self.cities, &positions);
        trace!(
            query,
            matches = positions.len(),
            sections = result.sections.len(),
            "search"
        );
        result.into_response(query)
    }

    /// Nearest city to `coordinate`, or `None` without a coordinate or
    /// with an empty catalog. Ties go to the earlier catalog entry.
    pub fn find_nearest_city(&self, coordinate: Option<Coordinate>) -> Option<&City> {
        let coordinate = coordinate?;
        let found = nearest::<M>(&self.cities, &coordinate);
        trace!(?coordinate, found = found.map(City::name), "nearest city");
        found
    }
}

/// Checks the catalog and maps each id to its position.
fn validate(cities: &[City], validation: Validation) -> Result<HashMap<u32, usize>> {
    let mut positions = HashMap::with_capacity(cities.len());
    let mut past_big_prefix = false;

    for (position, city) in cities.iter().enumerate() {
        if validation == Validation::Strict {
            if city.id as usize != position {
                return Err(CatalogError::IdNotPosition {
                    id: city.id,
                    position,
                });
            }
            if city.size != CitySize::Big {
                past_big_prefix = true;
            } else if past_big_prefix {
                return Err(CatalogError::BigCityOutOfOrder {
                    name: city.name.clone(),
                    position,
                });
            }
        }
        if let Some(first) = positions.insert(city.id, position) {
            return Err(CatalogError::DuplicateId {
                id: city.id,
                first,
                second: position,
            });
        }
    }
    Ok(positions)
}

fn make_default_response(cities: &[City]) -> SearchResponse {
    let mut big_cities: Vec<City> = cities
        .iter()
        .take_while(|city| city.size == CitySize::Big)
        .cloned()
        .collect();
    big_cities.sort_by(|a, b| a.name.cmp(&b.name));

    let ids = cities.iter().map(|city| city.id).collect();
    let section = ListSection::new(SectionKind::BigCities, big_cities);
    SearchResult::new(vec![section], ids).into_response(String::new())
}
