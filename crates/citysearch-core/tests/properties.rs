//! Property tests for the search engine.
//!
//! The binary-search path is checked against a full linear scan with the
//! same token predicate, over random catalogs and queries.

use citysearch_core::prelude::*;
use citysearch_core::search::matcher::TokenQuery;
use citysearch_core::CombinedCitySizes;
use proptest::prelude::*;
use std::collections::BTreeSet;

// ============================================================================
// STRATEGIES
// ============================================================================

fn size_strategy() -> impl Strategy<Value = CitySize> {
    prop_oneof![Just(CitySize::Big), Just(CitySize::Middle), Just(CitySize::Small)]
}

/// One to three words, mixed case, from a tiny alphabet so that prefixes
/// collide often.
fn name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Ca-c]{1,4}( [A-Ca-c]{1,4}){0,2}").unwrap()
}

/// A catalog with the big cities moved to the front and ids equal to
/// positions, as strict validation requires.
fn catalog_strategy() -> impl Strategy<Value = Vec<City>> {
    prop::collection::vec((name_strategy(), size_strategy()), 0..40).prop_map(|mut rows| {
        rows.sort_by_key(|(_, size)| *size != CitySize::Big);
        rows.into_iter()
            .enumerate()
            .map(|(i, (name, size))| {
                City::new(i as u32, name, size, Coordinate::new(i as f64, -(i as f64)))
            })
            .collect()
    })
}

/// Non-blank queries of up to three tokens, empty tokens included.
fn query_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-cA-C]{1,3}( [a-c]{0,3}){0,2}").unwrap()
}

fn linear_ids(cities: &[City], query: &str) -> BTreeSet<u32> {
    let normalized = query.trim().to_lowercase();
    let token_query = TokenQuery::new(&normalized);
    cities
        .iter()
        .filter(|city| token_query.matches(&city.name.to_lowercase()))
        .map(|city| city.id)
        .collect()
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    /// Binary search over the index finds exactly what a full scan finds.
    #[test]
    fn search_agrees_with_linear_scan(cities in catalog_strategy(), query in query_strategy()) {
        let expected = linear_ids(&cities, &query);
        let engine = CitySearchEngine::new(cities).unwrap();
        let response = engine.search(&query);
        prop_assert_eq!(response.ids(), &expected);
    }

    /// Index-level check on the same predicate, without the engine.
    #[test]
    fn index_agrees_with_linear_scan(cities in catalog_strategy(), query in query_strategy()) {
        let engine = CitySearchEngine::new(cities).unwrap();
        let normalized = query.trim().to_lowercase();
        let token_query = TokenQuery::new(&normalized);
        prop_assert_eq!(
            engine.index().matching_positions(&token_query),
            engine.index().matching_positions_linear(&token_query)
        );
    }

    /// Every returned city satisfies the token-prefix rule.
    #[test]
    fn every_result_matches(cities in catalog_strategy(), query in query_strategy()) {
        let engine = CitySearchEngine::new(cities).unwrap();
        let response = engine.search(&query);
        let normalized = query.trim().to_lowercase();
        let token_query = TokenQuery::new(&normalized);
        for city in response.cities() {
            prop_assert!(token_query.matches(&city.name.to_lowercase()), "{} vs {}", city.name, query);
        }
    }

    /// Sections are disjoint, cover the id set, stay alphabetical and
    /// follow the size layout.
    #[test]
    fn sections_partition_matches(cities in catalog_strategy(), query in query_strategy()) {
        let engine = CitySearchEngine::new(cities).unwrap();
        let response = engine.search(&query);

        let mut seen = BTreeSet::new();
        for section in response.sections() {
            for city in &section.cities {
                prop_assert!(seen.insert(city.id), "city {} in two sections", city.id);
            }
            let keys: Vec<String> = section.cities.iter().map(|c| c.name.to_lowercase()).collect();
            prop_assert!(keys.windows(2).all(|w| w[0] <= w[1]), "not alphabetical: {:?}", keys);
        }
        prop_assert_eq!(&seen, response.ids());

        let sections = response.sections();
        match sections.len() {
            0 => prop_assert!(response.ids().is_empty()),
            1 => {
                prop_assert_eq!(sections[0].kind, SectionKind::Untitled);
                let classes: BTreeSet<bool> =
                    sections[0].cities.iter().map(|c| c.size.is_big_or_middle()).collect();
                prop_assert_eq!(classes.len(), 1);
            }
            2 => {
                prop_assert_eq!(sections[0].kind, SectionKind::CombinedSizes(CombinedCitySizes::BigAndMiddle));
                prop_assert_eq!(sections[1].kind, SectionKind::CombinedSizes(CombinedCitySizes::Small));
                prop_assert!(!sections[0].is_empty() && !sections[1].is_empty());
                prop_assert!(sections[0].cities.iter().all(|c| c.size.is_big_or_middle()));
                prop_assert!(sections[1].cities.iter().all(|c| c.size == CitySize::Small));
            }
            n => prop_assert!(false, "unexpected section count {}", n),
        }
    }

    /// The default response holds the big-city prefix, sorted, and every id.
    #[test]
    fn default_response_shape(cities in catalog_strategy()) {
        let mut expected: Vec<String> = cities
            .iter()
            .take_while(|c| c.size == CitySize::Big)
            .map(|c| c.name.clone())
            .collect();
        expected.sort();
        let all_ids: BTreeSet<u32> = cities.iter().map(|c| c.id).collect();

        let engine = CitySearchEngine::new(cities).unwrap();
        let response = engine.default_response();
        prop_assert_eq!(response.sections().len(), 1);
        prop_assert_eq!(response.sections()[0].kind, SectionKind::BigCities);
        let names: Vec<String> = response.sections()[0].cities.iter().map(|c| c.name.clone()).collect();
        prop_assert_eq!(names, expected);
        prop_assert_eq!(response.ids(), &all_ids);
        prop_assert!(!response.is_found_nothing());
    }

    /// Found-nothing holds exactly when a non-empty query has no ids.
    #[test]
    fn found_nothing_iff_no_ids(cities in catalog_strategy(), query in query_strategy()) {
        let engine = CitySearchEngine::new(cities).unwrap();
        let response = engine.search(&query);
        prop_assert_eq!(response.is_found_nothing(), response.ids().is_empty());
    }

    /// Nearest lookup returns a city at minimum distance, first one on ties.
    #[test]
    fn nearest_is_first_minimum(cities in catalog_strategy(), lat in -50.0f64..50.0, lon in -50.0f64..50.0) {
        let at = Coordinate::new(lat, lon);
        let expected = cities
            .iter()
            .map(|c| (c.id, Planar::distance(&c.coordinate, &at)))
            .fold(None::<(u32, f64)>, |best, (id, d)| match best {
                Some((_, min)) if d >= min => best,
                _ => Some((id, d)),
            })
            .map(|(id, _)| id);

        let engine = CitySearchEngine::<Planar>::build(cities, EngineConfig::default()).unwrap();
        prop_assert_eq!(engine.find_nearest_city(Some(at)).map(|c| c.id), expected);
    }
}
