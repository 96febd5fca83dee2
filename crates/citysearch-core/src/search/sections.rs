// crates/citysearch-core/src/search/sections.rs
use super::range::upper_bound_by;
use crate::model::{City, CitySize, CombinedCitySizes, ListSection, SectionKind};
use std::cmp::Ordering;
use std::ops::Range;

/// Groups matched cities into display sections by size tier.
///
/// `positions` are catalog positions in alphabetical order. Big and middle
/// cities are moved ahead of small ones with a stable sort, so each group
/// stays alphabetical. When both groups are present two `CombinedSizes`
/// sections are returned, otherwise a single `Untitled` one. No matches
/// yield no sections.
pub fn partition_by_size(cities: &[City], positions: &[usize]) -> Vec<ListSection> {
    if positions.is_empty() {
        return Vec::new();
    }

    let mut items: Vec<(usize, CitySize)> = positions.iter().map(|&p| (p, cities[p].size)).collect();
    items.sort_by_key(|&(_, size)| !size.is_big_or_middle());

    let threshold = upper_bound_by(&items, |&(_, size)| {
        if size.is_big_or_middle() {
            Ordering::Equal
        } else {
            Ordering::Greater
        }
    });
    let count = items.len();

    let section_cities = |range: Range<usize>| -> Vec<City> {
        items[range].iter().map(|&(p, _)| cities[p].clone()).collect()
    };

    if threshold > 0 && threshold < count {
        CombinedCitySizes::ALL
            .into_iter()
            .map(|sizes| {
                let range = match sizes {
                    CombinedCitySizes::BigAndMiddle => 0..threshold,
                    CombinedCitySizes::Small => threshold..count,
                };
                ListSection::new(SectionKind::CombinedSizes(sizes), section_cities(range))
            })
            .collect()
    } else {
        vec![ListSection::new(SectionKind::Untitled, section_cities(0..count))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Coordinate;

    fn city(id: u32, name: &str, size: CitySize) -> City {
        City::new(id, name, size, Coordinate::new(0.0, 0.0))
    }

    fn names(section: &ListSection) -> Vec<&str> {
        section.cities.iter().map(City::name).collect()
    }

    #[test]
    fn mixed_tiers_split_into_two_sections() {
        let cities = vec![
            city(0, "Alpha", CitySize::Small),
            city(1, "Bravo", CitySize::Big),
            city(2, "Charlie", CitySize::Small),
            city(3, "Delta", CitySize::Middle),
        ];
        let sections = partition_by_size(&cities, &[0, 1, 2, 3]);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].kind, SectionKind::CombinedSizes(CombinedCitySizes::BigAndMiddle));
        assert_eq!(names(&sections[0]), ["Bravo", "Delta"]);
        assert_eq!(sections[1].kind, SectionKind::CombinedSizes(CombinedCitySizes::Small));
        assert_eq!(names(&sections[1]), ["Alpha", "Charlie"]);
    }

    #[test]
    fn stable_sort_keeps_alphabetical_order_within_groups() {
        // Middle before big alphabetically: the sort must not reorder them.
        let cities = vec![
            city(0, "Abbey", CitySize::Middle),
            city(1, "Bolt", CitySize::Small),
            city(2, "Crest", CitySize::Big),
            city(3, "Dune", CitySize::Small),
            city(4, "Elm", CitySize::Middle),
        ];
        let sections = partition_by_size(&cities, &[0, 1, 2, 3, 4]);
        assert_eq!(names(&sections[0]), ["Abbey", "Crest", "Elm"]);
        assert_eq!(names(&sections[1]), ["Bolt", "Dune"]);
    }

    #[test]
    fn single_tier_class_is_untitled() {
        let cities = vec![city(0, "A", CitySize::Small), city(1, "B", CitySize::Small)];
        let sections = partition_by_size(&cities, &[1, 0]);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].kind, SectionKind::Untitled);
        assert_eq!(names(&sections[0]), ["B", "A"]);

        let cities = vec![city(0, "A", CitySize::Big), city(1, "B", CitySize::Middle)];
        let sections = partition_by_size(&cities, &[0, 1]);
        assert_eq!(sections[0].kind, SectionKind::Untitled);
    }

    #[test]
    fn no_matches_no_sections() {
        let cities = vec![city(0, "A", CitySize::Big)];
        assert!(partition_by_size(&cities, &[]).is_empty());
    }
}
