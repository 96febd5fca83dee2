// crates/citysearch-core/src/model.rs
use crate::traits::DistanceMetric;
use serde::{Deserialize, Serialize};

/// Size tier of a city. Declaration order is the tier order: `Big` is the
/// top tier and compares lowest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CitySize {
    Big,
    Middle,
    Small,
}

impl CitySize {
    /// `true` for `Big` and `Middle`, the tiers shown in the first section.
    #[inline]
    pub fn is_big_or_middle(self) -> bool {
        self < CitySize::Small
    }
}

/// A geographic position in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Distance to `other` under the metric `M`.
    #[inline]
    pub fn distance_to<M: DistanceMetric>(&self, other: &Coordinate) -> f64 {
        M::distance(self, other)
    }
}

/// A city in the catalog.
///
/// `id` is expected to equal the city's position in the catalog handed to
/// the engine (see [`crate::Validation`]).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: u32,
    pub name: String,
    pub size: CitySize,
    pub coordinate: Coordinate,
}

impl City {
    pub fn new(id: u32, name: impl Into<String>, size: CitySize, coordinate: Coordinate) -> Self {
        Self {
            id,
            name: name.into(),
            size,
            coordinate,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Raw city structure as it comes from a catalog file.
///
/// ```json
/// { "id": 0, "name": "San Jose", "size": "small", "latitude": 37.34, "longitude": -121.89 }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct CityRaw {
    pub id: u32,
    pub name: String,
    pub size: CitySize,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<CityRaw> for City {
    fn from(raw: CityRaw) -> Self {
        City {
            id: raw.id,
            name: raw.name,
            size: raw.size,
            coordinate: Coordinate::new(raw.latitude, raw.longitude),
        }
    }
}

/// Which tiers a combined section holds. `ALL` is in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CombinedCitySizes {
    BigAndMiddle,
    Small,
}

impl CombinedCitySizes {
    pub const ALL: [CombinedCitySizes; 2] = [CombinedCitySizes::BigAndMiddle, CombinedCitySizes::Small];
}

/// Label of a result section.
///
/// The default response holds a single `BigCities` section; a search holds
/// either one `Untitled` section or both `CombinedSizes` sections.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKind {
    BigCities,
    Untitled,
    CombinedSizes(CombinedCitySizes),
}

/// A labelled group of cities, alphabetically ordered.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListSection {
    pub kind: SectionKind,
    pub cities: Vec<City>,
}

impl ListSection {
    pub fn new(kind: SectionKind, cities: Vec<City>) -> Self {
        Self { kind, cities }
    }

    pub fn kind(&self) -> SectionKind {
        self.kind
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_tiers_are_ordered_big_first() {
        assert!(CitySize::Big < CitySize::Middle);
        assert!(CitySize::Middle < CitySize::Small);
        assert!(CitySize::Big.is_big_or_middle());
        assert!(CitySize::Middle.is_big_or_middle());
        assert!(!CitySize::Small.is_big_or_middle());
    }

    #[test]
    fn raw_city_converts_into_city() {
        let raw: CityRaw = serde_json::from_str(
            r#"{ "id": 3, "name": "Santa Cruz", "size": "middle", "latitude": 36.97, "longitude": -122.03 }"#,
        )
        .unwrap();
        let city = City::from(raw);
        assert_eq!(city.id, 3);
        assert_eq!(city.name(), "Santa Cruz");
        assert_eq!(city.size, CitySize::Middle);
        assert_eq!(city.coordinate, Coordinate::new(36.97, -122.03));
    }

    #[test]
    fn section_kinds_serialize_as_labels() {
        let json = serde_json::to_string(&SectionKind::CombinedSizes(CombinedCitySizes::BigAndMiddle)).unwrap();
        assert_eq!(json, r#"{"combinedSizes":"bigAndMiddle"}"#);
        assert_eq!(serde_json::to_string(&SectionKind::BigCities).unwrap(), r#""bigCities""#);
    }
}
