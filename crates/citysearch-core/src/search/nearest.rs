// crates/citysearch-core/src/search/nearest.rs
use crate::model::{City, Coordinate};
use crate::traits::DistanceMetric;

/// Closest city to `coordinate` under `M`, by linear scan.
///
/// Ties go to the city that comes first in the catalog. Cities whose
/// distance is NaN are skipped. Returns `None` for an empty catalog or when
/// no distance is a number.
pub fn nearest<'a, M: DistanceMetric>(cities: &'a [City], coordinate: &Coordinate) -> Option<&'a City> {
    let mut best: Option<(&City, f64)> = None;
    for city in cities {
        let distance = city.coordinate.distance_to::<M>(coordinate);
        if distance.is_nan() {
            continue;
        }
        if best.map_or(true, |(_, min)| distance < min) {
            best = Some((city, distance));
        }
    }
    best.map(|(city, _)| city)
}
