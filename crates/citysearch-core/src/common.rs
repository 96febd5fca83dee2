// crates/citysearch-core/src/common.rs
use crate::model::{CitySize, Coordinate};
use crate::traits::DistanceMetric;
use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometres (IUGG).
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Great-circle distance in kilometres (haversine formula).
#[derive(Clone, Copy, Debug, Default)]
pub struct GreatCircle;

impl DistanceMetric for GreatCircle {
    fn distance(a: &Coordinate, b: &Coordinate) -> f64 {
        let lat1 = a.latitude.to_radians();
        let lat2 = b.latitude.to_radians();
        let d_lat = (b.latitude - a.latitude).to_radians();
        let d_lon = (b.longitude - a.longitude).to_radians();

        let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
    }
}

/// Euclidean distance on raw degree pairs. Cheap, and good enough for
/// small regions away from the poles and the antimeridian.
#[derive(Clone, Copy, Debug, Default)]
pub struct Planar;

impl DistanceMetric for Planar {
    fn distance(a: &Coordinate, b: &Coordinate) -> f64 {
        (a.latitude - b.latitude).hypot(a.longitude - b.longitude)
    }
}

/// Simple aggregate statistics for a catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub cities: usize,
    pub big: usize,
    pub middle: usize,
    pub small: usize,
}

impl CatalogStats {
    pub(crate) fn count(&mut self, size: CitySize) {
        self.cities += 1;
        match size {
            CitySize::Big => self.big += 1,
            CitySize::Middle => self.middle += 1,
            CitySize::Small => self.small += 1,
        }
    }
}
