// crates/citysearch-core/src/traits.rs
use crate::model::Coordinate;

/// Distance metric between two coordinates.
///
/// The metric belongs to the surrounding application, not the engine: the
/// engine only needs a total "closer than" relation for nearest-city lookup.
/// Implementors are zero-sized markers selected through a type parameter,
/// so engines built with different metrics are distinct types.
///
/// # Examples
/// ```rust
/// use citysearch_core::{Coordinate, DistanceMetric, Planar};
///
/// let d = Planar::distance(&Coordinate::new(0.0, 0.0), &Coordinate::new(3.0, 4.0));
/// assert_eq!(d, 5.0);
/// ```
pub trait DistanceMetric: Send + Sync + 'static {
    /// Non-negative distance between `a` and `b`. Smaller means closer.
    fn distance(a: &Coordinate, b: &Coordinate) -> f64;
}
