use geo::{MultiPolygon, Relate};

use crate::plan::District;

/// Count how many reference features (counties, precincts, ...) the
/// district's boundary splits.
///
/// A feature counts as split when its interior lies partly inside and
/// partly outside the district: the two geometries intersect in more than
/// a boundary touch, and neither fully contains the other. Features merely
/// touching the boundary, fully inside, fully enclosing, or disjoint do
/// not count.
///
/// Returns `None` if the district's geometry is empty, and `Some(0)` when
/// no features are supplied.
pub fn count_splits(district: &District, features: &[MultiPolygon<f64>]) -> Option<usize> {
    if district.is_geometry_empty() { return None }

    let count = features.iter()
        .filter(|feature| {
            // One relate() call gives you the full DE-9IM:
            let im = feature.relate(district.geometry());
            im.is_intersects() && !im.is_touches() && !im.is_within() && !im.is_contains()
        })
        .count();

    Some(count)
}
