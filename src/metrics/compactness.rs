use std::f64::consts::PI;

use geo::{Area, ConvexHull};

use crate::plan::{District, Plan};

/// Input selector for [`convex_hull_ratio`]: score a single district, or
/// average across a whole plan.
#[derive(Debug, Clone, Copy)]
pub enum HullScope<'a> {
    SingleDistrict(&'a District),
    WholePlan(&'a Plan),
}

/// Compute the convex hull compactness score (0 to 1).
/// Formula: area(geometry) / area(convex_hull(geometry))
/// A score of 1 means the shape is already convex.
///
/// In `SingleDistrict` mode, returns `None` for empty or degenerate
/// (zero hull area) geometry. In `WholePlan` mode, returns the mean score
/// over real districts, skipping the unassigned placeholder and districts
/// with empty geometry or zero perimeter; if no district qualifies the
/// result is `Some(0.0)`.
pub fn convex_hull_ratio(scope: HullScope<'_>) -> Option<f64> {
    match scope {
        HullScope::SingleDistrict(district) => hull_ratio(district),
        HullScope::WholePlan(plan) => {
            let mut sum = 0.0;
            let mut count = 0;
            for district in plan.assigned() {
                if district.perimeter() == 0.0 { continue }
                let Some(ratio) = hull_ratio(district) else { continue };
                sum += ratio;
                count += 1;
            }

            if count == 0 { Some(0.0) } else { Some(sum / count as f64) }
        }
    }
}

/// Ratio of a district's area to its convex hull's area, or `None` when the
/// geometry is empty or the hull degenerates to zero area.
fn hull_ratio(district: &District) -> Option<f64> {
    if district.is_geometry_empty() { return None }

    let hull_area = district.geometry().convex_hull().unsigned_area();
    if hull_area == 0.0 { return None }

    Some(district.area() / hull_area)
}

/// Compute the Polsby-Popper compactness score for a district (0 to 1).
/// Formula: 4 * pi * area / (perimeter^2)
/// A score of 1 means a perfect circle. `None` if the perimeter is zero.
pub fn polsby_popper(district: &District) -> Option<f64> {
    let perimeter = district.perimeter();
    if perimeter == 0.0 { return None }
    Some(4.0 * PI * district.area() / (perimeter * perimeter))
}

/// Compute the Schwartzberg compactness score for a district.
/// Formula: 2 * pi * sqrt(area / pi) / perimeter
/// `None` if the perimeter is zero.
pub fn schwartzberg(district: &District) -> Option<f64> {
    let perimeter = district.perimeter();
    if perimeter == 0.0 { return None }
    Some(2.0 * PI * (district.area() / PI).sqrt() / perimeter)
}
