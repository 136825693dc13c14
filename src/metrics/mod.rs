mod compactness;
mod electoral;
mod metric;
mod splits;

pub use compactness::{convex_hull_ratio, polsby_popper, schwartzberg, HullScope};
pub use electoral::{competitiveness, representational_fairness, Margin};
pub use metric::{Metric, ScoreCard};
pub use splits::count_splits;
