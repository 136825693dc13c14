use std::fmt;

use anyhow::Result;
use serde::Serialize;

use crate::metrics::{
    competitiveness, convex_hull_ratio, polsby_popper, representational_fairness,
    schwartzberg, HullScope, Margin,
};
use crate::plan::{District, Plan};

#[derive(Clone, Debug)]
pub(crate) enum MetricKind {
    // Electoral metrics:
    RepresentationalFairness,
    Competitiveness { margin: Margin },

    // Geometric metrics:
    CompactnessConvexHull,
    CompactnessPolsbyPopper,
    CompactnessSchwartzberg,
}

/// A single plan-level metric specification.
#[derive(Clone)]
pub struct Metric {
    kind: MetricKind,
}

impl Metric {
    /// Partisan differential between Democratic- and Republican-leaning districts.
    pub fn representational_fairness() -> Self {
        Self { kind: MetricKind::RepresentationalFairness }
    }

    /// Count of districts within `margin` of perfect two-party parity.
    pub fn competitiveness(margin: Margin) -> Self {
        Self { kind: MetricKind::Competitiveness { margin } }
    }

    /// Mean convex hull compactness across real districts.
    pub fn compactness_convex_hull() -> Self {
        Self { kind: MetricKind::CompactnessConvexHull }
    }

    /// Mean Polsby-Popper compactness across real districts.
    pub fn compactness_polsby_popper() -> Self {
        Self { kind: MetricKind::CompactnessPolsbyPopper }
    }

    /// Mean Schwartzberg compactness across real districts.
    pub fn compactness_schwartzberg() -> Self {
        Self { kind: MetricKind::CompactnessSchwartzberg }
    }

    /// Get a short name for this metric (for display purposes).
    pub fn short_name(&self) -> &str {
        match &self.kind {
            MetricKind::RepresentationalFairness => "RepresentationalFairness",
            MetricKind::Competitiveness { .. } => "Competitiveness",
            MetricKind::CompactnessConvexHull => "CompactnessConvexHull",
            MetricKind::CompactnessPolsbyPopper => "CompactnessPolsbyPopper",
            MetricKind::CompactnessSchwartzberg => "CompactnessSchwartzberg",
        }
    }

    /// Evaluate this metric for a given plan.
    pub fn compute(&self, plan: &Plan) -> f64 {
        match &self.kind {
            MetricKind::RepresentationalFairness => representational_fairness(plan) as f64,
            MetricKind::Competitiveness { margin } => competitiveness(plan, *margin) as f64,
            MetricKind::CompactnessConvexHull => {
                convex_hull_ratio(HullScope::WholePlan(plan)).unwrap_or(0.0)
            }
            MetricKind::CompactnessPolsbyPopper => mean_over_districts(plan, polsby_popper),
            MetricKind::CompactnessSchwartzberg => mean_over_districts(plan, schwartzberg),
        }
    }
}

/// Mean of a per-district score over real districts, skipping districts the
/// score is undefined for. Returns 0 if no district qualifies.
fn mean_over_districts(plan: &Plan, score: impl Fn(&District) -> Option<f64>) -> f64 {
    let mut sum = 0.0;
    let mut count = 0;
    for district in plan.assigned() {
        let Some(value) = score(district) else { continue };
        sum += value;
        count += 1;
    }

    if count == 0 { 0.0 } else { sum / count as f64 }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self {
            MetricKind::RepresentationalFairness =>
                write!(f, "RepresentationalFairness"),
            MetricKind::Competitiveness { margin } =>
                write!(f, "Competitiveness(margin={})", margin.get()),
            MetricKind::CompactnessConvexHull =>
                write!(f, "CompactnessConvexHull"),
            MetricKind::CompactnessPolsbyPopper =>
                write!(f, "CompactnessPolsbyPopper"),
            MetricKind::CompactnessSchwartzberg =>
                write!(f, "CompactnessSchwartzberg"),
        }
    }
}

/// Allow Rust-side pretty printing
impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Metric({})", self.kind)
    }
}

impl fmt::Debug for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Every plan-level score in one place, ready for report emission.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreCard {
    pub representational_fairness: i64,
    pub competitive_districts: usize,
    pub convex_hull_ratio: f64,
    pub polsby_popper: f64,
    pub schwartzberg: f64,
}

impl ScoreCard {
    /// Score a plan, using `margin` for the competitiveness window.
    pub fn compute(plan: &Plan, margin: Margin) -> Self {
        Self {
            representational_fairness: representational_fairness(plan),
            competitive_districts: competitiveness(plan, margin),
            convex_hull_ratio: convex_hull_ratio(HullScope::WholePlan(plan)).unwrap_or(0.0),
            polsby_popper: mean_over_districts(plan, polsby_popper),
            schwartzberg: mean_over_districts(plan, schwartzberg),
        }
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
