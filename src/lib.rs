#![doc = "Mander public API: fairness and compactness metrics for districting plans"]
mod metrics;
mod plan;

#[doc(inline)]
pub use plan::{District, DistrictId, PartisanShares, Plan, VoteTally};

#[doc(inline)]
pub use metrics::{
    competitiveness, convex_hull_ratio, count_splits, polsby_popper,
    representational_fairness, schwartzberg, HullScope, Margin, Metric, ScoreCard,
};
