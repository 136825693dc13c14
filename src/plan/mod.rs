mod district;
mod plan;

pub use district::{District, DistrictId, PartisanShares, VoteTally};
pub use plan::Plan;
