use anyhow::{bail, Result};
use geo::{Area, Euclidean, Length, MultiPolygon};
use serde::{Deserialize, Serialize};

/// Identifies a district within a plan.
///
/// `Unassigned` is the placeholder for territory not yet assigned to any
/// real district. Several metrics exclude it; see each metric's docs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistrictId {
    Unassigned,
    District(u32),
}

impl DistrictId {
    /// Returns true for the unassigned placeholder.
    #[inline]
    pub fn is_unassigned(self) -> bool {
        matches!(self, DistrictId::Unassigned)
    }
}

/// Raw vote sums for one district, as they come out of a tabular source.
/// A field is `None` where the source had no data for that column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct VoteTally {
    pub total: Option<f64>,
    pub democratic: Option<f64>,
    pub republican: Option<f64>,
}

/// Two-party vote shares for a district with a valid partisan signal.
/// Each share is in [0, 1] and the two sum to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartisanShares {
    pub democratic: f64,
    pub republican: f64,
}

/// One electoral district: aggregated vote counts plus measurements derived
/// from its geometry.
///
/// `area` and `perimeter` are computed once at construction and cached; the
/// geometry is treated as immutable afterward.
#[derive(Debug, Clone)]
pub struct District {
    id: DistrictId,
    geometry: MultiPolygon<f64>,
    area: f64,
    perimeter: f64,
    total_votes: u64,
    democratic_votes: Option<u64>,
    republican_votes: Option<u64>,
}

impl District {
    /// Build a district from its geometry and raw vote tallies.
    ///
    /// Tally values must be finite and non-negative; fractional values are
    /// truncated toward zero. A missing total defaults to 0, while missing
    /// party tallies stay missing and are skipped by the vote-based metrics.
    /// No consistency check between the three tallies is performed.
    pub fn new(id: DistrictId, geometry: impl Into<MultiPolygon<f64>>, tally: VoteTally) -> Result<Self> {
        let geometry = geometry.into();
        let area = geometry.unsigned_area();
        let perimeter = boundary_length(&geometry);

        Ok(Self {
            id,
            area,
            perimeter,
            total_votes: coerce_votes("total", tally.total)?.unwrap_or(0),
            democratic_votes: coerce_votes("democratic", tally.democratic)?,
            republican_votes: coerce_votes("republican", tally.republican)?,
            geometry,
        })
    }

    #[inline] pub fn id(&self) -> DistrictId { self.id }

    /// Get a reference to the district's geometry.
    #[inline] pub fn geometry(&self) -> &MultiPolygon<f64> { &self.geometry }

    /// Sum of polygon areas, cached at construction.
    #[inline] pub fn area(&self) -> f64 { self.area }

    /// Sum of boundary ring lengths, cached at construction.
    #[inline] pub fn perimeter(&self) -> f64 { self.perimeter }

    #[inline] pub fn total_votes(&self) -> u64 { self.total_votes }
    #[inline] pub fn democratic_votes(&self) -> Option<u64> { self.democratic_votes }
    #[inline] pub fn republican_votes(&self) -> Option<u64> { self.republican_votes }

    /// True if the district has no polygons at all.
    #[inline]
    pub fn is_geometry_empty(&self) -> bool { self.geometry.0.is_empty() }

    /// Two-party vote shares, if the district carries a valid partisan
    /// signal: both party tallies present and at least one of them nonzero.
    /// Every vote-based metric uses this as its eligibility test.
    pub fn partisan_shares(&self) -> Option<PartisanShares> {
        let dem = self.democratic_votes? as f64;
        let rep = self.republican_votes? as f64;
        if dem == 0.0 && rep == 0.0 { return None }

        Some(PartisanShares {
            democratic: dem / (dem + rep),
            republican: rep / (dem + rep),
        })
    }
}

/// Total boundary length of a MultiPolygon (exterior and interior rings).
fn boundary_length(geometry: &MultiPolygon<f64>) -> f64 {
    geometry.iter()
        .map(|polygon| Euclidean.length(polygon.exterior())
            + polygon.interiors().iter().map(|ring| Euclidean.length(ring)).sum::<f64>())
        .sum()
}

/// Coerce a raw tally value to an integer vote count. `None` stays `None`.
fn coerce_votes(series: &str, value: Option<f64>) -> Result<Option<u64>> {
    match value {
        None => Ok(None),
        Some(v) if v.is_finite() && v >= 0.0 => Ok(Some(v as u64)),
        Some(v) => bail!("[District] vote count for '{series}' is not a valid tally: {v}"),
    }
}
