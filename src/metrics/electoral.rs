use anyhow::{ensure, Result};

use crate::plan::Plan;

/// Half-width of the competitiveness window around perfect parity.
///
/// Valid range is (0, 0.5]. The default of 0.5 selects the full (0, 1)
/// range and so filters out almost nothing; callers wanting a meaningful
/// cut supply something tighter, commonly 0.05.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin(f64);

impl Margin {
    /// The permissive default window, covering every contested district.
    pub const DEFAULT: Margin = Margin(0.5);

    /// Validate and wrap a margin value.
    pub fn new(value: f64) -> Result<Self> {
        ensure!(
            value > 0.0 && value <= 0.5,
            "[Margin] value must be in (0, 0.5], got {value}"
        );
        Ok(Self(value))
    }

    /// The wrapped half-width.
    #[inline] pub fn get(self) -> f64 { self.0 }

    /// The open interval (low, high) around 0.5 selected by this margin.
    #[inline] pub fn window(self) -> (f64, f64) { (0.5 - self.0, 0.5 + self.0) }
}

impl Default for Margin {
    fn default() -> Self { Self::DEFAULT }
}

/// Compute the representational fairness measure, or partisan differential:
/// the number of districts leaning Democratic minus the number leaning
/// Republican.
///
/// A district leans toward a party when that party's share of the two-party
/// vote exceeds 0.5; an exact 50/50 split leans toward neither. Districts
/// without a valid partisan signal are skipped entirely. The unassigned
/// placeholder is NOT excluded here; callers that want it out filter the
/// plan first (e.g. via [`Plan::assigned`]).
///
/// A result of 0 means the plan is balanced; the sign gives the direction
/// of bias (positive favors the Democratic party) and the magnitude its
/// severity.
pub fn representational_fairness(plan: &Plan) -> i64 {
    let mut dems = 0;
    let mut reps = 0;
    for district in plan.iter() {
        let Some(shares) = district.partisan_shares() else { continue };
        if shares.democratic > 0.5 {
            dems += 1;
        } else if shares.republican > 0.5 {
            reps += 1;
        }
    }

    dems - reps
}

/// Count the districts whose Democratic share of the two-party vote falls
/// strictly inside the window around parity selected by `margin`.
///
/// Shares exactly on the window boundary do not count. The unassigned
/// placeholder and districts without a valid partisan signal are excluded.
pub fn competitiveness(plan: &Plan, margin: Margin) -> usize {
    let (low, high) = margin.window();
    plan.assigned()
        .filter_map(|district| district.partisan_shares())
        .filter(|shares| low < shares.democratic && shares.democratic < high)
        .count()
}
