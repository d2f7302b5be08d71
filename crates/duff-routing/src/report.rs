//! Per-pass accumulator reports.

use duff_core::{ElementStock, FamilyId, LitterPool};

/// A pool/element pair whose post-pass mean exceeded its pre-pass mean.
///
/// A conserving transfer should never raise the family mean; the
/// verifier reports the violation without correcting it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConservationWarning {
    /// The pool that failed verification.
    pub pool: LitterPool,
    /// Pre-pass area-weighted mean density.
    pub before: ElementStock,
    /// Post-pass area-weighted mean density.
    pub after: ElementStock,
}

/// Accumulator totals for one pool's pass over a family.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PoolReport {
    /// Mass removed from above-mean vegetated donors.
    pub collected: ElementStock,
    /// Summed area of the donating patches.
    pub donor_area: f64,
    /// Number of donating patches.
    pub donors: usize,
    /// Cumulative unscaled receiver allocation.
    pub potential: ElementStock,
    /// Cumulative receiver allocation after efficiency scaling.
    pub actual: ElementStock,
    /// Summed area of the qualifying receivers.
    pub receiver_area: f64,
    /// Number of qualifying receivers.
    pub receivers: usize,
    /// Mass returned to the donors (efficiency losses, clamped
    /// surplus, and the share owed to unqualified receiver area).
    pub returned: ElementStock,
    /// Pre-pass mean density.
    pub mean_before: ElementStock,
    /// Post-pass mean density.
    pub mean_after: ElementStock,
    /// Set when the post-pass mean exceeded the pre-pass mean.
    pub warning: Option<ConservationWarning>,
}

/// Outcome of one redistribution pass over a family.
#[derive(Clone, Debug, PartialEq)]
pub struct FamilyReport {
    /// The family this pass covered.
    pub family: FamilyId,
    /// Member patch count at pass time.
    pub patch_count: usize,
    /// `true` if the family was inert (≤1 patch) and left untouched.
    pub skipped: bool,
    /// Per-pool totals, in [`LitterPool::ALL`] order.
    pub pools: [PoolReport; 4],
}

impl FamilyReport {
    /// Report for an inert family that the pass skipped.
    pub fn skipped(family: FamilyId, patch_count: usize) -> Self {
        Self {
            family,
            patch_count,
            skipped: true,
            pools: std::array::from_fn(|_| PoolReport::default()),
        }
    }

    /// Totals for one pool.
    pub fn pool(&self, pool: LitterPool) -> &PoolReport {
        &self.pools[pool.index()]
    }

    /// Conservation warnings across all pools, in pool order.
    pub fn warnings(&self) -> impl Iterator<Item = &ConservationWarning> {
        self.pools.iter().filter_map(|p| p.warning.as_ref())
    }
}
