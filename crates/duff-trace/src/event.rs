//! Trace event payloads emitted by the redistribution pass.

use duff_core::{ElementStock, FamilyId, LitterPool};
use std::fmt;

/// One observation from a redistribution pass.
///
/// Events carry copies of the accumulator state at well-defined points
/// of a family pass; they are emitted in a fixed order (aggregate,
/// then per pool collect/distribute/return, then per pool verify) and
/// never reference live patch state.
#[derive(Clone, Debug, PartialEq)]
pub enum TraceEvent {
    /// A family with fewer than two patches was skipped untouched.
    FamilySkipped {
        /// The skipped family.
        family: FamilyId,
        /// Its patch count (0 or 1).
        patch_count: usize,
    },
    /// Area-weighted means computed over a family, before any transfer.
    Aggregated {
        /// The family under redistribution.
        family: FamilyId,
        /// Mean density per pool, in [`LitterPool::ALL`] order.
        means: [ElementStock; 4],
        /// Area-weighted mean root-zone depth.
        root_depth_mean: f64,
        /// Total participating area.
        area: f64,
        /// Area of non-vegetated patches.
        non_veg_area: f64,
    },
    /// Excess litter collected from above-mean vegetated patches.
    Collected {
        /// The family under redistribution.
        family: FamilyId,
        /// The pool this collection applies to.
        pool: LitterPool,
        /// Total mass removed from donors.
        total: ElementStock,
        /// Summed area of the donating patches.
        donor_area: f64,
        /// Number of donating patches.
        donors: usize,
    },
    /// Collected litter distributed to below-mean non-vegetated patches.
    Distributed {
        /// The family under redistribution.
        family: FamilyId,
        /// The pool this distribution applies to.
        pool: LitterPool,
        /// Cumulative unscaled allocation.
        potential: ElementStock,
        /// Cumulative allocation after the transfer-efficiency scaling.
        actual: ElementStock,
        /// Summed area of the qualifying receivers.
        receiver_area: f64,
        /// Number of qualifying receivers.
        receivers: usize,
    },
    /// Unplaced mass returned to the donor patches.
    Returned {
        /// The family under redistribution.
        family: FamilyId,
        /// The pool this return applies to.
        pool: LitterPool,
        /// Mass handed back, apportioned by donor area.
        unplaced: ElementStock,
        /// Summed area of the donors receiving the return.
        donor_area: f64,
    },
    /// Post-pass mean compared against the pre-pass mean.
    Verified {
        /// The family under redistribution.
        family: FamilyId,
        /// The pool verified.
        pool: LitterPool,
        /// Pre-pass mean density.
        before: ElementStock,
        /// Post-pass mean density.
        after: ElementStock,
        /// `false` if the mean increased beyond tolerance, which a
        /// conserving transfer should never produce.
        balanced: bool,
    },
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FamilySkipped {
                family,
                patch_count,
            } => {
                write!(f, "family {family}: skipped ({patch_count} patch)")
            }
            Self::Aggregated {
                family,
                means,
                root_depth_mean,
                area,
                non_veg_area,
            } => {
                write!(
                    f,
                    "family {family}: means [{} | {} | {} | {}], \
                     root depth {root_depth_mean:.4}, area {area:.2} \
                     (non-veg {non_veg_area:.2})",
                    means[0], means[1], means[2], means[3],
                )
            }
            Self::Collected {
                family,
                pool,
                total,
                donor_area,
                donors,
            } => {
                write!(
                    f,
                    "family {family}: {pool} collected {total} \
                     from {donors} donors over area {donor_area:.2}"
                )
            }
            Self::Distributed {
                family,
                pool,
                potential,
                actual,
                receiver_area,
                receivers,
            } => {
                write!(
                    f,
                    "family {family}: {pool} distributed actual {actual} \
                     of potential {potential} to {receivers} receivers \
                     over area {receiver_area:.2}"
                )
            }
            Self::Returned {
                family,
                pool,
                unplaced,
                donor_area,
            } => {
                write!(
                    f,
                    "family {family}: {pool} returned {unplaced} \
                     to donors over area {donor_area:.2}"
                )
            }
            Self::Verified {
                family,
                pool,
                before,
                after,
                balanced,
            } => {
                if *balanced {
                    write!(
                        f,
                        "family {family}: {pool} verified, \
                         mean {before} -> {after}"
                    )
                } else {
                    write!(
                        f,
                        "WARNING family {family}: {pool} not balanced, \
                         mean {before} -> {after}"
                    )
                }
            }
        }
    }
}
