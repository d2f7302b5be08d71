//! The redistribution pass: collect, distribute, return, verify.

use crate::aggregate::{aggregate, FamilyAggregate};
use crate::config::SharingConfig;
use crate::report::{ConservationWarning, FamilyReport, PoolReport};
use duff_core::{ElementStock, LitterPool};
use duff_terrain::PatchFamily;
use duff_trace::{TraceEvent, TraceSink};
use smallvec::SmallVec;

/// Per-pool classification of a patch within one pass.
///
/// Tags are scoped to a single pool's pass and are independent across
/// pools: the same patch can donate for one pool and sit idle for
/// another.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Role {
    /// Participates but neither donated nor can receive.
    Idle,
    /// Vegetated patch that donated excess in the loss scan.
    Donor,
    /// Non-vegetated patch, eligible for the gain scan.
    Receiver,
}

/// Scratch role table, one slot per member patch. Inline up to 16
/// patches; larger families spill to the heap and the buffer is
/// dropped at the end of the pool pass.
type Roles = SmallVec<[Role; 16]>;

/// Run one redistribution pass over a family.
///
/// Families with fewer than two patches are skipped untouched. For
/// every other family the pass computes area-weighted means once,
/// writes the mean root-zone depth into each non-vegetated patch, runs
/// the collect/distribute/return stages for each of the four litter
/// pools, and verifies that no pool's family mean increased.
///
/// Total family mass per pool and element (density × area summed over
/// participating patches) is conserved to floating tolerance for any
/// transfer efficiency in `[0, 1]`. The pass is infallible; the only
/// failure signal is the non-fatal [`ConservationWarning`] in the
/// returned report.
pub fn route_family(
    family: &mut PatchFamily,
    config: &SharingConfig,
    sink: &mut dyn TraceSink,
) -> FamilyReport {
    let family_id = family.id();
    let patch_count = family.patch_count();

    if family.is_inert() {
        sink.record(&TraceEvent::FamilySkipped {
            family: family_id,
            patch_count,
        });
        return FamilyReport::skipped(family_id, patch_count);
    }

    let eps = config.epsilon();
    let pre = aggregate(family, eps);
    sink.record(&TraceEvent::Aggregated {
        family: family_id,
        means: pre.means,
        root_depth_mean: pre.root_depth_mean,
        area: pre.area,
        non_veg_area: pre.non_veg_area,
    });

    // Non-vegetated patches inherit the family mean root-zone depth;
    // the downstream mineralization step reads it in place of their
    // own zero depth. Once per family, not per pool.
    for patch in family.patches_mut() {
        if patch.area() > eps && !patch.is_vegetated() {
            patch.inherit_family_root_depth(pre.root_depth_mean);
        }
    }

    let mut pools: [PoolReport; 4] = std::array::from_fn(|_| PoolReport::default());
    for pool in LitterPool::ALL {
        pools[pool.index()] = route_pool(family, pool, &pre, config, sink);
    }

    let post = aggregate(family, eps);
    for pool in LitterPool::ALL {
        let report = &mut pools[pool.index()];
        let before = pre.mean(pool);
        let after = post.mean(pool);
        report.mean_before = before;
        report.mean_after = after;
        let balanced =
            after.carbon - before.carbon <= eps && after.nitrogen - before.nitrogen <= eps;
        if !balanced {
            report.warning = Some(ConservationWarning {
                pool,
                before,
                after,
            });
        }
        sink.record(&TraceEvent::Verified {
            family: family_id,
            pool,
            before,
            after,
            balanced,
        });
    }

    FamilyReport {
        family: family_id,
        patch_count,
        skipped: false,
        pools,
    }
}

/// Run collect → distribute → return for one pool.
fn route_pool(
    family: &mut PatchFamily,
    pool: LitterPool,
    pre: &FamilyAggregate,
    config: &SharingConfig,
    sink: &mut dyn TraceSink,
) -> PoolReport {
    let family_id = family.id();
    let mut roles: Roles = SmallVec::from_elem(Role::Idle, family.patch_count());
    let mut report = PoolReport::default();

    collect(family, pool, pre, config.epsilon(), &mut roles, &mut report);
    sink.record(&TraceEvent::Collected {
        family: family_id,
        pool,
        total: report.collected,
        donor_area: report.donor_area,
        donors: report.donors,
    });

    let unplaced = distribute(family, pool, pre, config, &roles, &mut report);
    sink.record(&TraceEvent::Distributed {
        family: family_id,
        pool,
        potential: report.potential,
        actual: report.actual,
        receiver_area: report.receiver_area,
        receivers: report.receivers,
    });

    return_unplaced(family, pool, pre, unplaced, config.epsilon(), &roles, &mut report);
    sink.record(&TraceEvent::Returned {
        family: family_id,
        pool,
        unplaced: report.returned,
        donor_area: report.donor_area,
    });

    report
}

/// Loss scan: drain above-mean vegetated patches down to the mean.
///
/// A patch donates when the family has mixed cover, the patch is
/// vegetated, its carbon density is positive, and both its carbon and
/// nitrogen densities strictly exceed the pool means. The excess
/// `(density − mean) × area` is accumulated and the patch is set
/// exactly to the mean, so no donor exceeds the mean afterwards.
/// Non-vegetated patches are tagged as receiver candidates here.
fn collect(
    family: &mut PatchFamily,
    pool: LitterPool,
    pre: &FamilyAggregate,
    eps: f64,
    roles: &mut Roles,
    report: &mut PoolReport,
) {
    let mean = pre.mean(pool);
    let mixed = pre.has_mixed_cover();

    for (i, patch) in family.patches_mut().iter_mut().enumerate() {
        let area = patch.area();
        if area <= eps {
            continue;
        }
        if !patch.is_vegetated() {
            roles[i] = Role::Receiver;
            continue;
        }
        let density = patch.litter()[pool];
        if mixed && density.carbon > 0.0 && density.both_above(&mean) {
            report.collected += (density - mean) * area;
            report.donor_area += area;
            report.donors += 1;
            patch.litter_mut()[pool] = mean;
            roles[i] = Role::Donor;
        }
    }
}

/// Gain scan: allocate the collected mass to below-mean receivers.
///
/// Each qualifying receiver gets an area-proportional share of the
/// collection, scaled by the transfer-efficiency coefficient. Returns
/// the unplaced remainder: the per-receiver potential−actual gap, any
/// surplus clamped off a receiver pushed past the mean, and the share
/// owed to non-vegetated area that never qualified.
fn distribute(
    family: &mut PatchFamily,
    pool: LitterPool,
    pre: &FamilyAggregate,
    config: &SharingConfig,
    roles: &Roles,
    report: &mut PoolReport,
) -> ElementStock {
    if report.donors == 0 {
        return ElementStock::ZERO;
    }

    let eps = config.epsilon();
    let collected = report.collected;

    if pre.non_veg_area <= eps {
        // No receiver area at all: the whole collection goes back.
        return collected;
    }

    let mean = pre.mean(pool);
    let mut unplaced = ElementStock::ZERO;

    for (i, patch) in family.patches_mut().iter_mut().enumerate() {
        if roles[i] != Role::Receiver {
            continue;
        }
        let density = patch.litter()[pool];
        if !density.both_below(&mean) {
            continue;
        }
        let area = patch.area();
        let potential = collected / pre.non_veg_area * area;
        let actual = potential * config.transfer_efficiency();

        patch.litter_mut()[pool] = density + actual / area;
        report.potential += potential;
        report.actual += actual;
        report.receiver_area += area;
        report.receivers += 1;
        unplaced += potential - actual;

        // A receiver pushed past the mean is clamped back down and the
        // surplus banked for the donors.
        let updated = patch.litter()[pool];
        if updated.both_above(&mean) {
            unplaced += (updated - mean) * area;
            patch.litter_mut()[pool] = mean;
        }
    }

    // Non-vegetated area that never qualified (already at or above the
    // mean) still carried a share of the collection; bank it.
    let unqualified = pre.non_veg_area - report.receiver_area;
    if unqualified > eps {
        unplaced += collected / pre.non_veg_area * unqualified;
    }

    unplaced
}

/// Return the unplaced mass to the donors, apportioned by donor area.
///
/// Fires only when both element totals are strictly positive, the
/// donor area is above epsilon, and the totals are finite; each donor
/// still at or above the mean gains `unplaced / donor_area` density.
/// A pure reallocation among the patches that donated — it never
/// changes total family mass.
fn return_unplaced(
    family: &mut PatchFamily,
    pool: LitterPool,
    pre: &FamilyAggregate,
    unplaced: ElementStock,
    eps: f64,
    roles: &Roles,
    report: &mut PoolReport,
) {
    if !unplaced.is_finite() {
        return;
    }
    if !unplaced.both_positive() || report.donor_area <= eps {
        return;
    }

    let mean = pre.mean(pool);
    for (i, patch) in family.patches_mut().iter_mut().enumerate() {
        if roles[i] != Role::Donor {
            continue;
        }
        let density = patch.litter()[pool];
        if !patch.is_vegetated() || !density.both_at_or_above(&mean) {
            continue;
        }
        let area = patch.area();
        let share = unplaced / report.donor_area * area;
        patch.litter_mut()[pool] = density + share / area;
    }
    report.returned = unplaced;
}
