//! Area-weighted family means.

use duff_core::{ElementStock, LitterPool};
use duff_terrain::PatchFamily;

/// Area-weighted means and cover totals for one patch family.
///
/// Computed in a single traversal before a pass (and again after it,
/// for verification). Patches whose area is at or below the epsilon
/// threshold do not participate.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FamilyAggregate {
    /// Mean litter density per pool, in [`LitterPool::ALL`] order.
    pub means: [ElementStock; 4],
    /// Area-weighted mean root-zone depth.
    pub root_depth_mean: f64,
    /// Total participating area.
    pub area: f64,
    /// Participating area covered by non-vegetated patches.
    pub non_veg_area: f64,
    /// Number of participating patches.
    pub participating: usize,
    /// Number of participating non-vegetated patches.
    pub non_veg_count: usize,
}

impl FamilyAggregate {
    /// Mean density of one pool.
    pub fn mean(&self, pool: LitterPool) -> ElementStock {
        self.means[pool.index()]
    }

    /// `true` if the family contains at least one vegetated patch
    /// alongside its non-vegetated ones. Loss collection only makes
    /// sense under mixed cover: an all-bare family has no donors.
    pub fn has_mixed_cover(&self) -> bool {
        self.participating > self.non_veg_count
    }
}

/// Compute the area-weighted means over a family's patches.
///
/// Accumulates `density × area` per pool and element plus
/// `root_depth × area` over every patch with `area > epsilon`, then
/// divides by the accumulated area. If the accumulated area itself is
/// at or below `epsilon`, every mean is defined as zero — no division
/// takes place. Does not mutate the family.
pub fn aggregate(family: &PatchFamily, epsilon: f64) -> FamilyAggregate {
    let mut agg = FamilyAggregate::default();

    for patch in family.patches() {
        let area = patch.area();
        if area <= epsilon {
            continue;
        }
        for (pool, density) in patch.litter().iter() {
            agg.means[pool.index()] += density * area;
        }
        agg.root_depth_mean += patch.root_depth() * area;
        agg.area += area;
        agg.participating += 1;
        if !patch.is_vegetated() {
            agg.non_veg_area += area;
            agg.non_veg_count += 1;
        }
    }

    if agg.area > epsilon {
        for mean in &mut agg.means {
            *mean = *mean / agg.area;
        }
        agg.root_depth_mean /= agg.area;
    } else {
        agg.means = [ElementStock::ZERO; 4];
        agg.root_depth_mean = 0.0;
    }

    agg
}
