//! Reusable terrain fixtures.

use duff_core::{ElementStock, FamilyId, LitterPool, PatchId};
use duff_terrain::{Patch, PatchFamily, Vegetation, Zone, ZoneDefaults};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Build a patch with the same carbon/nitrogen density in all four
/// pools and a root depth proportional to its cover.
///
/// Panics on invalid inputs; fixtures are for tests, where that is the
/// right failure mode.
pub fn patch(id: u64, area: f64, vegetation: Vegetation, carbon: f64, nitrogen: f64) -> Patch {
    let density = ElementStock::new(carbon, nitrogen);
    let mut builder = Patch::builder(PatchId(id)).area(area).vegetation(vegetation);
    for pool in LitterPool::ALL {
        builder = builder.litter(pool, density);
    }
    let depth = if vegetation.is_vegetated() { 0.5 } else { 0.0 };
    builder.root_depth(depth).build().unwrap()
}

/// A grass-covered patch holding the given labile density in every pool.
pub fn vegetated_patch(id: u64, area: f64, carbon: f64) -> Patch {
    patch(id, area, Vegetation::Grass, carbon, carbon / 10.0)
}

/// A bare patch holding the given labile density in every pool.
pub fn bare_patch(id: u64, area: f64, carbon: f64) -> Patch {
    patch(id, area, Vegetation::NonVegetated, carbon, carbon / 10.0)
}

/// Assemble a family from patches.
pub fn family(id: u64, patches: Vec<Patch>) -> PatchFamily {
    let mut family = PatchFamily::new(FamilyId(id));
    for p in patches {
        family.add_patch(p).unwrap();
    }
    family
}

/// Assemble a zone with the given transfer-efficiency coefficient.
pub fn zone(sh_litter: f64, families: Vec<PatchFamily>) -> Zone {
    let mut zone = Zone::new(ZoneDefaults::new(sh_litter).unwrap());
    for f in families {
        zone.add_family(f).unwrap();
    }
    zone
}

/// Deterministic random family: mixed vegetated and bare patches with
/// varied areas, densities, and root depths.
///
/// Patch IDs start at `id * 1000` so families generated for the same
/// zone never collide. Identical `(id, seed, patch_count)` inputs
/// produce identical families.
pub fn seeded_family(id: u64, seed: u64, patch_count: usize) -> PatchFamily {
    let mut rng = ChaCha8Rng::seed_from_u64(seed ^ id);
    let mut family = PatchFamily::new(FamilyId(id));
    for i in 0..patch_count {
        let vegetation = if rng.random_bool(0.3) {
            Vegetation::NonVegetated
        } else {
            [Vegetation::Grass, Vegetation::Shrub, Vegetation::Tree]
                [rng.random_range(0..3)]
        };
        let mut builder = Patch::builder(PatchId(id * 1000 + i as u64))
            .area(rng.random_range(1.0..200.0))
            .vegetation(vegetation)
            .root_depth(if vegetation.is_vegetated() {
                rng.random_range(0.1..2.0)
            } else {
                0.0
            });
        for pool in LitterPool::ALL {
            let carbon: f64 = rng.random_range(0.0..12.0);
            let nitrogen = carbon * rng.random_range(0.02..0.2);
            builder = builder.litter(pool, ElementStock::new(carbon, nitrogen));
        }
        family.add_patch(builder.build().unwrap()).unwrap();
    }
    family
}

/// Deterministic random zone of `families` families with
/// `patches_per_family` patches each.
pub fn seeded_zone(seed: u64, families: usize, patches_per_family: usize) -> Zone {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let sh_litter = rng.random_range(0.0..=1.0);
    let mut zone = Zone::new(ZoneDefaults::new(sh_litter).unwrap());
    for id in 0..families {
        zone.add_family(seeded_family(id as u64 + 1, seed, patches_per_family))
            .unwrap();
    }
    zone
}
