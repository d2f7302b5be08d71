//! The [`Zone`] container and its default parameter set.

use crate::{PatchFamily, TerrainError};
use duff_core::{FamilyId, PatchId};
use indexmap::{IndexMap, IndexSet};

/// Zone-level default parameters consumed by the redistribution pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoneDefaults {
    sh_litter: f64,
}

impl ZoneDefaults {
    /// Create a default set with the given litter transfer-efficiency
    /// coefficient.
    ///
    /// The coefficient is the fraction of collected excess litter that
    /// actually crosses patch boundaries; the remainder returns to the
    /// donor patches.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the coefficient is NaN or outside `[0, 1]`.
    pub fn new(sh_litter: f64) -> Result<Self, TerrainError> {
        if !(0.0..=1.0).contains(&sh_litter) {
            return Err(TerrainError::CoefficientOutOfRange(sh_litter));
        }
        Ok(Self { sh_litter })
    }

    /// The litter transfer-efficiency coefficient, in `[0, 1]`.
    pub fn sh_litter(&self) -> f64 {
        self.sh_litter
    }
}

/// A simulation zone: an ordered collection of patch families plus the
/// zone-level defaults.
///
/// Families are stored in insertion order (the order the external
/// setup registered them) and keyed by [`FamilyId`]. Zone assembly
/// enforces that family IDs are unique and that no patch ID appears in
/// more than one family.
#[derive(Clone, Debug)]
pub struct Zone {
    defaults: ZoneDefaults,
    families: IndexMap<FamilyId, PatchFamily>,
    patch_ids: IndexSet<PatchId>,
}

impl Zone {
    /// Create an empty zone with the given defaults.
    pub fn new(defaults: ZoneDefaults) -> Self {
        Self {
            defaults,
            families: IndexMap::new(),
            patch_ids: IndexSet::new(),
        }
    }

    /// Zone-level default parameters.
    pub fn defaults(&self) -> &ZoneDefaults {
        &self.defaults
    }

    /// Register a patch family.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the family's ID is already registered, or if
    /// any of its patches carries an ID already present in another
    /// family of this zone.
    pub fn add_family(&mut self, family: PatchFamily) -> Result<(), TerrainError> {
        if self.families.contains_key(&family.id()) {
            return Err(TerrainError::DuplicateFamily(family.id()));
        }
        for patch in family.patches() {
            if self.patch_ids.contains(&patch.id()) {
                return Err(TerrainError::DuplicatePatch(patch.id()));
            }
        }
        for patch in family.patches() {
            self.patch_ids.insert(patch.id());
        }
        self.families.insert(family.id(), family);
        Ok(())
    }

    /// Number of patch families.
    pub fn num_patch_families(&self) -> usize {
        self.families.len()
    }

    /// Total number of patches across all families.
    pub fn patch_count(&self) -> usize {
        self.families.values().map(PatchFamily::patch_count).sum()
    }

    /// Families in registration order.
    pub fn families(&self) -> impl Iterator<Item = &PatchFamily> {
        self.families.values()
    }

    /// Mutable access to the families in registration order.
    pub fn families_mut(&mut self) -> impl Iterator<Item = &mut PatchFamily> {
        self.families.values_mut()
    }

    /// Look up a family by ID.
    pub fn family(&self, id: FamilyId) -> Option<&PatchFamily> {
        self.families.get(&id)
    }

    /// Mutable lookup of a family by ID.
    pub fn family_mut(&mut self, id: FamilyId) -> Option<&mut PatchFamily> {
        self.families.get_mut(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Patch;

    fn family(id: u64, patch_ids: &[u64]) -> PatchFamily {
        let mut family = PatchFamily::new(FamilyId(id));
        for &pid in patch_ids {
            family
                .add_patch(Patch::builder(PatchId(pid)).area(10.0).build().unwrap())
                .unwrap();
        }
        family
    }

    #[test]
    fn defaults_accept_unit_interval() {
        assert!(ZoneDefaults::new(0.0).is_ok());
        assert!(ZoneDefaults::new(0.5).is_ok());
        assert!(ZoneDefaults::new(1.0).is_ok());
    }

    #[test]
    fn defaults_reject_out_of_range() {
        assert_eq!(
            ZoneDefaults::new(-0.1),
            Err(TerrainError::CoefficientOutOfRange(-0.1))
        );
        assert_eq!(
            ZoneDefaults::new(1.5),
            Err(TerrainError::CoefficientOutOfRange(1.5))
        );
        assert!(ZoneDefaults::new(f64::NAN).is_err());
    }

    #[test]
    fn families_iterate_in_registration_order() {
        let mut zone = Zone::new(ZoneDefaults::new(0.5).unwrap());
        zone.add_family(family(3, &[30, 31])).unwrap();
        zone.add_family(family(1, &[10, 11])).unwrap();
        zone.add_family(family(2, &[20])).unwrap();

        let ids: Vec<FamilyId> = zone.families().map(PatchFamily::id).collect();
        assert_eq!(ids, vec![FamilyId(3), FamilyId(1), FamilyId(2)]);
        assert_eq!(zone.num_patch_families(), 3);
        assert_eq!(zone.patch_count(), 5);
    }

    #[test]
    fn duplicate_family_rejected() {
        let mut zone = Zone::new(ZoneDefaults::new(0.5).unwrap());
        zone.add_family(family(1, &[10])).unwrap();
        assert_eq!(
            zone.add_family(family(1, &[11])),
            Err(TerrainError::DuplicateFamily(FamilyId(1)))
        );
    }

    #[test]
    fn patch_shared_across_families_rejected() {
        let mut zone = Zone::new(ZoneDefaults::new(0.5).unwrap());
        zone.add_family(family(1, &[10, 11])).unwrap();
        assert_eq!(
            zone.add_family(family(2, &[11, 12])),
            Err(TerrainError::DuplicatePatch(PatchId(11)))
        );
        // The rejected family must not have been partially registered.
        assert_eq!(zone.num_patch_families(), 1);
        assert!(zone.family(FamilyId(2)).is_none());
    }

    #[test]
    fn family_lookup() {
        let mut zone = Zone::new(ZoneDefaults::new(0.5).unwrap());
        zone.add_family(family(1, &[10])).unwrap();
        assert_eq!(zone.family(FamilyId(1)).unwrap().patch_count(), 1);
        assert!(zone.family(FamilyId(9)).is_none());
        zone.family_mut(FamilyId(1))
            .unwrap()
            .add_patch(Patch::builder(PatchId(99)).build().unwrap())
            .unwrap();
        assert_eq!(zone.family(FamilyId(1)).unwrap().patch_count(), 2);
    }
}
