//! The [`PatchFamily`] grouping of laterally connected patches.

use crate::{Patch, TerrainError};
use duff_core::{FamilyId, PatchId};

/// A group of patches modeled as laterally connected for
/// redistribution purposes.
///
/// The family owns its member patches in insertion order. A family
/// with at most one member is *inert*: the redistribution pass skips
/// it untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct PatchFamily {
    id: FamilyId,
    patches: Vec<Patch>,
}

impl PatchFamily {
    /// Create an empty family.
    pub fn new(id: FamilyId) -> Self {
        Self {
            id,
            patches: Vec::new(),
        }
    }

    /// Family identifier.
    pub fn id(&self) -> FamilyId {
        self.id
    }

    /// Add a member patch.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a patch with the same ID is already a member.
    pub fn add_patch(&mut self, patch: Patch) -> Result<(), TerrainError> {
        if self.patches.iter().any(|p| p.id() == patch.id()) {
            return Err(TerrainError::DuplicatePatch(patch.id()));
        }
        self.patches.push(patch);
        Ok(())
    }

    /// Number of member patches.
    pub fn patch_count(&self) -> usize {
        self.patches.len()
    }

    /// `true` if the family has at most one member and is therefore
    /// skipped by the redistribution pass.
    pub fn is_inert(&self) -> bool {
        self.patches.len() <= 1
    }

    /// Member patches in insertion order.
    pub fn patches(&self) -> &[Patch] {
        &self.patches
    }

    /// Mutable access to the member patches.
    pub fn patches_mut(&mut self) -> &mut [Patch] {
        &mut self.patches
    }

    /// Look up a member patch by ID.
    pub fn patch(&self, id: PatchId) -> Option<&Patch> {
        self.patches.iter().find(|p| p.id() == id)
    }

    /// Sum of all member areas.
    pub fn total_area(&self) -> f64 {
        self.patches.iter().map(Patch::area).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patch(id: u64, area: f64) -> Patch {
        Patch::builder(PatchId(id)).area(area).build().unwrap()
    }

    #[test]
    fn empty_family_is_inert() {
        let family = PatchFamily::new(FamilyId(1));
        assert!(family.is_inert());
        assert_eq!(family.patch_count(), 0);
        assert_eq!(family.total_area(), 0.0);
    }

    #[test]
    fn single_patch_family_is_inert() {
        let mut family = PatchFamily::new(FamilyId(1));
        family.add_patch(patch(1, 10.0)).unwrap();
        assert!(family.is_inert());
    }

    #[test]
    fn two_patch_family_is_active() {
        let mut family = PatchFamily::new(FamilyId(1));
        family.add_patch(patch(1, 10.0)).unwrap();
        family.add_patch(patch(2, 5.0)).unwrap();
        assert!(!family.is_inert());
        assert_eq!(family.patch_count(), 2);
        assert!((family.total_area() - 15.0).abs() < 1e-12);
    }

    #[test]
    fn duplicate_member_rejected() {
        let mut family = PatchFamily::new(FamilyId(1));
        family.add_patch(patch(1, 10.0)).unwrap();
        assert_eq!(
            family.add_patch(patch(1, 5.0)),
            Err(TerrainError::DuplicatePatch(PatchId(1)))
        );
    }

    #[test]
    fn lookup_by_id() {
        let mut family = PatchFamily::new(FamilyId(1));
        family.add_patch(patch(1, 10.0)).unwrap();
        family.add_patch(patch(2, 5.0)).unwrap();
        assert_eq!(family.patch(PatchId(2)).unwrap().area(), 5.0);
        assert!(family.patch(PatchId(3)).is_none());
    }
}
