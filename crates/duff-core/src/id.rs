//! Strongly-typed identifiers for patches and patch families.

use std::fmt;

/// Identifies a patch, the smallest spatial simulation unit.
///
/// Patch IDs come from the external landscape setup and are unique
/// within a zone; the redistribution core never allocates them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PatchId(pub u64);

impl fmt::Display for PatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for PatchId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Identifies a patch family, a group of laterally connected patches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FamilyId(pub u64);

impl fmt::Display for FamilyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for FamilyId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
