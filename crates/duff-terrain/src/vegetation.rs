//! Vegetation classification of a patch.

use std::fmt;

/// Cover class of a patch's dominant canopy stratum.
///
/// Classification itself happens in the external canopy model; the
/// redistribution pass only distinguishes the non-vegetated sentinel
/// from everything else. Vegetated patches can donate litter,
/// non-vegetated patches can receive it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Vegetation {
    /// Bare ground: no live canopy stratum.
    NonVegetated,
    /// Grass or herbaceous cover.
    #[default]
    Grass,
    /// Shrub cover.
    Shrub,
    /// Tree cover.
    Tree,
}

impl Vegetation {
    /// `true` for any cover class other than [`Vegetation::NonVegetated`].
    pub fn is_vegetated(self) -> bool {
        !matches!(self, Self::NonVegetated)
    }
}

impl fmt::Display for Vegetation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NonVegetated => "non-vegetated",
            Self::Grass => "grass",
            Self::Shrub => "shrub",
            Self::Tree => "tree",
        };
        write!(f, "{name}")
    }
}
