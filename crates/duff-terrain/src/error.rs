//! Error types for terrain construction.

use duff_core::{FamilyId, LitterPool, PatchId};
use std::fmt;

/// Errors arising from patch, family, or zone assembly.
#[derive(Debug, Clone, PartialEq)]
pub enum TerrainError {
    /// A patch was declared with a zero or negative planar area.
    NonPositiveArea {
        /// The offending patch.
        patch: PatchId,
        /// The declared area.
        area: f64,
    },
    /// A numeric field was NaN or infinite.
    NonFiniteValue {
        /// The offending patch.
        patch: PatchId,
        /// Which field was non-finite.
        field: &'static str,
        /// The declared value.
        value: f64,
    },
    /// A litter density was declared negative.
    NegativeDensity {
        /// The offending patch.
        patch: PatchId,
        /// The pool holding the negative density.
        pool: LitterPool,
        /// The declared carbon/nitrogen values, one of which is negative.
        carbon: f64,
        /// Declared nitrogen density.
        nitrogen: f64,
    },
    /// A root-zone depth was declared negative.
    NegativeRootDepth {
        /// The offending patch.
        patch: PatchId,
        /// The declared depth.
        depth: f64,
    },
    /// Two patches in the same zone share an identifier.
    DuplicatePatch(PatchId),
    /// Two families in the same zone share an identifier.
    DuplicateFamily(FamilyId),
    /// The transfer-efficiency coefficient is outside `[0, 1]`.
    CoefficientOutOfRange(f64),
}

impl fmt::Display for TerrainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveArea { patch, area } => {
                write!(f, "patch {patch} has non-positive area {area}")
            }
            Self::NonFiniteValue {
                patch,
                field,
                value,
            } => {
                write!(f, "patch {patch} has non-finite {field}: {value}")
            }
            Self::NegativeDensity {
                patch,
                pool,
                carbon,
                nitrogen,
            } => {
                write!(
                    f,
                    "patch {patch} has negative {pool} density (C {carbon}, N {nitrogen})"
                )
            }
            Self::NegativeRootDepth { patch, depth } => {
                write!(f, "patch {patch} has negative root-zone depth {depth}")
            }
            Self::DuplicatePatch(id) => write!(f, "duplicate patch id {id}"),
            Self::DuplicateFamily(id) => write!(f, "duplicate family id {id}"),
            Self::CoefficientOutOfRange(v) => {
                write!(f, "transfer-efficiency coefficient {v} outside [0, 1]")
            }
        }
    }
}

impl std::error::Error for TerrainError {}
