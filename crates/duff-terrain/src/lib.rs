//! Zone, patch-family, and patch data model for the duff engine.
//!
//! The terrain crate owns the spatial structures the redistribution
//! pass operates on: a [`Zone`] holds an ordered collection of
//! [`PatchFamily`], each of which owns its member [`Patch`]es. No patch
//! belongs to more than one family, which is what lets families be
//! processed concurrently without locks.
//!
//! Construction is validated: areas must be positive and finite, litter
//! densities non-negative and finite, and patch/family identifiers
//! unique within a zone. Invalid inputs are rejected with
//! [`TerrainError`] at assembly time so the numeric core never has to
//! re-check them.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod error;
mod family;
mod patch;
mod vegetation;
mod zone;

pub use error::TerrainError;
pub use family::PatchFamily;
pub use patch::{Patch, PatchBuilder};
pub use vegetation::Vegetation;
pub use zone::{Zone, ZoneDefaults};
