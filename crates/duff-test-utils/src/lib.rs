//! Terrain fixtures and seeded generators for duff tests and benches.
//!
//! Compact constructors for patches, families, and zones, plus
//! deterministic random terrain built from a seeded ChaCha8 RNG so
//! tests and benchmarks reproduce exactly.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod fixtures;

pub use fixtures::{bare_patch, family, patch, seeded_family, seeded_zone, vegetated_patch, zone};
