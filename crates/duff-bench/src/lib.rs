//! Benchmark profiles and utilities for the duff engine.
//!
//! Provides pre-built zone profiles for benchmarking and examples:
//!
//! - [`reference_zone`]: 24 families × 8 patches (192 patches)
//! - [`stress_zone`]: 240 families × 16 patches (3 840 patches)
//!
//! Both are deterministic in the seed, so runs are comparable.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use duff_routing::SharingConfig;
use duff_terrain::Zone;
use duff_test_utils::seeded_zone;

/// Build the reference benchmark zone: 24 families of 8 patches.
pub fn reference_zone(seed: u64) -> Zone {
    seeded_zone(seed, 24, 8)
}

/// Build the stress benchmark zone: 240 families of 16 patches.
pub fn stress_zone(seed: u64) -> Zone {
    seeded_zone(seed, 240, 16)
}

/// The sharing config a profile zone routes with.
pub fn profile_config(zone: &Zone) -> SharingConfig {
    SharingConfig::from_defaults(zone.defaults())
}
