//! Duff: mass-conserving lateral redistribution of litter carbon and
//! nitrogen among the patches of a patch family.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all duff sub-crates. For most users, adding `duff` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use duff::prelude::*;
//!
//! // A family of three equal-area patches: one litter-rich vegetated
//! // donor, one vegetated bystander, and one bare receiver.
//! let mut family = PatchFamily::new(FamilyId(1));
//! for (id, veg, carbon) in [
//!     (1, Vegetation::Grass, 5.0),
//!     (2, Vegetation::Grass, 1.0),
//!     (3, Vegetation::NonVegetated, 0.0),
//! ] {
//!     let patch = Patch::builder(PatchId(id))
//!         .area(10.0)
//!         .vegetation(veg)
//!         .litter(LitterPool::Labile, ElementStock::new(carbon, carbon / 10.0))
//!         .build()
//!         .unwrap();
//!     family.add_patch(patch).unwrap();
//! }
//!
//! // Half of the collected excess actually crosses patch boundaries;
//! // the rest returns to the donor. Total mass is conserved.
//! let config = SharingConfig::builder().transfer_efficiency(0.5).build().unwrap();
//! let report = route_family(&mut family, &config, &mut NullSink);
//!
//! assert!(!report.skipped);
//! assert_eq!(report.warnings().count(), 0);
//! let donor = family.patch(PatchId(1)).unwrap();
//! assert!((donor.litter()[LitterPool::Labile].carbon - 3.5).abs() < 1e-12);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `duff-core` | IDs, element stocks, pool enumeration |
//! | [`terrain`] | `duff-terrain` | Zone, patch family, patch, vegetation |
//! | [`trace`] | `duff-trace` | Trace events and diagnostics sinks |
//! | [`routing`] | `duff-routing` | The redistribution pass and its reports |
//! | [`engine`] | `duff-engine` | Sequential and parallel zone drivers |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and identifiers (`duff-core`).
pub use duff_core as types;

/// Zone, family, and patch data model (`duff-terrain`).
pub use duff_terrain as terrain;

/// Trace events and diagnostics sinks (`duff-trace`).
pub use duff_trace as trace;

/// The redistribution pass and its reports (`duff-routing`).
pub use duff_routing as routing;

/// Zone-level drivers (`duff-engine`).
pub use duff_engine as engine;

/// Common imports for typical duff usage.
///
/// ```rust
/// use duff::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use duff_core::{ElementStock, FamilyId, LitterPool, LitterStore, PatchId};

    // Terrain
    pub use duff_terrain::{Patch, PatchFamily, TerrainError, Vegetation, Zone, ZoneDefaults};

    // Trace
    pub use duff_trace::{LineSink, MemorySink, NullSink, TraceEvent, TraceSink};

    // Routing
    pub use duff_routing::{
        route_family, ConservationWarning, FamilyReport, PoolReport, SharingConfig,
    };

    // Engine
    pub use duff_engine::{route_zone, route_zone_parallel, EngineConfig, ZoneReport};
}
