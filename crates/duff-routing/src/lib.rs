//! Mass-conserving lateral litter redistribution within a patch family.
//!
//! One redistribution pass over a family runs five stages per litter
//! pool: aggregate area-weighted means, collect the excess held by
//! above-mean vegetated patches, distribute a share of it to
//! below-mean non-vegetated patches scaled by the transfer-efficiency
//! coefficient, return whatever could not be placed to the donors, and
//! verify that the family mean did not increase. The four pools run
//! the same machinery independently; carbon and nitrogen travel
//! together as an [`ElementStock`](duff_core::ElementStock) pair.
//!
//! The pass is infallible and conserves total family mass (density ×
//! area summed over patches) to floating tolerance for every
//! coefficient in `[0, 1]`: whatever the receivers do not absorb goes
//! back to the patches it came from.
//!
//! ```
//! use duff_core::{ElementStock, LitterPool, PatchId, FamilyId};
//! use duff_routing::{route_family, SharingConfig};
//! use duff_terrain::{Patch, PatchFamily, Vegetation};
//! use duff_trace::NullSink;
//!
//! let mut family = PatchFamily::new(FamilyId(1));
//! for (id, density, veg) in [
//!     (1, 5.0, Vegetation::Grass),
//!     (2, 1.0, Vegetation::Grass),
//!     (3, 0.0, Vegetation::NonVegetated),
//! ] {
//!     family
//!         .add_patch(
//!             Patch::builder(PatchId(id))
//!                 .area(10.0)
//!                 .vegetation(veg)
//!                 .litter(LitterPool::Labile, ElementStock::new(density, density / 10.0))
//!                 .build()
//!                 .unwrap(),
//!         )
//!         .unwrap();
//! }
//!
//! let config = SharingConfig::builder().transfer_efficiency(0.5).build().unwrap();
//! let report = route_family(&mut family, &config, &mut NullSink);
//! assert!(!report.skipped);
//! assert!(report.warnings().next().is_none());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod aggregate;
mod config;
mod pass;
mod report;

pub use aggregate::{aggregate, FamilyAggregate};
pub use config::{ConfigError, SharingConfig, SharingConfigBuilder, DEFAULT_EPSILON};
pub use pass::route_family;
pub use report::{ConservationWarning, FamilyReport, PoolReport};
