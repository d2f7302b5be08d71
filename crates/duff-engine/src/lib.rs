//! Zone-level drivers for duff litter redistribution.
//!
//! [`route_zone`] runs one redistribution pass over every patch family
//! of a zone in registration order, with full tracing.
//! [`route_zone_parallel`] fans the families out to a worker pool —
//! families share no patches, so they route concurrently without
//! locks — and returns reports in the same zone order. Both paths
//! produce identical patch state and reports.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod config;
mod parallel;
mod report;
mod zone;

pub use config::EngineConfig;
pub use parallel::route_zone_parallel;
pub use report::ZoneReport;
pub use zone::route_zone;
