//! Core types for the duff lateral redistribution engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental vocabulary used throughout the duff workspace:
//! typed identifiers, the carbon/nitrogen [`ElementStock`] vector, the
//! [`LitterPool`] enumeration, and the per-patch [`LitterStore`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod id;
mod pool;
mod stock;

pub use id::{FamilyId, PatchId};
pub use pool::LitterPool;
pub use stock::{ElementStock, LitterStore};
