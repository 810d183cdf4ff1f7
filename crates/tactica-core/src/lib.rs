//! Core value types for the Tactica grid engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the small `Copy` types every other crate speaks in: grid positions,
//! unit handles, vertical layers, facings and footprints.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod footprint;
pub mod id;
pub mod layer;
pub mod orient;
pub mod pos;

pub use footprint::{Footprint, Topology};
pub use id::UnitId;
pub use layer::{Layer, LayerElevations};
pub use orient::{Facing, FacingMode};
pub use pos::GridPos;
