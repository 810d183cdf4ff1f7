//! Occupancy, movement and highlighting for Tactica boards.
//!
//! The [`Battlefield`] session object ties the pieces together:
//!
//! - [`OccupancyMap`]: per-cell, per-layer occupants and highlight state.
//! - [`movement`]: validate-then-commit moves and in-place rotations.
//! - [`RangeHighlighter`]: movement reach and aim regions, cleared
//!   incrementally.
//! - [`cursor`]: move/effect previews and effect target lookup.
//!
//! [`SharedBattlefield`] wraps a battlefield for callers on several threads.
//! Every operation is synchronous; the library installs no `tracing`
//! subscriber.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod battlefield;
pub mod config;
pub mod cursor;
pub mod error;
pub mod highlight;
pub mod metrics;
pub mod movement;
pub mod occupancy;
pub mod shared;

pub use battlefield::{Battlefield, InteractionMode};
pub use config::{ConfigError, GridConfig};
pub use cursor::CursorShape;
pub use error::{LockPoisoned, OccupancyError, Rejection, SpawnError};
pub use highlight::{HighlightDelta, RangeHighlighter};
pub use metrics::BoardMetrics;
pub use movement::{Commit, MotionRequest, UnitState};
pub use occupancy::{Cell, HighlightState, OccupancyMap};
pub use shared::SharedBattlefield;
