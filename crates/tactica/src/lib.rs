//! Tactica: grid targeting, occupancy and overlay geometry for turn-based
//! tactics games.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Tactica sub-crates. For most users, adding `tactica` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use tactica::prelude::*;
//!
//! // A 10×10 square board with one 1×1 unit in the corner.
//! let mut board = Battlefield::new(&GridConfig::square(10, 10)).unwrap();
//! let unit = board
//!     .spawn_unit(GridPos::new(0, 0), Footprint::UNIT, Facing::PosY, Layer::Ground)
//!     .unwrap();
//!
//! // Highlight its movement reach, then move two cells east.
//! board.select(unit, InteractionMode::Move { range: 3 }).unwrap();
//! assert!(board.cursor(GridPos::new(2, 0)).unwrap().valid);
//! let commit = board.try_commit_move(unit, GridPos::new(2, 0)).unwrap();
//! assert_eq!(commit.state.anchor, GridPos::new(2, 0));
//! assert_eq!(commit.state.facing, Facing::PosX);
//!
//! // The highlight set as render-ready rectangles and outlines.
//! let overlay = board.overlay();
//! assert_eq!(overlay.contours.len(), 1);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tactica-core` | Positions, ids, layers, facings, footprints |
//! | [`space`] | `tactica-space` | Square and axial-hex coordinate systems |
//! | [`shape`] | `tactica-shape` | Aim and effect shape offsets |
//! | [`overlay`] | `tactica-overlay` | Greedy meshing and contour tracing |
//! | [`engine`] | `tactica-engine` | Occupancy, movement, highlighting, battlefield |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types (`tactica-core`).
///
/// [`types::GridPos`], [`types::UnitId`], [`types::Layer`],
/// [`types::Facing`] and [`types::Footprint`] are shared by every other
/// module.
pub use tactica_core as types;

/// Coordinate systems (`tactica-space`).
///
/// Provides the [`space::CoordinateSystem`] trait and its two backends,
/// [`space::SquareGrid`] and [`space::HexGrid`].
pub use tactica_space as space;

/// Shape offset generation (`tactica-shape`).
///
/// [`shape::aim_offsets`] resolves where a target may be chosen;
/// [`shape::effect_offsets`] what a chosen target affects.
pub use tactica_shape as shape;

/// Overlay geometry (`tactica-overlay`).
///
/// Turns a highlighted cell set into [`overlay::Rect`]s and
/// [`overlay::Contour`]s, and those into world-space meshes.
pub use tactica_overlay as overlay;

/// Board session and rules (`tactica-engine`).
///
/// [`engine::Battlefield`] for single-threaded use,
/// [`engine::SharedBattlefield`] behind a lock.
pub use tactica_engine as engine;

/// Common imports for typical Tactica usage.
///
/// ```rust
/// use tactica::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use tactica_core::{
        Facing, FacingMode, Footprint, GridPos, Layer, LayerElevations, Topology, UnitId,
    };

    // Coordinate systems
    pub use tactica_space::{CoordinateSystem, HexGrid, SquareGrid};

    // Shapes
    pub use tactica_shape::{
        aim_offsets, effect_offsets, AimKind, AimShapeSpec, EffectKind, EffectShapeSpec,
        OffsetSet, VerticalReach,
    };

    // Overlay
    pub use tactica_overlay::{CellMask, OverlayGeometry, OverlayMesh};

    // Engine
    pub use tactica_engine::{
        Battlefield, BoardMetrics, Commit, CursorShape, GridConfig, HighlightState,
        InteractionMode, MotionRequest, Rejection, SharedBattlefield, UnitState,
    };

    // Errors
    pub use tactica_engine::{ConfigError, LockPoisoned, OccupancyError, SpawnError};
    pub use tactica_space::SpaceError;
}
