//! The core `CoordinateSystem` trait and `dyn CoordinateSystem` downcast support.

use crate::error::SpaceError;
use glam::Vec3;
use smallvec::SmallVec;
use std::any::Any;
use tactica_core::{Footprint, GridPos, Layer, LayerElevations, Topology};

/// Largest supported side length.
///
/// Keeps linear indices, weighted distances and scaled range scores inside
/// `i32` arithmetic without overflow checks.
pub const MAX_DIM: u32 = 1 << 15;

/// Topology-agnostic coordinate math for a bounded board.
///
/// Occupancy, movement, highlighting and cursor queries all go through this
/// trait. [`SquareGrid`](crate::SquareGrid) and [`HexGrid`](crate::HexGrid)
/// implement it.
///
/// # Object Safety
///
/// Designed for use as `dyn CoordinateSystem`. Use
/// [`downcast_ref`](dyn CoordinateSystem::downcast_ref) to reach
/// backend-specific helpers such as hex lines and rings.
///
/// # Bounds
///
/// Out-of-bounds coordinates are never an error: queries answer `false`,
/// `None` or simply skip them.
pub trait CoordinateSystem: Any + Send + Sync + 'static {
    /// Which topology this backend implements.
    fn topology(&self) -> Topology;

    /// Extent along `x` (or axial `q`).
    fn width(&self) -> u32;

    /// Extent along `y` (or axial `r`).
    fn height(&self) -> u32;

    /// World distance between adjacent cell centres.
    fn spacing(&self) -> f32;

    /// Per-layer world heights.
    fn elevations(&self) -> &LayerElevations;

    /// Total number of cells.
    fn cell_count(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    /// `true` iff `0 <= x < width` and `0 <= y < height`.
    fn in_bounds(&self, p: GridPos) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as u32) < self.width() && (p.y as u32) < self.height()
    }

    /// Linear index of an in-bounds cell, `None` otherwise.
    fn to_index(&self, p: GridPos) -> Option<usize>;

    /// Inverse of [`to_index`](Self::to_index).
    fn from_index(&self, index: usize) -> Option<GridPos>;

    /// Adjacent coordinates in a fixed backend-defined order, without
    /// bounds clipping.
    fn neighbours(&self, p: GridPos) -> SmallVec<[GridPos; 8]>;

    /// [`neighbours`](Self::neighbours) restricted to the board.
    fn neighbours_in_bounds(&self, p: GridPos) -> SmallVec<[GridPos; 8]> {
        self.neighbours(p)
            .into_iter()
            .filter(|&n| self.in_bounds(n))
            .collect()
    }

    /// Path-cost distance between two cells.
    ///
    /// Square boards use the weighted octile metric (10 per straight step,
    /// 14 per diagonal); hex boards use cube distance in steps.
    fn distance(&self, a: GridPos, b: GridPos) -> u32;

    /// In-bounds anchors reachable within `range` movement points, centre
    /// included.
    fn movement_reach(&self, center: GridPos, range: u32) -> Vec<GridPos>;

    /// World position of a single cell's centre on `layer`.
    fn grid_to_world(&self, p: GridPos, layer: Layer) -> Vec3;

    /// World position for a unit anchored at `anchor`.
    ///
    /// Defaults to the anchor cell's centre; square boards centre the point
    /// on the whole footprint.
    fn anchor_to_world(&self, anchor: GridPos, footprint: Footprint, layer: Layer) -> Vec3 {
        let _ = footprint;
        self.grid_to_world(anchor, layer)
    }

    /// Nearest coordinate to a world point, ignoring its height. May be out
    /// of bounds.
    fn world_to_grid(&self, world: Vec3) -> GridPos;

    /// The cell under a world point, if it lies on the board.
    fn cell_at(&self, world: Vec3) -> Option<GridPos> {
        Some(self.world_to_grid(world)).filter(|&p| self.in_bounds(p))
    }

    /// All cells in linear-index order.
    fn canonical_ordering(&self) -> Vec<GridPos> {
        (0..self.cell_count())
            .filter_map(|i| self.from_index(i))
            .collect()
    }
}

impl dyn CoordinateSystem {
    /// Attempt to downcast a trait object to a concrete backend.
    pub fn downcast_ref<T: CoordinateSystem>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }
}

/// Shared constructor validation for every backend.
pub(crate) fn check_dimensions(
    width: u32,
    height: u32,
    spacing: f32,
    elevations: &LayerElevations,
) -> Result<(), SpaceError> {
    if width == 0 || height == 0 {
        return Err(SpaceError::EmptySpace);
    }
    for (name, value) in [("width", width), ("height", height)] {
        if value > MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name,
                value,
                max: MAX_DIM,
            });
        }
    }
    if !spacing.is_finite() || spacing <= 0.0 {
        return Err(SpaceError::InvalidSpacing { value: spacing });
    }
    if !elevations.is_finite() {
        return Err(SpaceError::NonFiniteElevation);
    }
    Ok(())
}
