//! Orthogonal square grid with 8-connectivity and weighted octile distance.

use crate::error::SpaceError;
use crate::space::{check_dimensions, CoordinateSystem};
use glam::Vec3;
use smallvec::SmallVec;
use tactica_core::{Footprint, GridPos, Layer, LayerElevations, Topology};

/// Neighbour offsets in order: E, NE, N, NW, W, SW, S, SE.
pub const SQUARE_DIRECTIONS: [GridPos; 8] = [
    GridPos::new(1, 0),
    GridPos::new(1, 1),
    GridPos::new(0, 1),
    GridPos::new(-1, 1),
    GridPos::new(-1, 0),
    GridPos::new(-1, -1),
    GridPos::new(0, -1),
    GridPos::new(1, -1),
];

/// Cost of one orthogonal step.
pub const STRAIGHT_COST: u32 = 10;
/// Cost of one diagonal step.
pub const DIAGONAL_COST: u32 = 14;

/// A `width` x `height` board of square cells.
///
/// Linear indices are column-major: `x * height + y`. Cell `(x, y)` sits at
/// world `(x * spacing, elevation, y * spacing)`.
///
/// # Examples
///
/// ```
/// use tactica_space::{CoordinateSystem, SquareGrid};
/// use tactica_core::{GridPos, LayerElevations};
///
/// let grid = SquareGrid::new(10, 10, 1.0, LayerElevations::default()).unwrap();
/// assert_eq!(grid.cell_count(), 100);
/// assert_eq!(grid.to_index(GridPos::new(2, 3)), Some(23));
///
/// // One diagonal step costs 14, one straight step 10.
/// assert_eq!(grid.distance(GridPos::new(0, 0), GridPos::new(1, 1)), 14);
/// assert_eq!(grid.distance(GridPos::new(0, 0), GridPos::new(0, 1)), 10);
/// ```
#[derive(Debug, Clone)]
pub struct SquareGrid {
    width: u32,
    height: u32,
    spacing: f32,
    elevations: LayerElevations,
}

impl SquareGrid {
    /// Create a square board.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if either dimension is 0,
    /// `Err(SpaceError::DimensionTooLarge)` past [`MAX_DIM`](crate::MAX_DIM),
    /// and `Err(SpaceError::InvalidSpacing)` for non-positive spacing.
    pub fn new(
        width: u32,
        height: u32,
        spacing: f32,
        elevations: LayerElevations,
    ) -> Result<Self, SpaceError> {
        check_dimensions(width, height, spacing, &elevations)?;
        Ok(Self {
            width,
            height,
            spacing,
            elevations,
        })
    }

    /// Weighted octile distance between two offsets, unbounded.
    pub fn octile(a: GridPos, b: GridPos) -> u32 {
        let d = (a - b).abs();
        let (lo, hi) = (d.x.min(d.y) as u32, d.x.max(d.y) as u32);
        DIAGONAL_COST * lo + STRAIGHT_COST * (hi - lo)
    }
}

impl CoordinateSystem for SquareGrid {
    fn topology(&self) -> Topology {
        Topology::Square
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn spacing(&self) -> f32 {
        self.spacing
    }

    fn elevations(&self) -> &LayerElevations {
        &self.elevations
    }

    fn to_index(&self, p: GridPos) -> Option<usize> {
        self.in_bounds(p)
            .then(|| p.x as usize * self.height as usize + p.y as usize)
    }

    fn from_index(&self, index: usize) -> Option<GridPos> {
        if index >= self.cell_count() {
            return None;
        }
        let h = self.height as usize;
        Some(GridPos::new((index / h) as i32, (index % h) as i32))
    }

    fn neighbours(&self, p: GridPos) -> SmallVec<[GridPos; 8]> {
        SQUARE_DIRECTIONS.iter().map(|&d| p + d).collect()
    }

    fn distance(&self, a: GridPos, b: GridPos) -> u32 {
        Self::octile(a, b)
    }

    fn movement_reach(&self, center: GridPos, range: u32) -> Vec<GridPos> {
        // Nothing on the board is further than 10 * (width + height).
        let r = range.min(self.width + self.height) as i32;
        let budget = r as u32 * STRAIGHT_COST;
        let x0 = (center.x - r).max(0);
        let x1 = (center.x + r).min(self.width as i32 - 1);
        let y0 = (center.y - r).max(0);
        let y1 = (center.y + r).min(self.height as i32 - 1);

        let mut out = Vec::new();
        for x in x0..=x1 {
            for y in y0..=y1 {
                let p = GridPos::new(x, y);
                if Self::octile(center, p) <= budget {
                    out.push(p);
                }
            }
        }
        out
    }

    fn grid_to_world(&self, p: GridPos, layer: Layer) -> Vec3 {
        Vec3::new(
            p.x as f32 * self.spacing,
            self.elevations.of(layer),
            p.y as f32 * self.spacing,
        )
    }

    fn anchor_to_world(&self, anchor: GridPos, footprint: Footprint, layer: Layer) -> Vec3 {
        let base = self.grid_to_world(anchor, layer);
        let half = self.spacing * 0.5;
        base + Vec3::new(
            (footprint.width as f32 - 1.0) * half,
            0.0,
            -(footprint.height as f32 - 1.0) * half,
        )
    }

    fn world_to_grid(&self, world: Vec3) -> GridPos {
        GridPos::new(
            (world.x / self.spacing).round() as i32,
            (world.z / self.spacing).round() as i32,
        )
    }
}
