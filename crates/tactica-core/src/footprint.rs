//! Grid topology and unit footprints.

use crate::orient::Facing;
use crate::pos::GridPos;

/// Which coordinate system a board uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Topology {
    /// Orthogonal square cells addressed by `(x, y)`.
    #[default]
    Square,
    /// Flat-top hexagons addressed by axial `(q, r)`.
    AxialHex,
}

/// The rectangular silhouette a unit occupies.
///
/// On a square board the footprint covers a `width` x `height` block whose
/// anchor is the top-left cell, extending toward `+x` and `-y`. On a hex
/// board only the anchor cell is covered regardless of size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Footprint {
    /// Cells along `x`.
    pub width: u32,
    /// Cells along `y`.
    pub height: u32,
}

impl Footprint {
    /// A 1x1 footprint.
    pub const UNIT: Self = Self::new(1, 1);

    /// Construct a footprint.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// `true` if both sides are at least one cell.
    pub const fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// `true` for square footprints, which never change under rotation.
    pub const fn is_square(self) -> bool {
        self.width == self.height
    }

    /// Width and height exchanged.
    pub const fn swapped(self) -> Self {
        Self::new(self.height, self.width)
    }

    /// The footprint after turning from `from` to `to`.
    ///
    /// Sides are exchanged when the turn changes the vertical/horizontal
    /// class of the facing.
    pub fn reoriented(self, from: Facing, to: Facing) -> Self {
        if from.is_vertical() != to.is_vertical() {
            self.swapped()
        } else {
            self
        }
    }

    /// Number of cells covered on `topology`.
    pub fn cell_count(self, topology: Topology) -> usize {
        match topology {
            Topology::Square => self.width as usize * self.height as usize,
            Topology::AxialHex => 1,
        }
    }

    /// Relative offsets of the covered cells on a square board, row by row.
    pub fn body_offsets(self) -> impl Iterator<Item = GridPos> {
        let (w, h) = (self.width as i32, self.height as i32);
        (0..h).flat_map(move |y| (0..w).map(move |x| GridPos::new(x, -y)))
    }

    /// Absolute cells covered when anchored at `anchor`.
    pub fn cells_at(self, anchor: GridPos, topology: Topology) -> Vec<GridPos> {
        match topology {
            Topology::Square => self.body_offsets().map(|o| anchor + o).collect(),
            Topology::AxialHex => vec![anchor],
        }
    }
}

impl Default for Footprint {
    fn default() -> Self {
        Self::UNIT
    }
}
