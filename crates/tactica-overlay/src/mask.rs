//! Dense bitmap of highlighted cells.

use tactica_core::GridPos;

/// A `width` x `height` bitmap, row-major (`y * width + x`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellMask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl CellMask {
    /// An all-clear mask.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bits: vec![false; width as usize * height as usize],
        }
    }

    /// A mask with `cells` set. Coordinates outside the mask are ignored.
    pub fn from_cells(width: u32, height: u32, cells: impl IntoIterator<Item = GridPos>) -> Self {
        let mut mask = Self::new(width, height);
        for c in cells {
            mask.set(c, true);
        }
        mask
    }

    /// Width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    fn slot(&self, p: GridPos) -> Option<usize> {
        let inside =
            p.x >= 0 && p.y >= 0 && (p.x as u32) < self.width && (p.y as u32) < self.height;
        inside.then(|| p.y as usize * self.width as usize + p.x as usize)
    }

    /// `true` if `p` is inside the mask and set.
    pub fn get(&self, p: GridPos) -> bool {
        self.slot(p).is_some_and(|i| self.bits[i])
    }

    /// Set or clear `p`. Returns `false` if `p` is outside the mask.
    pub fn set(&mut self, p: GridPos, value: bool) -> bool {
        match self.slot(p) {
            Some(i) => {
                self.bits[i] = value;
                true
            }
            None => false,
        }
    }

    /// Number of set cells.
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// `true` if no cell is set.
    pub fn is_empty(&self) -> bool {
        !self.bits.iter().any(|&b| b)
    }

    /// Set cells in row-major order.
    pub fn iter_set(&self) -> impl Iterator<Item = GridPos> + '_ {
        let w = self.width as usize;
        self.bits
            .iter()
            .enumerate()
            .filter(|&(_, &b)| b)
            .map(move |(i, _)| GridPos::new((i % w) as i32, (i / w) as i32))
    }
}
