//! Greedy rectangle meshing.

use crate::mask::CellMask;
use tactica_core::GridPos;

/// An axis-aligned block of cells, `(x, y)` being its minimum corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Minimum `x`.
    pub x: i32,
    /// Minimum `y`.
    pub y: i32,
    /// Cells along `x`.
    pub width: u32,
    /// Cells along `y`.
    pub height: u32,
}

impl Rect {
    /// Number of covered cells.
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Covered cells, row by row.
    pub fn cells(&self) -> impl Iterator<Item = GridPos> + '_ {
        (0..self.height as i32)
            .flat_map(move |dy| (0..self.width as i32).map(move |dx| GridPos::new(self.x + dx, self.y + dy)))
    }
}

/// Cover every set cell of `mask` with non-overlapping rectangles.
///
/// Scans rows in order; at each unconsumed set cell the rectangle first
/// grows along `+x` while cells stay set, then along `+y` while the whole
/// span stays set. Linear in the mask area, not minimal in count.
pub fn greedy_mesh(mask: &CellMask) -> Vec<Rect> {
    let (w, h) = (mask.width() as i32, mask.height() as i32);
    let mut open = mask.clone();
    let mut rects = Vec::new();

    for y in 0..h {
        for x in 0..w {
            if !open.get(GridPos::new(x, y)) {
                continue;
            }

            let mut width = 1;
            while x + width < w && open.get(GridPos::new(x + width, y)) {
                width += 1;
            }

            let mut height = 1;
            while y + height < h && (0..width).all(|dx| open.get(GridPos::new(x + dx, y + height))) {
                height += 1;
            }

            let rect = Rect {
                x,
                y,
                width: width as u32,
                height: height as u32,
            };
            for c in rect.cells() {
                open.set(c, false);
            }
            rects.push(rect);
        }
    }
    rects
}
