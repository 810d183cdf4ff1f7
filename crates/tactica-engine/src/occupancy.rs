//! Dense per-cell occupancy and highlight state.
//!
//! [`OccupancyMap`] owns the board's [`CoordinateSystem`] and one [`Cell`]
//! per coordinate, stored at the coordinate system's linear index. Every
//! footprint write is validated across all covered cells before the first
//! cell is touched, so a refused write leaves the map unchanged.

use smallvec::SmallVec;
use tactica_core::{Footprint, GridPos, Layer, UnitId};
use tactica_space::CoordinateSystem;

use crate::error::OccupancyError;

/// Render state of a highlighted cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HighlightState {
    /// Not highlighted.
    #[default]
    Clear,
    /// Reachable by the selected unit.
    Reachable,
    /// Inside the reach silhouette but held by another unit.
    Blocked,
    /// Inside the active aim region.
    Aim,
}

impl HighlightState {
    /// `true` for any state other than [`Clear`](Self::Clear).
    pub fn is_marked(self) -> bool {
        self != Self::Clear
    }
}

/// Occupants per layer plus the highlight flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    occupants: [Option<UnitId>; 3],
    highlight: HighlightState,
}

impl Cell {
    /// Unit holding this cell on `layer`.
    pub fn occupant(&self, layer: Layer) -> Option<UnitId> {
        self.occupants[layer.index()]
    }

    /// Current highlight state.
    pub fn highlight(&self) -> HighlightState {
        self.highlight
    }
}

/// The board's occupancy grid.
pub struct OccupancyMap {
    grid: Box<dyn CoordinateSystem>,
    cells: Vec<Cell>,
}

impl std::fmt::Debug for OccupancyMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OccupancyMap")
            .field("topology", &self.grid.topology())
            .field("width", &self.grid.width())
            .field("height", &self.grid.height())
            .finish_non_exhaustive()
    }
}

impl OccupancyMap {
    /// An empty map over `grid`.
    pub fn new(grid: Box<dyn CoordinateSystem>) -> Self {
        let cells = vec![Cell::default(); grid.cell_count()];
        Self { grid, cells }
    }

    /// The coordinate system this map is laid out on.
    pub fn grid(&self) -> &dyn CoordinateSystem {
        self.grid.as_ref()
    }

    /// Cell at `p`, or `None` off the board.
    pub fn cell(&self, p: GridPos) -> Option<&Cell> {
        self.grid.to_index(p).and_then(|i| self.cells.get(i))
    }

    fn cell_mut(&mut self, p: GridPos) -> Option<&mut Cell> {
        self.grid.to_index(p).and_then(|i| self.cells.get_mut(i))
    }

    /// Cells covered by `footprint` anchored at `anchor`, in or out of bounds.
    pub fn covered(&self, anchor: GridPos, footprint: Footprint) -> Vec<GridPos> {
        footprint.cells_at(anchor, self.grid.topology())
    }

    /// `true` if some unit holds `p` on `layer`. Off-board cells are free.
    pub fn is_occupied(&self, p: GridPos, layer: Layer) -> bool {
        self.occupant(p, layer).is_some()
    }

    /// Unit holding `p` on `layer`.
    pub fn occupant(&self, p: GridPos, layer: Layer) -> Option<UnitId> {
        self.cell(p).and_then(|c| c.occupant(layer))
    }

    /// Every unit holding `p`, ground first, then sky, then underground.
    pub fn occupants_at(&self, p: GridPos) -> SmallVec<[(Layer, UnitId); 3]> {
        let mut out = SmallVec::new();
        if let Some(cell) = self.cell(p) {
            for layer in Layer::ALL {
                if let Some(id) = cell.occupant(layer) {
                    out.push((layer, id));
                }
            }
        }
        out
    }

    /// `true` iff every covered cell is on the board and either free on
    /// `layer` or held by `ignore`.
    pub fn can_fit(
        &self,
        anchor: GridPos,
        footprint: Footprint,
        layer: Layer,
        ignore: Option<UnitId>,
    ) -> bool {
        self.covered(anchor, footprint).into_iter().all(|p| {
            self.cell(p)
                .is_some_and(|c| c.occupant(layer).is_none() || c.occupant(layer) == ignore)
        })
    }

    /// Write `occupant` into every covered cell on `layer`.
    ///
    /// Fails without writing if any covered cell is off the board. Existing
    /// occupants are overwritten; use [`reserve`](Self::reserve) and
    /// [`release`](Self::release) for checked ownership.
    pub fn set_footprint(
        &mut self,
        anchor: GridPos,
        footprint: Footprint,
        layer: Layer,
        occupant: Option<UnitId>,
    ) -> Result<(), OccupancyError> {
        let covered = self.covered(anchor, footprint);
        if let Some(&cell) = covered.iter().find(|&&p| !self.grid.in_bounds(p)) {
            return Err(OccupancyError::OutOfBounds { cell });
        }
        for p in covered {
            if let Some(c) = self.cell_mut(p) {
                c.occupants[layer.index()] = occupant;
            }
        }
        Ok(())
    }

    /// Claim every covered cell on `layer` for `unit`.
    ///
    /// Cells already held by `unit` are accepted. Fails without writing on
    /// the first off-board cell or the first cell held by another unit.
    pub fn reserve(
        &mut self,
        anchor: GridPos,
        footprint: Footprint,
        layer: Layer,
        unit: UnitId,
    ) -> Result<(), OccupancyError> {
        for cell in self.covered(anchor, footprint) {
            match self.cell(cell) {
                None => return Err(OccupancyError::OutOfBounds { cell }),
                Some(c) => match c.occupant(layer) {
                    Some(occupant) if occupant != unit => {
                        return Err(OccupancyError::Conflict { cell, occupant })
                    }
                    _ => {}
                },
            }
        }
        self.set_footprint(anchor, footprint, layer, Some(unit))
    }

    /// Free every covered cell on `layer`, which must all be held by `unit`.
    pub fn release(
        &mut self,
        anchor: GridPos,
        footprint: Footprint,
        layer: Layer,
        unit: UnitId,
    ) -> Result<(), OccupancyError> {
        if let Some(cell) = self
            .covered(anchor, footprint)
            .into_iter()
            .find(|&p| self.occupant(p, layer) != Some(unit))
        {
            return Err(OccupancyError::NotHeld { cell, layer });
        }
        self.set_footprint(anchor, footprint, layer, None)
    }

    /// Highlight state of `p`; off-board cells are [`HighlightState::Clear`].
    pub fn highlight(&self, p: GridPos) -> HighlightState {
        self.cell(p).map_or(HighlightState::Clear, Cell::highlight)
    }

    /// Set the highlight state of `p`. Returns `false` off the board.
    pub fn set_highlight(&mut self, p: GridPos, state: HighlightState) -> bool {
        match self.cell_mut(p) {
            Some(c) => {
                c.highlight = state;
                true
            }
            None => false,
        }
    }

    /// Number of cells with a marked highlight. Walks the whole board.
    pub fn highlighted_count(&self) -> usize {
        self.cells.iter().filter(|c| c.highlight.is_marked()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tactica_core::{LayerElevations, Topology};
    use tactica_space::{HexGrid, SquareGrid};

    fn square(w: u32, h: u32) -> OccupancyMap {
        OccupancyMap::new(Box::new(
            SquareGrid::new(w, h, 1.0, LayerElevations::default()).unwrap(),
        ))
    }

    fn p(x: i32, y: i32) -> GridPos {
        GridPos::new(x, y)
    }

    const A: UnitId = UnitId(1);
    const B: UnitId = UnitId(2);

    // ── Footprints ─────────────────────────────────────────────

    #[test]
    fn footprint_covers_block_downward() {
        let mut map = square(5, 5);
        map.set_footprint(p(1, 3), Footprint::new(2, 2), Layer::Ground, Some(A))
            .unwrap();
        for c in [p(1, 3), p(2, 3), p(1, 2), p(2, 2)] {
            assert_eq!(map.occupant(c, Layer::Ground), Some(A), "{c}");
        }
        assert!(!map.is_occupied(p(1, 4), Layer::Ground));
        assert!(!map.is_occupied(p(1, 3), Layer::Sky));
    }

    #[test]
    fn out_of_bounds_write_is_all_or_nothing() {
        let mut map = square(3, 3);
        let err = map
            .set_footprint(p(2, 1), Footprint::new(2, 1), Layer::Ground, Some(A))
            .unwrap_err();
        assert_eq!(err, OccupancyError::OutOfBounds { cell: p(3, 1) });
        assert!(!map.is_occupied(p(2, 1), Layer::Ground));
    }

    #[test]
    fn hex_footprint_is_single_cell() {
        let mut map = OccupancyMap::new(Box::new(
            HexGrid::new(4, 4, 1.0, LayerElevations::default()).unwrap(),
        ));
        assert_eq!(map.grid().topology(), Topology::AxialHex);
        map.reserve(p(1, 1), Footprint::new(3, 3), Layer::Ground, A)
            .unwrap();
        assert!(map.is_occupied(p(1, 1), Layer::Ground));
        assert!(!map.is_occupied(p(2, 1), Layer::Ground));
        assert!(!map.is_occupied(p(1, 0), Layer::Ground));
    }

    // ── Reserve / release ──────────────────────────────────────

    #[test]
    fn reserve_then_release_restores_cells() {
        let mut map = square(6, 6);
        let fp = Footprint::new(3, 2);
        map.reserve(p(2, 4), fp, Layer::Sky, A).unwrap();
        assert_eq!(map.covered(p(2, 4), fp).len(), 6);
        map.release(p(2, 4), fp, Layer::Sky, A).unwrap();
        for c in map.grid().canonical_ordering() {
            assert!(map.occupants_at(c).is_empty(), "{c} still held");
        }
    }

    #[test]
    fn reserve_refuses_foreign_cells_without_writing() {
        let mut map = square(4, 4);
        map.reserve(p(2, 2), Footprint::UNIT, Layer::Ground, B)
            .unwrap();
        let err = map
            .reserve(p(1, 2), Footprint::new(2, 1), Layer::Ground, A)
            .unwrap_err();
        assert_eq!(
            err,
            OccupancyError::Conflict {
                cell: p(2, 2),
                occupant: B
            }
        );
        assert!(!map.is_occupied(p(1, 2), Layer::Ground));
        // Another layer is independent.
        map.reserve(p(1, 2), Footprint::new(2, 1), Layer::Sky, A)
            .unwrap();
    }

    #[test]
    fn release_requires_ownership() {
        let mut map = square(4, 4);
        map.reserve(p(0, 0), Footprint::UNIT, Layer::Ground, A)
            .unwrap();
        assert_eq!(
            map.release(p(0, 0), Footprint::UNIT, Layer::Ground, B),
            Err(OccupancyError::NotHeld {
                cell: p(0, 0),
                layer: Layer::Ground
            })
        );
        assert_eq!(map.occupant(p(0, 0), Layer::Ground), Some(A));
    }

    #[test]
    fn occupants_across_layers() {
        let mut map = square(3, 3);
        map.reserve(p(1, 1), Footprint::UNIT, Layer::Underground, B)
            .unwrap();
        map.reserve(p(1, 1), Footprint::UNIT, Layer::Ground, A)
            .unwrap();
        let all: Vec<_> = map.occupants_at(p(1, 1)).into_iter().collect();
        assert_eq!(all, vec![(Layer::Ground, A), (Layer::Underground, B)]);
        assert!(map.occupants_at(p(9, 9)).is_empty());
    }

    // ── can_fit ────────────────────────────────────────────────

    #[test]
    fn can_fit_ignores_self() {
        let mut map = square(4, 4);
        map.reserve(p(1, 1), Footprint::new(2, 1), Layer::Ground, A)
            .unwrap();
        assert!(map.can_fit(p(2, 1), Footprint::new(2, 1), Layer::Ground, Some(A)));
        assert!(!map.can_fit(p(2, 1), Footprint::new(2, 1), Layer::Ground, Some(B)));
        assert!(!map.can_fit(p(2, 1), Footprint::new(2, 1), Layer::Ground, None));
    }

    #[test]
    fn can_fit_is_false_off_board() {
        let map = square(4, 4);
        assert!(!map.can_fit(p(3, 0), Footprint::new(2, 1), Layer::Ground, None));
        assert!(!map.can_fit(p(0, 0), Footprint::new(1, 2), Layer::Ground, None));
        assert!(map.can_fit(p(0, 1), Footprint::new(1, 2), Layer::Ground, None));
    }

    // ── Highlight ──────────────────────────────────────────────

    #[test]
    fn highlight_round_trip() {
        let mut map = square(3, 3);
        assert!(map.set_highlight(p(2, 2), HighlightState::Blocked));
        assert!(!map.set_highlight(p(3, 2), HighlightState::Aim));
        assert_eq!(map.highlight(p(2, 2)), HighlightState::Blocked);
        assert_eq!(map.highlight(p(-1, 0)), HighlightState::Clear);
        assert_eq!(map.highlighted_count(), 1);
    }
}
