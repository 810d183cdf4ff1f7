//! Reachable-range and aim-region highlighting.
//!
//! The highlighter remembers exactly which cells it marked last, so a
//! rebuild only clears those instead of sweeping the board.

use indexmap::IndexSet;
use tactica_core::{GridPos, Layer, UnitId};
use tactica_overlay::CellMask;
use tactica_shape::{aim_offsets, AimShapeSpec, EffectShapeSpec};
use tracing::debug;

use crate::cursor::shape_limit;
use crate::movement::UnitState;
use crate::occupancy::{HighlightState, OccupancyMap};

/// Cells touched by one rebuild.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HighlightDelta {
    /// Previously marked cells reset to clear.
    pub cleared: usize,
    /// Cells marked by this rebuild.
    pub marked: usize,
}

/// Owner of the current highlight set.
#[derive(Clone, Debug, Default)]
pub struct RangeHighlighter {
    marked: IndexSet<GridPos>,
    generation: u64,
}

impl RangeHighlighter {
    /// An empty highlighter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently marked cells, in marking order.
    pub fn marked(&self) -> &IndexSet<GridPos> {
        &self.marked
    }

    /// `true` if `p` is currently marked.
    pub fn contains(&self, p: GridPos) -> bool {
        self.marked.contains(&p)
    }

    /// Number of marked cells.
    pub fn len(&self) -> usize {
        self.marked.len()
    }

    /// `true` if nothing is marked.
    pub fn is_empty(&self) -> bool {
        self.marked.is_empty()
    }

    /// Incremented whenever the marked set changes.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The marked set as a cell mask sized to the board.
    pub fn mask(&self, map: &OccupancyMap) -> CellMask {
        let grid = map.grid();
        CellMask::from_cells(grid.width(), grid.height(), self.marked.iter().copied())
    }

    /// Reset every previously marked cell. Returns how many were reset.
    pub fn clear(&mut self, map: &mut OccupancyMap) -> usize {
        let cleared = self.marked.len();
        for &p in &self.marked {
            map.set_highlight(p, HighlightState::Clear);
        }
        self.marked.clear();
        if cleared > 0 {
            self.generation += 1;
        }
        cleared
    }

    fn mark(&mut self, map: &mut OccupancyMap, p: GridPos, state: HighlightState) {
        if map.set_highlight(p, state) {
            self.marked.insert(p);
        }
    }

    fn occupied_by_other(map: &OccupancyMap, p: GridPos, layer: Layer, unit: UnitId) -> bool {
        map.occupant(p, layer).is_some_and(|o| o != unit)
    }

    /// Mark the movement reach of `unit`.
    ///
    /// Every reachable anchor gets the unit's footprint stamped on it, so
    /// the full silhouette is visible. Cells held by another unit on the
    /// unit's layer are marked [`Blocked`](HighlightState::Blocked) rather
    /// than skipped.
    pub fn show_movement(
        &mut self,
        map: &mut OccupancyMap,
        unit: &UnitState,
        range: u32,
    ) -> HighlightDelta {
        let cleared = self.clear(map);
        let reach = map.grid().movement_reach(unit.anchor, range);
        for anchor in reach {
            for p in map.covered(anchor, unit.footprint) {
                let state = if Self::occupied_by_other(map, p, unit.layer, unit.id) {
                    HighlightState::Blocked
                } else {
                    HighlightState::Reachable
                };
                self.mark(map, p, state);
            }
        }
        self.finish(unit, cleared, "movement")
    }

    /// Mark the aim region of `unit` for an ability.
    pub fn show_aim(
        &mut self,
        map: &mut OccupancyMap,
        unit: &UnitState,
        aim: &AimShapeSpec,
        effect: &EffectShapeSpec,
    ) -> HighlightDelta {
        let cleared = self.clear(map);
        let limit = shape_limit(map.grid());
        let (aim, effect) = (aim.clamped(limit), effect.clamped(limit));
        let offsets = aim_offsets(&aim, &effect, unit.footprint, unit.facing);
        for p in offsets.translated(unit.anchor) {
            self.mark(map, p, HighlightState::Aim);
        }
        self.finish(unit, cleared, "aim")
    }

    fn finish(&mut self, unit: &UnitState, cleared: usize, kind: &'static str) -> HighlightDelta {
        let marked = self.marked.len();
        if marked > 0 {
            self.generation += 1;
        }
        debug!(unit = %unit.id, kind, cleared, marked, "highlight_rebuilt");
        HighlightDelta { cleared, marked }
    }
}
