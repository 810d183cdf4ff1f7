//! Cursor previews for the input collaborator.
//!
//! Both previews are pure functions of the board, the highlighter and the
//! hovered cell; nothing is cached between calls.

use indexmap::IndexSet;
use tactica_core::{FacingMode, GridPos, UnitId};
use tactica_shape::{aim_offsets, effect_offsets, AimShapeSpec, EffectShapeSpec, VerticalReach};
use tactica_space::CoordinateSystem;

use crate::highlight::RangeHighlighter;
use crate::movement::{predict_orientation, UnitState};
use crate::occupancy::OccupancyMap;

/// Absolute cells under the cursor and whether the hovered cell is usable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CursorShape {
    /// On-board cells covered by the preview.
    pub cells: Vec<GridPos>,
    /// `false` renders as a blocked cursor.
    pub valid: bool,
}

/// Largest shape size that can still change which on-board cells a shape
/// covers.
///
/// Every on-board distance is below `width + height`, and a centred span
/// needs twice that to reach both edges from any cell. Authored sizes are
/// clamped to this before any offsets are generated.
pub fn shape_limit(grid: &dyn CoordinateSystem) -> i32 {
    let extent = u64::from(grid.width()) + u64::from(grid.height());
    i32::try_from(extent * 2).unwrap_or(i32::MAX)
}

/// Preview `unit`'s footprint at `hovered`.
///
/// The footprint is the one the unit would have after turning toward
/// `hovered`. The preview is blocked iff any covered cell is off the board,
/// held by another unit on the unit's layer, or not highlighted. An
/// off-board `hovered` yields an empty, blocked preview.
pub fn move_cursor(
    map: &OccupancyMap,
    highlighter: &RangeHighlighter,
    unit: &UnitState,
    hovered: GridPos,
    mode: FacingMode,
) -> CursorShape {
    let grid = map.grid();
    if !grid.in_bounds(hovered) {
        return CursorShape::default();
    }
    let (_, footprint) = predict_orientation(unit, hovered - unit.anchor, mode, grid.topology());
    let covered = map.covered(hovered, footprint);
    let valid = covered.iter().all(|&p| {
        grid.in_bounds(p)
            && highlighter.contains(p)
            && map.occupant(p, unit.layer).is_none_or(|o| o == unit.id)
    });
    let cells = covered.into_iter().filter(|&p| grid.in_bounds(p)).collect();
    CursorShape { cells, valid }
}

/// Preview the cells an ability would affect with `hovered` chosen.
///
/// Body-relative aims stay on the caster wherever the cursor is; ring aims
/// pick a single cell; every other aim stamps the effect at `hovered`,
/// oriented by the caster's facing. Valid iff `hovered` is highlighted.
pub fn effect_cursor(
    map: &OccupancyMap,
    highlighter: &RangeHighlighter,
    unit: &UnitState,
    hovered: GridPos,
    aim: &AimShapeSpec,
    effect: &EffectShapeSpec,
) -> CursorShape {
    let grid = map.grid();
    let limit = shape_limit(grid);
    let (aim, effect) = (&aim.clamped(limit), &effect.clamped(limit));
    let cells: Vec<GridPos> = if aim.kind.is_body_relative() {
        aim_offsets(aim, effect, unit.footprint, unit.facing)
            .translated(unit.anchor)
            .filter(|&p| grid.in_bounds(p))
            .collect()
    } else if aim.kind.picks_single_cell() {
        Some(hovered).filter(|&p| grid.in_bounds(p)).into_iter().collect()
    } else {
        effect_offsets(effect, unit.facing)
            .translated(hovered)
            .filter(|&p| grid.in_bounds(p))
            .collect()
    };
    CursorShape {
        cells,
        valid: highlighter.contains(hovered),
    }
}

/// Unique occupants of `cells` on the layers `vertical` reaches, in first-hit
/// order.
pub fn effect_targets(map: &OccupancyMap, cells: &[GridPos], vertical: VerticalReach) -> Vec<UnitId> {
    let mut hit = IndexSet::new();
    for &p in cells {
        for &layer in vertical.layers() {
            if let Some(id) = map.occupant(p, layer) {
                hit.insert(id);
            }
        }
    }
    hit.into_iter().collect()
}
