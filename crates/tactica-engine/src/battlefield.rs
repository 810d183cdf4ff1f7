//! The battlefield session: one board, its units, and the active selection.
//!
//! [`Battlefield`] owns the [`OccupancyMap`] outright. Every occupancy write
//! goes through spawn/despawn or a validated move/rotate, so there is no
//! other path to mutate cells.

use glam::Vec3;
use indexmap::IndexMap;
use tactica_core::{Facing, FacingMode, Footprint, GridPos, Layer, Topology, UnitId};
use tactica_overlay::{OverlayGeometry, OverlayMesh};
use tactica_shape::{AimShapeSpec, EffectShapeSpec};
use tactica_space::CoordinateSystem;
use tracing::{debug, trace};

use crate::config::{ConfigError, GridConfig};
use crate::cursor::{self, CursorShape};
use crate::error::{Rejection, SpawnError};
use crate::highlight::{HighlightDelta, RangeHighlighter};
use crate::metrics::BoardMetrics;
use crate::movement::{self, Commit, UnitState};
use crate::occupancy::OccupancyMap;

/// What the selected unit is currently doing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InteractionMode {
    /// Nothing highlighted.
    #[default]
    None,
    /// Choosing a move destination.
    Move {
        /// Movement range in steps.
        range: u32,
    },
    /// Choosing an ability target.
    Effect {
        /// Where a target may be chosen.
        aim: AimShapeSpec,
        /// What the chosen target affects.
        effect: EffectShapeSpec,
    },
}

/// Inputs the highlight set was last built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct RedrawKey {
    unit: UnitId,
    anchor: GridPos,
    facing: Facing,
    footprint: Footprint,
    mode: InteractionMode,
}

/// A board with units, a selection and its highlights.
#[derive(Debug)]
pub struct Battlefield {
    map: OccupancyMap,
    facing_mode: FacingMode,
    units: IndexMap<UnitId, UnitState>,
    next_id: UnitId,
    selection: Option<UnitId>,
    mode: InteractionMode,
    highlighter: RangeHighlighter,
    drawn: Option<RedrawKey>,
    overlay: Option<(u64, OverlayGeometry)>,
    metrics: BoardMetrics,
}

impl Battlefield {
    /// An empty battlefield for `config`.
    pub fn new(config: &GridConfig) -> Result<Self, ConfigError> {
        let grid = config.build_grid()?;
        debug!(
            topology = ?config.topology,
            width = config.width,
            height = config.height,
            "battlefield_created"
        );
        Ok(Self {
            map: OccupancyMap::new(grid),
            facing_mode: config.facing_mode,
            units: IndexMap::new(),
            next_id: UnitId(1),
            selection: None,
            mode: InteractionMode::None,
            highlighter: RangeHighlighter::new(),
            drawn: None,
            overlay: None,
            metrics: BoardMetrics::default(),
        })
    }

    /// The board's coordinate system.
    pub fn grid(&self) -> &dyn CoordinateSystem {
        self.map.grid()
    }

    /// Read-only occupancy and highlight state.
    pub fn map(&self) -> &OccupancyMap {
        &self.map
    }

    /// Board-wide facing rule.
    pub fn facing_mode(&self) -> FacingMode {
        self.facing_mode
    }

    /// Counters since creation.
    pub fn metrics(&self) -> BoardMetrics {
        self.metrics
    }

    /// Current highlight set.
    pub fn highlighter(&self) -> &RangeHighlighter {
        &self.highlighter
    }

    /// Cell under a world-space point.
    pub fn cell_at(&self, world: Vec3) -> Option<GridPos> {
        self.grid().cell_at(world)
    }

    // ── Units ──────────────────────────────────────────────────

    /// Place a new unit. `footprint` is its size as oriented for `facing`.
    ///
    /// Hex boards only accept 1x1 footprints.
    pub fn spawn_unit(
        &mut self,
        anchor: GridPos,
        footprint: Footprint,
        facing: Facing,
        layer: Layer,
    ) -> Result<UnitId, SpawnError> {
        let hex_misfit = self.grid().topology() == Topology::AxialHex && footprint != Footprint::UNIT;
        if !footprint.is_valid() || hex_misfit {
            return Err(SpawnError::InvalidFootprint(footprint));
        }
        let id = self.next_id;
        self.map.reserve(anchor, footprint, layer, id)?;
        self.next_id = id.next();
        self.units.insert(
            id,
            UnitState {
                id,
                anchor,
                footprint,
                facing,
                layer,
            },
        );
        self.metrics.units_spawned += 1;
        debug!(unit = %id, anchor = %anchor, layer = ?layer, "unit_spawned");
        self.invalidate_highlight();
        Ok(id)
    }

    /// Remove a unit and free its cells.
    ///
    /// # Panics
    ///
    /// Panics if the map does not hold the unit's footprint.
    pub fn despawn_unit(&mut self, id: UnitId) -> Option<UnitState> {
        let unit = self.units.shift_remove(&id)?;
        if let Err(e) = self.map.release(unit.anchor, unit.footprint, unit.layer, id) {
            panic!("occupancy invariant violated: despawn of {id} failed: {e}");
        }
        self.metrics.units_despawned += 1;
        debug!(unit = %id, "unit_despawned");
        if self.selection == Some(id) {
            self.deselect();
        } else {
            self.invalidate_highlight();
        }
        Some(unit)
    }

    /// State of a unit on the board.
    pub fn unit(&self, id: UnitId) -> Option<&UnitState> {
        self.units.get(&id)
    }

    /// Every unit, in spawn order.
    pub fn units(&self) -> impl Iterator<Item = &UnitState> + '_ {
        self.units.values()
    }

    // ── Selection ──────────────────────────────────────────────

    /// Currently selected unit.
    pub fn selection(&self) -> Option<UnitId> {
        self.selection
    }

    /// Current interaction mode.
    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    /// Select `id` in `mode`. Returns `true` if highlights were rebuilt.
    pub fn select(&mut self, id: UnitId, mode: InteractionMode) -> Result<bool, Rejection> {
        if !self.units.contains_key(&id) {
            return Err(Rejection::UnknownUnit(id));
        }
        self.selection = Some(id);
        self.mode = mode;
        Ok(self.refresh())
    }

    /// Drop the selection and clear highlights.
    pub fn deselect(&mut self) {
        self.selection = None;
        self.mode = InteractionMode::None;
        self.drawn = None;
        let cleared = self.highlighter.clear(&mut self.map);
        self.metrics.cells_cleared += cleared as u64;
    }

    fn redraw_key(&self) -> Option<RedrawKey> {
        let unit = self.selection.and_then(|id| self.units.get(&id))?;
        Some(RedrawKey {
            unit: unit.id,
            anchor: unit.anchor,
            facing: unit.facing,
            footprint: unit.footprint,
            mode: self.mode,
        })
    }

    fn invalidate_highlight(&mut self) {
        self.drawn = None;
        self.refresh();
    }

    /// Rebuild highlights if the selection, its placement or the mode
    /// changed since the last build. Returns `true` if rebuilt.
    pub fn refresh(&mut self) -> bool {
        let key = self.redraw_key();
        if key.is_some() && key == self.drawn {
            self.metrics.highlight_rebuilds_skipped += 1;
            trace!("highlight_rebuild_skipped");
            return false;
        }
        let Some(key) = key else {
            return false;
        };
        let Some(unit) = self.units.get(&key.unit).copied() else {
            return false;
        };
        let delta = match key.mode {
            InteractionMode::None => HighlightDelta {
                cleared: self.highlighter.clear(&mut self.map),
                marked: 0,
            },
            InteractionMode::Move { range } => {
                self.highlighter.show_movement(&mut self.map, &unit, range)
            }
            InteractionMode::Effect { aim, effect } => {
                self.highlighter
                    .show_aim(&mut self.map, &unit, &aim, &effect)
            }
        };
        self.metrics.highlight_rebuilds += 1;
        self.metrics.cells_cleared += delta.cleared as u64;
        self.metrics.cells_marked += delta.marked as u64;
        self.drawn = Some(key);
        true
    }

    // ── Cursor ─────────────────────────────────────────────────

    fn selected(&self) -> Option<&UnitState> {
        self.selection.and_then(|id| self.units.get(&id))
    }

    /// Cursor preview for the current mode, or `None` without a selection
    /// or in [`InteractionMode::None`].
    pub fn cursor(&self, hovered: GridPos) -> Option<CursorShape> {
        let unit = self.selected()?;
        match self.mode {
            InteractionMode::None => None,
            InteractionMode::Move { .. } => Some(cursor::move_cursor(
                &self.map,
                &self.highlighter,
                unit,
                hovered,
                self.facing_mode,
            )),
            InteractionMode::Effect { aim, effect } => Some(cursor::effect_cursor(
                &self.map,
                &self.highlighter,
                unit,
                hovered,
                &aim,
                &effect,
            )),
        }
    }

    /// Units the active ability would hit with `hovered` chosen.
    ///
    /// Empty unless in effect mode with a valid (highlighted) anchor.
    pub fn effect_targets(&self, hovered: GridPos) -> Vec<UnitId> {
        let InteractionMode::Effect { effect, .. } = self.mode else {
            return Vec::new();
        };
        match self.cursor(hovered) {
            Some(shape) if shape.valid => {
                cursor::effect_targets(&self.map, &shape.cells, effect.vertical)
            }
            _ => Vec::new(),
        }
    }

    // ── Commits ────────────────────────────────────────────────

    /// Move the selected unit so its anchor becomes `destination`.
    ///
    /// Requires `id` to be selected in move mode, the destination to lie in
    /// its movement reach and the move cursor there not to be blocked.
    pub fn try_commit_move(&mut self, id: UnitId, destination: GridPos) -> Result<Commit, Rejection> {
        let result = self.validate_and_move(id, destination);
        match &result {
            Ok(commit) => {
                self.metrics.moves_committed += 1;
                self.units.insert(id, commit.state);
                self.invalidate_highlight();
            }
            Err(reason) => {
                self.metrics.moves_rejected += 1;
                debug!(unit = %id, destination = %destination, reason = %reason, "move_declined");
            }
        }
        result
    }

    fn validate_and_move(&mut self, id: UnitId, destination: GridPos) -> Result<Commit, Rejection> {
        let unit = *self.units.get(&id).ok_or(Rejection::UnknownUnit(id))?;
        let range = match (self.selection, self.mode) {
            (Some(sel), InteractionMode::Move { range }) if sel == id => range,
            _ => return Err(Rejection::NotSelected(id)),
        };
        if destination == unit.anchor {
            return Err(Rejection::NoDisplacement);
        }
        if !self.grid().movement_reach(unit.anchor, range).contains(&destination) {
            return Err(Rejection::OutOfReach { destination });
        }
        let preview = cursor::move_cursor(
            &self.map,
            &self.highlighter,
            &unit,
            destination,
            self.facing_mode,
        );
        if !preview.valid {
            let (_, footprint) = movement::predict_orientation(
                &unit,
                destination - unit.anchor,
                self.facing_mode,
                self.grid().topology(),
            );
            let on_board = self
                .map
                .covered(destination, footprint)
                .into_iter()
                .all(|p| self.grid().in_bounds(p));
            return Err(if on_board {
                Rejection::Blocked {
                    destination,
                    footprint,
                }
            } else {
                Rejection::OutOfBounds { destination }
            });
        }
        movement::try_move(&mut self.map, &unit, destination, self.facing_mode)
    }

    /// Turn a unit in place toward `dir`.
    pub fn try_rotate(&mut self, id: UnitId, dir: GridPos) -> Result<Commit, Rejection> {
        let result = match self.units.get(&id).copied() {
            Some(unit) => movement::try_rotate(&mut self.map, &unit, dir, self.facing_mode),
            None => Err(Rejection::UnknownUnit(id)),
        };
        match &result {
            Ok(commit) => {
                self.metrics.rotations_committed += 1;
                self.units.insert(id, commit.state);
                self.invalidate_highlight();
            }
            Err(reason) => {
                self.metrics.rotations_rejected += 1;
                debug!(unit = %id, reason = %reason, "rotate_declined");
            }
        }
        result
    }

    // ── Overlay ────────────────────────────────────────────────

    /// Fill rectangles and outlines of the current highlight set.
    ///
    /// Rebuilt only when the highlight set changed since the last call.
    pub fn overlay(&mut self) -> &OverlayGeometry {
        let generation = self.highlighter.generation();
        if self.overlay.as_ref().is_some_and(|(g, _)| *g != generation) {
            self.overlay = None;
        }
        let (_, geometry) = self.overlay.get_or_insert_with(|| {
            self.metrics.overlay_rebuilds += 1;
            let geometry = OverlayGeometry::from_mask(&self.highlighter.mask(&self.map));
            debug!(generation, rects = geometry.rects.len(), "overlay_rebuilt");
            (generation, geometry)
        });
        geometry
    }

    /// World quads for the current highlight set, at ground elevation.
    pub fn overlay_mesh(&mut self) -> OverlayMesh {
        let spacing = self.grid().spacing();
        let ground = self.grid().elevations().ground;
        self.overlay().mesh(spacing, ground)
    }

    /// World polylines outlining the current highlight set.
    pub fn overlay_lines(&mut self) -> Vec<Vec<Vec3>> {
        let spacing = self.grid().spacing();
        let ground = self.grid().elevations().ground;
        self.overlay().lines(spacing, ground)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tactica_shape::{AimKind, EffectKind, VerticalReach};

    fn p(x: i32, y: i32) -> GridPos {
        GridPos::new(x, y)
    }

    fn board() -> Battlefield {
        Battlefield::new(&GridConfig::square(10, 10)).unwrap()
    }

    // ── Spawning ───────────────────────────────────────────────

    #[test]
    fn spawn_assigns_sequential_ids() {
        let mut b = board();
        let a = b.spawn_unit(p(0, 0), Footprint::UNIT, Facing::PosY, Layer::Ground).unwrap();
        let c = b.spawn_unit(p(1, 0), Footprint::UNIT, Facing::PosY, Layer::Ground).unwrap();
        assert_eq!(c, a.next());
        assert_eq!(b.units().count(), 2);
        assert_eq!(b.metrics().units_spawned, 2);
    }

    #[test]
    fn spawn_onto_occupied_cell_fails() {
        let mut b = board();
        b.spawn_unit(p(2, 2), Footprint::new(2, 2), Facing::PosY, Layer::Ground).unwrap();
        let err = b
            .spawn_unit(p(3, 1), Footprint::UNIT, Facing::PosY, Layer::Ground)
            .unwrap_err();
        assert!(matches!(err, SpawnError::Occupancy(_)));
        assert_eq!(b.units().count(), 1);
    }

    #[test]
    fn hex_board_rejects_large_footprints() {
        let mut b = Battlefield::new(&GridConfig::hex(5, 5)).unwrap();
        assert_eq!(
            b.spawn_unit(p(1, 1), Footprint::new(2, 1), Facing::PosY, Layer::Ground),
            Err(SpawnError::InvalidFootprint(Footprint::new(2, 1)))
        );
    }

    #[test]
    fn despawn_frees_cells_and_selection() {
        let mut b = board();
        let id = b.spawn_unit(p(4, 4), Footprint::new(2, 1), Facing::PosY, Layer::Sky).unwrap();
        b.select(id, InteractionMode::Move { range: 2 }).unwrap();
        assert!(!b.highlighter().is_empty());
        let state = b.despawn_unit(id).unwrap();
        assert_eq!(state.anchor, p(4, 4));
        assert!(!b.map().is_occupied(p(5, 4), Layer::Sky));
        assert_eq!(b.selection(), None);
        assert!(b.highlighter().is_empty());
        assert!(b.despawn_unit(id).is_none());
    }

    // ── Selection ──────────────────────────────────────────────

    #[test]
    fn reselecting_same_state_is_skipped() {
        let mut b = board();
        let id = b.spawn_unit(p(5, 5), Footprint::UNIT, Facing::PosY, Layer::Ground).unwrap();
        assert!(b.select(id, InteractionMode::Move { range: 3 }).unwrap());
        assert!(!b.select(id, InteractionMode::Move { range: 3 }).unwrap());
        assert!(b.select(id, InteractionMode::Move { range: 2 }).unwrap());
        assert_eq!(b.metrics().highlight_rebuilds_skipped, 1);
    }

    #[test]
    fn unknown_unit_cannot_be_selected() {
        let mut b = board();
        assert_eq!(
            b.select(UnitId(42), InteractionMode::None),
            Err(Rejection::UnknownUnit(UnitId(42)))
        );
    }

    // ── Moves ──────────────────────────────────────────────────

    #[test]
    fn move_within_range_commits() {
        let mut b = board();
        let id = b.spawn_unit(p(0, 0), Footprint::UNIT, Facing::PosY, Layer::Ground).unwrap();
        b.select(id, InteractionMode::Move { range: 3 }).unwrap();
        assert!(b.map().can_fit(p(2, 0), Footprint::UNIT, Layer::Ground, Some(id)));
        let commit = b.try_commit_move(id, p(2, 0)).unwrap();
        assert_eq!(commit.state.anchor, p(2, 0));
        assert_eq!(b.unit(id).unwrap().anchor, p(2, 0));
        // Highlights follow the unit.
        assert!(b.highlighter().contains(p(5, 0)));
        assert!(!b.highlighter().contains(p(0, 3)));
    }

    #[test]
    fn move_requires_selection() {
        let mut b = board();
        let id = b.spawn_unit(p(0, 0), Footprint::UNIT, Facing::PosY, Layer::Ground).unwrap();
        assert_eq!(b.try_commit_move(id, p(1, 0)), Err(Rejection::NotSelected(id)));
        b.select(id, InteractionMode::Effect {
            aim: AimShapeSpec::new(AimKind::Radius, 2, 0, 0),
            effect: EffectShapeSpec::cell(),
        })
        .unwrap();
        assert_eq!(b.try_commit_move(id, p(1, 0)), Err(Rejection::NotSelected(id)));
        assert_eq!(b.metrics().moves_rejected, 2);
    }

    #[test]
    fn move_beyond_reach_is_declined() {
        let mut b = board();
        let id = b.spawn_unit(p(0, 0), Footprint::UNIT, Facing::PosY, Layer::Ground).unwrap();
        b.select(id, InteractionMode::Move { range: 2 }).unwrap();
        assert_eq!(
            b.try_commit_move(id, p(2, 2)),
            Err(Rejection::OutOfReach { destination: p(2, 2) })
        );
    }

    #[test]
    fn zero_displacement_leaves_unit_untouched() {
        let mut b = board();
        let id = b.spawn_unit(p(3, 3), Footprint::new(2, 1), Facing::PosY, Layer::Ground).unwrap();
        b.select(id, InteractionMode::Move { range: 3 }).unwrap();
        let before = *b.unit(id).unwrap();
        assert_eq!(b.try_commit_move(id, p(3, 3)), Err(Rejection::NoDisplacement));
        assert_eq!(*b.unit(id).unwrap(), before);
    }

    #[test]
    fn blocked_destination_is_declined() {
        let mut b = board();
        let id = b.spawn_unit(p(0, 0), Footprint::UNIT, Facing::PosY, Layer::Ground).unwrap();
        b.spawn_unit(p(1, 0), Footprint::UNIT, Facing::PosY, Layer::Ground).unwrap();
        b.select(id, InteractionMode::Move { range: 3 }).unwrap();
        assert!(matches!(
            b.try_commit_move(id, p(1, 0)),
            Err(Rejection::Blocked { .. })
        ));
        assert_eq!(b.unit(id).unwrap().anchor, p(0, 0));
    }

    // ── Rotation ───────────────────────────────────────────────

    #[test]
    fn rotation_updates_unit_and_metrics() {
        let mut b = board();
        let id = b.spawn_unit(p(4, 4), Footprint::new(2, 1), Facing::PosY, Layer::Ground).unwrap();
        let commit = b.try_rotate(id, p(1, 0)).unwrap();
        assert_eq!(commit.state.footprint, Footprint::new(1, 2));
        assert_eq!(b.unit(id).unwrap().facing, Facing::PosX);
        assert_eq!(b.metrics().rotations_committed, 1);
        assert_eq!(b.try_rotate(UnitId(99), p(1, 0)), Err(Rejection::UnknownUnit(UnitId(99))));
    }

    // ── Effects and overlay ────────────────────────────────────

    #[test]
    fn effect_targets_only_on_valid_anchor() {
        let mut b = board();
        let caster = b.spawn_unit(p(2, 2), Footprint::UNIT, Facing::PosY, Layer::Ground).unwrap();
        let flyer = b.spawn_unit(p(2, 4), Footprint::UNIT, Facing::PosY, Layer::Sky).unwrap();
        let mode = InteractionMode::Effect {
            aim: AimShapeSpec::new(AimKind::Radius, 3, 0, 0),
            effect: EffectShapeSpec::new(EffectKind::Circle, 1, 0).with_vertical(VerticalReach::All),
        };
        b.select(caster, mode).unwrap();
        assert_eq!(b.effect_targets(p(2, 4)), vec![flyer]);
        assert!(b.effect_targets(p(9, 9)).is_empty());
    }

    #[test]
    fn overlay_is_cached_per_highlight_generation() {
        let mut b = board();
        let id = b.spawn_unit(p(5, 5), Footprint::UNIT, Facing::PosY, Layer::Ground).unwrap();
        b.select(id, InteractionMode::Move { range: 1 }).unwrap();
        assert_eq!(b.overlay().contours.len(), 1);
        b.overlay();
        assert_eq!(b.metrics().overlay_rebuilds, 1);
        b.select(id, InteractionMode::Move { range: 2 }).unwrap();
        let mesh = b.overlay_mesh();
        assert!(!mesh.vertices.is_empty());
        assert_eq!(b.metrics().overlay_rebuilds, 2);
        assert_eq!(b.overlay_lines().len(), 1);
    }

    #[test]
    fn cell_at_maps_world_points() {
        let b = board();
        assert_eq!(b.cell_at(Vec3::new(3.2, 0.0, 6.9)), Some(p(3, 7)));
        assert_eq!(b.cell_at(Vec3::new(-3.0, 0.0, 0.0)), None);
    }
}
