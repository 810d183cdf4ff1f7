//! Move and rotate validation with atomic commit.
//!
//! Each request runs Validate then either Rejected (no mutation) or
//! Committed (old footprint released, new footprint reserved, unit state
//! replaced). Nothing is persisted between calls.

use glam::Vec3;
use tactica_core::{Facing, FacingMode, Footprint, GridPos, Layer, Topology, UnitId};
use tracing::{debug, trace};

use crate::error::{OccupancyError, Rejection};
use crate::occupancy::OccupancyMap;

/// Placement of one unit on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnitState {
    /// Handle.
    pub id: UnitId,
    /// Footprint anchor (top-left cell on square boards).
    pub anchor: GridPos,
    /// Current size, already oriented for `facing`.
    pub footprint: Footprint,
    /// Current facing.
    pub facing: Facing,
    /// Vertical layer the unit occupies.
    pub layer: Layer,
}

/// What the external motion collaborator should play after a commit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionRequest {
    /// Unit to animate.
    pub unit: UnitId,
    /// World position of the new anchor, footprint-centred on square boards.
    pub target: Vec3,
    /// `true` for a translation, `false` for an in-place turn.
    pub moving: bool,
    /// Direction to look along, in world space. Zero if undetermined.
    pub look: Vec3,
}

/// A successful move or rotation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Commit {
    /// State before the request.
    pub previous: UnitState,
    /// State after the request.
    pub state: UnitState,
    /// Motion hand-off.
    pub motion: MotionRequest,
}

/// World-space forward `(x, z)` of an axial hex direction at unit spacing.
///
/// Matches the flat-top layout of `HexGrid::grid_to_world`, which is linear,
/// so the difference of two placements is this vector scaled by spacing.
fn hex_forward(dir: GridPos) -> (f32, f32) {
    let (q, r) = (dir.x as f32, dir.y as f32);
    (1.5 * q, 3f32.sqrt() * (r + 0.5 * q))
}

/// Facing and footprint a unit would adopt acting along `dir`.
///
/// Square boards swap the footprint sides when the facing changes between
/// the vertical and horizontal class; hex boards never swap. On hex boards
/// a free facing is the world-space forward vector snapped to its dominant
/// axis, so a south-east step faces `+x` rather than tying toward `-y`.
pub fn predict_orientation(
    unit: &UnitState,
    dir: GridPos,
    mode: FacingMode,
    topology: Topology,
) -> (Facing, Footprint) {
    let facing = match (topology, mode) {
        (Topology::AxialHex, FacingMode::Free) => {
            let (x, z) = hex_forward(dir);
            Facing::from_vector(x, z).unwrap_or(unit.facing)
        }
        _ => mode.resolve(unit.facing, dir),
    };
    let footprint = match topology {
        Topology::Square if !unit.footprint.is_square() => {
            unit.footprint.reoriented(unit.facing, facing)
        }
        _ => unit.footprint,
    };
    (facing, footprint)
}

fn look_vector(topology: Topology, dir: GridPos, facing: Facing) -> Vec3 {
    match topology {
        Topology::Square => {
            let v = facing.vector();
            Vec3::new(v.x as f32, 0.0, v.y as f32)
        }
        // Continuous-looking turn along the literal direction.
        Topology::AxialHex => {
            let (x, z) = hex_forward(dir);
            Vec3::new(x, 0.0, z).normalize_or_zero()
        }
    }
}

/// Replace `from`'s footprint with `to`'s.
///
/// # Panics
///
/// Panics if either the release or the reservation fails, which after a
/// successful `can_fit` means occupancy bookkeeping is already corrupt.
fn swap_footprint(map: &mut OccupancyMap, from: &UnitState, to: &UnitState) {
    let released = map.release(from.anchor, from.footprint, from.layer, from.id);
    assert_committed(released, from.id, "release");
    let reserved = map.reserve(to.anchor, to.footprint, to.layer, to.id);
    assert_committed(reserved, to.id, "reserve");
}

fn assert_committed(result: Result<(), OccupancyError>, unit: UnitId, step: &str) {
    if let Err(e) = result {
        panic!("occupancy invariant violated: {step} for {unit} failed after validation: {e}");
    }
}

/// Validate and commit moving `unit` so its anchor becomes `destination`.
///
/// The unit turns per `mode` toward the displacement; a non-square
/// footprint swaps sides on a class change. The destination must fit with
/// the unit's own cells ignored.
///
/// # Panics
///
/// Panics if the map disagrees with `unit` about which cells it holds.
pub fn try_move(
    map: &mut OccupancyMap,
    unit: &UnitState,
    destination: GridPos,
    mode: FacingMode,
) -> Result<Commit, Rejection> {
    let grid = map.grid();
    if !grid.in_bounds(destination) {
        debug!(unit = %unit.id, destination = %destination, "move_rejected_out_of_bounds");
        return Err(Rejection::OutOfBounds { destination });
    }
    let dir = destination - unit.anchor;
    if dir.is_zero() {
        return Err(Rejection::NoDisplacement);
    }
    let (facing, footprint) = predict_orientation(unit, dir, mode, grid.topology());

    if !map
        .covered(destination, footprint)
        .into_iter()
        .all(|p| grid.in_bounds(p))
    {
        debug!(unit = %unit.id, destination = %destination, "move_rejected_out_of_bounds");
        return Err(Rejection::OutOfBounds { destination });
    }
    if !map.can_fit(destination, footprint, unit.layer, Some(unit.id)) {
        debug!(unit = %unit.id, destination = %destination, "move_rejected_blocked");
        return Err(Rejection::Blocked {
            destination,
            footprint,
        });
    }

    let next = UnitState {
        anchor: destination,
        footprint,
        facing,
        ..*unit
    };
    let motion = MotionRequest {
        unit: unit.id,
        target: grid.anchor_to_world(destination, footprint, unit.layer),
        moving: true,
        look: look_vector(grid.topology(), dir, facing),
    };
    swap_footprint(map, unit, &next);
    debug!(
        unit = %unit.id,
        from = %unit.anchor,
        to = %destination,
        facing = ?facing,
        "move_committed"
    );
    Ok(Commit {
        previous: *unit,
        state: next,
        motion,
    })
}

/// Validate and commit turning `unit` in place toward `dir`.
///
/// A footprint swap is re-validated at the same anchor: a quarter turn can
/// push the footprint into a neighbour or off the board.
///
/// # Panics
///
/// Panics if the map disagrees with `unit` about which cells it holds.
pub fn try_rotate(
    map: &mut OccupancyMap,
    unit: &UnitState,
    dir: GridPos,
    mode: FacingMode,
) -> Result<Commit, Rejection> {
    if dir.is_zero() {
        return Err(Rejection::NoDisplacement);
    }
    let grid = map.grid();
    let (facing, footprint) = predict_orientation(unit, dir, mode, grid.topology());
    let destination = unit.anchor;

    if footprint != unit.footprint {
        if !map
            .covered(destination, footprint)
            .into_iter()
            .all(|p| grid.in_bounds(p))
        {
            debug!(unit = %unit.id, facing = ?facing, "rotate_rejected_out_of_bounds");
            return Err(Rejection::OutOfBounds { destination });
        }
        if !map.can_fit(destination, footprint, unit.layer, Some(unit.id)) {
            debug!(unit = %unit.id, facing = ?facing, "rotate_rejected_blocked");
            return Err(Rejection::Blocked {
                destination,
                footprint,
            });
        }
    }

    let next = UnitState {
        footprint,
        facing,
        ..*unit
    };
    let motion = MotionRequest {
        unit: unit.id,
        target: grid.anchor_to_world(destination, footprint, unit.layer),
        moving: false,
        look: look_vector(grid.topology(), dir, facing),
    };
    if footprint != unit.footprint {
        swap_footprint(map, unit, &next);
    } else {
        trace!(unit = %unit.id, "rotate_without_footprint_change");
    }
    debug!(unit = %unit.id, facing = ?facing, "rotate_committed");
    Ok(Commit {
        previous: *unit,
        state: next,
        motion,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tactica_core::LayerElevations;
    use tactica_space::{HexGrid, SquareGrid};

    fn p(x: i32, y: i32) -> GridPos {
        GridPos::new(x, y)
    }

    fn square(w: u32, h: u32) -> OccupancyMap {
        OccupancyMap::new(Box::new(
            SquareGrid::new(w, h, 1.0, LayerElevations::default()).unwrap(),
        ))
    }

    fn place(map: &mut OccupancyMap, id: u32, anchor: GridPos, fp: Footprint) -> UnitState {
        let unit = UnitState {
            id: UnitId(id),
            anchor,
            footprint: fp,
            facing: Facing::PosY,
            layer: Layer::Ground,
        };
        map.reserve(anchor, fp, Layer::Ground, unit.id).unwrap();
        unit
    }

    // ── Moves ──────────────────────────────────────────────────

    #[test]
    fn simple_move_commits() {
        let mut map = square(10, 10);
        let unit = place(&mut map, 1, p(0, 0), Footprint::UNIT);
        let commit = try_move(&mut map, &unit, p(2, 0), FacingMode::Free).unwrap();
        assert_eq!(commit.state.anchor, p(2, 0));
        assert_eq!(commit.state.facing, Facing::PosX);
        assert!(commit.motion.moving);
        assert_eq!(commit.motion.target, Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(commit.motion.look, Vec3::X);
        assert!(!map.is_occupied(p(0, 0), Layer::Ground));
        assert_eq!(map.occupant(p(2, 0), Layer::Ground), Some(UnitId(1)));
    }

    #[test]
    fn zero_displacement_is_a_no_op() {
        let mut map = square(5, 5);
        let unit = place(&mut map, 1, p(2, 2), Footprint::new(2, 1));
        assert_eq!(
            try_move(&mut map, &unit, p(2, 2), FacingMode::Free),
            Err(Rejection::NoDisplacement)
        );
        assert_eq!(map.occupant(p(3, 2), Layer::Ground), Some(UnitId(1)));
    }

    #[test]
    fn blocked_move_changes_nothing() {
        let mut map = square(5, 5);
        let unit = place(&mut map, 1, p(0, 0), Footprint::UNIT);
        place(&mut map, 2, p(1, 0), Footprint::UNIT);
        let err = try_move(&mut map, &unit, p(1, 0), FacingMode::Free).unwrap_err();
        assert!(matches!(err, Rejection::Blocked { .. }));
        assert_eq!(map.occupant(p(0, 0), Layer::Ground), Some(UnitId(1)));
    }

    #[test]
    fn overlapping_self_move_is_legal() {
        let mut map = square(6, 3);
        let unit = place(&mut map, 1, p(0, 1), Footprint::new(3, 1));
        // Moving along the long axis keeps the class, so no swap.
        let mut east = unit;
        east.facing = Facing::PosX;
        let commit = try_move(&mut map, &east, p(1, 1), FacingMode::Free).unwrap();
        assert_eq!(commit.state.footprint, Footprint::new(3, 1));
        assert!(!map.is_occupied(p(0, 1), Layer::Ground));
        assert!(map.is_occupied(p(3, 1), Layer::Ground));
    }

    #[test]
    fn off_board_move_rejected() {
        let mut map = square(3, 3);
        let unit = place(&mut map, 1, p(1, 1), Footprint::new(2, 1));
        assert_eq!(
            try_move(&mut map, &unit, p(2, 2), FacingMode::Fixed),
            Err(Rejection::OutOfBounds {
                destination: p(2, 2)
            })
        );
    }

    #[test]
    fn fixed_mode_never_swaps() {
        let mut map = square(6, 6);
        let unit = place(&mut map, 1, p(0, 3), Footprint::new(2, 1));
        let commit = try_move(&mut map, &unit, p(3, 3), FacingMode::Fixed).unwrap();
        assert_eq!(commit.state.facing, Facing::PosY);
        assert_eq!(commit.state.footprint, Footprint::new(2, 1));
    }

    // ── Rotation ───────────────────────────────────────────────

    #[test]
    fn wide_unit_turning_east_becomes_tall() {
        let mut map = square(5, 5);
        let unit = place(&mut map, 1, p(1, 3), Footprint::new(2, 1));
        let commit = try_rotate(&mut map, &unit, p(1, 0), FacingMode::Free).unwrap();
        assert_eq!(commit.state.footprint, Footprint::new(1, 2));
        assert_eq!(commit.state.facing, Facing::PosX);
        assert!(!commit.motion.moving);
        assert!(map.is_occupied(p(1, 2), Layer::Ground));
        assert!(!map.is_occupied(p(2, 3), Layer::Ground));
    }

    #[test]
    fn blocked_rotation_keeps_original_state() {
        let mut map = square(5, 5);
        let unit = place(&mut map, 1, p(1, 3), Footprint::new(2, 1));
        place(&mut map, 2, p(1, 2), Footprint::UNIT);
        let err = try_rotate(&mut map, &unit, p(1, 0), FacingMode::Free).unwrap_err();
        assert_eq!(
            err,
            Rejection::Blocked {
                destination: p(1, 3),
                footprint: Footprint::new(1, 2)
            }
        );
        assert_eq!(map.occupant(p(2, 3), Layer::Ground), Some(UnitId(1)));
        assert_eq!(map.occupant(p(1, 2), Layer::Ground), Some(UnitId(2)));
    }

    #[test]
    fn rotation_off_board_rejected() {
        let mut map = square(5, 5);
        let unit = place(&mut map, 1, p(3, 0), Footprint::new(2, 1));
        assert_eq!(
            try_rotate(&mut map, &unit, p(-1, 0), FacingMode::Free),
            Err(Rejection::OutOfBounds {
                destination: p(3, 0)
            })
        );
    }

    #[test]
    fn hex_turn_keeps_size_and_looks_along_direction() {
        let mut map = OccupancyMap::new(Box::new(
            HexGrid::new(5, 5, 1.0, LayerElevations::default()).unwrap(),
        ));
        let unit = place(&mut map, 1, p(2, 2), Footprint::UNIT);
        let commit = try_rotate(&mut map, &unit, p(1, -1), FacingMode::Free).unwrap();
        assert_eq!(commit.state.footprint, Footprint::UNIT);
        // South-east points mostly along +x in world space.
        assert_eq!(commit.state.facing, Facing::PosX);
        assert!((commit.motion.look.length() - 1.0).abs() < 1e-5);
        assert!(commit.motion.look.x > 0.0);
    }

    #[test]
    fn hex_facing_follows_world_forward() {
        let hex = |q, r| {
            let unit = UnitState {
                id: UnitId(1),
                anchor: p(2, 2),
                footprint: Footprint::UNIT,
                facing: Facing::PosY,
                layer: Layer::Ground,
            };
            predict_orientation(&unit, p(q, r), FacingMode::Free, Topology::AxialHex).0
        };
        assert_eq!(hex(0, -1), Facing::NegY);
        assert_eq!(hex(-1, 1), Facing::NegX);
        assert_eq!(hex(-1, 2), Facing::PosY);
        assert_eq!(hex(0, 0), Facing::PosY);
    }

    #[test]
    fn extreme_targets_are_rejected_not_overflowed() {
        let mut map = square(4, 4);
        let unit = place(&mut map, 1, p(1, 1), Footprint::UNIT);
        let far = p(i32::MIN, i32::MAX);
        assert_eq!(
            try_move(&mut map, &unit, far, FacingMode::Free),
            Err(Rejection::OutOfBounds { destination: far })
        );
        let turned = try_rotate(&mut map, &unit, p(i32::MIN, 0), FacingMode::Free).unwrap();
        assert_eq!(turned.state.facing, Facing::NegX);
    }
}
