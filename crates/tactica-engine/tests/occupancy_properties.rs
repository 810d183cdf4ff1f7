//! Property tests for occupancy bookkeeping and move validation.

use proptest::prelude::*;
use tactica_core::{Facing, FacingMode, Footprint, GridPos, Layer, LayerElevations, UnitId};
use tactica_engine::movement::{try_move, UnitState};
use tactica_engine::OccupancyMap;
use tactica_space::SquareGrid;

const W: u32 = 8;
const H: u32 = 8;

fn map() -> OccupancyMap {
    OccupancyMap::new(Box::new(
        SquareGrid::new(W, H, 1.0, LayerElevations::default()).unwrap(),
    ))
}

fn pos() -> impl Strategy<Value = GridPos> {
    (0..W as i32, 0..H as i32).prop_map(|(x, y)| GridPos::new(x, y))
}

fn footprint() -> impl Strategy<Value = Footprint> {
    (1u32..4, 1u32..4).prop_map(|(w, h)| Footprint::new(w, h))
}

/// Scatter single-cell blockers owned by unit 2.
fn blockers() -> impl Strategy<Value = Vec<GridPos>> {
    prop::collection::vec(pos(), 0..12)
}

proptest! {
    #[test]
    fn can_fit_iff_no_foreign_cell(
        anchor in pos(), fp in footprint(), blocked in blockers(),
    ) {
        let mut m = map();
        for &b in &blocked {
            m.set_footprint(b, Footprint::UNIT, Layer::Ground, Some(UnitId(2))).unwrap();
        }
        let cells = m.covered(anchor, fp);
        prop_assume!(cells.iter().all(|&c| m.grid().in_bounds(c)));
        let foreign = cells.iter().any(|&c| m.occupant(c, Layer::Ground) == Some(UnitId(2)));
        prop_assert_eq!(m.can_fit(anchor, fp, Layer::Ground, Some(UnitId(1))), !foreign);
    }

    #[test]
    fn reserve_then_release_restores_every_cell(anchor in pos(), fp in footprint(), layer_ix in 0usize..3) {
        let layer = Layer::ALL[layer_ix];
        let mut m = map();
        if m.reserve(anchor, fp, layer, UnitId(1)).is_ok() {
            m.release(anchor, fp, layer, UnitId(1)).unwrap();
        }
        for c in m.grid().canonical_ordering() {
            prop_assert!(m.occupants_at(c).is_empty());
        }
    }

    #[test]
    fn failed_move_never_mutates(
        anchor in pos(), dest in pos(), fp in footprint(), blocked in blockers(),
    ) {
        let mut m = map();
        let unit = UnitState {
            id: UnitId(1),
            anchor,
            footprint: fp,
            facing: Facing::PosY,
            layer: Layer::Ground,
        };
        prop_assume!(m.reserve(anchor, fp, Layer::Ground, unit.id).is_ok());
        for &b in &blocked {
            if m.occupant(b, Layer::Ground).is_none() {
                m.set_footprint(b, Footprint::UNIT, Layer::Ground, Some(UnitId(2))).unwrap();
            }
        }
        let snapshot: Vec<_> = m
            .grid()
            .canonical_ordering()
            .into_iter()
            .map(|c| m.occupant(c, Layer::Ground))
            .collect();

        match try_move(&mut m, &unit, dest, FacingMode::Free) {
            Ok(commit) => {
                let held = m.grid().canonical_ordering().into_iter()
                    .filter(|&c| m.occupant(c, Layer::Ground) == Some(unit.id))
                    .count();
                prop_assert_eq!(held, commit.state.footprint.cell_count(m.grid().topology()));
            }
            Err(_) => {
                let after: Vec<_> = m
                    .grid()
                    .canonical_ordering()
                    .into_iter()
                    .map(|c| m.occupant(c, Layer::Ground))
                    .collect();
                prop_assert_eq!(after, snapshot);
            }
        }
    }
}
