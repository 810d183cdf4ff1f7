//! Both backends behave consistently behind `dyn CoordinateSystem`.

use tactica_core::{GridPos, Layer, LayerElevations, Topology};
use tactica_space::{CoordinateSystem, HexGrid, SquareGrid};

fn boards() -> Vec<Box<dyn CoordinateSystem>> {
    let e = LayerElevations::default();
    vec![
        Box::new(SquareGrid::new(6, 5, 1.5, e).unwrap()),
        Box::new(HexGrid::new(6, 5, 1.5, e).unwrap()),
    ]
}

#[test]
fn max_neighbour_degree_matches_topology() {
    for board in boards() {
        let max = board
            .canonical_ordering()
            .into_iter()
            .map(|c| board.neighbours_in_bounds(c).len())
            .max()
            .unwrap();
        let expected = match board.topology() {
            Topology::Square => 8,
            Topology::AxialHex => 6,
        };
        assert_eq!(max, expected);
    }
}

#[test]
fn off_board_queries_are_sentinels() {
    for board in boards() {
        let outside = GridPos::new(-1, 2);
        assert!(!board.in_bounds(outside));
        assert_eq!(board.to_index(outside), None);
        assert_eq!(board.from_index(board.cell_count()), None);
        assert!(board.movement_reach(GridPos::new(0, 0), 0).len() == 1);
    }
}

#[test]
fn every_cell_is_found_under_its_world_point() {
    for board in boards() {
        for c in board.canonical_ordering() {
            let w = board.grid_to_world(c, Layer::Underground);
            assert_eq!(board.cell_at(w), Some(c));
        }
    }
}
