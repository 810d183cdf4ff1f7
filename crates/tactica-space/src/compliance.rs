//! CoordinateSystem trait compliance test helpers.
//!
//! These functions verify that a backend satisfies the invariants required
//! by the trait contract. Reused by the square and hex test modules and by
//! downstream crates that wrap a backend.

use crate::space::CoordinateSystem;
use indexmap::IndexSet;
use tactica_core::Layer;

/// Assert that `distance(a, a) == 0` for all cells.
pub fn assert_distance_reflexive(space: &dyn CoordinateSystem) {
    for c in space.canonical_ordering() {
        let d = space.distance(c, c);
        assert_eq!(d, 0, "distance({c}, {c}) = {d}, expected 0");
    }
}

/// Assert that `distance(a, b) == distance(b, a)` for all cell pairs.
pub fn assert_distance_symmetric(space: &dyn CoordinateSystem) {
    let cells = space.canonical_ordering();
    for &a in &cells {
        for &b in &cells {
            let (dab, dba) = (space.distance(a, b), space.distance(b, a));
            assert_eq!(dab, dba, "distance({a}, {b}) = {dab} != distance({b}, {a}) = {dba}");
        }
    }
}

/// Assert triangle inequality: `d(a, c) <= d(a, b) + d(b, c)` for all triples.
pub fn assert_distance_triangle_inequality(space: &dyn CoordinateSystem) {
    let cells = space.canonical_ordering();
    for &a in &cells {
        for &b in &cells {
            for &c in &cells {
                let dac = space.distance(a, c);
                let dab = space.distance(a, b);
                let dbc = space.distance(b, c);
                assert!(
                    dac <= dab + dbc,
                    "triangle inequality violated: d({a},{c})={dac} > d({a},{b})={dab} + d({b},{c})={dbc}"
                );
            }
        }
    }
}

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`.
pub fn assert_neighbours_symmetric(space: &dyn CoordinateSystem) {
    for c in space.canonical_ordering() {
        for nb in space.neighbours_in_bounds(c) {
            assert!(
                space.neighbours_in_bounds(nb).contains(&c),
                "neighbour symmetry violated: {nb} in N({c}) but {c} not in N({nb})"
            );
        }
    }
}

/// Assert that `canonical_ordering` lists exactly `cell_count` unique cells,
/// each at its own linear index.
pub fn assert_canonical_ordering_complete(space: &dyn CoordinateSystem) {
    let ordering = space.canonical_ordering();
    assert_eq!(
        ordering.len(),
        space.cell_count(),
        "canonical_ordering length ({}) != cell_count ({})",
        ordering.len(),
        space.cell_count()
    );
    let unique: IndexSet<_> = ordering.iter().collect();
    assert_eq!(unique.len(), space.cell_count(), "canonical_ordering has duplicates");
    for (i, &c) in ordering.iter().enumerate() {
        assert_eq!(space.to_index(c), Some(i), "to_index({c}) disagrees with ordering");
    }
}

/// Assert that every cell maps to world space and back to itself.
pub fn assert_world_round_trip(space: &dyn CoordinateSystem) {
    for c in space.canonical_ordering() {
        for layer in Layer::ALL {
            let w = space.grid_to_world(c, layer);
            assert_eq!(space.cell_at(w), Some(c), "world round trip failed for {c} on {layer:?}");
        }
    }
}

/// Assert that `movement_reach` stays on the board and contains its centre.
pub fn assert_reach_in_bounds(space: &dyn CoordinateSystem) {
    for c in space.canonical_ordering() {
        let reach = space.movement_reach(c, 2);
        assert!(reach.contains(&c), "reach from {c} misses the centre");
        assert!(reach.iter().all(|&p| space.in_bounds(p)), "reach from {c} leaves the board");
    }
}

/// Run every compliance check on a backend.
pub fn run_full_compliance(space: &dyn CoordinateSystem) {
    assert_distance_reflexive(space);
    assert_distance_symmetric(space);
    assert_distance_triangle_inequality(space);
    assert_neighbours_symmetric(space);
    assert_canonical_ordering_complete(space);
    assert_world_round_trip(space);
    assert_reach_in_bounds(space);
}
