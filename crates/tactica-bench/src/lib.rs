//! Benchmark profiles and utilities for Tactica.
//!
//! Provides pre-built boards for benchmarking and examples:
//!
//! - [`reference_board`]: 64x64 square board (4K cells) with scattered units
//! - [`stress_board`]: 256x256 square board (64K cells)
//! - [`scatter_units`]: deterministic unit placement via seed
//! - [`checker_mask`]: a worst-case mask for meshing and tracing

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::collections::HashSet;

use tactica_core::{Facing, Footprint, GridPos, Layer, UnitId};
use tactica_engine::{Battlefield, ConfigError, GridConfig};
use tactica_overlay::CellMask;

/// Build the reference board: 64x64 with 32 single-cell units.
///
/// The first spawned unit sits in the centre so benches can select it.
pub fn reference_board(seed: u64) -> Result<(Battlefield, UnitId), ConfigError> {
    populated_board(64, 32, seed)
}

/// Build the stress board: 256x256 with 512 single-cell units.
pub fn stress_board(seed: u64) -> Result<(Battlefield, UnitId), ConfigError> {
    populated_board(256, 512, seed)
}

fn populated_board(size: u32, units: u16, seed: u64) -> Result<(Battlefield, UnitId), ConfigError> {
    let mut board = Battlefield::new(&GridConfig::square(size, size))?;
    let centre = GridPos::new(size as i32 / 2, size as i32 / 2);
    let mut hero = None;
    let cells = (size * size) as usize;
    let anchors = std::iter::once(centre).chain(
        scatter_units(cells, units, seed)
            .into_iter()
            .map(|(_, i)| GridPos::new((i / size as usize) as i32, (i % size as usize) as i32)),
    );
    for anchor in anchors {
        // Collisions with the centre unit are simply skipped.
        if let Ok(id) = board.spawn_unit(anchor, Footprint::UNIT, Facing::PosY, Layer::Ground) {
            hero.get_or_insert(id);
        }
    }
    Ok((board, hero.unwrap_or(UnitId(1))))
}

/// Generate deterministic unit positions.
///
/// Places `n` units at distinct linear indices using a simple hash of the
/// seed. Returns `(unit_number, flat_index)` pairs.
pub fn scatter_units(cell_count: usize, n: u16, seed: u64) -> Vec<(u16, usize)> {
    let mut positions = Vec::with_capacity(n as usize);
    let mut occupied = HashSet::new();

    for i in 0..n {
        let mut pos = (seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add(i as u64 * 1442695040888963407)
            % cell_count as u64) as usize;

        // Linear probe to avoid collisions
        while occupied.contains(&pos) {
            pos = (pos + 1) % cell_count;
        }
        occupied.insert(pos);
        positions.push((i, pos));
    }

    positions
}

/// A `size` x `size` mask with every other cell set.
///
/// Produces the largest rectangle count and the most contour walks per
/// set cell.
pub fn checker_mask(size: u32) -> CellMask {
    let s = size as i32;
    CellMask::from_cells(
        size,
        size,
        (0..s)
            .flat_map(|x| (0..s).map(move |y| GridPos::new(x, y)))
            .filter(|p| (p.x + p.y) % 2 == 0),
    )
}
