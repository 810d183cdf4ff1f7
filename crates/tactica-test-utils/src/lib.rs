//! Test utilities for Tactica development.
//!
//! Provides a [`TestBoardBuilder`] for setting up battlefields with units
//! already placed, plus ASCII cell-mask helpers in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use tactica_core::{Facing, FacingMode, Footprint, GridPos, Layer, UnitId};
use tactica_engine::{Battlefield, GridConfig};

/// One unit to place when the board is built.
#[derive(Clone, Copy, Debug)]
pub struct UnitSpec {
    pub anchor: GridPos,
    pub footprint: Footprint,
    pub facing: Facing,
    pub layer: Layer,
}

/// Builder for battlefields with preplaced units.
///
/// Units are spawned in insertion order, so their ids are `1, 2, ...`.
/// Building panics on an invalid configuration or a failed spawn; this is
/// test scaffolding.
pub struct TestBoardBuilder {
    config: GridConfig,
    units: Vec<UnitSpec>,
}

impl TestBoardBuilder {
    pub fn square(width: u32, height: u32) -> Self {
        Self {
            config: GridConfig::square(width, height),
            units: Vec::new(),
        }
    }

    pub fn hex(width: u32, height: u32) -> Self {
        Self {
            config: GridConfig::hex(width, height),
            units: Vec::new(),
        }
    }

    pub fn facing_mode(mut self, mode: FacingMode) -> Self {
        self.config = self.config.with_facing_mode(mode);
        self
    }

    pub fn spacing(mut self, spacing: f32) -> Self {
        self.config = self.config.with_spacing(spacing);
        self
    }

    /// A 1x1 ground unit facing `+y`.
    pub fn unit(self, x: i32, y: i32) -> Self {
        self.unit_with(UnitSpec {
            anchor: GridPos::new(x, y),
            footprint: Footprint::UNIT,
            facing: Facing::PosY,
            layer: Layer::Ground,
        })
    }

    /// A ground unit of the given size facing `+y`.
    pub fn wide_unit(self, x: i32, y: i32, width: u32, height: u32) -> Self {
        self.unit_with(UnitSpec {
            anchor: GridPos::new(x, y),
            footprint: Footprint::new(width, height),
            facing: Facing::PosY,
            layer: Layer::Ground,
        })
    }

    pub fn unit_with(mut self, spec: UnitSpec) -> Self {
        self.units.push(spec);
        self
    }

    pub fn build(self) -> (Battlefield, Vec<UnitId>) {
        let mut battlefield = match Battlefield::new(&self.config) {
            Ok(b) => b,
            Err(e) => panic!("invalid test board {:?}: {e}", self.config),
        };
        let ids = self
            .units
            .iter()
            .map(|u| {
                match battlefield.spawn_unit(u.anchor, u.footprint, u.facing, u.layer) {
                    Ok(id) => id,
                    Err(e) => panic!("test unit {u:?} failed to spawn: {e}"),
                }
            })
            .collect();
        (battlefield, ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_places_units_in_order() {
        let (b, ids) = TestBoardBuilder::square(6, 6)
            .unit(0, 0)
            .wide_unit(2, 3, 2, 2)
            .build();
        assert_eq!(ids, vec![UnitId(1), UnitId(2)]);
        assert_eq!(b.map().occupant(GridPos::new(3, 2), Layer::Ground), Some(UnitId(2)));
    }

    #[test]
    fn builder_settings_reach_the_board() {
        let builder = TestBoardBuilder::hex(4, 4)
            .facing_mode(FacingMode::Fixed)
            .spacing(2.0);
        assert_eq!(builder.config.spacing, 2.0);
        let (b, _) = builder.build();
        assert_eq!(b.facing_mode(), FacingMode::Fixed);
    }

    #[test]
    #[should_panic(expected = "failed to spawn")]
    fn overlapping_units_panic() {
        TestBoardBuilder::square(4, 4).unit(1, 1).unit(1, 1).build();
    }
}
