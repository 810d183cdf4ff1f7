//! Board configuration, validation, and error types.
//!
//! [`GridConfig`] is the builder-input for a [`Battlefield`](crate::Battlefield).
//! [`validate()`](GridConfig::validate) checks structural invariants up
//! front; [`build_grid()`](GridConfig::build_grid) produces the coordinate
//! system for the configured topology.

use std::error::Error;
use std::fmt;

use tactica_core::{FacingMode, LayerElevations, Topology};
use tactica_space::{CoordinateSystem, HexGrid, SpaceError, SquareGrid};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`GridConfig::validate()`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The coordinate system rejected the dimensions, spacing or elevations.
    Space(SpaceError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Space(e) => write!(f, "space: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
        }
    }
}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

// ── GridConfig ─────────────────────────────────────────────────────

/// Complete description of a board, consumed once at construction.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    /// Square or axial hex.
    pub topology: Topology,
    /// Cells along `x` (or `q`). Default: 10.
    pub width: u32,
    /// Cells along `y` (or `r`). Default: 10.
    pub height: u32,
    /// World distance between adjacent cell centres. Default: 1.0.
    pub spacing: f32,
    /// World height of each vertical layer.
    pub elevations: LayerElevations,
    /// How units may turn when they move or rotate.
    pub facing_mode: FacingMode,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            topology: Topology::Square,
            width: 10,
            height: 10,
            spacing: 1.0,
            elevations: LayerElevations::default(),
            facing_mode: FacingMode::Free,
        }
    }
}

impl GridConfig {
    /// A square board with default spacing and elevations.
    pub fn square(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// A hex board with default spacing and elevations.
    pub fn hex(width: u32, height: u32) -> Self {
        Self {
            topology: Topology::AxialHex,
            width,
            height,
            ..Self::default()
        }
    }

    /// Replace the facing mode.
    pub fn with_facing_mode(mut self, facing_mode: FacingMode) -> Self {
        self.facing_mode = facing_mode;
        self
    }

    /// Replace the cell spacing.
    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Validate all structural invariants.
    ///
    /// Construction of either grid backend allocates nothing, so this is the
    /// same check [`build_grid()`](Self::build_grid) performs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.build_grid().map(|_| ())
    }

    /// Construct the coordinate system for this configuration.
    pub fn build_grid(&self) -> Result<Box<dyn CoordinateSystem>, ConfigError> {
        let grid: Box<dyn CoordinateSystem> = match self.topology {
            Topology::Square => Box::new(SquareGrid::new(
                self.width,
                self.height,
                self.spacing,
                self.elevations,
            )?),
            Topology::AxialHex => Box::new(HexGrid::new(
                self.width,
                self.height,
                self.spacing,
                self.elevations,
            )?),
        };
        Ok(grid)
    }
}
