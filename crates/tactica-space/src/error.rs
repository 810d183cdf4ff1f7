//! Error types for coordinate system construction.

use std::fmt;

/// Errors arising from coordinate system construction.
#[derive(Debug, Clone, PartialEq)]
pub enum SpaceError {
    /// Attempted to construct a board with zero cells.
    EmptySpace,
    /// A dimension exceeds the supported maximum.
    DimensionTooLarge {
        /// Which dimension (`"width"` or `"height"`).
        name: &'static str,
        /// The requested value.
        value: u32,
        /// The largest accepted value.
        max: u32,
    },
    /// Cell spacing must be finite and strictly positive.
    InvalidSpacing {
        /// The rejected spacing.
        value: f32,
    },
    /// A layer elevation is NaN or infinite.
    NonFiniteElevation,
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySpace => write!(f, "board must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum {max}")
            }
            Self::InvalidSpacing { value } => {
                write!(f, "cell spacing {value} must be finite and positive")
            }
            Self::NonFiniteElevation => write!(f, "layer elevations must be finite"),
        }
    }
}

impl std::error::Error for SpaceError {}
