//! Error types for occupancy bookkeeping, move/rotate requests and spawning.

use std::error::Error;
use std::fmt;

use tactica_core::{Footprint, GridPos, Layer, UnitId};

// ── OccupancyError ─────────────────────────────────────────────────

/// A footprint write that was refused before touching any cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OccupancyError {
    /// A covered cell lies outside the board.
    OutOfBounds {
        /// First offending cell.
        cell: GridPos,
    },
    /// A covered cell is held by another unit on the layer.
    Conflict {
        /// First offending cell.
        cell: GridPos,
        /// The unit already there.
        occupant: UnitId,
    },
    /// A covered cell is not held by the unit releasing it.
    NotHeld {
        /// First offending cell.
        cell: GridPos,
        /// Layer of the release.
        layer: Layer,
    },
}

impl fmt::Display for OccupancyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { cell } => write!(f, "cell {cell} is outside the board"),
            Self::Conflict { cell, occupant } => {
                write!(f, "cell {cell} is occupied by {occupant}")
            }
            Self::NotHeld { cell, layer } => {
                write!(f, "cell {cell} on {layer:?} is not held by the releasing unit")
            }
        }
    }
}

impl Error for OccupancyError {}

// ── Rejection ──────────────────────────────────────────────────────

/// Why a move or rotation was declined. No state was changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The unit is not on the board.
    UnknownUnit(UnitId),
    /// The request needs the unit selected in move mode.
    NotSelected(UnitId),
    /// Destination equals the current anchor, or the turn direction is zero.
    NoDisplacement,
    /// Destination lies beyond the unit's movement reach.
    OutOfReach {
        /// Requested anchor.
        destination: GridPos,
    },
    /// A covered cell of the destination lies outside the board.
    OutOfBounds {
        /// Requested anchor.
        destination: GridPos,
    },
    /// Another unit occupies part of the destination footprint.
    Blocked {
        /// Requested anchor.
        destination: GridPos,
        /// Footprint that did not fit.
        footprint: Footprint,
    },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownUnit(id) => write!(f, "{id} is not on the board"),
            Self::NotSelected(id) => write!(f, "{id} is not selected for movement"),
            Self::NoDisplacement => write!(f, "request has no displacement"),
            Self::OutOfReach { destination } => {
                write!(f, "{destination} is beyond movement reach")
            }
            Self::OutOfBounds { destination } => {
                write!(f, "footprint at {destination} leaves the board")
            }
            Self::Blocked {
                destination,
                footprint,
            } => write!(
                f,
                "{}x{} footprint at {destination} is blocked",
                footprint.width, footprint.height
            ),
        }
    }
}

impl Error for Rejection {}

// ── SpawnError ─────────────────────────────────────────────────────

/// Errors from [`Battlefield::spawn_unit`](crate::Battlefield::spawn_unit).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnError {
    /// Zero-sized footprint, or a non-1x1 footprint on a hex board.
    InvalidFootprint(Footprint),
    /// The initial reservation was refused.
    Occupancy(OccupancyError),
}

impl fmt::Display for SpawnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFootprint(fp) => {
                write!(f, "footprint {}x{} is not valid here", fp.width, fp.height)
            }
            Self::Occupancy(e) => write!(f, "occupancy: {e}"),
        }
    }
}

impl Error for SpawnError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Occupancy(e) => Some(e),
            Self::InvalidFootprint(_) => None,
        }
    }
}

impl From<OccupancyError> for SpawnError {
    fn from(e: OccupancyError) -> Self {
        Self::Occupancy(e)
    }
}

// ── LockPoisoned ───────────────────────────────────────────────────

/// A thread panicked while holding a
/// [`SharedBattlefield`](crate::SharedBattlefield) lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockPoisoned;

impl fmt::Display for LockPoisoned {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "battlefield lock poisoned by a panicking holder")
    }
}

impl Error for LockPoisoned {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_error_chains_occupancy() {
        let inner = OccupancyError::Conflict {
            cell: GridPos::new(1, 2),
            occupant: UnitId(4),
        };
        let err = SpawnError::from(inner);
        assert_eq!(err.to_string(), "occupancy: cell (1, 2) is occupied by unit#4");
        assert!(err.source().is_some());
    }

    #[test]
    fn blocked_message_names_footprint() {
        let r = Rejection::Blocked {
            destination: GridPos::new(3, 3),
            footprint: Footprint::new(1, 2),
        };
        assert_eq!(r.to_string(), "1x2 footprint at (3, 3) is blocked");
    }
}
