//! Four-way facings and the rules for changing them.

use crate::pos::GridPos;

/// An axis-aligned facing.
///
/// Shapes computed in a local frame (pointing toward +Y) are rotated into
/// world orientation with [`Facing::rotate`]. Arbitrary angles are not
/// representable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Facing {
    /// Toward increasing `y`.
    #[default]
    PosY,
    /// Toward increasing `x`.
    PosX,
    /// Toward decreasing `y`.
    NegY,
    /// Toward decreasing `x`.
    NegX,
}

impl Facing {
    /// All four facings, clockwise from +Y.
    pub const ALL: [Facing; 4] = [Facing::PosY, Facing::PosX, Facing::NegY, Facing::NegX];

    /// Unit vector of this facing.
    pub const fn vector(self) -> GridPos {
        match self {
            Facing::PosY => GridPos::new(0, 1),
            Facing::PosX => GridPos::new(1, 0),
            Facing::NegY => GridPos::new(0, -1),
            Facing::NegX => GridPos::new(-1, 0),
        }
    }

    /// Snap a direction to its dominant axis.
    ///
    /// Ties between `|dx|` and `|dy|` go to the Y axis. Returns `None` for
    /// the zero vector.
    pub fn from_direction(dir: GridPos) -> Option<Self> {
        if dir.is_zero() {
            return None;
        }
        if dir.x.unsigned_abs() > dir.y.unsigned_abs() {
            Some(if dir.x > 0 { Facing::PosX } else { Facing::NegX })
        } else {
            Some(if dir.y > 0 { Facing::PosY } else { Facing::NegY })
        }
    }

    /// [`Facing::from_direction`] for a continuous vector, with the same
    /// Y-wins tie rule. `None` for the zero or a non-finite vector.
    pub fn from_vector(x: f32, y: f32) -> Option<Self> {
        if !(x.is_finite() && y.is_finite()) || (x == 0.0 && y == 0.0) {
            return None;
        }
        if x.abs() > y.abs() {
            Some(if x > 0.0 { Facing::PosX } else { Facing::NegX })
        } else {
            Some(if y > 0.0 { Facing::PosY } else { Facing::NegY })
        }
    }

    /// `true` for the two Y-axis facings.
    pub const fn is_vertical(self) -> bool {
        matches!(self, Facing::PosY | Facing::NegY)
    }

    /// Rotate an offset expressed in the +Y-facing local frame into this
    /// facing's frame.
    pub const fn rotate(self, p: GridPos) -> GridPos {
        match self {
            Facing::PosY => p,
            Facing::PosX => GridPos::new(p.y, -p.x),
            Facing::NegY => GridPos::new(-p.x, -p.y),
            Facing::NegX => GridPos::new(-p.y, p.x),
        }
    }
}

/// Board-wide rule for how units may change facing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FacingMode {
    /// Facing never changes.
    Fixed,
    /// Only the two X-axis facings are reachable.
    HorizontalOnly,
    /// Any of the four facings.
    #[default]
    Free,
}

impl FacingMode {
    /// The facing a unit currently facing `current` adopts when acting
    /// along `dir`.
    ///
    /// `HorizontalOnly` follows the sign of `dir.x` and keeps `current` when
    /// the direction has no horizontal component.
    pub fn resolve(self, current: Facing, dir: GridPos) -> Facing {
        match self {
            FacingMode::Fixed => current,
            FacingMode::HorizontalOnly => match dir.x.signum() {
                1 => Facing::PosX,
                -1 => Facing::NegX,
                _ => current,
            },
            FacingMode::Free => Facing::from_direction(dir).unwrap_or(current),
        }
    }
}
