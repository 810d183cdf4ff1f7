//! Integer grid positions and offsets.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// An integer pair addressing a cell, or a relative offset between cells.
///
/// The meaning of the two components depends on the topology: `(x, y)` on a
/// square grid, axial `(q, r)` on a hex grid. The same type is used for
/// absolute coordinates and for offsets; shape generators produce offsets
/// that callers translate by an anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPos {
    /// Column (`x`) or axial `q`.
    pub x: i32,
    /// Row (`y`) or axial `r`.
    pub y: i32,
}

impl GridPos {
    /// `(0, 0)`.
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Construct a position from its two components.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// `true` for `(0, 0)`.
    pub fn is_zero(self) -> bool {
        self.x == 0 && self.y == 0
    }

    /// Component-wise absolute value.
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    /// Chebyshev (L-inf) length of this offset.
    pub fn chebyshev_len(self) -> i32 {
        self.x.abs().max(self.y.abs())
    }

    /// Squared Euclidean length of this offset.
    pub fn length_squared(self) -> i32 {
        self.x * self.x + self.y * self.y
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for GridPos {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl Add for GridPos {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for GridPos {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for GridPos {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for GridPos {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<i32> for GridPos {
    type Output = Self;

    fn mul(self, rhs: i32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}
