//! Coordinate systems for Tactica boards.
//!
//! Provides the [`CoordinateSystem`] trait and two backends:
//!
//! - [`SquareGrid`]: 8-connected square cells, weighted octile distance
//! - [`HexGrid`]: flat-top axial hexes, cube distance
//!
//! Both answer out-of-range queries with `false`/`None` rather than errors.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod compliance;
pub mod error;
pub mod hex;
pub mod space;
pub mod square;

pub use error::SpaceError;
pub use hex::{cube_distance, cube_round, HexGrid, HEX_DIRECTIONS};
pub use space::{CoordinateSystem, MAX_DIM};
pub use square::{SquareGrid, DIAGONAL_COST, SQUARE_DIRECTIONS, STRAIGHT_COST};
