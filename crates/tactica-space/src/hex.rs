//! Flat-top hexagonal board in axial coordinates.

use crate::error::SpaceError;
use crate::space::{check_dimensions, CoordinateSystem};
use glam::{Vec2, Vec3};
use smallvec::SmallVec;
use tactica_core::{GridPos, Layer, LayerElevations, Topology};

/// Flat-top axial offsets in order: E, SE, SW, W, NW, NE.
pub const HEX_DIRECTIONS: [GridPos; 6] = [
    GridPos::new(1, 0),
    GridPos::new(1, -1),
    GridPos::new(0, -1),
    GridPos::new(-1, 0),
    GridPos::new(-1, 1),
    GridPos::new(0, 1),
];

const SQRT_3: f32 = 1.732_050_8;

/// Cube distance between two axial coordinates.
pub fn cube_distance(a: GridPos, b: GridPos) -> u32 {
    let d = a - b;
    ((d.x.abs() + (d.x + d.y).abs() + d.y.abs()) / 2) as u32
}

/// Round fractional axial coordinates to the containing hex.
///
/// `q`, `r` and `s = -q - r` are rounded independently; the component with
/// the largest rounding error is then recomputed from the other two so the
/// result stays on the `q + r + s = 0` plane.
pub fn cube_round(q: f32, r: f32) -> GridPos {
    let s = -q - r;
    let (mut rq, mut rr, rs) = (q.round(), r.round(), s.round());
    let dq = (rq - q).abs();
    let dr = (rr - r).abs();
    let ds = (rs - s).abs();
    if dq > dr && dq > ds {
        rq = -rr - rs;
    } else if dr > ds {
        rr = -rq - rs;
    }
    GridPos::new(rq as i32, rr as i32)
}

/// A `width` x `height` parallelogram of flat-top hexes.
///
/// Cells are addressed by axial `(q, r)` with `0 <= q < width` and
/// `0 <= r < height`. Linear indices pack row by row: `r * width + q`.
/// Every hex has six neighbours; footprints always cover a single hex.
///
/// # Examples
///
/// ```
/// use tactica_space::{CoordinateSystem, HexGrid};
/// use tactica_core::{GridPos, LayerElevations};
///
/// let hex = HexGrid::new(5, 5, 1.0, LayerElevations::default()).unwrap();
/// assert_eq!(hex.to_index(GridPos::new(2, 1)), Some(7));
///
/// // Interior cell has 6 neighbours, the origin only 2 on the board.
/// assert_eq!(hex.neighbours_in_bounds(GridPos::new(2, 2)).len(), 6);
/// assert_eq!(hex.neighbours_in_bounds(GridPos::new(0, 0)).len(), 2);
///
/// assert_eq!(hex.distance(GridPos::new(0, 0), GridPos::new(2, -1)), 2);
/// ```
#[derive(Debug, Clone)]
pub struct HexGrid {
    width: u32,
    height: u32,
    spacing: f32,
    elevations: LayerElevations,
}

impl HexGrid {
    /// Create a hex board. Fails under the same conditions as
    /// [`SquareGrid::new`](crate::SquareGrid::new).
    pub fn new(
        width: u32,
        height: u32,
        spacing: f32,
        elevations: LayerElevations,
    ) -> Result<Self, SpaceError> {
        check_dimensions(width, height, spacing, &elevations)?;
        Ok(Self {
            width,
            height,
            spacing,
            elevations,
        })
    }

    /// Upper bound on any useful radius; no two cells are further apart.
    fn clamp_radius(&self, radius: u32) -> i32 {
        radius.min(self.width + self.height) as i32
    }

    /// Every in-bounds hex within `range` steps of `center`.
    ///
    /// Enumerates `dq` in `[-range, range]` and, for each, `dr` in
    /// `[max(-range, -dq - range), min(range, -dq + range)]`.
    pub fn hexes_in_range(&self, center: GridPos, range: u32) -> Vec<GridPos> {
        let n = self.clamp_radius(range);
        let mut out = Vec::new();
        for dq in -n..=n {
            let lo = (-n).max(-dq - n);
            let hi = n.min(-dq + n);
            for dr in lo..=hi {
                let h = center + GridPos::new(dq, dr);
                if self.in_bounds(h) {
                    out.push(h);
                }
            }
        }
        out
    }

    /// In-bounds hexes at exactly `radius` steps from `center`, walked
    /// clockwise from the north-west corner.
    pub fn hex_ring(&self, center: GridPos, radius: u32) -> Vec<GridPos> {
        if radius == 0 {
            return if self.in_bounds(center) {
                vec![center]
            } else {
                Vec::new()
            };
        }
        let n = self.clamp_radius(radius);
        let mut out = Vec::new();
        let mut cursor = center + HEX_DIRECTIONS[4] * n;
        for dir in HEX_DIRECTIONS {
            for _ in 0..n {
                if self.in_bounds(cursor) {
                    out.push(cursor);
                }
                cursor += dir;
            }
        }
        out
    }

    /// Hexes on the straight line from `a` to `b`, both ends included.
    ///
    /// Not clipped to the board.
    pub fn hex_line(a: GridPos, b: GridPos) -> Vec<GridPos> {
        let steps = cube_distance(a, b);
        if steps == 0 {
            return vec![a];
        }
        // Nudge off exact hex edges so ties round consistently.
        let nudge = Vec2::new(1e-6, 2e-6);
        let start = Vec2::new(a.x as f32, a.y as f32) + nudge;
        let end = Vec2::new(b.x as f32, b.y as f32) + nudge;
        (0..=steps)
            .map(|i| {
                let p = start.lerp(end, i as f32 / steps as f32);
                cube_round(p.x, p.y)
            })
            .collect()
    }
}

impl CoordinateSystem for HexGrid {
    fn topology(&self) -> Topology {
        Topology::AxialHex
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn spacing(&self) -> f32 {
        self.spacing
    }

    fn elevations(&self) -> &LayerElevations {
        &self.elevations
    }

    fn to_index(&self, p: GridPos) -> Option<usize> {
        self.in_bounds(p)
            .then(|| p.y as usize * self.width as usize + p.x as usize)
    }

    fn from_index(&self, index: usize) -> Option<GridPos> {
        if index >= self.cell_count() {
            return None;
        }
        let w = self.width as usize;
        Some(GridPos::new((index % w) as i32, (index / w) as i32))
    }

    fn neighbours(&self, p: GridPos) -> SmallVec<[GridPos; 8]> {
        HEX_DIRECTIONS.iter().map(|&d| p + d).collect()
    }

    fn distance(&self, a: GridPos, b: GridPos) -> u32 {
        cube_distance(a, b)
    }

    fn movement_reach(&self, center: GridPos, range: u32) -> Vec<GridPos> {
        self.hexes_in_range(center, range)
    }

    fn grid_to_world(&self, p: GridPos, layer: Layer) -> Vec3 {
        let (q, r) = (p.x as f32, p.y as f32);
        Vec3::new(
            self.spacing * 1.5 * q,
            self.elevations.of(layer),
            self.spacing * (SQRT_3 * r + SQRT_3 * 0.5 * q),
        )
    }

    fn world_to_grid(&self, world: Vec3) -> GridPos {
        let q = (2.0 / 3.0 * world.x) / self.spacing;
        let r = (-1.0 / 3.0 * world.x + SQRT_3 / 3.0 * world.z) / self.spacing;
        cube_round(q, r)
    }
}
