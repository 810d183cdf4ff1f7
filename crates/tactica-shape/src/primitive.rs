//! Offset generators shared by aim regions and effect shapes.
//!
//! Footprint-relative generators use the body convention of
//! [`Footprint::body_offsets`]: the anchor is `(0, 0)`, the body spans
//! `x` in `[0, w-1]` and `y` in `[-(h-1), 0]`.

use crate::descriptor::MAX_SHAPE_SIZE;
use crate::offset_set::OffsetSet;
use tactica_core::{Facing, Footprint, GridPos};

/// Distance measure used by body-relative auras.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AuraMetric {
    /// Square bands, corners included.
    Chebyshev,
    /// Round bands, compared on squared distance.
    Euclidean,
}

/// Local wedge shape stamped ahead of a leading-edge cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Wedge {
    /// Constant-width rows.
    Rect,
    /// Row `i` spans `[-(i-1), i-1]`.
    Cone,
}

/// Caps a size at [`MAX_SHAPE_SIZE`] so loop bounds and squares stay in range.
fn cap(size: i32) -> i32 {
    size.min(MAX_SHAPE_SIZE)
}

/// Footprint extents as signed sizes, capped like any other size.
fn body_dims(fp: Footprint) -> (i32, i32) {
    let side = |v: u32| i32::try_from(v).map_or(MAX_SHAPE_SIZE, cap);
    (side(fp.width), side(fp.height))
}

fn len_sq(p: GridPos) -> i64 {
    let (x, y) = (i64::from(p.x), i64::from(p.y));
    x * x + y * y
}

/// Per-axis gap between `p` and the footprint body; zero inside it.
fn gap_to_body(p: GridPos, fp: Footprint) -> GridPos {
    let (w, h) = body_dims(fp);
    let dx = if p.x < 0 {
        -p.x
    } else {
        (p.x - (w - 1)).max(0)
    };
    let dy = if p.y > 0 {
        p.y
    } else {
        (-(h - 1) - p.y).max(0)
    };
    GridPos::new(dx, dy)
}

/// `true` if `p` lies past the footprint's trailing edge for `facing`.
pub fn is_behind(p: GridPos, fp: Footprint, facing: Facing) -> bool {
    let (w, h) = body_dims(fp);
    match facing {
        Facing::PosY => p.y < -(h - 1),
        Facing::NegY => p.y > 0,
        Facing::PosX => p.x < 0,
        Facing::NegX => p.x > w - 1,
    }
}

/// Offsets whose distance to the nearest body cell lies in
/// `[min_range, range]`.
///
/// Body cells are included only when `min_range == 0`; a negative
/// `min_range` counts as zero. With `half_ring` set, non-body cells behind
/// the footprint for that facing are dropped. Ranges past
/// [`MAX_SHAPE_SIZE`] are capped.
pub fn body_aura(
    fp: Footprint,
    range: i32,
    min_range: i32,
    metric: AuraMetric,
    half_ring: Option<Facing>,
) -> OffsetSet {
    let mut out = OffsetSet::new();
    let min_range = min_range.max(0);
    if range < 0 || min_range > range || !fp.is_valid() {
        return out;
    }
    let (range, min_range) = (cap(range), cap(min_range));
    let (lo_sq, hi_sq) = (i64::from(min_range).pow(2), i64::from(range).pow(2));
    let (w, h) = body_dims(fp);

    for x in -range..=(w - 1 + range) {
        for y in (-(h - 1) - range)..=range {
            let p = GridPos::new(x, y);
            let gap = gap_to_body(p, fp);
            if gap.is_zero() {
                if min_range == 0 {
                    out.insert(p);
                }
                continue;
            }
            let within = match metric {
                AuraMetric::Chebyshev => (min_range..=range).contains(&gap.chebyshev_len()),
                AuraMetric::Euclidean => (lo_sq..=hi_sq).contains(&len_sq(gap)),
            };
            if within && !half_ring.is_some_and(|f| is_behind(p, fp, f)) {
                out.insert(p);
            }
        }
    }
    out
}

/// Body cells plus arms of `len` cells leaving each side of the footprint.
pub fn body_cross(fp: Footprint, len: i32) -> OffsetSet {
    let mut out: OffsetSet = fp.body_offsets().collect();
    let (w, h) = body_dims(fp);
    for i in 1..=cap(len) {
        for x in 0..w {
            out.insert(GridPos::new(x, i));
            out.insert(GridPos::new(x, -(h - 1) - i));
        }
        for y in 0..h {
            out.insert(GridPos::new(w - 1 + i, -y));
            out.insert(GridPos::new(-i, -y));
        }
    }
    out
}

/// Cells of a wedge in the +Y local frame, rows `1..=length`.
///
/// Rect rows span `[-width/2, width/2]`, dropping the last column for even
/// widths.
pub fn wedge(kind: Wedge, length: i32, width: i32) -> OffsetSet {
    let (length, width) = (cap(length), cap(width));
    let mut out = OffsetSet::new();
    for y in 1..=length {
        let (lo, hi) = match kind {
            Wedge::Rect => {
                let half = width / 2;
                (-half, if width % 2 == 0 { half - 1 } else { half })
            }
            Wedge::Cone => (-(y - 1), y - 1),
        };
        for x in lo..=hi {
            out.insert(GridPos::new(x, y));
        }
    }
    out
}

/// The footprint cells on the side it faces.
pub fn leading_edge(fp: Footprint, facing: Facing) -> Vec<GridPos> {
    let (w, h) = body_dims(fp);
    match facing {
        Facing::PosY => (0..w).map(|x| GridPos::new(x, 0)).collect(),
        Facing::NegY => (0..w).map(|x| GridPos::new(x, -(h - 1))).collect(),
        Facing::PosX => (0..h).map(|y| GridPos::new(w - 1, -y)).collect(),
        Facing::NegX => (0..h).map(|y| GridPos::new(0, -y)).collect(),
    }
}

/// A wedge stamped ahead of every leading-edge cell, pushed `offset` cells
/// along `facing`.
///
/// The wedge width shrinks by the footprint's frontage minus one so that a
/// wide front does not widen the union, but never below one cell.
pub fn face_projection(
    fp: Footprint,
    facing: Facing,
    kind: Wedge,
    length: i32,
    width: i32,
    offset: i32,
) -> OffsetSet {
    let (w, h) = body_dims(fp);
    let frontage = if facing.is_vertical() { w } else { h };
    let local = wedge(kind, length, (cap(width) - frontage + 1).max(1)).rotated(facing);
    let push = facing.vector() * cap(offset);

    let mut out = OffsetSet::new();
    for edge in leading_edge(fp, facing) {
        out.extend(local.translated(edge + push));
    }
    out
}

/// A `size_x` x `size_y` rectangle around `(0, 0)`; even sides put the
/// extra cell on the negative side.
pub fn centered_rect(size_x: i32, size_y: i32) -> OffsetSet {
    let (size_x, size_y) = (cap(size_x), cap(size_y));
    let (x0, y0) = (-size_x / 2, -size_y / 2);
    let mut out = OffsetSet::new();
    for x in x0..x0 + size_x {
        for y in y0..y0 + size_y {
            out.insert(GridPos::new(x, y));
        }
    }
    out
}

/// `(0, 0)` plus four arms of `len` cells. Negative lengths are empty.
pub fn cross(len: i32) -> OffsetSet {
    if len < 0 {
        return OffsetSet::new();
    }
    let mut out = OffsetSet::origin();
    for i in 1..=cap(len) {
        out.extend([
            GridPos::new(i, 0),
            GridPos::new(-i, 0),
            GridPos::new(0, i),
            GridPos::new(0, -i),
        ]);
    }
    out
}

/// Cells with `inner² <= x² + y² <= outer²`, squares taken in `i64`.
///
/// Walks one column at a time with integer square roots, so a thin ring
/// costs its perimeter rather than its bounding box.
pub fn annulus(outer: i32, inner: i32) -> OffsetSet {
    let mut out = OffsetSet::new();
    let inner = inner.max(0);
    if outer < 0 || inner > outer {
        return out;
    }
    let (outer, inner) = (cap(outer), cap(inner));
    let (hi, lo) = (i64::from(outer).pow(2), i64::from(inner).pow(2));
    for x in -outer..=outer {
        let x_sq = i64::from(x).pow(2);
        let y_max = (hi - x_sq).isqrt();
        let need = lo - x_sq;
        let y_min = if need <= 0 {
            0
        } else {
            let r = need.isqrt();
            if r * r < need {
                r + 1
            } else {
                r
            }
        };
        for y in y_min..=y_max {
            // |y| <= outer, which fits in i32.
            let y = y as i32;
            out.insert(GridPos::new(x, y));
            if y != 0 {
                out.insert(GridPos::new(x, -y));
            }
        }
    }
    out
}

/// Filled disc `x² + y² <= r²`.
pub fn disc(radius: i32) -> OffsetSet {
    annulus(radius, 0)
}
