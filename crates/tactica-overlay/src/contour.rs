//! Boundary extraction and contour tracing.
//!
//! Points live on the corner lattice: cell `(x, y)` spans corners `(x, y)`
//! to `(x + 1, y + 1)`.

use crate::mask::CellMask;
use indexmap::{IndexMap, IndexSet};
use smallvec::SmallVec;
use tactica_core::GridPos;
use tracing::warn;

/// A unit boundary segment between two lattice corners, `a < b`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    /// Lower endpoint.
    pub a: GridPos,
    /// Upper endpoint.
    pub b: GridPos,
}

impl Edge {
    /// An edge between two corners in either order.
    pub fn new(p: GridPos, q: GridPos) -> Self {
        if p <= q {
            Self { a: p, b: q }
        } else {
            Self { a: q, b: p }
        }
    }

    /// The endpoint that is not `p`.
    pub fn other(&self, p: GridPos) -> GridPos {
        if self.a == p {
            self.b
        } else {
            self.a
        }
    }
}

/// An ordered polyline through lattice corners.
///
/// A closed contour repeats its first point at the end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contour {
    /// Corner points in walk order.
    pub points: Vec<GridPos>,
    /// `true` if the walk returned to its start.
    pub closed: bool,
}

impl Contour {
    /// Number of edges walked.
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Consecutive point pairs as edges.
    pub fn segments(&self) -> impl Iterator<Item = Edge> + '_ {
        self.points.windows(2).map(|w| Edge::new(w[0], w[1]))
    }
}

/// Edges of set cells whose neighbour across the edge is not set.
pub fn boundary_edges(mask: &CellMask) -> IndexSet<Edge> {
    let mut edges = IndexSet::new();
    for c in mask.iter_set() {
        let (x, y) = (c.x, c.y);
        let sides = [
            (GridPos::new(x, y + 1), GridPos::new(x, y + 1), GridPos::new(x + 1, y + 1)),
            (GridPos::new(x + 1, y), GridPos::new(x + 1, y), GridPos::new(x + 1, y + 1)),
            (GridPos::new(x, y - 1), GridPos::new(x, y), GridPos::new(x + 1, y)),
            (GridPos::new(x - 1, y), GridPos::new(x, y), GridPos::new(x, y + 1)),
        ];
        for (across, p, q) in sides {
            if !mask.get(across) {
                edges.insert(Edge::new(p, q));
            }
        }
    }
    edges
}

/// Contours traced from an edge set, plus how many walks hit the step cap.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContourTrace {
    /// Traced polylines, every edge used by exactly one of them.
    pub contours: Vec<Contour>,
    /// Walks cut short by the step cap; emitted as open contours.
    pub truncated: usize,
}

/// Trace `edges` into polylines.
///
/// The step cap is one more than the edge count, so a walk can only be
/// truncated by a caller-supplied cap.
pub fn trace_contours(edges: &IndexSet<Edge>) -> ContourTrace {
    trace_contours_capped(edges, edges.len() + 1)
}

/// Trace `edges` with an explicit per-walk step cap.
///
/// Each walk starts from the first unused edge and repeatedly follows an
/// unused edge sharing the current endpoint until it gets back to its start
/// (closed), finds no continuation (open) or reaches `max_steps` (open,
/// counted as truncated).
pub fn trace_contours_capped(edges: &IndexSet<Edge>, max_steps: usize) -> ContourTrace {
    let mut at: IndexMap<GridPos, SmallVec<[usize; 4]>> = IndexMap::new();
    for (i, e) in edges.iter().enumerate() {
        at.entry(e.a).or_default().push(i);
        at.entry(e.b).or_default().push(i);
    }

    let mut used = vec![false; edges.len()];
    let mut trace = ContourTrace::default();

    for (i, first) in edges.iter().enumerate() {
        if used[i] {
            continue;
        }
        used[i] = true;
        let start = first.a;
        let mut current = first.a;
        let mut next = first.b;
        let mut points = vec![current, next];
        let mut closed = false;
        let mut steps = 1;

        loop {
            if next == start {
                closed = true;
                break;
            }
            if steps >= max_steps {
                trace.truncated += 1;
                break;
            }
            let step = at.get(&next).and_then(|candidates| {
                candidates.iter().copied().find(|&j| {
                    !used[j] && edges.get_index(j).is_some_and(|e| e.other(next) != current)
                })
            });
            let Some(j) = step else { break };
            let Some(edge) = edges.get_index(j) else { break };
            used[j] = true;
            current = next;
            next = edge.other(current);
            points.push(next);
            steps += 1;
        }

        trace.contours.push(Contour { points, closed });
    }

    if trace.truncated > 0 {
        warn!(
            truncated = trace.truncated,
            edges = edges.len(),
            max_steps,
            "contour_walk_truncated"
        );
    }
    trace
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> GridPos {
        GridPos::new(x, y)
    }

    fn block(w: i32, h: i32) -> CellMask {
        CellMask::from_cells(8, 8, (0..w).flat_map(|x| (0..h).map(move |y| p(x + 1, y + 1))))
    }

    #[test]
    fn single_cell_has_four_edges_one_square() {
        let mask = CellMask::from_cells(3, 3, [p(1, 1)]);
        let edges = boundary_edges(&mask);
        assert_eq!(edges.len(), 4);
        let trace = trace_contours(&edges);
        assert_eq!(trace.contours.len(), 1);
        let c = &trace.contours[0];
        assert!(c.closed);
        assert_eq!(c.points.len(), 5);
        assert_eq!(c.points.first(), c.points.last());
    }

    #[test]
    fn shared_edges_cancel() {
        let edges = boundary_edges(&block(3, 2));
        // Perimeter of a 3x2 block.
        assert_eq!(edges.len(), 10);
    }

    #[test]
    fn hole_yields_inner_contour() {
        // 3x3 ring with the middle missing.
        let cells = (1..4)
            .flat_map(|x| (1..4).map(move |y| p(x, y)))
            .filter(|&c| c != p(2, 2));
        let mask = CellMask::from_cells(6, 6, cells);
        let edges = boundary_edges(&mask);
        assert_eq!(edges.len(), 12 + 4);
        let trace = trace_contours(&edges);
        assert_eq!(trace.contours.len(), 2);
        assert!(trace.contours.iter().all(|c| c.closed));
        let mut lens: Vec<_> = trace.contours.iter().map(Contour::segment_count).collect();
        lens.sort();
        assert_eq!(lens, vec![4, 12]);
    }

    #[test]
    fn dangling_chain_is_open() {
        let edges: IndexSet<Edge> = [Edge::new(p(0, 0), p(1, 0)), Edge::new(p(1, 0), p(2, 0))]
            .into_iter()
            .collect();
        let trace = trace_contours(&edges);
        assert_eq!(trace.contours.len(), 1);
        assert!(!trace.contours[0].closed);
        assert_eq!(trace.contours[0].points, vec![p(0, 0), p(1, 0), p(2, 0)]);
        assert_eq!(trace.truncated, 0);
    }

    #[test]
    fn cap_truncates_into_open_contours() {
        let edges = boundary_edges(&block(2, 2));
        let trace = trace_contours_capped(&edges, 3);
        assert!(trace.truncated > 0);
        assert!(trace.contours.iter().all(|c| !c.closed));
        let used: usize = trace.contours.iter().map(Contour::segment_count).sum();
        assert_eq!(used, edges.len());
    }

    #[test]
    fn empty_edge_set_traces_nothing() {
        assert_eq!(trace_contours(&IndexSet::new()), ContourTrace::default());
    }
}
