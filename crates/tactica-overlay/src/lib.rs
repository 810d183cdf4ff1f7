//! Highlight overlay geometry for Tactica.
//!
//! Turns a set of highlighted cells into two renderable forms:
//!
//! - a small set of filled rectangles ([`greedy_mesh`]) and their world
//!   quads ([`OverlayMesh`]);
//! - outline polylines along the region boundary ([`trace_contours`]).
//!
//! Both work in cell space. World placement assumes square cell centres at
//! `(x * spacing, y * spacing)`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod contour;
pub mod greedy;
pub mod mask;
pub mod mesh;

pub use contour::{boundary_edges, trace_contours, trace_contours_capped, Contour, ContourTrace, Edge};
pub use greedy::{greedy_mesh, Rect};
pub use mask::CellMask;
pub use mesh::{contour_to_world, OverlayMesh};

use tactica_core::GridPos;
use tracing::debug;

/// Fill rectangles and outline contours for one highlighted region.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OverlayGeometry {
    /// Non-overlapping rectangles covering the region.
    pub rects: Vec<Rect>,
    /// Boundary polylines on the corner lattice.
    pub contours: Vec<Contour>,
}

impl OverlayGeometry {
    /// Mesh and outline every set cell of `mask`.
    pub fn from_mask(mask: &CellMask) -> Self {
        let rects = greedy_mesh(mask);
        let trace = trace_contours(&boundary_edges(mask));
        debug!(
            cells = mask.count(),
            rects = rects.len(),
            contours = trace.contours.len(),
            "overlay_built"
        );
        Self {
            rects,
            contours: trace.contours,
        }
    }

    /// Convenience over [`from_mask`](Self::from_mask) for a loose cell list.
    pub fn from_cells(width: u32, height: u32, cells: impl IntoIterator<Item = GridPos>) -> Self {
        Self::from_mask(&CellMask::from_cells(width, height, cells))
    }

    /// `true` if there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty() && self.contours.is_empty()
    }

    /// World quads for the fill.
    pub fn mesh(&self, spacing: f32, ground: f32) -> OverlayMesh {
        OverlayMesh::from_rects(&self.rects, spacing, ground)
    }

    /// World polylines for the outline.
    pub fn lines(&self, spacing: f32, ground: f32) -> Vec<Vec<glam::Vec3>> {
        self.contours
            .iter()
            .map(|c| contour_to_world(c, spacing, ground))
            .collect()
    }
}
