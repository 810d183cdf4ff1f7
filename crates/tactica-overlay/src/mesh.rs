//! World-space overlay geometry.

use crate::contour::Contour;
use crate::greedy::Rect;
use glam::{Vec2, Vec3};

/// Height of overlay quads above the ground plane.
pub const FILL_LIFT: f32 = 0.02;
/// Height of contour lines above the ground plane.
pub const LINE_LIFT: f32 = 0.03;
/// Inset of each quad edge, as a fraction of cell spacing.
pub const MARGIN_FRACTION: f32 = 0.02;

/// An indexed triangle list with per-vertex UVs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OverlayMesh {
    /// Vertex positions.
    pub vertices: Vec<Vec3>,
    /// Triangle indices, three per triangle.
    pub indices: Vec<u32>,
    /// One UV per vertex.
    pub uvs: Vec<Vec2>,
}

impl OverlayMesh {
    /// Build one inset quad per rectangle.
    ///
    /// Cells are centred on `(x * spacing, y * spacing)` in the XZ plane.
    /// Each quad emits four vertices (min/min, max/min, max/max, min/max)
    /// and two triangles.
    pub fn from_rects(rects: &[Rect], spacing: f32, ground: f32) -> Self {
        let mut mesh = Self {
            vertices: Vec::with_capacity(rects.len() * 4),
            indices: Vec::with_capacity(rects.len() * 6),
            uvs: Vec::with_capacity(rects.len() * 4),
        };
        let half = spacing / 2.0;
        let margin = spacing * MARGIN_FRACTION;
        let y = ground + FILL_LIFT;

        for r in rects {
            let x_min = r.x as f32 * spacing - half + margin;
            let x_max = (r.x + r.width as i32 - 1) as f32 * spacing + half - margin;
            let z_min = r.y as f32 * spacing - half + margin;
            let z_max = (r.y + r.height as i32 - 1) as f32 * spacing + half - margin;

            let base = mesh.vertices.len() as u32;
            mesh.vertices.extend([
                Vec3::new(x_min, y, z_min),
                Vec3::new(x_max, y, z_min),
                Vec3::new(x_max, y, z_max),
                Vec3::new(x_min, y, z_max),
            ]);
            mesh.uvs.extend([Vec2::ZERO, Vec2::X, Vec2::ONE, Vec2::Y]);
            mesh.indices
                .extend([0, 2, 1, 0, 3, 2].into_iter().map(|i| base + i));
        }
        mesh
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Map a contour's lattice corners to world-space line points.
pub fn contour_to_world(contour: &Contour, spacing: f32, ground: f32) -> Vec<Vec3> {
    let y = ground + LINE_LIFT;
    contour
        .points
        .iter()
        .map(|p| Vec3::new((p.x as f32 - 0.5) * spacing, y, (p.y as f32 - 0.5) * spacing))
        .collect()
}
