//! Triangulated ribbon mesh with per-vertex colors.

use crate::{Aabb, Rgba};
use nalgebra::Point2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A triangulated ribbon mesh.
///
/// Stores vertex coordinates and per-vertex colors as parallel arrays,
/// with triangles referencing vertices by index.
///
/// # Memory Layout
///
/// - `vertices`: `Vec<Point2<f64>>` - Vertex positions
/// - `colors`: `Vec<Rgba>` - One color per vertex
/// - `triangles`: `Vec<[u32; 3]>` - Triangles as vertex indices
///
/// # Invariants
///
/// `vertices` and `colors` always have the same length; use
/// [`push_vertex`](Self::push_vertex) to keep them in lockstep. Every
/// triangle index is less than the vertex count at the moment the mesh
/// is handed to a renderer.
///
/// # Example
///
/// ```
/// use ribbon_types::{Point2, Rgba, RibbonMesh};
///
/// let mut mesh = RibbonMesh::new();
/// mesh.push_vertex(Point2::new(0.0, -1.0), Rgba::WHITE);
/// mesh.push_vertex(Point2::new(0.0, 1.0), Rgba::WHITE);
/// mesh.push_vertex(Point2::new(5.0, -1.0), Rgba::WHITE);
/// mesh.triangles.push([0, 2, 1]);
///
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RibbonMesh {
    /// Vertex positions.
    pub vertices: Vec<Point2<f64>>,

    /// Per-vertex colors, parallel to `vertices`.
    pub colors: Vec<Rgba>,

    /// Triangles as indices into the vertex array.
    pub triangles: Vec<[u32; 3]>,
}

impl RibbonMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            colors: Vec::new(),
            triangles: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated capacity.
    ///
    /// # Arguments
    ///
    /// * `vertex_count` - Expected number of vertices
    /// * `triangle_count` - Expected number of triangles
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            colors: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Append a vertex and its color, keeping the parallel arrays in sync.
    pub fn push_vertex(&mut self, position: Point2<f64>, color: Rgba) {
        self.vertices.push(position);
        self.colors.push(color);
    }

    /// Get the number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of triangles.
    #[inline]
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Check if the mesh has no triangles.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Merge another mesh into this one.
    ///
    /// The other mesh's vertices, colors, and triangles are appended, with
    /// triangle indices adjusted appropriately.
    ///
    /// # Note
    ///
    /// Vertex indices are u32, so meshes beyond ~4 billion vertices are
    /// unsupported.
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: mesh indices are u32, so vertex counts > 4B are unsupported by design
    pub fn merge(&mut self, other: &Self) {
        let vertex_offset = self.vertices.len() as u32;

        self.vertices.extend_from_slice(&other.vertices);
        self.colors.extend_from_slice(&other.colors);

        for tri in &other.triangles {
            self.triangles.push([
                tri[0] + vertex_offset,
                tri[1] + vertex_offset,
                tri[2] + vertex_offset,
            ]);
        }
    }

    /// Compute the bounding box of all vertices.
    ///
    /// Returns an empty [`Aabb`] for a mesh without vertices.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_points(self.vertices.iter())
    }

    /// Flatten the mesh into renderer-consumable vertex buffers.
    ///
    /// The transform is one-to-one and order-preserving; the only
    /// computation is the f64 to f32 narrowing the buffer format requires.
    ///
    /// # Example
    ///
    /// ```
    /// use ribbon_types::{Point2, Rgba, RibbonMesh};
    ///
    /// let mut mesh = RibbonMesh::new();
    /// mesh.push_vertex(Point2::new(1.0, 2.0), Rgba::new(10, 20, 30, 40));
    /// let buffers = mesh.to_buffers();
    ///
    /// assert_eq!(buffers.positions, vec![[1.0_f32, 2.0]]);
    /// assert_eq!(buffers.colors, vec![[10, 20, 30, 40]]);
    /// ```
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: screen-space coordinates fit comfortably in f32
    pub fn to_buffers(&self) -> VertexBuffers {
        VertexBuffers {
            positions: self
                .vertices
                .iter()
                .map(|p| [p.x as f32, p.y as f32])
                .collect(),
            colors: self.colors.iter().map(|c| [c.r, c.g, c.b, c.a]).collect(),
            indices: self.triangles.iter().flatten().copied().collect(),
        }
    }
}

/// Flattened vertex data in the layout renderers consume.
///
/// Produced by [`RibbonMesh::to_buffers`]; `positions` and `colors` are
/// parallel, `indices` holds three entries per triangle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VertexBuffers {
    /// Vertex positions as `[x, y]` pairs.
    pub positions: Vec<[f32; 2]>,
    /// Vertex colors as `[r, g, b, a]` quadruples.
    pub colors: Vec<[u8; 4]>,
    /// Triangle indices, three per triangle.
    pub indices: Vec<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn quad() -> RibbonMesh {
        let mut mesh = RibbonMesh::new();
        mesh.push_vertex(Point2::new(0.0, -1.0), Rgba::WHITE);
        mesh.push_vertex(Point2::new(0.0, 1.0), Rgba::WHITE);
        mesh.push_vertex(Point2::new(10.0, -1.0), Rgba::WHITE);
        mesh.push_vertex(Point2::new(10.0, 1.0), Rgba::WHITE);
        mesh.triangles.push([0, 2, 1]);
        mesh.triangles.push([1, 2, 3]);
        mesh
    }

    #[test]
    fn mesh_is_empty() {
        let mesh = RibbonMesh::new();
        assert!(mesh.is_empty());

        let mut mesh2 = RibbonMesh::new();
        mesh2.push_vertex(Point2::new(0.0, 0.0), Rgba::WHITE);
        assert!(mesh2.is_empty()); // no triangles

        mesh2.triangles.push([0, 0, 0]);
        assert!(!mesh2.is_empty());
    }

    #[test]
    fn push_vertex_keeps_arrays_parallel() {
        let mesh = quad();
        assert_eq!(mesh.vertices.len(), mesh.colors.len());
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
    }

    #[test]
    fn mesh_merge_offsets_indices() {
        let mut first = quad();
        let second = quad();

        first.merge(&second);
        assert_eq!(first.vertex_count(), 8);
        assert_eq!(first.triangle_count(), 4);
        assert_eq!(first.triangles[2], [4, 6, 5]);
        assert_eq!(first.triangles[3], [5, 6, 7]);
        assert_eq!(first.vertices.len(), first.colors.len());
    }

    #[test]
    fn mesh_bounds() {
        let mesh = quad();
        let bounds = mesh.bounds();
        assert_relative_eq!(bounds.min.x, 0.0);
        assert_relative_eq!(bounds.min.y, -1.0);
        assert_relative_eq!(bounds.max.x, 10.0);
        assert_relative_eq!(bounds.max.y, 1.0);
    }

    #[test]
    fn empty_mesh_bounds() {
        let mesh = RibbonMesh::new();
        assert!(mesh.bounds().is_empty());
    }

    #[test]
    fn to_buffers_preserves_order() {
        let mut mesh = RibbonMesh::new();
        mesh.push_vertex(Point2::new(1.0, 2.0), Rgba::new(1, 2, 3, 4));
        mesh.push_vertex(Point2::new(3.0, 4.0), Rgba::new(5, 6, 7, 8));
        mesh.push_vertex(Point2::new(5.0, 6.0), Rgba::new(9, 10, 11, 12));
        mesh.triangles.push([0, 2, 1]);

        let buffers = mesh.to_buffers();
        assert_eq!(buffers.positions.len(), 3);
        assert_eq!(buffers.colors.len(), 3);
        assert_eq!(buffers.positions[1], [3.0, 4.0]);
        assert_eq!(buffers.colors[2], [9, 10, 11, 12]);
        assert_eq!(buffers.indices, vec![0, 2, 1]);
    }

    #[test]
    fn to_buffers_empty_mesh() {
        let buffers = RibbonMesh::new().to_buffers();
        assert!(buffers.positions.is_empty());
        assert!(buffers.colors.is_empty());
        assert!(buffers.indices.is_empty());
    }
}
