//! Core types for variable-width ribbon meshes.
//!
//! This crate provides the foundational types for building and consuming
//! ribbon geometry:
//!
//! - [`Rgba`] - An 8-bit RGBA color with float conversions
//! - [`RibbonMesh`] - A triangulated ribbon with per-vertex colors
//! - [`VertexBuffers`] - The flattened, renderer-consumable form of a mesh
//! - [`Aabb`] - Axis-aligned bounding box in 2D
//!
//! # Layer 0 Crate
//!
//! This crate has **zero renderer dependencies**. It can be used in:
//! - CLI analysis tools
//! - Web applications (WASM)
//! - Headless session-replay pipelines
//! - Any GPU or software rasterizer front end
//!
//! # Units and Coordinate System
//!
//! All coordinates are `f64` in screen units (pixels). The x axis carries
//! the time-like dimension of a recorded trace; ribbon cross-sections are
//! offset symmetrically around the centerline in y.
//!
//! # Example
//!
//! ```
//! use ribbon_types::{Point2, Rgba, RibbonMesh};
//!
//! // One quad of a ribbon: two cross-sections, two triangles
//! let mut mesh = RibbonMesh::new();
//! mesh.push_vertex(Point2::new(0.0, -1.0), Rgba::WHITE);
//! mesh.push_vertex(Point2::new(0.0, 1.0), Rgba::WHITE);
//! mesh.push_vertex(Point2::new(10.0, -1.0), Rgba::WHITE);
//! mesh.push_vertex(Point2::new(10.0, 1.0), Rgba::WHITE);
//! mesh.triangles.push([0, 2, 1]);
//! mesh.triangles.push([1, 2, 3]);
//!
//! assert_eq!(mesh.vertex_count(), 4);
//! assert_eq!(mesh.triangle_count(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod bounds;
mod color;
mod mesh;

pub use bounds::Aabb;
pub use color::Rgba;
pub use mesh::{RibbonMesh, VertexBuffers};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Vector2};
