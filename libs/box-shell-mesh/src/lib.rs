//! # Box Shell Mesh
//!
//! Quadrilateral surface meshing of axis-aligned boxes.
//! Only the boundary of the requested node grid is generated: nodes on
//! shared edges and corners are created once and reused by every face.
//!
//! ## Architecture
//!
//! ```text
//! BoxGeometry + Resolution → BoxMeshBuilder → MeshSink (QuadMesh)
//! ```
//!
//! Work and memory are proportional to the surface (about 6·N² nodes and
//! quads for an N³ grid), never to the enclosed volume.
//!
//! ## Usage
//!
//! ```rust
//! use box_shell_mesh::{mesh_box, BoxGeometry, BuildOptions, Resolution};
//!
//! let geometry = BoxGeometry::new(1.0, 1.0, 1.0).unwrap();
//! let resolution = Resolution::uniform(4).unwrap();
//! let mesh = mesh_box(&geometry, resolution, BuildOptions::default()).unwrap();
//! assert_eq!(mesh.node_count(), 56);
//! assert_eq!(mesh.quad_count(), 54);
//! ```

pub mod builder;
pub mod error;
pub mod geometry;
pub mod mesh;

pub use builder::{BoxMeshBuilder, BuildOptions, BuildReport, FaceKind, Winding};
pub use error::{MeshError, MeshResult};
pub use geometry::{BoxGeometry, Resolution};
pub use mesh::{MeshSink, Quad, QuadMesh};

/// Meshes the surface of `geometry` at `resolution` into a new [`QuadMesh`].
///
/// # Example
///
/// ```rust
/// use box_shell_mesh::{mesh_box, BoxGeometry, BuildOptions, Resolution};
///
/// let geometry = BoxGeometry::cube(2.0).unwrap();
/// let mesh = mesh_box(&geometry, Resolution::uniform(2).unwrap(), BuildOptions::default()).unwrap();
/// assert_eq!(mesh.node_count(), 8);
/// assert_eq!(mesh.quad_count(), 6);
/// ```
pub fn mesh_box(
    geometry: &BoxGeometry,
    resolution: Resolution,
    options: BuildOptions,
) -> MeshResult<QuadMesh> {
    let mut mesh = QuadMesh::new();
    BoxMeshBuilder::with_options(*geometry, options).build_resolution(&mut mesh, resolution)?;
    Ok(mesh)
}
