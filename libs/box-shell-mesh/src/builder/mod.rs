//! # Box Mesh Builder
//!
//! Generates the boundary quad mesh of a box in one pass over its surface
//! nodes. No interior node is ever visited.
//!
//! ## Algorithm
//!
//! ```text
//! initialize   declare node count, strides, allocate 6 face grids
//! corners      8 nodes, each on 3 faces   (checked registration)
//! edges        12 edges, each node on 2   (checked registration)
//! inner faces  each node on 1 face        (interior registration)
//! flatten      declare quad count, write every shell face by face
//! ```
//!
//! Nodes get sequential indices in that order. Each node is written to the
//! sink once and registered into the shells it is a corner of, so a shell
//! is complete as soon as its four corners have been emitted.
//!
//! Grid points are addressed as `(x, y, z)` with `x` in `0..nodes_x` and so on:
//!
//! ```text
//!            (0,y,z) ____________ (x,y,z)
//!                   /|          /|
//!          (0,y,0) /___________/ | (x,y,0)
//!     Y ^  Z       |  |        |  |
//!       | /        |  |________|__| (x,0,z)
//!       |/         | /         | /
//!       +---> X    |/__________|/
//!            (0,0,0)           (x,0,0)
//! ```

mod face;
mod shell;


pub use face::{Face, FaceKind};
pub use shell::{Corner, Shell};

use config::constants::{CORNER_COUNT, EDGE_COUNT, MAX_FACES_PER_NODE, MIN_NODES_PER_AXIS};
use glam::{DVec3, UVec2, UVec3};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::MeshResult;
use crate::geometry::{BoxGeometry, Resolution};
use crate::mesh::{MeshSink, Quad};

/// Order of the four node indices written for each quad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Winding {
    /// Indices in the order their nodes were emitted.
    ///
    /// Not guaranteed to walk around the quad, so the four indices may
    /// describe a "bow-tie" when read as a polygon.
    #[default]
    Insertion,
    /// Indices form a closed loop whose normal points out of the box.
    Outward,
}

/// Options applied to every build.
///
/// # Example
///
/// ```rust
/// use box_shell_mesh::{BuildOptions, Winding};
///
/// let options = BuildOptions::default().with_winding(Winding::Outward);
/// assert_eq!(options.winding, Winding::Outward);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildOptions {
    /// Vertex order of emitted quads
    pub winding: Winding,
}

impl BuildOptions {
    pub fn with_winding(mut self, winding: Winding) -> Self {
        self.winding = winding;
        self
    }
}

/// Totals written by a successful build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildReport {
    pub node_count: u32,
    pub quad_count: u32,
}

/// Stage of a build in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BuildPhase {
    Idle,
    Initialized,
    NodesEmitted,
    QuadsFlattened,
}

impl BuildPhase {
    fn next(self) -> Option<BuildPhase> {
        match self {
            BuildPhase::Idle => Some(BuildPhase::Initialized),
            BuildPhase::Initialized => Some(BuildPhase::NodesEmitted),
            BuildPhase::NodesEmitted => Some(BuildPhase::QuadsFlattened),
            BuildPhase::QuadsFlattened => None,
        }
    }
}

/// Builds boundary quad meshes of one box.
///
/// The builder holds only the geometry and options; all per-build state
/// lives inside a single [`build`](Self::build) call, so one builder can
/// mesh the same box at any number of resolutions.
///
/// # Example
///
/// ```rust
/// use box_shell_mesh::{BoxGeometry, BoxMeshBuilder, QuadMesh};
///
/// let builder = BoxMeshBuilder::new(BoxGeometry::cube(1.0).unwrap());
/// let mut mesh = QuadMesh::new();
/// let report = builder.build(&mut mesh, 3, 3, 3).unwrap();
/// assert_eq!(report.node_count, 26);
/// assert_eq!(mesh.quad_count(), 24);
/// ```
#[derive(Debug, Clone)]
pub struct BoxMeshBuilder {
    geometry: BoxGeometry,
    options: BuildOptions,
}

impl BoxMeshBuilder {
    pub fn new(geometry: BoxGeometry) -> Self {
        Self::with_options(geometry, BuildOptions::default())
    }

    pub fn with_options(geometry: BoxGeometry, options: BuildOptions) -> Self {
        Self { geometry, options }
    }

    #[inline]
    pub fn geometry(&self) -> &BoxGeometry {
        &self.geometry
    }

    #[inline]
    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// Meshes the box with the given node counts per axis into `sink`.
    ///
    /// # Panics
    ///
    /// If any node count is below 2. Use [`Resolution::new`] to validate
    /// untrusted input first.
    ///
    /// # Errors
    ///
    /// If the grid exceeds the u32 index space or the sink rejects a write.
    pub fn build<S: MeshSink>(
        &self,
        sink: &mut S,
        nodes_x: u32,
        nodes_y: u32,
        nodes_z: u32,
    ) -> MeshResult<BuildReport> {
        assert!(
            nodes_x >= MIN_NODES_PER_AXIS
                && nodes_y >= MIN_NODES_PER_AXIS
                && nodes_z >= MIN_NODES_PER_AXIS,
            "every axis needs at least {} nodes, got {}x{}x{}",
            MIN_NODES_PER_AXIS,
            nodes_x,
            nodes_y,
            nodes_z
        );

        let resolution = Resolution::new(nodes_x, nodes_y, nodes_z)?;
        self.build_resolution(sink, resolution)
    }

    /// Meshes the box at a validated resolution into `sink`.
    pub fn build_resolution<S: MeshSink>(
        &self,
        sink: &mut S,
        resolution: Resolution,
    ) -> MeshResult<BuildReport> {
        info!(
            nodes = ?resolution.nodes(),
            extents = ?self.geometry.extents(),
            winding = ?self.options.winding,
            "Building box shell mesh"
        );

        let mut state = BuildState::initialize(sink, &self.geometry, resolution)?;

        state.emit_corner_nodes()?;
        state.emit_edge_nodes()?;
        state.emit_inner_face_nodes()?;
        state.finish_nodes();

        let report = state.flatten(self.options.winding)?;

        info!(
            node_count = report.node_count,
            quad_count = report.quad_count,
            "Box shell mesh complete"
        );
        Ok(report)
    }
}

/// Everything one build needs; dropped when the build returns.
struct BuildState<'a, S: MeshSink> {
    sink: &'a mut S,
    resolution: Resolution,
    last: UVec3,
    strides: DVec3,
    faces: [Face; FaceKind::COUNT],
    next_index: u32,
    total_nodes: u32,
    phase: BuildPhase,
}

impl<'a, S: MeshSink> BuildState<'a, S> {
    fn initialize(
        sink: &'a mut S,
        geometry: &BoxGeometry,
        resolution: Resolution,
    ) -> MeshResult<Self> {
        let total_nodes = resolution.boundary_node_count();
        sink.declare_node_count(total_nodes)?;

        let last = resolution.last();
        // Each face spans the two axes it does not drop; divisions = nodes - 1
        let faces = FaceKind::ALL.map(|kind| {
            let UVec2 { x: w, y: h } = kind.project(last);
            Face::new(w, h, kind)
        });

        let mut state = Self {
            sink,
            resolution,
            last,
            strides: resolution.strides(geometry),
            faces,
            next_index: 0,
            total_nodes,
            phase: BuildPhase::Idle,
        };
        state.advance(BuildPhase::Initialized);
        Ok(state)
    }

    fn advance(&mut self, phase: BuildPhase) {
        assert_eq!(
            self.phase.next(),
            Some(phase),
            "build cannot move from {:?} to {:?}",
            self.phase,
            phase
        );
        debug!(from = ?self.phase, to = ?phase, next_index = self.next_index, "Build phase");
        self.phase = phase;
    }

    fn emit_corner_nodes(&mut self) -> MeshResult<()> {
        let UVec3 { x, y, z } = self.last;
        let corners: [UVec3; CORNER_COUNT] = [
            UVec3::new(0, 0, 0),
            UVec3::new(x, 0, 0),
            UVec3::new(x, 0, z),
            UVec3::new(0, 0, z),
            UVec3::new(0, y, 0),
            UVec3::new(x, y, 0),
            UVec3::new(x, y, z),
            UVec3::new(0, y, z),
        ];
        for corner in corners {
            self.emit_shared_node(corner, MAX_FACES_PER_NODE)?;
        }

        debug!(next_index = self.next_index, "Corner nodes emitted");
        Ok(())
    }

    fn emit_edge_nodes(&mut self) -> MeshResult<()> {
        let last = self.last;
        let mut edges = 0;
        for axis in 0..3 {
            let (a, b) = ((axis + 1) % 3, (axis + 2) % 3);
            for (at_a, at_b) in [(0, 0), (last[a], 0), (0, last[b]), (last[a], last[b])] {
                edges += 1;
                // Endpoints are corners and already emitted
                for t in 1..last[axis] {
                    let mut point = UVec3::ZERO;
                    point[axis] = t;
                    point[a] = at_a;
                    point[b] = at_b;
                    self.emit_shared_node(point, 2)?;
                }
            }
        }
        debug_assert_eq!(edges, EDGE_COUNT);

        debug!(next_index = self.next_index, "Edge nodes emitted");
        Ok(())
    }

    fn emit_inner_face_nodes(&mut self) -> MeshResult<()> {
        let last = self.last;
        for kind in FaceKind::ALL {
            let face = &self.faces[kind.index()];
            let (width, height) = (face.width_divisions(), face.height_divisions());
            for h in 1..height {
                for w in 1..width {
                    let point = kind.unproject(UVec2::new(w, h), last);
                    let index = self.write_node(point)?;
                    self.faces[kind.index()].register_interior_node(index, point);
                }
            }
        }

        debug!(next_index = self.next_index, "Inner face nodes emitted");
        Ok(())
    }

    fn finish_nodes(&mut self) {
        assert_eq!(
            self.next_index, self.total_nodes,
            "emitted {} nodes but declared {}",
            self.next_index, self.total_nodes
        );
        self.advance(BuildPhase::NodesEmitted);
    }

    /// Writes a corner or edge node and registers it on every face it lies on.
    fn emit_shared_node(&mut self, point: UVec3, expected_faces: usize) -> MeshResult<()> {
        let index = self.write_node(point)?;

        let last = self.last;
        let mut touched = 0;
        for face in self
            .faces
            .iter_mut()
            .filter(|face| face.kind().contains(point, last))
        {
            face.register_node_checked(index, point);
            touched += 1;
        }
        debug_assert_eq!(touched, expected_faces, "node {:?} touches {} faces", point, touched);
        Ok(())
    }

    /// Assigns the next global index and writes the node's position.
    #[inline]
    fn write_node(&mut self, point: UVec3) -> MeshResult<u32> {
        let index = self.next_index;
        self.sink.set_node(index, point.as_dvec3() * self.strides)?;
        self.next_index += 1;
        Ok(index)
    }

    /// Writes every shell as a quad, face by face, and consumes the state.
    fn flatten(mut self, winding: Winding) -> MeshResult<BuildReport> {
        let quad_count: usize = self.faces.iter().map(Face::shell_count).sum();
        let quad_count = quad_count as u32;
        assert_eq!(quad_count, self.resolution.quad_count());
        self.sink.declare_quad_count(quad_count)?;

        let mut quad_index = 0u32;
        for face in &self.faces {
            let reversed = face.kind().reverses_local_loop();
            for shell in face.shells() {
                let quad: Quad = match winding {
                    Winding::Insertion => shell.insertion_quad(),
                    Winding::Outward => shell.loop_quad(reversed),
                };
                self.sink.set_quad(quad_index, quad)?;
                quad_index += 1;
            }
        }

        self.advance(BuildPhase::QuadsFlattened);
        Ok(BuildReport {
            node_count: self.total_nodes,
            quad_count,
        })
    }
}
