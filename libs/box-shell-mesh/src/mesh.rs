//! # Quad Mesh Sink
//!
//! The [`MeshSink`] contract the builder writes into, and [`QuadMesh`], an
//! in-memory sink holding flat node and quad-connectivity arrays.

use config::constants::NODES_PER_QUAD;
use glam::DVec3;

use crate::error::{MeshError, MeshResult};

/// Connectivity of one quad: four node indices.
pub type Quad = [u32; NODES_PER_QUAD];

/// Index-addressed destination for a generated mesh.
///
/// Declaring a count fixes the storage size immediately. Writes carry an
/// explicit index and may arrive in any order.
pub trait MeshSink {
    /// Fixes the number of nodes and sizes node storage.
    fn declare_node_count(&mut self, count: u32) -> MeshResult<()>;

    /// Stores the position of node `index`.
    fn set_node(&mut self, index: u32, position: DVec3) -> MeshResult<()>;

    /// Fixes the number of quads and sizes quad storage.
    fn declare_quad_count(&mut self, count: u32) -> MeshResult<()>;

    /// Stores the connectivity of quad `index`.
    fn set_quad(&mut self, index: u32, quad: Quad) -> MeshResult<()>;
}

/// A quad surface mesh with flat node and connectivity arrays.
///
/// # Example
///
/// ```rust
/// use box_shell_mesh::{MeshSink, QuadMesh};
/// use glam::DVec3;
///
/// let mut mesh = QuadMesh::new();
/// mesh.declare_node_count(4).unwrap();
/// mesh.set_node(0, DVec3::new(0.0, 0.0, 0.0)).unwrap();
/// mesh.set_node(1, DVec3::new(1.0, 0.0, 0.0)).unwrap();
/// mesh.set_node(2, DVec3::new(1.0, 1.0, 0.0)).unwrap();
/// mesh.set_node(3, DVec3::new(0.0, 1.0, 0.0)).unwrap();
/// mesh.declare_quad_count(1).unwrap();
/// mesh.set_quad(0, [0, 1, 2, 3]).unwrap();
/// assert!(mesh.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuadMesh {
    nodes: Vec<DVec3>,
    quads: Vec<Quad>,
}

impl MeshSink for QuadMesh {
    fn declare_node_count(&mut self, count: u32) -> MeshResult<()> {
        self.nodes.clear();
        self.nodes.resize(count as usize, DVec3::ZERO);
        Ok(())
    }

    fn set_node(&mut self, index: u32, position: DVec3) -> MeshResult<()> {
        let count = self.node_count();
        let slot = self
            .nodes
            .get_mut(index as usize)
            .ok_or(MeshError::NodeIndexOutOfRange { index, count })?;
        *slot = position;
        Ok(())
    }

    fn declare_quad_count(&mut self, count: u32) -> MeshResult<()> {
        self.quads.clear();
        self.quads.resize(count as usize, [0; NODES_PER_QUAD]);
        Ok(())
    }

    fn set_quad(&mut self, index: u32, quad: Quad) -> MeshResult<()> {
        let node_count = self.node_count();
        if let Some(&node) = quad.iter().find(|&&node| node >= node_count) {
            return Err(MeshError::invalid_quad(
                index,
                format!("node {} out of range (count: {})", node, node_count),
            ));
        }

        let count = self.quad_count();
        let slot = self
            .quads
            .get_mut(index as usize)
            .ok_or(MeshError::QuadIndexOutOfRange { index, count })?;
        *slot = quad;
        Ok(())
    }
}

impl QuadMesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of nodes.
    #[inline]
    pub fn node_count(&self) -> u32 {
        self.nodes.len() as u32
    }

    /// Returns the number of quads.
    #[inline]
    pub fn quad_count(&self) -> u32 {
        self.quads.len() as u32
    }

    /// Returns true if the mesh has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn nodes(&self) -> &[DVec3] {
        &self.nodes
    }

    #[inline]
    pub fn quads(&self) -> &[Quad] {
        &self.quads
    }

    /// Returns the node at the given index.
    #[inline]
    pub fn node(&self, index: u32) -> DVec3 {
        self.nodes[index as usize]
    }

    /// Returns the quad at the given index.
    #[inline]
    pub fn quad(&self, index: u32) -> Quad {
        self.quads[index as usize]
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((first, rest)) = self.nodes.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        rest.iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Number of quads referencing each node.
    ///
    /// References past the node range are skipped; [`QuadMesh::validate`]
    /// reports them.
    pub fn node_valences(&self) -> Vec<u32> {
        let mut valences = vec![0u32; self.nodes.len()];
        for quad in &self.quads {
            for &node in quad {
                if let Some(valence) = valences.get_mut(node as usize) {
                    *valence += 1;
                }
            }
        }
        valences
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All quad indices are valid
    /// - No quad references the same node twice
    /// - Every node is referenced by at least one quad
    pub fn validate(&self) -> MeshResult<()> {
        let node_count = self.node_count();
        let mut referenced = vec![false; self.nodes.len()];

        for (index, quad) in self.quads.iter().enumerate() {
            let index = index as u32;
            for (i, &node) in quad.iter().enumerate() {
                if node >= node_count {
                    return Err(MeshError::invalid_quad(
                        index,
                        format!("node {} out of range (count: {})", node, node_count),
                    ));
                }
                if quad[..i].contains(&node) {
                    return Err(MeshError::invalid_quad(
                        index,
                        format!("node {} appears twice", node),
                    ));
                }
                referenced[node as usize] = true;
            }
        }

        if let Some(orphan) = referenced.iter().position(|&used| !used) {
            return Err(MeshError::validation(format!(
                "node {} is not referenced by any quad",
                orphan
            )));
        }

        Ok(())
    }

    /// Splits every quad into two triangles along its 0-2 diagonal.
    ///
    /// Only meaningful for quads whose indices form a closed loop, as
    /// produced with [`Winding::Outward`](crate::Winding::Outward).
    pub fn triangulate(&self) -> Vec<[u32; 3]> {
        let mut triangles = Vec::with_capacity(self.quads.len() * 2);
        for &[a, b, c, d] in &self.quads {
            triangles.push([a, b, c]);
            triangles.push([a, c, d]);
        }
        triangles
    }

    /// Exports nodes as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn nodes_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.nodes.len() * 3);
        for v in &self.nodes {
            result.push(v.x as f32);
            result.push(v.y as f32);
            result.push(v.z as f32);
        }
        result
    }

    /// Exports quad connectivity as a flat u32 array.
    pub fn quad_indices_u32(&self) -> Vec<u32> {
        self.quads.iter().flatten().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> QuadMesh {
        let mut mesh = QuadMesh::new();
        mesh.declare_node_count(4).unwrap();
        mesh.set_node(0, DVec3::new(0.0, 0.0, 0.0)).unwrap();
        mesh.set_node(1, DVec3::new(1.0, 0.0, 0.0)).unwrap();
        mesh.set_node(2, DVec3::new(1.0, 1.0, 0.0)).unwrap();
        mesh.set_node(3, DVec3::new(0.0, 1.0, 0.0)).unwrap();
        mesh.declare_quad_count(1).unwrap();
        mesh.set_quad(0, [0, 1, 2, 3]).unwrap();
        mesh
    }

    #[test]
    fn test_mesh_new() {
        let mesh = QuadMesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.node_count(), 0);
        assert_eq!(mesh.quad_count(), 0);
    }

    #[test]
    fn test_declare_sizes_storage() {
        let mut mesh = QuadMesh::new();
        mesh.declare_node_count(5).unwrap();
        mesh.declare_quad_count(2).unwrap();
        assert_eq!(mesh.node_count(), 5);
        assert_eq!(mesh.quad_count(), 2);
        assert_eq!(mesh.node(4), DVec3::ZERO);
    }

    #[test]
    fn test_out_of_order_writes() {
        let mut mesh = QuadMesh::new();
        mesh.declare_node_count(3).unwrap();
        mesh.set_node(2, DVec3::Z).unwrap();
        mesh.set_node(0, DVec3::X).unwrap();
        assert_eq!(mesh.node(2), DVec3::Z);
        assert_eq!(mesh.node(0), DVec3::X);
    }

    #[test]
    fn test_set_node_out_of_range() {
        let mut mesh = QuadMesh::new();
        mesh.declare_node_count(2).unwrap();
        let err = mesh.set_node(2, DVec3::ONE).unwrap_err();
        assert_eq!(err, MeshError::NodeIndexOutOfRange { index: 2, count: 2 });
    }

    #[test]
    fn test_set_quad_out_of_range() {
        let mut mesh = unit_square();
        let err = mesh.set_quad(1, [0, 1, 2, 3]).unwrap_err();
        assert_eq!(err, MeshError::QuadIndexOutOfRange { index: 1, count: 1 });
    }

    #[test]
    fn test_set_quad_rejects_unknown_node() {
        let mut mesh = unit_square();
        let result = mesh.set_quad(0, [0, 1, 2, 4]);
        assert!(matches!(result, Err(MeshError::InvalidQuad { index: 0, .. })));
    }

    #[test]
    fn test_validate_valid() {
        assert!(unit_square().validate().is_ok());
    }

    #[test]
    fn test_validate_duplicate_node() {
        let mut mesh = unit_square();
        mesh.set_quad(0, [0, 1, 1, 3]).unwrap();
        assert!(matches!(
            mesh.validate(),
            Err(MeshError::InvalidQuad { index: 0, .. })
        ));
    }

    #[test]
    fn test_validate_orphan_node() {
        let mut mesh = unit_square();
        mesh.declare_node_count(5).unwrap();
        assert!(matches!(
            mesh.validate(),
            Err(MeshError::ValidationFailed { .. })
        ));
    }

    #[test]
    fn test_bounding_box() {
        let (min, max) = unit_square().bounding_box();
        assert_eq!(min, DVec3::ZERO);
        assert_eq!(max, DVec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_node_valences() {
        assert_eq!(unit_square().node_valences(), vec![1, 1, 1, 1]);
    }

    #[test]
    fn test_node_valences_skip_stale_quads() {
        let mut mesh = unit_square();
        mesh.declare_node_count(2).unwrap();
        assert_eq!(mesh.node_valences(), vec![1, 1]);
        assert!(mesh.validate().is_err());
    }

    #[test]
    fn test_triangulate() {
        let triangles = unit_square().triangulate();
        assert_eq!(triangles, vec![[0, 1, 2], [0, 2, 3]]);
    }

    #[test]
    fn test_flat_exports() {
        let mesh = unit_square();
        assert_eq!(mesh.quad_indices_u32(), vec![0, 1, 2, 3]);
        assert_eq!(&mesh.nodes_f32()[3..6], &[1.0f32, 0.0, 0.0]);
    }
}
