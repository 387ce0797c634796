//! # Box Geometry and Resolution
//!
//! Immutable inputs of a build: the physical extents of the box and the
//! number of nodes requested along each axis.

use config::constants::{
    boundary_node_count, boundary_quad_count, MAX_BOUNDARY_NODES, MIN_NODES_PER_AXIS,
};
use glam::{DVec3, UVec3};

use crate::error::{MeshError, MeshResult};

/// An axis-aligned box with one corner at the origin.
///
/// # Example
///
/// ```rust
/// use box_shell_mesh::BoxGeometry;
///
/// let cube = BoxGeometry::new(1.0, 2.0, 3.0).unwrap();
/// assert_eq!(cube.size_y(), 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxGeometry {
    extents: DVec3,
}

impl BoxGeometry {
    /// Creates a box from its three extents.
    ///
    /// Every extent must be positive and finite.
    pub fn new(size_x: f64, size_y: f64, size_z: f64) -> MeshResult<Self> {
        Self::from_extents(DVec3::new(size_x, size_y, size_z))
    }

    /// Creates a box from an extent vector.
    pub fn from_extents(extents: DVec3) -> MeshResult<Self> {
        if !extents.is_finite() {
            return Err(MeshError::invalid_geometry(format!(
                "Box extents must be finite: {:?}",
                extents
            )));
        }
        if extents.x <= 0.0 || extents.y <= 0.0 || extents.z <= 0.0 {
            return Err(MeshError::invalid_geometry(format!(
                "Box extents must be positive: {:?}",
                extents
            )));
        }
        Ok(Self { extents })
    }

    /// Creates a cube with the same extent on every axis.
    pub fn cube(size: f64) -> MeshResult<Self> {
        Self::from_extents(DVec3::splat(size))
    }

    #[inline]
    pub fn extents(&self) -> DVec3 {
        self.extents
    }

    #[inline]
    pub fn size_x(&self) -> f64 {
        self.extents.x
    }

    #[inline]
    pub fn size_y(&self) -> f64 {
        self.extents.y
    }

    #[inline]
    pub fn size_z(&self) -> f64 {
        self.extents.z
    }
}

/// Requested node counts along X, Y and Z.
///
/// A validated `Resolution` always has at least [`MIN_NODES_PER_AXIS`] nodes
/// per axis and a boundary small enough for u32 node and quad indices.
///
/// # Example
///
/// ```rust
/// use box_shell_mesh::Resolution;
///
/// let res = Resolution::new(3, 3, 3).unwrap();
/// assert_eq!(res.boundary_node_count(), 26);
/// assert_eq!(res.quad_count(), 24);
/// assert!(Resolution::new(1, 3, 3).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resolution {
    nodes: UVec3,
}

impl Resolution {
    /// Creates a resolution, validating per-axis minimums and index limits.
    pub fn new(nodes_x: u32, nodes_y: u32, nodes_z: u32) -> MeshResult<Self> {
        for (axis, nodes) in [('x', nodes_x), ('y', nodes_y), ('z', nodes_z)] {
            if nodes < MIN_NODES_PER_AXIS {
                return Err(MeshError::InvalidResolution {
                    axis,
                    nodes,
                    min: MIN_NODES_PER_AXIS,
                });
            }
        }

        // Quads are two fewer than nodes, so this also bounds the quad count
        let node_count = boundary_node_count(nodes_x, nodes_y, nodes_z);
        if node_count > u128::from(MAX_BOUNDARY_NODES) {
            return Err(MeshError::TooManyNodes {
                count: node_count,
                max: MAX_BOUNDARY_NODES,
            });
        }

        Ok(Self {
            nodes: UVec3::new(nodes_x, nodes_y, nodes_z),
        })
    }

    /// Creates a resolution with the same node count on every axis.
    pub fn uniform(nodes: u32) -> MeshResult<Self> {
        Self::new(nodes, nodes, nodes)
    }

    /// Node counts per axis.
    #[inline]
    pub fn nodes(&self) -> UVec3 {
        self.nodes
    }

    #[inline]
    pub fn nodes_x(&self) -> u32 {
        self.nodes.x
    }

    #[inline]
    pub fn nodes_y(&self) -> u32 {
        self.nodes.y
    }

    #[inline]
    pub fn nodes_z(&self) -> u32 {
        self.nodes.z
    }

    /// Index of the last node along each axis.
    #[inline]
    pub fn last(&self) -> UVec3 {
        self.nodes - UVec3::ONE
    }

    /// Number of nodes on the surface of the grid.
    pub fn boundary_node_count(&self) -> u32 {
        // Fits: checked in `new`
        boundary_node_count(self.nodes.x, self.nodes.y, self.nodes.z) as u32
    }

    /// Number of quads covering the surface of the grid.
    pub fn quad_count(&self) -> u32 {
        // Fits: bounded by the node count
        boundary_quad_count(self.nodes.x, self.nodes.y, self.nodes.z) as u32
    }

    /// Physical spacing between adjacent nodes along each axis for `geometry`.
    ///
    /// `extent / (nodes - 1)` per axis.
    pub fn strides(&self, geometry: &BoxGeometry) -> DVec3 {
        geometry.extents() / self.last().as_dvec3()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_valid() {
        let geometry = BoxGeometry::new(1.0, 2.0, 3.0).unwrap();
        assert_eq!(geometry.extents(), DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_geometry_rejects_zero_extent() {
        let result = BoxGeometry::new(0.0, 1.0, 1.0);
        assert!(matches!(result, Err(MeshError::InvalidGeometry { .. })));
    }

    #[test]
    fn test_geometry_rejects_negative_extent() {
        assert!(BoxGeometry::new(1.0, -1.0, 1.0).is_err());
    }

    #[test]
    fn test_geometry_rejects_non_finite_extent() {
        assert!(BoxGeometry::new(1.0, 1.0, f64::NAN).is_err());
        assert!(BoxGeometry::new(f64::INFINITY, 1.0, 1.0).is_err());
    }

    #[test]
    fn test_resolution_rejects_single_node_axis() {
        let err = Resolution::new(4, 1, 4).unwrap_err();
        assert_eq!(
            err,
            MeshError::InvalidResolution {
                axis: 'y',
                nodes: 1,
                min: 2
            }
        );
    }

    #[test]
    fn test_resolution_rejects_oversized_grid() {
        let result = Resolution::uniform(100_000);
        assert!(matches!(result, Err(MeshError::TooManyNodes { .. })));
    }

    #[test]
    fn test_resolution_rejects_grids_beyond_u64_products() {
        for (x, y, z) in [
            (u32::MAX, u32::MAX, u32::MAX),
            (3_000_000, 3_000_000, 3_000_000),
            (4, 1 << 31, 1 << 31),
        ] {
            let result = Resolution::new(x, y, z);
            assert!(
                matches!(result, Err(MeshError::TooManyNodes { max, .. }) if max == MAX_BOUNDARY_NODES),
                "{}x{}x{}: {:?}",
                x,
                y,
                z,
                result
            );
        }
    }

    #[test]
    fn test_resolution_accepts_largest_fitting_grid() {
        // 6n^2 - 12n + 8 <= u32::MAX holds up to n = 26755
        let res = Resolution::uniform(26_755).unwrap();
        assert_eq!(res.quad_count() + 2, res.boundary_node_count());
        assert!(Resolution::uniform(26_756).is_err());
    }

    #[test]
    fn test_resolution_counts() {
        let res = Resolution::new(4, 3, 2).unwrap();
        assert_eq!(res.boundary_node_count(), 24);
        assert_eq!(res.quad_count(), 2 * (3 * 2 + 2 * 1 + 3 * 1));
        assert_eq!(res.last(), UVec3::new(3, 2, 1));
    }

    #[test]
    fn test_strides() {
        let geometry = BoxGeometry::new(3.0, 1.0, 10.0).unwrap();
        let res = Resolution::new(4, 2, 11).unwrap();
        assert_eq!(res.strides(&geometry), DVec3::new(1.0, 1.0, 1.0));
    }
}
