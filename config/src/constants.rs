//! # Configuration Constants
//!
//! Centralized constants for the box shell mesher.
//!
//! ## Categories
//!
//! - **Topology**: Fixed counts of a box (faces, corners, edges)
//! - **Resolution**: Per-axis node count bounds
//! - **Limits**: Maximum values that keep indices inside u32
//! - **Counting**: Closed-form node and quad totals for a resolution

// =============================================================================
// TOPOLOGY CONSTANTS
// =============================================================================

/// Number of nodes in one quadrilateral shell element.
///
/// # Example
///
/// ```rust
/// use config::constants::NODES_PER_QUAD;
///
/// let quad: [u32; NODES_PER_QUAD] = [0, 1, 2, 3];
/// assert_eq!(quad.len(), 4);
/// ```
pub const NODES_PER_QUAD: usize = 4;

/// Number of faces of an axis-aligned box.
pub const FACE_COUNT: usize = 6;

/// Number of corners of an axis-aligned box.
pub const CORNER_COUNT: usize = 8;

/// Number of edges of an axis-aligned box.
pub const EDGE_COUNT: usize = 12;

/// Maximum number of faces a single boundary node can lie on.
///
/// Corners touch 3 faces, edge nodes 2 and inner-face nodes 1.
pub const MAX_FACES_PER_NODE: usize = 3;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Minimum number of nodes requested along any axis.
///
/// Two nodes per axis is the coarsest grid: the box corners only, with one
/// quad per face.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_NODES_PER_AXIS;
///
/// let divisions = MIN_NODES_PER_AXIS - 1;
/// assert_eq!(divisions, 1);
/// ```
pub const MIN_NODES_PER_AXIS: u32 = 2;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of boundary nodes in a single mesh.
///
/// Node indices are stored as u32, so the node count must fit that range.
/// The quad count needs no separate limit: a closed quad surface has
/// exactly two fewer quads than nodes (V - E + F = 2 with E = 2F).
pub const MAX_BOUNDARY_NODES: u64 = u32::MAX as u64;

// =============================================================================
// COUNTING HELPERS
// =============================================================================

/// Number of boundary nodes of an `nx` x `ny` x `nz` node grid.
///
/// The full grid minus the strictly interior grid. Computed in u128, which
/// holds the product of any three u32 axes, so callers can compare against
/// [`MAX_BOUNDARY_NODES`] before narrowing.
/// Every axis must be at least [`MIN_NODES_PER_AXIS`].
///
/// # Example
///
/// ```rust
/// use config::constants::boundary_node_count;
///
/// assert_eq!(boundary_node_count(3, 3, 3), 26);
/// assert_eq!(boundary_node_count(4, 4, 4), 56);
/// ```
#[inline]
pub fn boundary_node_count(nx: u32, ny: u32, nz: u32) -> u128 {
    let (nx, ny, nz) = (u128::from(nx), u128::from(ny), u128::from(nz));
    nx * ny * nz - (nx - 2) * (ny - 2) * (nz - 2)
}

/// Number of quads covering the boundary of an `nx` x `ny` x `nz` node grid.
///
/// Two faces per axis pair, each with `(n_a - 1) * (n_b - 1)` quads.
///
/// # Example
///
/// ```rust
/// use config::constants::boundary_quad_count;
///
/// assert_eq!(boundary_quad_count(2, 2, 2), 6);
/// assert_eq!(boundary_quad_count(3, 3, 3), 24);
/// ```
#[inline]
pub fn boundary_quad_count(nx: u32, ny: u32, nz: u32) -> u128 {
    let (dx, dy, dz) = (
        u128::from(nx) - 1,
        u128::from(ny) - 1,
        u128::from(nz) - 1,
    );
    2 * (dx * dy + dy * dz + dx * dz)
}
