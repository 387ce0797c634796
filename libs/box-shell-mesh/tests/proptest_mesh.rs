//! Property-based tests for box meshing.
//!
//! These tests sweep random resolutions and box sizes and verify the
//! counting and connectivity invariants.
//!
//! Run with: cargo test -p box-shell-mesh -- proptest

use box_shell_mesh::{mesh_box, BoxGeometry, BuildOptions, FaceKind, QuadMesh, Resolution, Winding};
use glam::{DVec3, UVec3};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

fn arb_nodes() -> impl Strategy<Value = UVec3> {
    prop::array::uniform3(2u32..12).prop_map(UVec3::from)
}

fn arb_size() -> impl Strategy<Value = DVec3> {
    prop::array::uniform3(0.01..100.0f64).prop_map(DVec3::from)
}

fn build(size: DVec3, nodes: UVec3, winding: Winding) -> QuadMesh {
    let geometry = BoxGeometry::from_extents(size).unwrap();
    let resolution = Resolution::new(nodes.x, nodes.y, nodes.z).unwrap();
    mesh_box(
        &geometry,
        resolution,
        BuildOptions::default().with_winding(winding),
    )
    .unwrap()
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn proptest_node_count_is_boundary_of_grid(nodes in arb_nodes()) {
        let mesh = build(DVec3::ONE, nodes, Winding::Insertion);
        let [nx, ny, nz] = nodes.to_array().map(i64::from);
        let expected = nx * ny * nz - (nx - 2) * (ny - 2) * (nz - 2);
        prop_assert_eq!(i64::from(mesh.node_count()), expected);
    }

    #[test]
    fn proptest_quad_count_covers_faces(nodes in arb_nodes()) {
        let mesh = build(DVec3::ONE, nodes, Winding::Insertion);
        let [dx, dy, dz] = (nodes - UVec3::ONE).to_array();
        prop_assert_eq!(mesh.quad_count(), 2 * (dx * dy + dy * dz + dx * dz));
    }

    #[test]
    fn proptest_mesh_validates(nodes in arb_nodes(), size in arb_size()) {
        let mesh = build(size, nodes, Winding::Insertion);
        prop_assert!(mesh.validate().is_ok());
    }

    #[test]
    fn proptest_corners_have_three_quads(nodes in arb_nodes()) {
        let mesh = build(DVec3::ONE, nodes, Winding::Insertion);
        let valences = mesh.node_valences();
        prop_assert!(valences[..8].iter().all(|&v| v == 3));
        prop_assert!(valences[8..].iter().all(|&v| v == 4));
    }

    #[test]
    fn proptest_nodes_stay_in_box(nodes in arb_nodes(), size in arb_size()) {
        let mesh = build(size, nodes, Winding::Insertion);
        let (min, max) = mesh.bounding_box();
        prop_assert_eq!(min, DVec3::ZERO);
        prop_assert!(max.cmple(size * (1.0 + 1e-12)).all());
    }

    #[test]
    fn proptest_outward_normals(nodes in arb_nodes(), size in arb_size()) {
        let mesh = build(size, nodes, Winding::Outward);
        let last = nodes - UVec3::ONE;
        let faces = FaceKind::ALL.iter().flat_map(|&kind| {
            let d = kind.project(last);
            std::iter::repeat(kind).take((d.x * d.y) as usize)
        });

        for (quad, kind) in mesh.quads().iter().zip(faces) {
            let [a, b, c, d] = quad.map(|i| mesh.node(i));
            let normal = (c - a).cross(d - b);
            prop_assert!(normal.dot(kind.outward_normal()) > 0.0, "{:?} {:?}", kind, quad);
        }
    }
}
