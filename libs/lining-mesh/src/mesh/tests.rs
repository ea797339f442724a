use super::*;
use approx::assert_relative_eq;
use glam::DQuat;

fn unit_triangle() -> Mesh {
    let mut mesh = Mesh::new();
    let v0 = mesh.add_vertex(DVec3::ZERO);
    let v1 = mesh.add_vertex(DVec3::X);
    let v2 = mesh.add_vertex(DVec3::Y);
    mesh.add_triangle(v0, v1, v2);
    mesh
}

/// Axis-aligned unit cube with outward winding.
fn unit_cube() -> Mesh {
    let mut mesh = Mesh::new();
    for i in 0..8u32 {
        mesh.add_vertex(DVec3::new(
            (i & 1) as f64,
            ((i >> 1) & 1) as f64,
            ((i >> 2) & 1) as f64,
        ));
    }
    mesh.add_quad(0, 2, 3, 1); // z = 0
    mesh.add_quad(4, 5, 7, 6); // z = 1
    mesh.add_quad(0, 1, 5, 4); // y = 0
    mesh.add_quad(2, 6, 7, 3); // y = 1
    mesh.add_quad(0, 4, 6, 2); // x = 0
    mesh.add_quad(1, 3, 7, 5); // x = 1
    mesh
}

#[test]
fn test_mesh_new() {
    let mesh = Mesh::new();
    assert!(mesh.is_empty());
    assert_eq!(mesh.vertex_count(), 0);
    assert_eq!(mesh.triangle_count(), 0);
    assert!(mesh.bounding_box().is_none());
}

#[test]
fn test_add_vertex_returns_sequential_indices() {
    let mut mesh = Mesh::new();
    assert_eq!(mesh.add_vertex(DVec3::ZERO), 0);
    assert_eq!(mesh.add_vertex(DVec3::ONE), 1);
}

#[test]
fn test_add_quad_keeps_winding() {
    let mut mesh = Mesh::new();
    for p in [DVec3::ZERO, DVec3::X, DVec3::new(1.0, 1.0, 0.0), DVec3::Y] {
        mesh.add_vertex(p);
    }
    mesh.add_quad(0, 1, 2, 3);
    assert_eq!(mesh.triangles, vec![[0, 1, 2], [0, 2, 3]]);
    for i in 0..2 {
        assert!(mesh.triangle_normal(i).unwrap().z > 0.0);
    }
}

#[test]
fn test_triangle_normal_right_hand_rule() {
    let mesh = unit_triangle();
    assert_eq!(mesh.triangle_normal(0), Some(DVec3::Z));
    assert!(mesh.triangle_normal(1).is_none());
}

#[test]
fn test_validate_indices() {
    let mut mesh = unit_triangle();
    assert!(mesh.validate_indices().is_ok());
    mesh.add_triangle(0, 1, 3);
    let err = mesh.validate_indices().unwrap_err();
    assert!(matches!(err, MeshError::InvalidParameter(ref m) if m.contains("triangle 1")));
}

#[test]
fn test_cube_volume_is_positive() {
    assert_relative_eq!(unit_cube().signed_volume(), 1.0, epsilon = 1e-12);
}

#[test]
fn test_translate_updates_bounding_box() {
    let mut mesh = unit_cube();
    mesh.translate(DVec3::new(10.0, 20.0, 30.0));
    let (min, max) = mesh.bounding_box().unwrap();
    assert_eq!(min, DVec3::new(10.0, 20.0, 30.0));
    assert_eq!(max, DVec3::new(11.0, 21.0, 31.0));
}

#[test]
fn test_rotation_preserves_volume() {
    let mut mesh = unit_cube();
    mesh.transform(DMat4::from_quat(DQuat::from_rotation_x(std::f64::consts::FRAC_PI_2)));
    assert_relative_eq!(mesh.signed_volume(), 1.0, epsilon = 1e-12);
    let (min, max) = mesh.bounding_box().unwrap();
    assert_relative_eq!(min.y, -1.0, epsilon = 1e-12);
    assert_relative_eq!(max.z, 1.0, epsilon = 1e-12);
}

#[test]
fn test_closed_cube_has_no_unpaired_edges() {
    assert_eq!(unit_cube().unpaired_edges(), 0);
}

#[test]
fn test_open_and_split_edges_are_reported() {
    // Lone triangle: all three edges are boundary
    assert_eq!(unit_triangle().unpaired_edges(), 3);

    // Edge a-b is split at m below but not above
    let mut mesh = Mesh::new();
    let a = mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
    let b = mesh.add_vertex(DVec3::new(2.0, 0.0, 0.0));
    let m = mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
    let top = mesh.add_vertex(DVec3::new(1.0, 0.0, 1.0));
    let bottom = mesh.add_vertex(DVec3::new(1.0, 0.0, -1.0));
    mesh.add_triangle(a, b, top);
    mesh.add_triangle(m, a, bottom);
    mesh.add_triangle(b, m, bottom);
    // a-b, a-m and m-b plus the four rim edges
    assert_eq!(mesh.unpaired_edges(), 7);
}
