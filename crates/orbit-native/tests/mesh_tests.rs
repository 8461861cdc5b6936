// Host-side tests for the native renderer's vertex and instance data.
// The crate is a binary, so the pure module is included directly.

#![allow(dead_code)]
mod mesh {
    include!("../src/mesh.rs");
}

use glam::{Mat4, Vec3};
use mesh::*;
use orbit_core::{MeshDesc, Rgba, ShapeKind};

const WHITE: Rgba = Rgba {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 0.6,
};

#[test]
fn meshes_have_expected_vertex_counts() {
    assert_eq!(cube_triangles().len(), 36);
    assert_eq!(cube_edges().len(), 24);
    assert_eq!(square_triangles().len(), 6);
    assert_eq!(square_edges().len(), 8);
    assert_eq!(link_segment().len(), 2);
}

#[test]
fn triangles_face_along_their_normals() {
    for tri in cube_triangles().chunks(3).chain(square_triangles().chunks(3)) {
        let [a, b, c] = [tri[0], tri[1], tri[2]].map(|v| Vec3::from_array(v.position));
        let winding = (b - a).cross(c - a).normalize();
        assert!((winding - Vec3::from_array(tri[0].normal)).length() < 1e-6);
    }
}

#[test]
fn line_geometry_is_unshaded_and_unit_sized() {
    for v in cube_edges().iter().chain(&square_edges()).chain(&link_segment()) {
        assert_eq!(v.normal, [0.0; 3]);
        assert!(v.position.iter().all(|c| c.abs() <= 1.0));
    }
    // Every cube edge has length one
    for pair in cube_edges().chunks(2) {
        let d = Vec3::from_array(pair[0].position) - Vec3::from_array(pair[1].position);
        assert!((d.length() - 1.0).abs() < 1e-6);
    }
}

#[test]
fn link_instance_spans_both_endpoints() {
    let from = Vec3::new(-2.0, 1.0, 0.0);
    let to = Vec3::new(3.0, 4.0, 0.5);
    let instance = link_instance(from, to, WHITE);
    let model = Mat4::from_cols_array_2d(&instance.model);
    assert!((model.transform_point3(Vec3::ZERO) - from).length() < 1e-6);
    assert!((model.transform_point3(Vec3::X) - to).length() < 1e-6);
    assert_eq!(instance.color, [1.0, 1.0, 1.0, 0.6]);
}

#[test]
fn shape_instance_places_and_scales() {
    let instance = shape_instance(Vec3::new(5.0, 0.0, 0.0), Vec3::ZERO, 2.0, WHITE);
    let model = Mat4::from_cols_array_2d(&instance.model);
    let corner = model.transform_point3(Vec3::splat(0.5));
    assert!((corner - Vec3::new(6.0, 1.0, 1.0)).length() < 1e-6);
}

#[test]
fn instance_layout_is_tightly_packed() {
    assert_eq!(std::mem::size_of::<Vertex>(), 24);
    assert_eq!(std::mem::size_of::<InstanceData>(), 80);
    assert_eq!(std::mem::size_of::<Uniforms>(), 80);
}

#[test]
fn registry_skips_unknown_ids_and_reports_once() {
    let mesh = MeshDesc {
        kind: ShapeKind::Cube,
        size: 1.5,
        transparent: true,
        fill_alpha: 0.8,
        stroke_alpha: 0.8,
        line_width: 2.0,
    };
    let mut registry = MeshRegistry::default();
    assert!(registry.is_empty());
    registry.insert(0, mesh);
    registry.insert(3, mesh);
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.lookup(3), Some(&mesh));
    assert!(!registry.missing_logged());

    // Gaps and ids past the end are both unknown
    assert!(registry.lookup(1).is_none());
    assert!(registry.missing_logged());
    assert!(registry.lookup(9).is_none());
    assert!(registry.missing_logged());
    assert_eq!(registry.lookup(0), Some(&mesh));
}
