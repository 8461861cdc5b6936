// Host-side tests for the canvas projection helpers.

#![allow(dead_code)]
mod geometry {
    include!("../src/geometry.rs");
}

use geometry::*;
use glam::{Mat4, Vec3};
use orbit_core::{Camera, CameraConfig, Rgba, SimulationConfig};

fn lighting() -> Lighting {
    Lighting {
        ambient: 0.5,
        diffuse: 0.5,
        direction: Vec3::Z,
    }
}

#[test]
fn face_winding_matches_normals() {
    for (face, normal) in CUBE_FACES.iter().zip(CUBE_FACE_NORMALS) {
        let [a, b, c, _] = face.map(|i| CUBE_CORNERS[i]);
        let winding = (b - a).cross(c - b).normalize();
        assert!((winding - normal).length() < 1e-6, "{face:?}");
    }
}

#[test]
fn transform_scales_rotates_and_translates() {
    let model = shape_transform(Vec3::new(1.0, 2.0, 0.0), Vec3::ZERO, 2.0);
    let p = model.transform_point3(Vec3::splat(0.5));
    assert!((p - Vec3::new(2.0, 3.0, 1.0)).length() < 1e-6);

    let quarter = shape_transform(Vec3::ZERO, Vec3::new(0.0, 0.0, std::f32::consts::FRAC_PI_2), 1.0);
    let p = quarter.transform_point3(Vec3::X);
    assert!((p - Vec3::Y).length() < 1e-6);
}

#[test]
fn square_projects_to_pixel_quad_in_orthographic_view() {
    let camera = Camera::from_config(&CameraConfig::Orthographic { pixels_per_unit: 0.5 }, 800, 600);
    let model = shape_transform(Vec3::ZERO, Vec3::ZERO, 100.0);
    let (points, _) =
        project_polygon(&SQUARE_CORNERS, &model, &camera.view_proj(), camera.width, camera.height).unwrap();
    // Bottom-left corner in world space lands below and left of centre on screen
    assert!((points[0].x - 375.0).abs() < 1e-2 && (points[0].y - 325.0).abs() < 1e-2);
    assert!((points[2].x - 425.0).abs() < 1e-2 && (points[2].y - 275.0).abs() < 1e-2);
}

#[test]
fn cube_faces_are_sorted_back_to_front() {
    let config = SimulationConfig::orbiting_cubes();
    let camera = Camera::from_config(&config.camera, 1280, 720);
    let model = shape_transform(Vec3::new(4.0, -3.0, 0.0), Vec3::splat(0.6), 2.0);
    let faces = cube_faces(&model, &camera.view_proj(), camera.width, camera.height, &lighting());
    assert_eq!(faces.len(), 6);
    for pair in faces.windows(2) {
        assert!(pair[0].depth >= pair[1].depth);
    }
}

#[test]
fn faces_behind_the_eye_are_dropped() {
    let config = SimulationConfig::orbiting_cubes();
    let camera = Camera::from_config(&config.camera, 1280, 720);
    let model = Mat4::from_translation(Vec3::new(0.0, 0.0, 60.0));
    let faces = cube_faces(&model, &camera.view_proj(), camera.width, camera.height, &lighting());
    assert!(faces.is_empty());
}

#[test]
fn lighting_is_double_sided() {
    let light = lighting();
    assert!((light.brightness(Vec3::Z) - 1.0).abs() < 1e-6);
    assert!((light.brightness(Vec3::NEG_Z) - 1.0).abs() < 1e-6);
    assert!((light.brightness(Vec3::X) - 0.5).abs() < 1e-6);
}

#[test]
fn css_colours_scale_and_clamp() {
    let red = Rgba {
        r: 1.0,
        g: 0.0,
        b: 0.0,
        a: 0.5,
    };
    assert_eq!(css_rgba(red, 1.0), "rgba(255,0,0,0.500)");
    assert_eq!(css_rgba(red, 0.5), "rgba(128,0,0,0.500)");
    let loud = Rgba { a: 2.0, ..red };
    assert_eq!(css_rgba(loud, 3.0), "rgba(255,0,0,1.000)");
}

#[test]
fn every_face_border_is_one_shared_edge() {
    // Each face side appears in the edge list exactly once, so strokes never overlap
    for face in CUBE_FACES {
        for k in 0..4 {
            let (a, b) = (face[k], face[(k + 1) % 4]);
            let hits = CUBE_EDGES
                .iter()
                .filter(|e| (e[0], e[1]) == (a, b) || (e[0], e[1]) == (b, a))
                .count();
            assert_eq!(hits, 1, "side {a}-{b}");
        }
    }
    for corner in 0..CUBE_CORNERS.len() {
        assert_eq!(CUBE_EDGES.iter().filter(|e| e.contains(&corner)).count(), 3);
    }
}

#[test]
fn cube_edges_project_twelve_segments_in_front_of_the_eye() {
    let config = SimulationConfig::orbiting_cubes();
    let camera = Camera::from_config(&config.camera, 1280, 720);
    let model = shape_transform(Vec3::new(-3.0, 2.0, 0.0), Vec3::splat(1.1), 1.5);
    let edges = cube_edges(&model, &camera.view_proj(), camera.width, camera.height);
    assert_eq!(edges.len(), 12);
    for [a, b] in edges {
        assert!(a.distance(b) > 0.0);
    }

    let behind = Mat4::from_translation(Vec3::new(0.0, 0.0, 60.0));
    assert!(cube_edges(&behind, &camera.view_proj(), camera.width, camera.height).is_empty());
}
