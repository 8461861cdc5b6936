// Host-side tests for presets, configuration rules and the camera.

use glam::Vec3;
use orbit_core::constants::*;
use orbit_core::*;

#[test]
fn presets_parse_and_display() {
    assert_eq!("cubes".parse::<Preset>().unwrap(), Preset::Cubes);
    assert_eq!(" Squares ".parse::<Preset>().unwrap(), Preset::Squares);
    assert_eq!("connections".parse::<Preset>().unwrap(), Preset::Links);
    assert!(matches!("hexagons".parse::<Preset>(), Err(OrbitError::UnknownPreset(_))));
    for preset in Preset::ALL {
        assert_eq!(preset.to_string().parse::<Preset>().unwrap(), preset);
        assert_eq!(preset.config().preset, preset);
    }
    assert_eq!(Preset::default(), Preset::Cubes);
}

#[test]
fn every_preset_validates() {
    for preset in Preset::ALL {
        preset.config().validate().unwrap();
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn preset_constants_have_expected_relationships() {
    // Self-rotation is visibly faster than revolution
    assert!(CUBE_SPIN_SPEED_LIMIT > 8.0 * CUBE_ORBIT_SPEED_LIMIT);
    assert!(SQUARE_SPIN_SPEED_LIMIT > 8.0 * SQUARE_ORBIT_SPEED_LIMIT);
    assert!(LINK_SPIN_SPEED_LIMIT > 7.0 * LINK_ORBIT_SPEED_LIMIT);
    // First cube orbit clears the largest cube's diagonal
    assert!(CUBE_FIRST_ORBIT > CUBE_MAX_EXTENT);
    assert!(CUBE_MIN_SIZE < CUBE_MAX_SIZE && SQUARE_MIN_SIZE < SQUARE_MAX_SIZE);
}

#[test]
fn opacity_rules_resolve_and_clamp() {
    let fixed = OpacityRule::Fixed { fill: 0.5, stroke: 0.7 };
    assert_eq!(fixed.resolve(10.0, 100.0), (0.5, 0.7));

    let by_size = OpacityRule::FromSize {
        sizes: LINK_OPACITY_SIZES,
        opacity: LINK_OPACITY_RANGE,
    };
    let (fill, stroke) = by_size.resolve(1.5, 0.0);
    assert!((fill - 0.588).abs() < 1e-6 && fill == stroke);

    let by_radius = OpacityRule::FromRadius {
        radii: (10.0, 20.0),
        opacity: (1.0, 0.5),
    };
    assert_eq!(by_radius.resolve(0.0, 5.0), (1.0, 1.0));
    assert_eq!(by_radius.resolve(0.0, 15.0), (0.75, 0.75));
}

#[test]
fn opaque_material_ignores_opacity_rule() {
    let material = MaterialConfig {
        transparent: false,
        opacity: OpacityRule::Fixed { fill: 0.2, stroke: 0.2 },
        line_width: 1.0,
    };
    assert_eq!(material.alphas(1.0, 1.0), (1.0, 1.0));
}

#[test]
fn angle_units_convert_to_radians() {
    assert_eq!(AngleUnit::Radians.to_radians_factor(), 1.0);
    assert!((AngleUnit::Degrees.to_radians_factor() * 180.0 - std::f32::consts::PI).abs() < 1e-6);
}

#[test]
fn orthographic_camera_maps_units_to_pixels() {
    let camera = Camera::from_config(&CameraConfig::Orthographic { pixels_per_unit: 0.5 }, 800, 600);
    let centre = camera.project(Vec3::ZERO).unwrap();
    assert!((centre.x - 400.0).abs() < 1e-3 && (centre.y - 300.0).abs() < 1e-3);
    let right = camera.project(Vec3::new(100.0, 0.0, 0.0)).unwrap();
    assert!((right.x - 450.0).abs() < 1e-2);
    // World y points up, screen y points down
    let up = camera.project(Vec3::new(0.0, 100.0, 0.0)).unwrap();
    assert!((up.y - 250.0).abs() < 1e-2);
    assert_eq!(camera.pixels_per_unit_at(Vec3::ZERO), 0.5);
}

#[test]
fn perspective_camera_centres_origin_and_scales_with_distance() {
    let config = SimulationConfig::orbiting_cubes().camera;
    let mut camera = Camera::from_config(&config, 1000, 500);
    let centre = camera.project(Vec3::ZERO).unwrap();
    assert!((centre.x - 500.0).abs() < 1e-2 && (centre.y - 250.0).abs() < 1e-2);
    let near = camera.pixels_per_unit_at(Vec3::new(0.0, 0.0, 1.0));
    let far = camera.pixels_per_unit_at(Vec3::new(0.0, 0.0, -1.0));
    assert!(near > far);
    // Behind the eye
    assert!(camera.project(Vec3::new(0.0, 0.0, 40.0)).is_none());

    camera.set_viewport(0, 0);
    assert_eq!((camera.width, camera.height), (1.0, 1.0));
}
