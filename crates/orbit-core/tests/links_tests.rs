// Host-side tests for proximity links between shapes at known positions.

use glam::Vec3;
use orbit_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

// Size 2 squares reach √2 from their centre, so two of them link below 2√2 ≈ 2.83
fn square_at(position: Vec3) -> OrbitingShape {
    let config = SimulationConfig::linked_squares();
    let blender = ColorBlender::new(config.palette, 0.0);
    let mut rng = StdRng::seed_from_u64(7);
    let placement = OrbitPlacement {
        position,
        radius: position.truncate().length(),
        tier: 0,
    };
    OrbitingShape::from_parts(&config.shape, 2.0, placement, 0.0, 0.01, 0.1, &blender, &mut rng)
}

#[test]
fn pairs_within_summed_reach_are_linked() {
    let shapes = [
        square_at(Vec3::new(5.0, 0.0, 0.0)),
        square_at(Vec3::new(7.8, 0.0, 0.0)),
        square_at(Vec3::new(15.0, 0.0, 0.0)),
    ];
    // 2.8 apart: more than one reach, less than the sum of both
    assert!(2.8 > shapes[0].bounding_radius());
    assert_eq!(overlapping_pairs(&shapes), vec![(0, 1)]);
}

#[test]
fn pairs_just_beyond_summed_reach_are_not_linked() {
    let shapes = [
        square_at(Vec3::new(5.0, 0.0, 0.0)),
        square_at(Vec3::new(7.86, 0.0, 0.0)),
    ];
    let reach = shapes[0].bounding_radius() + shapes[1].bounding_radius();
    assert!(shapes[0].position().distance(shapes[1].position()) > reach);
    assert!(overlapping_pairs(&shapes).is_empty());
}

#[test]
fn distance_includes_depth() {
    // 1.5 apart in the plane, but √8.5 apart in space
    let shapes = [
        square_at(Vec3::new(5.0, 0.0, 0.0)),
        square_at(Vec3::new(6.5, 0.0, 2.5)),
    ];
    assert!(overlapping_pairs(&shapes).is_empty());
}

#[test]
fn refresh_reports_links_forming_and_breaking() {
    let mut links = LinkSet::new();
    let apart = [
        square_at(Vec3::new(5.0, 0.0, 0.0)),
        square_at(Vec3::new(0.0, 9.0, 0.0)),
    ];
    assert!(links.refresh(&apart).is_empty());
    assert!(links.is_empty());

    let close = [
        square_at(Vec3::new(5.0, 0.0, 0.0)),
        square_at(Vec3::new(5.0, 2.0, 0.0)),
    ];
    let changes = links.refresh(&close);
    assert_eq!(changes.added, vec![(0, 1)]);
    assert!(changes.removed.is_empty());
    assert!(links.contains(1, 0));

    // Unchanged positions report nothing
    assert!(links.refresh(&close).is_empty());

    let changes = links.refresh(&apart);
    assert!(changes.added.is_empty());
    assert_eq!(changes.removed, vec![(0, 1)]);
    assert!(links.is_empty());
}
