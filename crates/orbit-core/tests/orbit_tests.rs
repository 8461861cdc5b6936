// Host-side tests for orbit band selection and initial placement.

use orbit_core::constants::{SQUARE_BANDS, SQUARE_RADIUS_JITTER};
use orbit_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn square_bands() -> OrbitBands {
    OrbitBands::new(&SQUARE_BANDS).unwrap()
}

#[test]
fn tier_matches_cumulative_threshold_bucket() {
    let bands = square_bands();
    assert_eq!(bands.tier_for(0.0), 0);
    assert_eq!(bands.tier_for(0.10), 0);
    assert_eq!(bands.tier_for(0.18), 1);
    assert_eq!(bands.tier_for(0.49), 1);
    assert_eq!(bands.tier_for(0.60), 2);
    assert_eq!(bands.tier_for(0.78), 3);
    assert_eq!(bands.tier_for(0.999), 3);
    assert_eq!(bands.tier_for(1.0), 3);
}

#[test]
fn tier_frequencies_follow_weights() {
    let bands = square_bands();
    let mut rng = StdRng::seed_from_u64(5);
    let n = 20_000;
    let mut counts = [0usize; 4];
    for _ in 0..n {
        counts[bands.choose_tier(&mut rng)] += 1;
    }
    let expected = [0.18, 0.32, 0.28, 0.22];
    for i in 0..4 {
        let share = counts[i] as f32 / n as f32;
        assert!((share - expected[i]).abs() < 0.02, "tier {i}: {share}");
    }
}

#[test]
fn bands_reject_bad_tables() {
    assert!(OrbitBands::new(&[]).is_err());
    assert!(OrbitBands::from_parts(&[0.5, 0.4, 1.0], &[1.0, 2.0, 3.0]).is_err());
    assert!(OrbitBands::from_parts(&[0.5, 0.9], &[1.0, 2.0]).is_err());
    assert!(OrbitBands::from_parts(&[0.5, 1.0], &[0.0, 2.0]).is_err());
    assert!(OrbitBands::from_parts(&[0.5, 1.0], &[1.0]).is_err());
    assert!(OrbitBands::from_parts(&[0.0, 1.0], &[1.0, 2.0]).is_err());
    assert!(OrbitBands::from_parts(&[1.0], &[4.0]).is_ok());
}

#[test]
fn deterministic_placement_uses_angle_tier_and_jitter() {
    let sampler = OrbitSampler::new(square_bands(), SQUARE_RADIUS_JITTER, 0.0).unwrap();
    let p = sampler.sample_position_with(0.0, 0.10, 5.0);
    assert_eq!(p.tier, 0);
    assert!((p.radius - 205.0).abs() < 1e-4);
    assert!((p.position - glam::Vec3::new(205.0, 0.0, 0.0)).length() < 1e-3);

    let p = sampler.sample_position_with(std::f32::consts::FRAC_PI_2, 0.60, 0.0);
    assert_eq!(p.tier, 2);
    assert!(p.position.x.abs() < 1e-3);
    assert!((p.position.y - 600.0).abs() < 1e-3);

    // Jitter beyond the configured bound is clamped
    let p = sampler.sample_position_with(0.0, 0.9, 1_000.0);
    assert!((p.radius - (800.0 + SQUARE_RADIUS_JITTER)).abs() < 1e-3);
}

#[test]
fn sampled_positions_sit_on_fuzzy_rings() {
    let sampler = OrbitSampler::new(square_bands(), SQUARE_RADIUS_JITTER, 0.01).unwrap();
    let mut rng = StdRng::seed_from_u64(9);
    for _ in 0..2_000 {
        let p = sampler.sample_position(&mut rng);
        let nominal = sampler.bands.radius(p.tier).unwrap();
        assert!(p.radius >= nominal && p.radius < nominal + SQUARE_RADIUS_JITTER);
        let planar = p.position.truncate().length();
        assert!(planar > 0.0);
        assert!((planar - p.radius).abs() < 1e-2, "{planar} vs {}", p.radius);
        assert!(p.position.z.abs() <= 0.01);
    }
}

#[test]
fn sampler_rejects_negative_jitter() {
    assert!(OrbitSampler::new(square_bands(), -1.0, 0.0).is_err());
    assert!(OrbitSampler::new(square_bands(), 1.0, -0.5).is_err());
}
