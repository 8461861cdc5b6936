// Host-side tests for the avoid-zero sampler and sampling helpers.

use orbit_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn avoid_zero_never_returns_inside_tolerance() {
    let mut rng = StdRng::seed_from_u64(7);
    let ranges = [(0.13, 0.01), (1.3, 0.5), (1.0, 0.0), (0.0065, 0.0001), (0.065, 0.009)];
    for (limit, tolerance) in ranges {
        for _ in 0..10_000 {
            let v = avoid_zero(&mut rng, limit, tolerance).unwrap();
            assert!(v.abs() >= tolerance, "{v} inside ±{tolerance}");
            assert!(v >= -limit && v < limit, "{v} outside [-{limit}, {limit})");
        }
    }
}

#[test]
fn avoid_zero_is_roughly_uniform_outside_dead_zone() {
    let mut rng = StdRng::seed_from_u64(11);
    let range = SpeedRange::new(1.0, 0.25).unwrap();
    let n = 20_000;
    let mut bins = [0usize; 4];
    for _ in 0..n {
        let v = range.sample(&mut rng);
        let bin = match v {
            v if v < -0.625 => 0,
            v if v < 0.0 => 1,
            v if v < 0.625 => 2,
            _ => 3,
        };
        bins[bin] += 1;
    }
    for (i, count) in bins.iter().enumerate() {
        let share = *count as f32 / n as f32;
        assert!((share - 0.25).abs() < 0.03, "bin {i} share {share}");
    }
}

#[test]
fn avoid_zero_fails_fast_on_bad_ranges() {
    let mut rng = StdRng::seed_from_u64(1);
    let bad = [(1.0, 1.0), (1.0, 2.0), (0.0, 0.0), (-1.0, 0.1), (1.0, -0.1), (f32::NAN, 0.1)];
    for (limit, tolerance) in bad {
        match avoid_zero(&mut rng, limit, tolerance) {
            Err(OrbitError::InvalidSpeedRange { .. }) => {}
            other => panic!("({limit}, {tolerance}) gave {other:?}"),
        }
    }
}

#[test]
fn speed_range_scaling_keeps_validity() {
    let degrees = SpeedRange::new(1.3, 0.5).unwrap();
    let radians = degrees.scaled(std::f32::consts::PI / 180.0).unwrap();
    assert!((radians.limit() - 1.3f32.to_radians()).abs() < 1e-6);
    assert!((radians.tolerance() - 0.5f32.to_radians()).abs() < 1e-6);
    assert!(radians.validate().is_ok());
}

#[test]
fn map_linear_matches_known_points() {
    assert_eq!(map_linear(0.0, 0.0, 10.0, 0.0, 1.0), 0.0);
    assert_eq!(map_linear(5.0, 0.0, 10.0, 0.0, 1.0), 0.5);
    // Reversed source range
    let pi = std::f32::consts::PI;
    assert!((map_linear(pi, pi, pi / 2.0, 0.0, 0.5)).abs() < 1e-6);
    assert!((map_linear(pi / 2.0, pi, pi / 2.0, 0.0, 0.5) - 0.5).abs() < 1e-6);
    // Unclamped outside the source range
    assert_eq!(map_linear(20.0, 0.0, 10.0, 0.0, 1.0), 2.0);
}

#[test]
fn rand_float_stays_in_range_and_handles_empty_range() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..1_000 {
        let v = rand_float(&mut rng, 45.0, 90.0);
        assert!((45.0..90.0).contains(&v));
    }
    assert_eq!(rand_float(&mut rng, 2.0, 2.0), 2.0);
    assert_eq!(rand_float(&mut rng, 3.0, 1.0), 3.0);
}
