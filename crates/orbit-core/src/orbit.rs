//! Placement of shapes on fuzzy concentric rings.

use crate::error::{OrbitError, OrbitResult};
use crate::random::rand_float;
use glam::Vec3;
use rand::Rng;
use smallvec::SmallVec;
use std::f32::consts::TAU;

/// One ring: picked when the uniform `chance` draw is below `threshold`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitBand {
    pub threshold: f32,
    pub radius: f32,
}

/// Weighted set of nominal orbit radii, checked at construction.
///
/// Thresholds are cumulative and strictly increasing, the last one is exactly
/// `1.0`, and every radius is positive.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitBands {
    bands: SmallVec<[OrbitBand; 4]>,
}

impl OrbitBands {
    pub fn new(bands: &[OrbitBand]) -> OrbitResult<Self> {
        let Some(last) = bands.last() else {
            return Err(OrbitError::InvalidBands("at least one band is required".into()));
        };
        let mut prev = 0.0_f32;
        for (i, band) in bands.iter().enumerate() {
            if !(band.threshold > prev && band.threshold <= 1.0) {
                return Err(OrbitError::InvalidBands(format!(
                    "band {i} threshold {} must be in ({prev}, 1.0]",
                    band.threshold
                )));
            }
            if !(band.radius.is_finite() && band.radius > 0.0) {
                return Err(OrbitError::InvalidBands(format!(
                    "band {i} radius {} must be positive",
                    band.radius
                )));
            }
            prev = band.threshold;
        }
        if last.threshold != 1.0 {
            return Err(OrbitError::InvalidBands(format!(
                "last threshold is {}, expected 1.0",
                last.threshold
            )));
        }
        Ok(Self {
            bands: bands.iter().copied().collect(),
        })
    }

    /// Unchecked form for preset tables; re-checked by `SimulationConfig::validate`.
    pub(crate) fn from_constants(bands: &[OrbitBand]) -> Self {
        Self {
            bands: bands.iter().copied().collect(),
        }
    }

    /// Build from parallel threshold / radius lists.
    pub fn from_parts(thresholds: &[f32], radii: &[f32]) -> OrbitResult<Self> {
        if thresholds.len() != radii.len() {
            return Err(OrbitError::InvalidBands(format!(
                "{} thresholds but {} radii",
                thresholds.len(),
                radii.len()
            )));
        }
        let bands: SmallVec<[OrbitBand; 4]> = thresholds
            .iter()
            .zip(radii)
            .map(|(&threshold, &radius)| OrbitBand { threshold, radius })
            .collect();
        Self::new(&bands)
    }

    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    pub fn bands(&self) -> &[OrbitBand] {
        &self.bands
    }

    pub fn radius(&self, tier: usize) -> Option<f32> {
        self.bands.get(tier).map(|b| b.radius)
    }

    pub fn max_radius(&self) -> f32 {
        self.bands.iter().map(|b| b.radius).fold(0.0, f32::max)
    }

    /// Index of the first band whose threshold exceeds `chance`.
    pub fn tier_for(&self, chance: f32) -> usize {
        self.bands
            .iter()
            .position(|b| chance < b.threshold)
            .unwrap_or(self.bands.len() - 1)
    }

    pub fn choose_tier<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        self.tier_for(rng.gen::<f32>())
    }

    pub fn choose_radius<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        self.bands[self.choose_tier(rng)].radius
    }
}

/// Where a freshly created shape starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitPlacement {
    pub position: Vec3,
    pub radius: f32,
    pub tier: usize,
}

/// Samples starting positions on the configured bands.
#[derive(Clone, Debug)]
pub struct OrbitSampler {
    pub bands: OrbitBands,
    /// Upper bound of the positive radius jitter added to the nominal radius.
    pub radius_jitter: f32,
    /// Half-width of the z offset; zero keeps every shape on the z = 0 plane.
    pub depth_jitter: f32,
}

impl OrbitSampler {
    pub fn new(bands: OrbitBands, radius_jitter: f32, depth_jitter: f32) -> OrbitResult<Self> {
        if !(radius_jitter.is_finite() && radius_jitter >= 0.0) {
            return Err(OrbitError::InvalidConfig(format!(
                "radius jitter {radius_jitter} must be >= 0"
            )));
        }
        if !(depth_jitter.is_finite() && depth_jitter >= 0.0) {
            return Err(OrbitError::InvalidConfig(format!(
                "depth jitter {depth_jitter} must be >= 0"
            )));
        }
        Ok(Self {
            bands,
            radius_jitter,
            depth_jitter,
        })
    }

    pub fn sample_position<R: Rng + ?Sized>(&self, rng: &mut R) -> OrbitPlacement {
        let angle = rand_float(rng, 0.0, TAU);
        let chance = rng.gen::<f32>();
        let jitter = rand_float(rng, 0.0, self.radius_jitter);
        let mut placement = self.sample_position_with(angle, chance, jitter);
        placement.position.z = rand_float(rng, -self.depth_jitter, self.depth_jitter);
        placement
    }

    /// Deterministic placement from explicit draws; `jitter` is clamped to the configured bound.
    pub fn sample_position_with(&self, angle: f32, chance: f32, jitter: f32) -> OrbitPlacement {
        let tier = self.bands.tier_for(chance);
        let radius = self.bands.bands()[tier].radius + jitter.clamp(0.0, self.radius_jitter);
        OrbitPlacement {
            position: Vec3::new(radius * angle.cos(), radius * angle.sin(), 0.0),
            radius,
            tier,
        }
    }
}
