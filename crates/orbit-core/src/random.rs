//! Random sampling helpers shared by the orbit and colour code.

use crate::error::{OrbitError, OrbitResult};
use rand::Rng;

/// Uniform float in `[low, high)`. Returns `low` for an empty range.
#[inline]
pub fn rand_float<R: Rng + ?Sized>(rng: &mut R, low: f32, high: f32) -> f32 {
    if high > low {
        rng.gen_range(low..high)
    } else {
        low
    }
}

/// Linear mapping from `[from_start, from_end]` to `[to_start, to_end]`, unclamped.
#[inline]
pub fn map_linear(x: f32, from_start: f32, from_end: f32, to_start: f32, to_end: f32) -> f32 {
    to_start + (x - from_start) * (to_end - to_start) / (from_end - from_start)
}

/// Draw from `[-limit, limit)` while rejecting anything inside `(-tolerance, tolerance)`.
///
/// Used for angular speeds so that no shape ever looks frozen. Fails fast when
/// the rejection band would swallow the whole range.
pub fn avoid_zero<R: Rng + ?Sized>(rng: &mut R, limit: f32, tolerance: f32) -> OrbitResult<f32> {
    let range = SpeedRange::new(limit, tolerance)?;
    Ok(range.sample(rng))
}

/// A validated `(limit, tolerance)` pair for [`avoid_zero`] sampling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpeedRange {
    limit: f32,
    tolerance: f32,
}

impl SpeedRange {
    pub fn new(limit: f32, tolerance: f32) -> OrbitResult<Self> {
        let valid = limit.is_finite()
            && tolerance.is_finite()
            && limit > 0.0
            && tolerance >= 0.0
            && tolerance < limit;
        if !valid {
            return Err(OrbitError::InvalidSpeedRange { limit, tolerance });
        }
        Ok(Self { limit, tolerance })
    }

    /// Unchecked form for preset tables; [`SpeedRange::validate`] runs before any sampling.
    pub(crate) const fn from_constants(limit: f32, tolerance: f32) -> Self {
        Self { limit, tolerance }
    }

    pub fn validate(&self) -> OrbitResult<()> {
        Self::new(self.limit, self.tolerance).map(|_| ())
    }

    pub fn limit(&self) -> f32 {
        self.limit
    }

    pub fn tolerance(&self) -> f32 {
        self.tolerance
    }

    /// Same range with both bounds multiplied by `factor` (unit conversion).
    pub fn scaled(&self, factor: f32) -> OrbitResult<Self> {
        Self::new(self.limit * factor, self.tolerance * factor)
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        loop {
            let value = rng.gen_range(-self.limit..self.limit);
            if value <= -self.tolerance || value >= self.tolerance {
                return value;
            }
        }
    }
}
