//! Colour values and the angle-driven blend used to tint every shape.
//!
//! Colours are plain `Copy` values; blending always returns a new colour and
//! never mutates its inputs.

use crate::random::{map_linear, rand_float};
use rand::Rng;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

/// Linear RGB colour with components in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// From a `0xRRGGBB` literal.
    pub fn from_hex(hex: u32) -> Self {
        let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
        Self::new(channel(16), channel(8), channel(0))
    }

    /// Interpolate towards `other`; `t` is clamped to `[0, 1]`.
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        Rgb::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
        )
    }

    pub fn with_alpha(self, a: f32) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    pub fn scaled(self, k: f32) -> Rgb {
        Rgb::new(
            (self.r * k).clamp(0.0, 1.0),
            (self.g * k).clamp(0.0, 1.0),
            (self.b * k).clamp(0.0, 1.0),
        )
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// 8-bit channels, rounded.
    pub fn to_u8(self) -> [u8; 3] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b)]
    }
}

/// Colour plus opacity, as handed to the back ends.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub fn rgb(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// The two base colours for fills and their outline counterparts.
///
/// `*_a` is the colour at angle 0 (right side), `*_b` the colour at angle π.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub fill_a: Rgb,
    pub fill_b: Rgb,
    pub stroke_a: Rgb,
    pub stroke_b: Rgb,
}

/// Which side of the vertical diameter an angle falls on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hemisphere {
    Right,
    Left,
}

/// Wrap any angle into `(-π, π]`.
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    let mut a = angle.rem_euclid(TAU);
    if a > PI {
        a -= TAU;
    }
    a
}

/// Result of [`ColorBlender::shade`] before jitter is applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shade {
    pub hemisphere: Hemisphere,
    /// Fraction in `[0, 0.5]` moved from this side's colour towards the other.
    pub fraction: f32,
}

/// Maps an orbit angle to fill and stroke colours.
///
/// The magnitude of the wrapped angle picks the half: `|θ| >= π/2` is the
/// left half and starts from the `b` colours, anything else starts from the
/// `a` colours. Within a half the fraction runs linearly from 0 at the
/// horizontal axis to 0.5 at the vertical one, so both halves meet at the
/// midpoint colour and the blend is continuous.
#[derive(Clone, Copy, Debug)]
pub struct ColorBlender {
    pub palette: Palette,
    /// Half-width of the per-frame random offset added to the fraction.
    pub jitter: f32,
}

impl ColorBlender {
    pub fn new(palette: Palette, jitter: f32) -> Self {
        Self {
            palette,
            jitter: jitter.max(0.0),
        }
    }

    pub fn shade(angle: f32) -> Shade {
        let a = wrap_angle(angle).abs();
        if a >= FRAC_PI_2 {
            Shade {
                hemisphere: Hemisphere::Left,
                fraction: map_linear(a, PI, FRAC_PI_2, 0.0, 0.5),
            }
        } else {
            Shade {
                hemisphere: Hemisphere::Right,
                fraction: map_linear(a, 0.0, FRAC_PI_2, 0.0, 0.5),
            }
        }
    }

    /// Blend with explicit offsets for fill and stroke.
    pub fn blend(&self, angle: f32, fill_offset: f32, stroke_offset: f32) -> (Rgb, Rgb) {
        let shade = Self::shade(angle);
        let p = &self.palette;
        let (fill_this, fill_other, stroke_this, stroke_other) = match shade.hemisphere {
            Hemisphere::Left => (p.fill_b, p.fill_a, p.stroke_b, p.stroke_a),
            Hemisphere::Right => (p.fill_a, p.fill_b, p.stroke_a, p.stroke_b),
        };
        (
            fill_this.lerp(fill_other, shade.fraction + fill_offset),
            stroke_this.lerp(stroke_other, shade.fraction + stroke_offset),
        )
    }

    /// Fill and stroke for `angle`, each with its own jitter draw.
    pub fn recolor<R: Rng + ?Sized>(&self, angle: f32, rng: &mut R) -> (Rgb, Rgb) {
        let fill_offset = rand_float(rng, -self.jitter, self.jitter);
        let stroke_offset = rand_float(rng, -self.jitter, self.jitter);
        self.blend(angle, fill_offset, stroke_offset)
    }
}
