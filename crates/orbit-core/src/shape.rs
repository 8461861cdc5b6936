use crate::color::{ColorBlender, Rgb, Rgba};
use crate::config::{ShapeConfig, ShapeKind};
use crate::error::OrbitResult;
use crate::orbit::{OrbitPlacement, OrbitSampler};
use crate::random::{rand_float, SpeedRange};
use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

/// Index of a shape inside its [`crate::Simulation`], stable for the whole run.
pub type ShapeId = usize;

/// What a back end needs to create the primitive for a shape once.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshDesc {
    pub kind: ShapeKind,
    pub size: f32,
    pub transparent: bool,
    pub fill_alpha: f32,
    pub stroke_alpha: f32,
    pub line_width: f32,
}

/// Per-frame snapshot handed to a back end for drawing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapePose {
    pub kind: ShapeKind,
    pub position: Vec3,
    /// Euler angles in radians, applied in XYZ order.
    pub spin: Vec3,
    pub size: f32,
    pub fill: Rgba,
    pub stroke: Rgba,
    pub line_width: f32,
}

/// One cube or square revolving around the shared origin.
#[derive(Clone, Debug)]
pub struct OrbitingShape {
    kind: ShapeKind,
    size: f32,
    position: Vec3,
    radius: f32,
    tier: usize,
    spin: Vec3,
    orbit_speed: f32,
    spin_speed: f32,
    orbit_angle: f32,
    fill: Rgb,
    stroke: Rgb,
    fill_alpha: f32,
    stroke_alpha: f32,
    transparent: bool,
    line_width: f32,
}

impl OrbitingShape {
    /// Assemble a shape from already sampled values and colour it once.
    /// The orbit radius is the xy distance of `placement.position`.
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts<R: Rng + ?Sized>(
        config: &ShapeConfig,
        size: f32,
        placement: OrbitPlacement,
        spin_seed: f32,
        orbit_speed: f32,
        spin_speed: f32,
        blender: &ColorBlender,
        rng: &mut R,
    ) -> Self {
        let OrbitPlacement { position, tier, .. } = placement;
        let radius = position.truncate().length();
        let spin = match config.kind {
            ShapeKind::Cube => Vec3::splat(spin_seed),
            ShapeKind::Square => Vec3::new(0.0, 0.0, spin_seed),
        };
        let (fill_alpha, stroke_alpha) = config.material.alphas(size, radius);
        let mut shape = Self {
            kind: config.kind,
            size,
            position,
            radius,
            tier,
            spin,
            orbit_speed,
            spin_speed,
            orbit_angle: position.y.atan2(position.x),
            fill: Rgb::default(),
            stroke: Rgb::default(),
            fill_alpha,
            stroke_alpha,
            transparent: config.material.transparent,
            line_width: config.material.line_width,
        };
        shape.recolor(blender, rng);
        shape
    }

    /// Revolve around the origin by `orbit_speed` radians, keeping the distance.
    pub fn orbit(&mut self) {
        let (sin, cos) = self.orbit_speed.sin_cos();
        let Vec3 { x, y, z } = self.position;
        self.position = Vec3::new(x * cos + y * sin, y * cos - x * sin, z);
        self.orbit_angle = self.position.y.atan2(self.position.x);
    }

    /// Spin about the shape's own centre.
    pub fn rotate(&mut self) {
        match self.kind {
            ShapeKind::Cube => self.spin += Vec3::splat(self.spin_speed),
            ShapeKind::Square => self.spin.z += self.spin_speed,
        }
    }

    /// Re-derive fill and stroke from the current orbit angle. Opacity is untouched.
    pub fn recolor<R: Rng + ?Sized>(&mut self, blender: &ColorBlender, rng: &mut R) {
        let (fill, stroke) = blender.recolor(self.orbit_angle, rng);
        self.fill = fill;
        self.stroke = stroke;
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Distance from the origin at creation time.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn tier(&self) -> usize {
        self.tier
    }

    pub fn spin(&self) -> Vec3 {
        self.spin
    }

    pub fn orbit_speed(&self) -> f32 {
        self.orbit_speed
    }

    pub fn spin_speed(&self) -> f32 {
        self.spin_speed
    }

    /// Polar angle of the position in `[-π, π]`.
    pub fn orbit_angle(&self) -> f32 {
        self.orbit_angle
    }

    pub fn fill(&self) -> Rgba {
        self.fill.with_alpha(self.fill_alpha)
    }

    pub fn stroke(&self) -> Rgba {
        self.stroke.with_alpha(self.stroke_alpha)
    }

    /// Radius of the circle (square) or sphere (cube) enclosing the shape.
    pub fn bounding_radius(&self) -> f32 {
        let diagonal = match self.kind {
            ShapeKind::Square => std::f32::consts::SQRT_2,
            ShapeKind::Cube => 3f32.sqrt(),
        };
        diagonal * self.size * 0.5
    }

    pub fn mesh(&self) -> MeshDesc {
        MeshDesc {
            kind: self.kind,
            size: self.size,
            transparent: self.transparent,
            fill_alpha: self.fill_alpha,
            stroke_alpha: self.stroke_alpha,
            line_width: self.line_width,
        }
    }

    pub fn pose(&self) -> ShapePose {
        ShapePose {
            kind: self.kind,
            position: self.position,
            spin: self.spin,
            size: self.size,
            fill: self.fill(),
            stroke: self.stroke(),
            line_width: self.line_width,
        }
    }
}

/// Builds shapes from one [`ShapeConfig`], with speed ranges already in radians.
#[derive(Clone, Debug)]
pub struct ShapeFactory {
    config: ShapeConfig,
    sampler: OrbitSampler,
    orbit_speed: SpeedRange,
    spin_speed: SpeedRange,
}

impl ShapeFactory {
    pub fn new(config: ShapeConfig, sampler: OrbitSampler) -> OrbitResult<Self> {
        config.validate()?;
        let (orbit_speed, spin_speed) = config.speeds_in_radians()?;
        Ok(Self {
            config,
            sampler,
            orbit_speed,
            spin_speed,
        })
    }

    pub fn sampler(&self) -> &OrbitSampler {
        &self.sampler
    }

    pub fn spawn<R: Rng + ?Sized>(&self, blender: &ColorBlender, rng: &mut R) -> OrbitingShape {
        let size = rand_float(rng, self.config.min_size, self.config.max_size);
        let placement = self.sampler.sample_position(rng);
        let spin_seed = rand_float(rng, 0.0, TAU);
        let orbit_speed = self.orbit_speed.sample(rng);
        let spin_speed = self.spin_speed.sample(rng);
        OrbitingShape::from_parts(
            &self.config,
            size,
            placement,
            spin_seed,
            orbit_speed,
            spin_speed,
            blender,
            rng,
        )
    }
}
