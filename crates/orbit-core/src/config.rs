//! Typed configuration for a simulation run, plus the named presets.

use crate::color::{Palette, Rgb, Rgba};
use crate::constants::*;
use crate::error::{OrbitError, OrbitResult};
use crate::orbit::OrbitBands;
use crate::random::{map_linear, SpeedRange};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    /// Flat square spinning about the view axis only.
    Square,
    /// Cube spinning about all three axes at once.
    Cube,
}

/// Unit the speed ranges are written in. Shapes always store radians.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AngleUnit {
    Degrees,
    Radians,
}

impl AngleUnit {
    pub fn to_radians_factor(self) -> f32 {
        match self {
            AngleUnit::Degrees => std::f32::consts::PI / 180.0,
            AngleUnit::Radians => 1.0,
        }
    }
}

/// How a shape's opacity is fixed at creation time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OpacityRule {
    Fixed { fill: f32, stroke: f32 },
    /// Map the initial orbit radius from `radii` onto `opacity`.
    FromRadius { radii: (f32, f32), opacity: (f32, f32) },
    /// Map the shape size from `sizes` onto `opacity`.
    FromSize { sizes: (f32, f32), opacity: (f32, f32) },
}

impl OpacityRule {
    /// `(fill_alpha, stroke_alpha)`, both clamped to `[0, 1]`.
    pub fn resolve(&self, size: f32, radius: f32) -> (f32, f32) {
        let (fill, stroke) = match *self {
            OpacityRule::Fixed { fill, stroke } => (fill, stroke),
            OpacityRule::FromRadius { radii, opacity } => {
                let a = map_linear(radius, radii.0, radii.1, opacity.0, opacity.1);
                (a, a)
            }
            OpacityRule::FromSize { sizes, opacity } => {
                let a = map_linear(size, sizes.0, sizes.1, opacity.0, opacity.1);
                (a, a)
            }
        };
        (fill.clamp(0.0, 1.0), stroke.clamp(0.0, 1.0))
    }

    fn validate(&self) -> OrbitResult<()> {
        let degenerate = |r: (f32, f32)| !(r.0.is_finite() && r.1.is_finite()) || r.0 == r.1;
        match *self {
            OpacityRule::Fixed { fill, stroke } => {
                if !(0.0..=1.0).contains(&fill) || !(0.0..=1.0).contains(&stroke) {
                    return Err(OrbitError::InvalidConfig(format!(
                        "fixed opacity ({fill}, {stroke}) outside [0, 1]"
                    )));
                }
            }
            OpacityRule::FromRadius { radii: from, .. } | OpacityRule::FromSize { sizes: from, .. } => {
                if degenerate(from) {
                    return Err(OrbitError::InvalidConfig(format!(
                        "opacity source range {from:?} is empty"
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Material options for both the fill and the outline of a shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaterialConfig {
    /// When false every alpha is forced to 1.
    pub transparent: bool,
    pub opacity: OpacityRule,
    pub line_width: f32,
}

impl MaterialConfig {
    pub fn alphas(&self, size: f32, radius: f32) -> (f32, f32) {
        if self.transparent {
            self.opacity.resolve(size, radius)
        } else {
            (1.0, 1.0)
        }
    }

    pub fn validate(&self) -> OrbitResult<()> {
        if !(self.line_width.is_finite() && self.line_width > 0.0) {
            return Err(OrbitError::InvalidConfig(format!(
                "line width {} must be positive",
                self.line_width
            )));
        }
        self.opacity.validate()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeConfig {
    pub kind: ShapeKind,
    pub min_size: f32,
    pub max_size: f32,
    pub orbit_speed: SpeedRange,
    pub spin_speed: SpeedRange,
    pub unit: AngleUnit,
    pub material: MaterialConfig,
}

impl ShapeConfig {
    /// Orbit and spin ranges converted to radians per frame.
    pub fn speeds_in_radians(&self) -> OrbitResult<(SpeedRange, SpeedRange)> {
        let k = self.unit.to_radians_factor();
        Ok((self.orbit_speed.scaled(k)?, self.spin_speed.scaled(k)?))
    }

    pub fn validate(&self) -> OrbitResult<()> {
        if !(self.min_size.is_finite() && self.min_size > 0.0 && self.max_size >= self.min_size) {
            return Err(OrbitError::InvalidConfig(format!(
                "size range [{}, {}) is invalid",
                self.min_size, self.max_size
            )));
        }
        self.orbit_speed.validate()?;
        self.spin_speed.validate()?;
        self.speeds_in_radians()?;
        self.material.validate()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinkConfig {
    pub enabled: bool,
    pub color: Rgba,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            color: link_color(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CameraConfig {
    Perspective {
        eye_z: f32,
        fovy_degrees: f32,
        znear: f32,
        zfar: f32,
    },
    Orthographic {
        pixels_per_unit: f32,
    },
}

impl CameraConfig {
    fn validate(&self) -> OrbitResult<()> {
        let ok = match *self {
            CameraConfig::Perspective {
                eye_z,
                fovy_degrees,
                znear,
                zfar,
            } => eye_z > 0.0 && fovy_degrees > 0.0 && fovy_degrees < 180.0 && znear > 0.0 && zfar > znear,
            CameraConfig::Orthographic { pixels_per_unit } => pixels_per_unit > 0.0,
        };
        if ok {
            Ok(())
        } else {
            Err(OrbitError::InvalidConfig(format!("camera {self:?} is invalid")))
        }
    }
}

/// Named bundles of constants, one per original sketch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Preset {
    #[default]
    Cubes,
    Squares,
    Links,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Cubes, Preset::Squares, Preset::Links];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Cubes => "cubes",
            Preset::Squares => "squares",
            Preset::Links => "links",
        }
    }

    pub fn config(self) -> SimulationConfig {
        match self {
            Preset::Cubes => SimulationConfig::orbiting_cubes(),
            Preset::Squares => SimulationConfig::orbiting_squares(),
            Preset::Links => SimulationConfig::linked_squares(),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = OrbitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cubes" | "cube" => Ok(Preset::Cubes),
            "squares" | "square" => Ok(Preset::Squares),
            "links" | "connections" => Ok(Preset::Links),
            other => Err(OrbitError::UnknownPreset(other.to_string())),
        }
    }
}

/// Everything needed to set up a run.
#[derive(Clone, Debug)]
pub struct SimulationConfig {
    pub preset: Preset,
    pub population: usize,
    pub shape: ShapeConfig,
    pub bands: OrbitBands,
    pub radius_jitter: f32,
    pub depth_jitter: f32,
    pub palette: Palette,
    pub color_jitter: f32,
    pub links: LinkConfig,
    pub background: Rgb,
    pub camera: CameraConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::orbiting_cubes()
    }
}

impl SimulationConfig {
    /// Translucent cubes on four wide rings, viewed in perspective.
    pub fn orbiting_cubes() -> Self {
        Self {
            preset: Preset::Cubes,
            population: DEFAULT_POPULATION,
            shape: ShapeConfig {
                kind: ShapeKind::Cube,
                min_size: CUBE_MIN_SIZE,
                max_size: CUBE_MAX_SIZE,
                orbit_speed: SpeedRange::from_constants(
                    CUBE_ORBIT_SPEED_LIMIT,
                    CUBE_ORBIT_SPEED_TOLERANCE,
                ),
                spin_speed: SpeedRange::from_constants(
                    CUBE_SPIN_SPEED_LIMIT,
                    CUBE_SPIN_SPEED_TOLERANCE,
                ),
                unit: AngleUnit::Degrees,
                material: MaterialConfig {
                    transparent: true,
                    opacity: OpacityRule::FromRadius {
                        radii: CUBE_OPACITY_RADII,
                        opacity: CUBE_OPACITY_RANGE,
                    },
                    line_width: 1.0,
                },
            },
            bands: OrbitBands::from_constants(&CUBE_BANDS),
            radius_jitter: CUBE_RADIUS_JITTER,
            depth_jitter: 0.0,
            palette: bright_fill_palette(),
            color_jitter: COLOR_JITTER,
            links: LinkConfig::default(),
            background: Rgb::from_hex(BACKGROUND),
            camera: CameraConfig::Perspective {
                eye_z: CUBE_CAMERA_Z,
                fovy_degrees: CUBE_CAMERA_FOVY_DEG,
                znear: CUBE_CAMERA_ZNEAR,
                zfar: CUBE_CAMERA_ZFAR,
            },
        }
    }

    /// Pixel-sized squares with dark fills and bright outlines, flat view.
    pub fn orbiting_squares() -> Self {
        Self {
            preset: Preset::Squares,
            population: DEFAULT_POPULATION,
            shape: ShapeConfig {
                kind: ShapeKind::Square,
                min_size: SQUARE_MIN_SIZE,
                max_size: SQUARE_MAX_SIZE,
                orbit_speed: SpeedRange::from_constants(
                    SQUARE_ORBIT_SPEED_LIMIT,
                    SQUARE_ORBIT_SPEED_TOLERANCE,
                ),
                spin_speed: SpeedRange::from_constants(
                    SQUARE_SPIN_SPEED_LIMIT,
                    SQUARE_SPIN_SPEED_TOLERANCE,
                ),
                unit: AngleUnit::Radians,
                material: MaterialConfig {
                    transparent: true,
                    opacity: OpacityRule::Fixed {
                        fill: SQUARE_FILL_OPACITY,
                        stroke: SQUARE_STROKE_OPACITY,
                    },
                    line_width: LINE_WIDTH,
                },
            },
            bands: OrbitBands::from_constants(&SQUARE_BANDS),
            radius_jitter: SQUARE_RADIUS_JITTER,
            depth_jitter: 0.0,
            palette: Palette {
                fill_a: Rgb::from_hex(DK_BLUE),
                fill_b: Rgb::from_hex(DK_GREEN),
                stroke_a: Rgb::from_hex(BLUE),
                stroke_b: Rgb::from_hex(GREEN),
            },
            color_jitter: COLOR_JITTER,
            links: LinkConfig::default(),
            background: Rgb::from_hex(BACKGROUND),
            camera: CameraConfig::Orthographic {
                pixels_per_unit: SQUARE_PIXELS_PER_UNIT,
            },
        }
    }

    /// Squares in world units, joined by lines while their bounds overlap.
    pub fn linked_squares() -> Self {
        Self {
            preset: Preset::Links,
            population: DEFAULT_POPULATION,
            shape: ShapeConfig {
                kind: ShapeKind::Square,
                min_size: LINK_MIN_SIZE,
                max_size: LINK_MAX_SIZE,
                orbit_speed: SpeedRange::from_constants(
                    LINK_ORBIT_SPEED_LIMIT,
                    LINK_ORBIT_SPEED_TOLERANCE,
                ),
                spin_speed: SpeedRange::from_constants(
                    LINK_SPIN_SPEED_LIMIT,
                    LINK_SPIN_SPEED_TOLERANCE,
                ),
                unit: AngleUnit::Degrees,
                material: MaterialConfig {
                    transparent: true,
                    opacity: OpacityRule::FromSize {
                        sizes: LINK_OPACITY_SIZES,
                        opacity: LINK_OPACITY_RANGE,
                    },
                    line_width: LINE_WIDTH,
                },
            },
            bands: OrbitBands::from_constants(&LINK_BANDS),
            radius_jitter: LINK_RADIUS_JITTER,
            depth_jitter: LINK_DEPTH_JITTER,
            palette: bright_fill_palette(),
            color_jitter: COLOR_JITTER,
            links: LinkConfig {
                enabled: true,
                color: link_color(),
            },
            background: Rgb::from_hex(BACKGROUND),
            camera: CameraConfig::Perspective {
                eye_z: LINK_CAMERA_Z,
                fovy_degrees: LINK_CAMERA_FOVY_DEG,
                znear: LINK_CAMERA_ZNEAR,
                zfar: LINK_CAMERA_ZFAR,
            },
        }
    }

    pub fn with_population(mut self, population: usize) -> Self {
        self.population = population;
        self
    }

    pub fn validate(&self) -> OrbitResult<()> {
        if self.population == 0 {
            return Err(OrbitError::InvalidConfig("population must be at least 1".into()));
        }
        self.shape.validate()?;
        OrbitBands::new(self.bands.bands())?;
        if !(self.radius_jitter.is_finite() && self.radius_jitter >= 0.0) {
            return Err(OrbitError::InvalidConfig(format!(
                "radius jitter {} must be >= 0",
                self.radius_jitter
            )));
        }
        if !(self.depth_jitter.is_finite() && self.depth_jitter >= 0.0) {
            return Err(OrbitError::InvalidConfig(format!(
                "depth jitter {} must be >= 0",
                self.depth_jitter
            )));
        }
        if !(self.color_jitter.is_finite() && self.color_jitter >= 0.0) {
            return Err(OrbitError::InvalidConfig(format!(
                "colour jitter {} must be >= 0",
                self.color_jitter
            )));
        }
        self.camera.validate()
    }
}

fn bright_fill_palette() -> Palette {
    Palette {
        fill_a: Rgb::from_hex(BLUE),
        fill_b: Rgb::from_hex(GREEN),
        stroke_a: Rgb::from_hex(DK_BLUE),
        stroke_b: Rgb::from_hex(DK_GREEN),
    }
}

fn link_color() -> Rgba {
    let [r, g, b, a] = LINK_COLOR;
    Rgba { r, g, b, a }
}
