// Tuning constants for the three sketches. Shared by the web and native front-ends.

use crate::orbit::OrbitBand;

// Palette
pub const BLUE: u32 = 0x1515eb;
pub const DK_BLUE: u32 = 0x0a0a73;
pub const GREEN: u32 = 0x95c251;
pub const DK_GREEN: u32 = 0x394a1f;
pub const BACKGROUND: u32 = 0x46474c; // middle grey

pub const DEFAULT_POPULATION: usize = 100;
pub const COLOR_JITTER: f32 = 0.02; // avoids obvious colour bands
pub const LINE_WIDTH: f32 = 2.0;

// Cubes: world units, speeds in degrees per frame
pub const CUBE_MIN_SIZE: f32 = 1.25;
pub const CUBE_MAX_SIZE: f32 = 2.0;
pub const CUBE_ORBIT_SPEED_LIMIT: f32 = 0.13;
pub const CUBE_ORBIT_SPEED_TOLERANCE: f32 = 0.01;
pub const CUBE_SPIN_SPEED_LIMIT: f32 = 1.3;
pub const CUBE_SPIN_SPEED_TOLERANCE: f32 = 0.5;

// First orbit is a little larger than the diagonal extent of the largest cube
pub const CUBE_MAX_EXTENT: f32 = 1.732_050_8 * CUBE_MAX_SIZE;
pub const CUBE_FIRST_ORBIT: f32 = CUBE_MAX_EXTENT + CUBE_MAX_SIZE * 0.5;
pub const CUBE_BANDS: [OrbitBand; 4] = [
    OrbitBand { threshold: 0.16, radius: CUBE_FIRST_ORBIT },
    OrbitBand { threshold: 0.40, radius: CUBE_FIRST_ORBIT * 2.0 },
    OrbitBand { threshold: 0.72, radius: CUBE_FIRST_ORBIT * 3.0 },
    OrbitBand { threshold: 1.0, radius: CUBE_FIRST_ORBIT * 4.0 },
];
pub const CUBE_RADIUS_JITTER: f32 = CUBE_FIRST_ORBIT;
// Opacity fades from 1.0 on the inner rings to 0.5 on the outermost one
pub const CUBE_OPACITY_RADII: (f32, f32) = (CUBE_FIRST_ORBIT * 2.0 - 2.0, CUBE_FIRST_ORBIT * 4.0);
pub const CUBE_OPACITY_RANGE: (f32, f32) = (1.0, 0.5);

pub const CUBE_CAMERA_Z: f32 = 32.0;
pub const CUBE_CAMERA_FOVY_DEG: f32 = 50.0;
pub const CUBE_CAMERA_ZNEAR: f32 = 30.0;
pub const CUBE_CAMERA_ZFAR: f32 = 34.0;

// Squares: pixel units, speeds in radians per frame
pub const SQUARE_MIN_SIZE: f32 = 45.0;
pub const SQUARE_MAX_SIZE: f32 = 90.0;
pub const SQUARE_ORBIT_SPEED_LIMIT: f32 = 0.0065;
pub const SQUARE_ORBIT_SPEED_TOLERANCE: f32 = 0.0001;
pub const SQUARE_SPIN_SPEED_LIMIT: f32 = 0.065;
pub const SQUARE_SPIN_SPEED_TOLERANCE: f32 = 0.009;
pub const SQUARE_BANDS: [OrbitBand; 4] = [
    OrbitBand { threshold: 0.18, radius: 200.0 },
    OrbitBand { threshold: 0.50, radius: 400.0 },
    OrbitBand { threshold: 0.78, radius: 600.0 },
    OrbitBand { threshold: 1.0, radius: 800.0 },
];
pub const SQUARE_RADIUS_JITTER: f32 = 55.0; // ~ a 1280px wide canvas / 23
pub const SQUARE_FILL_OPACITY: f32 = 130.0 / 255.0;
pub const SQUARE_STROKE_OPACITY: f32 = 165.0 / 255.0;
pub const SQUARE_PIXELS_PER_UNIT: f32 = 0.5;

// Linked squares: world units, speeds in degrees per frame
pub const LINK_MIN_SIZE: f32 = 1.25;
pub const LINK_MAX_SIZE: f32 = 2.0;
pub const LINK_ORBIT_SPEED_LIMIT: f32 = 0.19;
pub const LINK_ORBIT_SPEED_TOLERANCE: f32 = 0.03;
pub const LINK_SPIN_SPEED_LIMIT: f32 = 1.5;
pub const LINK_SPIN_SPEED_TOLERANCE: f32 = 0.3;
pub const LINK_BANDS: [OrbitBand; 4] = [
    OrbitBand { threshold: 0.18, radius: 3.0 },
    OrbitBand { threshold: 0.50, radius: 6.0 },
    OrbitBand { threshold: 0.78, radius: 9.0 },
    OrbitBand { threshold: 1.0, radius: 12.0 },
];
pub const LINK_RADIUS_JITTER: f32 = 3.0;
pub const LINK_DEPTH_JITTER: f32 = 0.01; // mitigates z-fighting
pub const LINK_OPACITY_SIZES: (f32, f32) = (1.5, 0.75);
pub const LINK_OPACITY_RANGE: (f32, f32) = (0.588, 0.784);
pub const LINK_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 0.6];

pub const LINK_CAMERA_Z: f32 = 20.0;
pub const LINK_CAMERA_FOVY_DEG: f32 = 50.0;
pub const LINK_CAMERA_ZNEAR: f32 = 19.0;
pub const LINK_CAMERA_ZFAR: f32 = 21.0;

// Frame statistics
pub const FPS_LOG_INTERVAL_SEC: f64 = 5.0;
