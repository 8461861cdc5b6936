/// Canvas front-end constants.
///
/// Simulation tuning lives in `orbit_core::constants`; this file only holds
/// what the browser host needs to find its canvas and shade cube faces.
// Element the simulation draws into
pub const CANVAS_ID: &str = "app-canvas";

// Attribute on the canvas selecting the preset by name
pub const PRESET_ATTRIBUTE: &str = "data-preset";

// Cube face shading: ambient term plus one directional light
pub const AMBIENT_LIGHT: f32 = 0.55;
pub const DIFFUSE_LIGHT: f32 = 0.45;
pub const LIGHT_DIRECTION: [f32; 3] = [0.35, 0.6, 1.0];

// Link segments are hairlines in CSS pixels, scaled by the device pixel ratio
pub const LINK_LINE_WIDTH: f32 = 1.0;
