//! Camera state shared with the web and native front-ends.
//!
//! Nothing here touches platform APIs. The native renderer uploads
//! [`Camera::view_proj`] as a uniform, the canvas back end projects points
//! one by one with [`Camera::project`].

use crate::config::CameraConfig;
use glam::{Mat4, Vec3, Vec4};

/// How view space is flattened onto the screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Projection {
    Perspective {
        fovy_radians: f32,
        znear: f32,
        zfar: f32,
    },
    /// One world unit covers `pixels_per_unit` pixels, origin at the centre.
    Orthographic { pixels_per_unit: f32 },
}

/// Simple right-handed camera looking at the orbit centre.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub projection: Projection,
    pub width: f32,
    pub height: f32,
}

impl Camera {
    pub fn from_config(config: &CameraConfig, width: u32, height: u32) -> Self {
        let projection = match *config {
            CameraConfig::Perspective {
                fovy_degrees,
                znear,
                zfar,
                ..
            } => Projection::Perspective {
                fovy_radians: fovy_degrees.to_radians(),
                znear,
                zfar,
            },
            CameraConfig::Orthographic { pixels_per_unit } => {
                Projection::Orthographic { pixels_per_unit }
            }
        };
        let eye_z = match *config {
            CameraConfig::Perspective { eye_z, .. } => eye_z,
            CameraConfig::Orthographic { .. } => ORTHO_EYE_Z,
        };
        Self {
            eye: Vec3::new(0.0, 0.0, eye_z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            projection,
            width: width.max(1) as f32,
            height: height.max(1) as f32,
        }
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height.max(1.0)
    }

    /// Track the drawable size; zero sizes are clamped to one pixel.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.width = width.max(1) as f32;
        self.height = height.max(1) as f32;
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        match self.projection {
            Projection::Perspective {
                fovy_radians,
                znear,
                zfar,
            } => Mat4::perspective_rh(fovy_radians, self.aspect(), znear, zfar),
            Projection::Orthographic { pixels_per_unit } => {
                let half_w = self.width * 0.5 / pixels_per_unit;
                let half_h = self.height * 0.5 / pixels_per_unit;
                Mat4::orthographic_rh(-half_w, half_w, -half_h, half_h, ORTHO_ZNEAR, ORTHO_ZFAR)
            }
        }
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World point to `(pixel_x, pixel_y, ndc_depth)`; `None` when behind the eye.
    pub fn project(&self, point: Vec3) -> Option<Vec3> {
        project_with(&self.view_proj(), point, self.width, self.height)
    }

    /// Pixels covered by one world unit at the depth of `point`.
    pub fn pixels_per_unit_at(&self, point: Vec3) -> f32 {
        match self.projection {
            Projection::Orthographic { pixels_per_unit } => pixels_per_unit,
            Projection::Perspective { fovy_radians, .. } => {
                let distance = (self.eye - point).length().max(1e-3);
                self.height / (2.0 * distance * (fovy_radians * 0.5).tan())
            }
        }
    }
}

/// Project with a precomputed view-projection matrix.
#[inline]
pub fn project_with(view_proj: &Mat4, point: Vec3, width: f32, height: f32) -> Option<Vec3> {
    let clip = *view_proj * Vec4::new(point.x, point.y, point.z, 1.0);
    if clip.w <= 1e-6 {
        return None;
    }
    let ndc = clip.truncate() / clip.w;
    Some(Vec3::new(
        (ndc.x + 1.0) * 0.5 * width,
        (1.0 - ndc.y) * 0.5 * height,
        ndc.z,
    ))
}

const ORTHO_EYE_Z: f32 = 10.0;
const ORTHO_ZNEAR: f32 = 0.1;
const ORTHO_ZFAR: f32 = 100.0;
