// Pure projection helpers for the canvas back end. No web APIs in here so the
// host tests can include this file directly.

use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};
use orbit_core::{project_with, Rgba};

/// Unit cube corners, centred on the origin.
pub const CUBE_CORNERS: [Vec3; 8] = [
    Vec3::new(-0.5, -0.5, -0.5),
    Vec3::new(0.5, -0.5, -0.5),
    Vec3::new(0.5, 0.5, -0.5),
    Vec3::new(-0.5, 0.5, -0.5),
    Vec3::new(-0.5, -0.5, 0.5),
    Vec3::new(0.5, -0.5, 0.5),
    Vec3::new(0.5, 0.5, 0.5),
    Vec3::new(-0.5, 0.5, 0.5),
];

/// Corner indices per face, counter-clockwise seen from outside.
pub const CUBE_FACES: [[usize; 4]; 6] = [
    [0, 3, 2, 1], // -z
    [4, 5, 6, 7], // +z
    [0, 1, 5, 4], // -y
    [3, 7, 6, 2], // +y
    [0, 4, 7, 3], // -x
    [1, 2, 6, 5], // +x
];

/// Corner index pairs for the twelve cube edges.
pub const CUBE_EDGES: [[usize; 2]; 12] = [
    [0, 1],
    [1, 2],
    [2, 3],
    [3, 0],
    [4, 5],
    [5, 6],
    [6, 7],
    [7, 4],
    [0, 4],
    [1, 5],
    [2, 6],
    [3, 7],
];

pub const CUBE_FACE_NORMALS: [Vec3; 6] = [
    Vec3::NEG_Z,
    Vec3::Z,
    Vec3::NEG_Y,
    Vec3::Y,
    Vec3::NEG_X,
    Vec3::X,
];

pub const SQUARE_CORNERS: [Vec3; 4] = [
    Vec3::new(-0.5, -0.5, 0.0),
    Vec3::new(0.5, -0.5, 0.0),
    Vec3::new(0.5, 0.5, 0.0),
    Vec3::new(-0.5, 0.5, 0.0),
];

/// Ambient plus one directional light, Lambert style.
#[derive(Clone, Copy, Debug)]
pub struct Lighting {
    pub ambient: f32,
    pub diffuse: f32,
    /// Direction towards the light, normalised on use.
    pub direction: Vec3,
}

impl Lighting {
    pub fn brightness(&self, normal: Vec3) -> f32 {
        let n_dot_l = normal.normalize_or_zero().dot(self.direction.normalize_or_zero());
        // Double-sided material: back faces are lit as if flipped
        self.ambient + self.diffuse * n_dot_l.abs()
    }
}

/// Model matrix for a shape of edge `size` at `position` with XYZ Euler `spin`.
pub fn shape_transform(position: Vec3, spin: Vec3, size: f32) -> Mat4 {
    let rotation = Quat::from_euler(EulerRot::XYZ, spin.x, spin.y, spin.z);
    Mat4::from_scale_rotation_translation(Vec3::splat(size), rotation, position)
}

/// A cube face ready to paint.
#[derive(Clone, Copy, Debug)]
pub struct ProjectedFace {
    pub points: [Vec2; 4],
    /// Mean NDC depth; larger is further away.
    pub depth: f32,
    pub brightness: f32,
}

/// Project `corners` through `model` and `view_proj` to pixel space.
pub fn project_polygon<const N: usize>(
    corners: &[Vec3; N],
    model: &Mat4,
    view_proj: &Mat4,
    width: f32,
    height: f32,
) -> Option<([Vec2; N], f32)> {
    let mut points = [Vec2::ZERO; N];
    let mut depth = 0.0;
    for (out, corner) in points.iter_mut().zip(corners) {
        let p = project_with(view_proj, model.transform_point3(*corner), width, height)?;
        *out = p.truncate();
        depth += p.z;
    }
    Some((points, depth / N as f32))
}

/// All six faces of a cube, sorted back to front for the painter's algorithm.
pub fn cube_faces(
    model: &Mat4,
    view_proj: &Mat4,
    width: f32,
    height: f32,
    lighting: &Lighting,
) -> Vec<ProjectedFace> {
    let mut faces = Vec::with_capacity(CUBE_FACES.len());
    for (indices, normal) in CUBE_FACES.iter().zip(CUBE_FACE_NORMALS) {
        let corners = indices.map(|i| CUBE_CORNERS[i]);
        let Some((points, depth)) = project_polygon(&corners, model, view_proj, width, height) else {
            continue;
        };
        let world_normal = model.transform_vector3(normal);
        faces.push(ProjectedFace {
            points,
            depth,
            brightness: lighting.brightness(world_normal),
        });
    }
    faces.sort_by(|a, b| b.depth.total_cmp(&a.depth));
    faces
}

/// Each cube edge once, in pixel space. Edges with a corner behind the eye are dropped.
pub fn cube_edges(model: &Mat4, view_proj: &Mat4, width: f32, height: f32) -> Vec<[Vec2; 2]> {
    CUBE_EDGES
        .iter()
        .filter_map(|edge| {
            let corners = edge.map(|i| CUBE_CORNERS[i]);
            project_polygon(&corners, model, view_proj, width, height).map(|(points, _)| points)
        })
        .collect()
}

/// CSS colour string with every channel scaled by `brightness`.
pub fn css_rgba(color: Rgba, brightness: f32) -> String {
    let rgb = color.rgb().scaled(brightness).to_u8();
    format!(
        "rgba({},{},{},{:.3})",
        rgb[0],
        rgb[1],
        rgb[2],
        color.a.clamp(0.0, 1.0)
    )
}
