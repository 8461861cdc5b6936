// Vertex layouts and instance packing for the wgpu renderer. Kept free of
// wgpu types so host tests can include it directly.

use glam::{EulerRot, Mat4, Quat, Vec3, Vec4};
use orbit_core::{MeshDesc, Rgba, ShapeId};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    /// Zero for line geometry, which is drawn unshaded.
    pub normal: [f32; 3],
}

impl Vertex {
    const fn new(position: [f32; 3], normal: [f32; 3]) -> Self {
        Self { position, normal }
    }

    const fn line(position: [f32; 3]) -> Self {
        Self::new(position, [0.0; 3])
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Uniforms {
    pub view_proj: [[f32; 4]; 4],
    pub light: [f32; 4],
}

const CORNERS: [[f32; 3]; 8] = [
    [-0.5, -0.5, -0.5],
    [0.5, -0.5, -0.5],
    [0.5, 0.5, -0.5],
    [-0.5, 0.5, -0.5],
    [-0.5, -0.5, 0.5],
    [0.5, -0.5, 0.5],
    [0.5, 0.5, 0.5],
    [-0.5, 0.5, 0.5],
];

// Counter-clockwise from outside, paired with the outward normal
const FACES: [([usize; 4], [f32; 3]); 6] = [
    ([0, 3, 2, 1], [0.0, 0.0, -1.0]),
    ([4, 5, 6, 7], [0.0, 0.0, 1.0]),
    ([0, 1, 5, 4], [0.0, -1.0, 0.0]),
    ([3, 7, 6, 2], [0.0, 1.0, 0.0]),
    ([0, 4, 7, 3], [-1.0, 0.0, 0.0]),
    ([1, 2, 6, 5], [1.0, 0.0, 0.0]),
];

const EDGES: [[usize; 2]; 12] = [
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

const SQUARE: [[f32; 3]; 4] = [
    [-0.5, -0.5, 0.0],
    [0.5, -0.5, 0.0],
    [0.5, 0.5, 0.0],
    [-0.5, 0.5, 0.0],
];

/// Two triangles per face, 36 vertices.
pub fn cube_triangles() -> Vec<Vertex> {
    let mut out = Vec::with_capacity(36);
    for (quad, normal) in FACES {
        for i in [0, 1, 2, 0, 2, 3] {
            out.push(Vertex::new(CORNERS[quad[i]], normal));
        }
    }
    out
}

/// Line list over the 12 cube edges.
pub fn cube_edges() -> Vec<Vertex> {
    EDGES
        .iter()
        .flat_map(|[a, b]| [Vertex::line(CORNERS[*a]), Vertex::line(CORNERS[*b])])
        .collect()
}

pub fn square_triangles() -> Vec<Vertex> {
    [0, 1, 2, 0, 2, 3]
        .into_iter()
        .map(|i| Vertex::new(SQUARE[i], [0.0, 0.0, 1.0]))
        .collect()
}

/// Line list around the square outline.
pub fn square_edges() -> Vec<Vertex> {
    (0..SQUARE.len())
        .flat_map(|i| {
            [
                Vertex::line(SQUARE[i]),
                Vertex::line(SQUARE[(i + 1) % SQUARE.len()]),
            ]
        })
        .collect()
}

/// Unit segment along +x; [`link_instance`] stretches it between two points.
pub fn link_segment() -> Vec<Vertex> {
    vec![Vertex::line([0.0; 3]), Vertex::line([1.0, 0.0, 0.0])]
}

pub fn shape_instance(position: Vec3, spin: Vec3, size: f32, color: Rgba) -> InstanceData {
    let rotation = Quat::from_euler(EulerRot::XYZ, spin.x, spin.y, spin.z);
    let model = Mat4::from_scale_rotation_translation(Vec3::splat(size), rotation, position);
    InstanceData {
        model: model.to_cols_array_2d(),
        color: color.to_array(),
    }
}

pub fn link_instance(from: Vec3, to: Vec3, color: Rgba) -> InstanceData {
    let model = Mat4::from_cols(
        (to - from).extend(0.0),
        Vec4::Y,
        Vec4::Z,
        from.extend(1.0),
    );
    InstanceData {
        model: model.to_cols_array_2d(),
        color: color.to_array(),
    }
}

/// Meshes registered by shape id. A draw for an unknown id is skipped and
/// warned about once per run.
#[derive(Debug, Default)]
pub struct MeshRegistry {
    meshes: Vec<Option<MeshDesc>>,
    missing_logged: bool,
}

impl MeshRegistry {
    pub fn insert(&mut self, id: ShapeId, mesh: MeshDesc) {
        if self.meshes.len() <= id {
            self.meshes.resize(id + 1, None);
        }
        self.meshes[id] = Some(mesh);
    }

    pub fn len(&self) -> usize {
        self.meshes.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether a missing id has already been reported.
    pub fn missing_logged(&self) -> bool {
        self.missing_logged
    }

    pub fn lookup(&mut self, id: ShapeId) -> Option<&MeshDesc> {
        match self.meshes.get(id) {
            Some(Some(mesh)) => Some(mesh),
            _ => {
                if !self.missing_logged {
                    log::warn!("[gpu] draw for unregistered shape {id}");
                    self.missing_logged = true;
                }
                None
            }
        }
    }
}
