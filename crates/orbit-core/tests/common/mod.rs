// Recording back end shared by the simulation and driver tests.

#![allow(dead_code)]
use glam::Vec3;
use orbit_core::*;

#[derive(Default)]
pub struct RecordingBackend {
    pub registered: Vec<(ShapeId, MeshDesc)>,
    pub frames_begun: u32,
    pub frames_ended: u32,
    pub clear: Option<Rgb>,
    pub draws: Vec<(ShapeId, ShapePose)>,
    pub links: Vec<(Vec3, Vec3, Rgba)>,
    pub size: Option<(u32, u32)>,
    pub fail_on_end: bool,
}

impl RecordingBackend {
    pub fn last_frame_draws(&self) -> usize {
        self.draws.len()
    }
}

impl RenderBackend for RecordingBackend {
    fn register(&mut self, id: ShapeId, mesh: &MeshDesc) -> OrbitResult<()> {
        self.registered.push((id, *mesh));
        Ok(())
    }

    fn begin_frame(&mut self, clear: Rgb, _camera: &Camera) -> OrbitResult<()> {
        self.frames_begun += 1;
        self.clear = Some(clear);
        self.draws.clear();
        self.links.clear();
        Ok(())
    }

    fn draw(&mut self, id: ShapeId, pose: &ShapePose) {
        self.draws.push((id, *pose));
    }

    fn draw_link(&mut self, from: Vec3, to: Vec3, color: Rgba) {
        self.links.push((from, to, color));
    }

    fn end_frame(&mut self) -> OrbitResult<()> {
        if self.fail_on_end {
            return Err(OrbitError::BackendUnavailable("context lost".into()));
        }
        self.frames_ended += 1;
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.size = Some((width, height));
    }
}
