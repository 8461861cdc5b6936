use crate::color::{Rgb, Rgba};
use crate::error::OrbitResult;
use crate::shape::{MeshDesc, ShapeId, ShapePose};
use crate::state::Camera;
use glam::Vec3;

/// The drawing surface the simulation renders into.
///
/// A frame is always `begin_frame`, any number of `draw` / `draw_link`
/// calls, then `end_frame`. Shapes are registered once before the first
/// frame and keep their id for the whole run.
pub trait RenderBackend {
    /// Create the primitive for shape `id`.
    fn register(&mut self, id: ShapeId, mesh: &MeshDesc) -> OrbitResult<()>;

    fn begin_frame(&mut self, clear: Rgb, camera: &Camera) -> OrbitResult<()>;

    fn draw(&mut self, id: ShapeId, pose: &ShapePose);

    fn draw_link(&mut self, from: Vec3, to: Vec3, color: Rgba);

    /// Rasterise and present everything drawn since `begin_frame`.
    fn end_frame(&mut self) -> OrbitResult<()>;

    /// Drawable size changed. Back ends that track their own surface may ignore it.
    fn resize(&mut self, _width: u32, _height: u32) {}
}

impl<B: RenderBackend + ?Sized> RenderBackend for Box<B> {
    fn register(&mut self, id: ShapeId, mesh: &MeshDesc) -> OrbitResult<()> {
        (**self).register(id, mesh)
    }

    fn begin_frame(&mut self, clear: Rgb, camera: &Camera) -> OrbitResult<()> {
        (**self).begin_frame(clear, camera)
    }

    fn draw(&mut self, id: ShapeId, pose: &ShapePose) {
        (**self).draw(id, pose)
    }

    fn draw_link(&mut self, from: Vec3, to: Vec3, color: Rgba) {
        (**self).draw_link(from, to, color)
    }

    fn end_frame(&mut self) -> OrbitResult<()> {
        (**self).end_frame()
    }

    fn resize(&mut self, width: u32, height: u32) {
        (**self).resize(width, height)
    }
}
