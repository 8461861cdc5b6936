use crate::constants::{AMBIENT_LIGHT, DIFFUSE_LIGHT, LIGHT_DIRECTION, LINK_LINE_WIDTH};
use crate::dom::device_pixel_ratio;
use crate::geometry::{
    css_rgba, cube_edges, cube_faces, project_polygon, shape_transform, Lighting, SQUARE_CORNERS,
};
use glam::{Mat4, Vec2, Vec3};
use orbit_core::{
    project_with, Camera, MeshDesc, OrbitError, OrbitResult, RenderBackend, Rgb, Rgba, ShapeId,
    ShapeKind, ShapePose,
};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Draws the simulation with the canvas 2D API: cubes as painter-sorted
/// shaded faces, squares as projected quads, links as single segments.
pub struct Canvas2dBackend {
    ctx: web::CanvasRenderingContext2d,
    meshes: Vec<Option<MeshDesc>>,
    view_proj: Mat4,
    width: f32,
    height: f32,
    pixel_ratio: f32,
    lighting: Lighting,
    missing_logged: bool,
}

impl Canvas2dBackend {
    pub fn new(canvas: &web::HtmlCanvasElement) -> OrbitResult<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| OrbitError::BackendUnavailable(format!("getContext failed: {e:?}")))?
            .ok_or_else(|| OrbitError::BackendUnavailable("2d context not supported".into()))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| OrbitError::BackendUnavailable("unexpected context type".into()))?;
        Ok(Self {
            ctx,
            meshes: Vec::new(),
            view_proj: Mat4::IDENTITY,
            width: canvas.width() as f32,
            height: canvas.height() as f32,
            pixel_ratio: device_pixel_ratio() as f32,
            lighting: Lighting {
                ambient: AMBIENT_LIGHT,
                diffuse: DIFFUSE_LIGHT,
                direction: Vec3::from_array(LIGHT_DIRECTION),
            },
            missing_logged: false,
        })
    }

    fn trace_polygon(&self, points: &[Vec2]) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.close_path();
    }

    fn paint_polygon(&self, points: &[Vec2], fill: &str, stroke: &str, line_width: f32) {
        self.trace_polygon(points);
        self.ctx.set_fill_style_str(fill);
        self.ctx.fill();
        self.ctx.set_stroke_style_str(stroke);
        self.ctx.set_line_width((line_width * self.pixel_ratio) as f64);
        self.ctx.stroke();
    }

    fn draw_square(&self, model: &Mat4, pose: &ShapePose) {
        let Some((points, _)) =
            project_polygon(&SQUARE_CORNERS, model, &self.view_proj, self.width, self.height)
        else {
            return;
        };
        let fill = css_rgba(pose.fill, 1.0);
        let stroke = css_rgba(pose.stroke, 1.0);
        self.paint_polygon(&points, &fill, &stroke, pose.line_width);
    }

    /// Faces back to front, then every edge once in a single path so shared
    /// edges are not stroked twice.
    fn draw_cube(&self, model: &Mat4, pose: &ShapePose) {
        for face in cube_faces(model, &self.view_proj, self.width, self.height, &self.lighting) {
            self.trace_polygon(&face.points);
            self.ctx.set_fill_style_str(&css_rgba(pose.fill, face.brightness));
            self.ctx.fill();
        }
        let edges = cube_edges(model, &self.view_proj, self.width, self.height);
        if edges.is_empty() {
            return;
        }
        self.ctx.begin_path();
        for [a, b] in edges {
            self.ctx.move_to(a.x as f64, a.y as f64);
            self.ctx.line_to(b.x as f64, b.y as f64);
        }
        self.ctx.set_stroke_style_str(&css_rgba(pose.stroke, 1.0));
        self.ctx
            .set_line_width((pose.line_width * self.pixel_ratio) as f64);
        self.ctx.stroke();
    }
}

impl RenderBackend for Canvas2dBackend {
    fn register(&mut self, id: ShapeId, mesh: &MeshDesc) -> OrbitResult<()> {
        if self.meshes.len() <= id {
            self.meshes.resize(id + 1, None);
        }
        self.meshes[id] = Some(*mesh);
        Ok(())
    }

    fn begin_frame(&mut self, clear: Rgb, camera: &Camera) -> OrbitResult<()> {
        self.view_proj = camera.view_proj();
        self.width = camera.width;
        self.height = camera.height;
        self.ctx.set_fill_style_str(&css_rgba(clear.with_alpha(1.0), 1.0));
        self.ctx
            .fill_rect(0.0, 0.0, self.width as f64, self.height as f64);
        Ok(())
    }

    fn draw(&mut self, id: ShapeId, pose: &ShapePose) {
        if !matches!(self.meshes.get(id), Some(Some(_))) {
            if !self.missing_logged {
                log::warn!("[canvas] draw for unregistered shape {id}");
                self.missing_logged = true;
            }
            return;
        }
        let model = shape_transform(pose.position, pose.spin, pose.size);
        match pose.kind {
            ShapeKind::Square => self.draw_square(&model, pose),
            ShapeKind::Cube => self.draw_cube(&model, pose),
        }
    }

    fn draw_link(&mut self, from: Vec3, to: Vec3, color: Rgba) {
        let project = |p| project_with(&self.view_proj, p, self.width, self.height);
        let (Some(a), Some(b)) = (project(from), project(to)) else {
            return;
        };
        self.ctx.begin_path();
        self.ctx.move_to(a.x as f64, a.y as f64);
        self.ctx.line_to(b.x as f64, b.y as f64);
        self.ctx.set_stroke_style_str(&css_rgba(color, 1.0));
        self.ctx
            .set_line_width((LINK_LINE_WIDTH * self.pixel_ratio) as f64);
        self.ctx.stroke();
    }

    fn end_frame(&mut self) -> OrbitResult<()> {
        // The browser composites the canvas after the animation frame callback
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width as f32;
        self.height = height as f32;
        self.pixel_ratio = device_pixel_ratio() as f32;
        log::debug!("[canvas] resized to {width}x{height}");
    }
}
