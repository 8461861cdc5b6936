use crate::backend::RenderBackend;
use crate::color::ColorBlender;
use crate::config::SimulationConfig;
use crate::error::OrbitResult;
use crate::links::{LinkChanges, LinkSet};
use crate::orbit::OrbitSampler;
use crate::shape::{OrbitingShape, ShapeFactory};
use crate::state::Camera;
use rand::prelude::*;

/// Owns every shape for the lifetime of a run and advances them frame by frame.
pub struct Simulation {
    config: SimulationConfig,
    shapes: Vec<OrbitingShape>,
    blender: ColorBlender,
    links: LinkSet,
    rng: StdRng,
    frame: u64,
}

impl Simulation {
    /// Validate `config` and create `config.population` shapes from `seed`.
    pub fn new(config: SimulationConfig, seed: u64) -> OrbitResult<Self> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(config: SimulationConfig, mut rng: StdRng) -> OrbitResult<Self> {
        config.validate()?;
        let sampler = OrbitSampler::new(config.bands.clone(), config.radius_jitter, config.depth_jitter)?;
        let factory = ShapeFactory::new(config.shape, sampler)?;
        let blender = ColorBlender::new(config.palette, config.color_jitter);
        let shapes = (0..config.population)
            .map(|_| factory.spawn(&blender, &mut rng))
            .collect::<Vec<_>>();
        let mut links = LinkSet::new();
        if config.links.enabled {
            links.refresh(&shapes);
        }
        log::info!(
            "[sim] preset={} shapes={} links={}",
            config.preset,
            shapes.len(),
            links.len()
        );
        Ok(Self {
            config,
            shapes,
            blender,
            links,
            rng,
            frame: 0,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn shapes(&self) -> &[OrbitingShape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn links(&self) -> &LinkSet {
        &self.links
    }

    pub fn blender(&self) -> &ColorBlender {
        &self.blender
    }

    /// Number of completed `update` calls.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Change the per-frame colour noise; zero makes colours a pure function of angle.
    pub fn set_color_jitter(&mut self, jitter: f32) {
        self.blender.jitter = jitter.max(0.0);
    }

    /// Hand every shape's primitive to the back end.
    pub fn register<B: RenderBackend + ?Sized>(&self, backend: &mut B) -> OrbitResult<()> {
        for (id, shape) in self.shapes.iter().enumerate() {
            backend.register(id, &shape.mesh())?;
        }
        Ok(())
    }

    /// Spin, revolve and recolour every shape in creation order.
    pub fn update(&mut self) -> LinkChanges {
        for shape in &mut self.shapes {
            shape.rotate();
            shape.orbit();
            shape.recolor(&self.blender, &mut self.rng);
        }
        self.frame += 1;
        if !self.config.links.enabled {
            return LinkChanges::default();
        }
        let changes = self.links.refresh(&self.shapes);
        if !changes.is_empty() {
            log::debug!(
                "[links] frame={} +{} -{} active={}",
                self.frame,
                changes.added.len(),
                changes.removed.len(),
                self.links.len()
            );
        }
        changes
    }

    /// Recolour only, without moving anything.
    pub fn recolor(&mut self) {
        for shape in &mut self.shapes {
            shape.recolor(&self.blender, &mut self.rng);
        }
    }

    pub fn render<B: RenderBackend + ?Sized>(&self, backend: &mut B, camera: &Camera) -> OrbitResult<()> {
        backend.begin_frame(self.config.background, camera)?;
        for (id, shape) in self.shapes.iter().enumerate() {
            backend.draw(id, &shape.pose());
        }
        if self.config.links.enabled {
            let color = self.config.links.color;
            for (a, b) in self.links.pairs() {
                backend.draw_link(self.shapes[a].position(), self.shapes[b].position(), color);
            }
        }
        backend.end_frame()
    }
}
