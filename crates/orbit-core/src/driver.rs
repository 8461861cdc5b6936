//! Frame loop orchestration shared by the web and native front-ends.
//!
//! The host owns scheduling (`requestAnimationFrame`, the winit event loop)
//! and calls [`AnimationDriver::step`] once per display frame. Everything the
//! loop needs lives in an explicit [`SimulationContext`] built at startup,
//! so nothing is kept in globals.

use crate::backend::RenderBackend;
use crate::config::SimulationConfig;
use crate::constants::FPS_LOG_INTERVAL_SEC;
use crate::error::OrbitResult;
use crate::simulation::Simulation;
use crate::state::Camera;
use instant::Instant;

/// Startup state: the validated configuration, the camera and the seed.
#[derive(Clone, Debug)]
pub struct SimulationContext {
    pub config: SimulationConfig,
    pub camera: Camera,
    pub seed: u64,
}

impl SimulationContext {
    pub fn new(config: SimulationConfig, width: u32, height: u32, seed: u64) -> OrbitResult<Self> {
        config.validate()?;
        let camera = Camera::from_config(&config.camera, width, height);
        Ok(Self {
            config,
            camera,
            seed,
        })
    }
}

/// Frame counter with a periodic frame-rate sample.
#[derive(Clone, Debug)]
pub struct FrameStats {
    frames: u64,
    window_start: Instant,
    window_frames: u32,
    last_fps: Option<f64>,
}

impl Default for FrameStats {
    fn default() -> Self {
        Self {
            frames: 0,
            window_start: Instant::now(),
            window_frames: 0,
            last_fps: None,
        }
    }
}

impl FrameStats {
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn last_fps(&self) -> Option<f64> {
        self.last_fps
    }

    /// Count one frame; returns a new rate once per sampling window.
    pub fn tick(&mut self) -> Option<f64> {
        self.frames += 1;
        self.window_frames += 1;
        let elapsed = self.window_start.elapsed().as_secs_f64();
        if elapsed < FPS_LOG_INTERVAL_SEC {
            return None;
        }
        let fps = self.window_frames as f64 / elapsed;
        self.window_start = Instant::now();
        self.window_frames = 0;
        self.last_fps = Some(fps);
        Some(fps)
    }
}

/// Drives one [`Simulation`] into one back end.
pub struct AnimationDriver<B: RenderBackend> {
    context: SimulationContext,
    simulation: Simulation,
    backend: B,
    stats: FrameStats,
    registered: bool,
    started: bool,
}

impl<B: RenderBackend> AnimationDriver<B> {
    /// Set up the simulation; nothing is drawn until [`AnimationDriver::start`].
    pub fn new(context: SimulationContext, backend: B) -> OrbitResult<Self> {
        let simulation = Simulation::new(context.config.clone(), context.seed)?;
        Ok(Self {
            context,
            simulation,
            backend,
            stats: FrameStats::default(),
            registered: false,
            started: false,
        })
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    pub fn simulation_mut(&mut self) -> &mut Simulation {
        &mut self.simulation
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn context(&self) -> &SimulationContext {
        &self.context
    }

    pub fn camera(&self) -> &Camera {
        &self.context.camera
    }

    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Register every shape with the back end and draw the initial frame.
    /// Shapes are registered once even if the first frame fails and start is retried.
    pub fn start(&mut self) -> OrbitResult<()> {
        if self.started {
            log::warn!("[driver] start called twice; ignoring");
            return Ok(());
        }
        if !self.registered {
            self.simulation.register(&mut self.backend)?;
            self.registered = true;
        }
        self.simulation.render(&mut self.backend, &self.context.camera)?;
        self.started = true;
        log::info!(
            "[driver] started preset={} shapes={}",
            self.context.config.preset,
            self.simulation.len()
        );
        Ok(())
    }

    /// One frame: update then render. Starts the driver first if needed.
    pub fn step(&mut self) -> OrbitResult<()> {
        if !self.started {
            self.start()?;
        }
        self.simulation.update();
        self.simulation.render(&mut self.backend, &self.context.camera)?;
        if let Some(fps) = self.stats.tick() {
            log::debug!("[driver] frame={} fps={:.1}", self.stats.frames(), fps);
        }
        Ok(())
    }

    /// Step `frames` times, stopping at the first error.
    pub fn run_frames(&mut self, frames: u64) -> OrbitResult<()> {
        for _ in 0..frames {
            self.step()?;
        }
        Ok(())
    }

    /// Update the camera aspect and tell the back end.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            log::warn!("[driver] ignoring zero-sized resize {}x{}", width, height);
            return;
        }
        self.context.camera.set_viewport(width, height);
        self.backend.resize(width, height);
    }

    /// Tear the loop down and give the back end back to the host.
    pub fn shutdown(self) -> B {
        log::info!("[driver] shutdown after {} frames", self.stats.frames());
        self.backend
    }
}
