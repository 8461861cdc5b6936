use orbit_core::{AnimationDriver, Preset, SimulationContext};
use winit::{event::*, event_loop::EventLoop, window::WindowBuilder};

mod gpu;
mod mesh;

use gpu::GpuBackend;

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    // First argument names the preset: cubes, squares or links
    let preset = match std::env::args().nth(1) {
        Some(name) => name.parse::<Preset>()?,
        None => Preset::default(),
    };

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(format!("Orbiting {preset}"))
        .build(&event_loop)?;
    let size = window.inner_size();

    let backend = pollster::block_on(GpuBackend::new(&window))?;
    let seed = rand::random::<u64>();
    let context = SimulationContext::new(
        preset.config(),
        size.width.max(1),
        size.height.max(1),
        seed,
    )?;
    log::info!(
        "[native] preset={preset} window={}x{} seed={seed}",
        size.width,
        size.height
    );
    let mut driver = AnimationDriver::new(context, backend)?;
    driver.start()?;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } => driver.resize(size.width, size.height),
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => elwt.exit(),
        Event::AboutToWait => match driver.step() {
            Ok(()) => driver.backend().window().request_redraw(),
            Err(e) => {
                log::error!("[native] {e}");
                elwt.exit();
            }
        },
        _ => {}
    })?;
    Ok(())
}
