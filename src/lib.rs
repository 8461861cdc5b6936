#![cfg(target_arch = "wasm32")]
use orbit_core::{AnimationDriver, OrbitError, SimulationContext};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod frame;
mod geometry;
mod render;

use constants::CANVAS_ID;
use frame::FrameContext;
use render::Canvas2dBackend;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("orbit-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{CANVAS_ID}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let preset = dom::read_preset(&canvas)?;
    let (width, height) = dom::sync_canvas_backing_size(&canvas);

    let backend = match Canvas2dBackend::new(&canvas) {
        Ok(backend) => backend,
        Err(e @ OrbitError::BackendUnavailable(_)) => {
            // Nothing can be drawn; report once and leave the page alone
            log::error!("[init] {e}");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let seed = rand::random::<u64>();
    let context = SimulationContext::new(preset.config(), width, height, seed)?;
    log::info!("[init] preset={preset} canvas={width}x{height} seed={seed}");
    let mut driver = AnimationDriver::new(context, backend)?;
    driver.start()?;

    let frame_ctx = Rc::new(RefCell::new(FrameContext::new(driver, canvas)));
    let resize_ctx = frame_ctx.clone();
    dom::add_resize_listener(move || resize_ctx.borrow_mut().sync_size())?;
    frame::start_loop(frame_ctx);
    Ok(())
}
