use crate::dom::sync_canvas_backing_size;
use crate::render::Canvas2dBackend;
use orbit_core::AnimationDriver;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything one animation frame touches.
pub struct FrameContext {
    pub driver: AnimationDriver<Canvas2dBackend>,
    pub canvas: web::HtmlCanvasElement,
    size: (u32, u32),
}

impl FrameContext {
    pub fn new(driver: AnimationDriver<Canvas2dBackend>, canvas: web::HtmlCanvasElement) -> Self {
        let size = (canvas.width(), canvas.height());
        Self {
            driver,
            canvas,
            size,
        }
    }

    /// Pick up a changed canvas size before the next draw.
    pub fn sync_size(&mut self) {
        let size = sync_canvas_backing_size(&self.canvas);
        if size != self.size {
            self.size = size;
            self.driver.resize(size.0, size.1);
        }
    }

    /// Advance and draw one frame. Returns false once the loop should stop.
    pub fn frame(&mut self) -> bool {
        match self.driver.step() {
            Ok(()) => true,
            Err(e) => {
                log::error!("[frame] stopping animation: {e}");
                false
            }
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        // A failed frame is not rescheduled
        if frame_ctx_tick.borrow_mut().frame() {
            request_frame(&tick_clone);
        }
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    let tick = tick.borrow();
    let Some(cb) = tick.as_ref() else {
        return;
    };
    if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
        log::error!("[frame] requestAnimationFrame failed: {e:?}");
    }
}
