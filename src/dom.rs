use crate::constants::PRESET_ATTRIBUTE;
use orbit_core::{OrbitError, OrbitResult, Preset};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn device_pixel_ratio() -> f64 {
    web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0)
}

/// Match the canvas backing store to its CSS box times the pixel ratio.
/// Returns the new size in device pixels.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    let dpr = device_pixel_ratio();
    let rect = canvas.get_bounding_client_rect();
    let w_px = ((rect.width() * dpr) as u32).max(1);
    let h_px = ((rect.height() * dpr) as u32).max(1);
    if canvas.width() != w_px {
        canvas.set_width(w_px);
    }
    if canvas.height() != h_px {
        canvas.set_height(h_px);
    }
    (w_px, h_px)
}

/// Preset named by the canvas attribute; cubes when the attribute is absent.
pub fn read_preset(canvas: &web::HtmlCanvasElement) -> OrbitResult<Preset> {
    match canvas.get_attribute(PRESET_ATTRIBUTE) {
        Some(name) => name.parse(),
        None => Ok(Preset::default()),
    }
}

pub fn add_resize_listener(mut handler: impl FnMut() + 'static) -> OrbitResult<()> {
    let window = web::window().ok_or_else(|| OrbitError::BackendUnavailable("no window".into()))?;
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    window
        .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
        .map_err(|e| OrbitError::BackendUnavailable(format!("resize listener: {e:?}")))?;
    closure.forget();
    Ok(())
}
