use crate::constants::{CANVAS_CONTAINER_INSET_PX, CANVAS_HEIGHT_PX};
use curve_core::{Clock, InstantClock};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

#[inline]
pub fn set_text(document: &web::Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Canvas takes its container's width less a fixed inset, and a fixed height.
pub fn sync_canvas_size(canvas: &web::HtmlCanvasElement) {
    let width = canvas
        .parent_element()
        .map(|p| p.client_width().max(0) as u32)
        .unwrap_or(0)
        .saturating_sub(CANVAS_CONTAINER_INSET_PX);
    canvas.set_width(width.max(1));
    canvas.set_height(CANVAS_HEIGHT_PX);
}

/// Millisecond timestamps from `performance.now()`, matching the RAF timeline.
#[derive(Clone)]
pub struct PerformanceClock {
    performance: Option<web::Performance>,
    fallback: InstantClock,
}

impl PerformanceClock {
    pub fn new() -> Self {
        Self {
            performance: web::window().and_then(|w| w.performance()),
            fallback: InstantClock::new(),
        }
    }
}

impl Clock for PerformanceClock {
    fn now_ms(&mut self) -> f64 {
        match &self.performance {
            Some(p) => p.now(),
            None => self.fallback.now_ms(),
        }
    }
}
