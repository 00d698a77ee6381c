use crate::input;
use curve_core::{PointerInput, SceneController};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub controller: Rc<RefCell<SceneController>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_mouse(&w, "mousemove", |ev, canvas| {
        let pos = input::mouse_canvas_px(ev, canvas);
        Some(PointerInput::MouseMove { x: pos.x, y: pos.y })
    });
    wire_mouse(&w, "mousedown", |_, _| Some(PointerInput::MouseDown));
    wire_mouse(&w, "mouseup", |_, _| Some(PointerInput::MouseUp));
    wire_mouse(&w, "mouseleave", |_, _| Some(PointerInput::MouseLeave));

    wire_touch(&w, "touchstart", |ev, canvas| {
        input::touch_canvas_px(ev, canvas).map(|p| PointerInput::TouchStart { x: p.x, y: p.y })
    });
    wire_touch(&w, "touchmove", |ev, canvas| {
        input::touch_canvas_px(ev, canvas).map(|p| PointerInput::TouchMove { x: p.x, y: p.y })
    });
}

fn wire_mouse(
    w: &InputWiring,
    event_name: &str,
    map: impl Fn(&web::MouseEvent, &web::HtmlCanvasElement) -> Option<PointerInput> + 'static,
) {
    let w2 = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        if let Some(input) = map(&ev, &w2.canvas) {
            w2.controller.borrow_mut().scene.apply_pointer(input);
        }
    }) as Box<dyn FnMut(_)>);
    if let Err(e) = w
        .canvas
        .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref())
    {
        log::error!("[input] failed to wire {}: {:?}", event_name, e);
    }
    closure.forget();
}

// Touch listeners are non-passive so the page does not scroll while dragging.
fn wire_touch(
    w: &InputWiring,
    event_name: &str,
    map: impl Fn(&web::TouchEvent, &web::HtmlCanvasElement) -> Option<PointerInput> + 'static,
) {
    let w2 = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        ev.prevent_default();
        if let Some(input) = map(&ev, &w2.canvas) {
            w2.controller.borrow_mut().scene.apply_pointer(input);
        }
    }) as Box<dyn FnMut(_)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    if let Err(e) = w
        .canvas
        .add_event_listener_with_callback_and_add_event_listener_options(
            event_name,
            closure.as_ref().unchecked_ref(),
            &opts,
        )
    {
        log::error!("[input] failed to wire {}: {:?}", event_name, e);
    }
    closure.forget();
}
