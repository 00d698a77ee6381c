#![cfg(target_arch = "wasm32")]
use curve_core::SceneController;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("curve-web starting");

    // Wait for the page so the controls panel and sliders exist.
    let Some(window) = web::window() else {
        return Err(JsValue::from_str("no window"));
    };
    let on_load: Closure<dyn FnMut()> = Closure::once(|| {
        if let Err(e) = init() {
            log::error!("init error: {:?}", e);
        }
    });
    if window.document().map(|d| d.ready_state()).as_deref() == Some("complete") {
        if let Err(e) = init() {
            log::error!("init error: {:?}", e);
        }
    } else {
        window.add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref())?;
        on_load.forget();
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;

    wire_canvas_resize(&canvas);
    overlay::add_quality_display(&document);

    let renderer = render::CanvasRenderer::new(canvas.clone())?;
    let controller = Rc::new(RefCell::new(SceneController::default()));

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        controller: controller.clone(),
    });
    events::wire_controls(&document, controller.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        controller,
        renderer,
        telemetry: overlay::DomTelemetry::new(document),
        clock: dom::PerformanceClock::new(),
    }));
    frame::start_loop(frame_ctx);
    log::info!("curve-web running");
    Ok(())
}
