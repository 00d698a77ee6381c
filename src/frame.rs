use crate::dom::PerformanceClock;
use crate::overlay::DomTelemetry;
use crate::render::CanvasRenderer;
use curve_core::SceneController;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub controller: Rc<RefCell<SceneController>>,
    pub renderer: CanvasRenderer,
    pub telemetry: DomTelemetry,
    pub clock: PerformanceClock,
}

impl FrameContext {
    /// One animation-frame callback. The governor decides whether this
    /// callback actually draws; skipped callbacks cost a single clock read.
    pub fn frame(&mut self) {
        let Ok(mut controller) = self.controller.try_borrow_mut() else {
            log::warn!("[frame] scene busy; skipping tick");
            return;
        };
        controller.tick(&mut self.clock, &mut self.renderer, &mut self.telemetry);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
    }
}
