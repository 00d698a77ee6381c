use crate::constants::*;
use crate::dom;
use crate::input;
use curve_core::{ConfigError, SceneController, SceneState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Which spring parameter a slider drives.
#[derive(Clone, Copy, Debug)]
enum Param {
    Stiffness,
    Damping,
}

impl Param {
    fn apply(self, scene: &mut SceneState, value: f32) -> Result<(), ConfigError> {
        match self {
            Param::Stiffness => scene.set_stiffness(value),
            Param::Damping => scene.set_damping(value),
        }
    }

    fn read_out_id(self) -> &'static str {
        match self {
            Param::Stiffness => STIFFNESS_VALUE_ID,
            Param::Damping => DAMPING_VALUE_ID,
        }
    }
}

/// Sliders for stiffness/damping plus the reset button.
pub fn wire_controls(document: &web::Document, controller: Rc<RefCell<SceneController>>) {
    let params = controller.borrow().scene.params();
    wire_slider(
        document,
        STIFFNESS_SLIDER_ID,
        Param::Stiffness,
        params.stiffness(),
        controller.clone(),
    );
    wire_slider(
        document,
        DAMPING_SLIDER_ID,
        Param::Damping,
        params.damping(),
        controller.clone(),
    );

    dom::add_click_listener(document, RESET_BUTTON_ID, move || {
        controller.borrow_mut().reset();
    });
}

fn wire_slider(
    document: &web::Document,
    slider_id: &str,
    param: Param,
    initial: f32,
    controller: Rc<RefCell<SceneController>>,
) {
    let Some(slider) = dom::element_by_id::<web::HtmlInputElement>(document, slider_id) else {
        log::warn!("[controls] missing #{}", slider_id);
        return;
    };
    slider.set_value(&initial.to_string());
    dom::set_text(document, param.read_out_id(), &input::format_param(initial));

    let slider_in = slider.clone();
    let document_in = document.clone();
    let closure = Closure::wrap(Box::new(move || {
        let raw = slider_in.value();
        let Some(value) = input::parse_slider_value(&raw) else {
            log::warn!("[controls] ignoring slider value {:?}", raw);
            return;
        };
        match param.apply(&mut controller.borrow_mut().scene, value) {
            Ok(()) => dom::set_text(&document_in, param.read_out_id(), &input::format_param(value)),
            Err(e) => log::warn!("[controls] {}", e),
        }
    }) as Box<dyn FnMut()>);
    _ = slider.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
    closure.forget();
}
