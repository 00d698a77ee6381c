use crate::constants::*;
use crate::dom;
use curve_core::{FpsBand, GovernorEvent, GovernorObserver};
use wasm_bindgen::JsCast;
use web_sys as web;

const QUALITY_DISPLAY_STYLE: &str = "background: rgba(0, 0, 0, 0.3); padding: 10px 15px; \
    border-radius: 8px; font-family: monospace; font-size: 0.9rem; \
    border: 1px solid rgba(255, 255, 255, 0.1);";

const WARNING_STYLE: &str = "position: fixed; top: 20px; right: 20px; \
    background: rgba(255, 64, 129, 0.9); color: white; padding: 10px 15px; \
    border-radius: 5px; z-index: 1000; font-family: Arial, sans-serif; font-size: 14px; \
    box-shadow: 0 2px 10px rgba(0,0,0,0.3);";

/// Append the "Quality: High" read-out to the controls panel.
pub fn add_quality_display(document: &web::Document) {
    let Ok(Some(controls)) = document.query_selector(CONTROLS_SELECTOR) else {
        log::warn!("[overlay] no {} panel; quality read-out disabled", CONTROLS_SELECTOR);
        return;
    };
    let Ok(display) = document.create_element("div") else {
        return;
    };
    display.set_class_name("quality-display");
    display.set_inner_html(&format!(
        "<span style=\"color: #80deea\">Quality: </span>\
         <span id=\"{}\" style=\"font-weight: bold\">High</span>",
        QUALITY_ID
    ));
    _ = display.set_attribute("style", QUALITY_DISPLAY_STYLE);
    _ = controls.append_child(&display);
}

/// Governor observer that writes into the page.
pub struct DomTelemetry {
    document: web::Document,
}

impl DomTelemetry {
    pub fn new(document: web::Document) -> Self {
        Self { document }
    }

    fn show_fps(&self, fps: u32, band: FpsBand) {
        let Some(el) = dom::element_by_id::<web::HtmlElement>(&self.document, FPS_ID) else {
            return;
        };
        el.set_text_content(Some(&fps.to_string()));
        let color = match band {
            FpsBand::Below => FPS_BELOW_COLOR,
            FpsBand::OnTarget => FPS_ON_TARGET_COLOR,
            FpsBand::Above => FPS_ABOVE_COLOR,
        };
        _ = el.style().set_property("color", color);
        el.set_title(band.description());
    }

    fn warning_element(&self) -> Option<web::HtmlElement> {
        if let Some(el) = dom::element_by_id::<web::HtmlElement>(&self.document, WARNING_ID) {
            return Some(el);
        }
        let el = self
            .document
            .create_element("div")
            .ok()?
            .dyn_into::<web::HtmlElement>()
            .ok()?;
        el.set_id(WARNING_ID);
        _ = el.set_attribute("style", WARNING_STYLE);
        self.document.body()?.append_child(&el).ok()?;
        Some(el)
    }

    fn show_warning(&self) {
        if let Some(el) = self.warning_element() {
            el.set_text_content(Some(WARNING_TEXT));
            _ = el.style().set_property("display", "block");
        }
    }

    fn hide_warning(&self) {
        if let Some(el) = dom::element_by_id::<web::HtmlElement>(&self.document, WARNING_ID) {
            _ = el.style().set_property("display", "none");
        }
    }
}

impl GovernorObserver for DomTelemetry {
    fn on_event(&mut self, event: &GovernorEvent) {
        match *event {
            GovernorEvent::Telemetry { fps, band, level } => {
                self.show_fps(fps, band);
                dom::set_text(&self.document, QUALITY_ID, level.name());
            }
            GovernorEvent::QualityChanged { .. } => {}
            GovernorEvent::WarningShown => self.show_warning(),
            GovernorEvent::WarningHidden => self.hide_warning(),
        }
    }
}
