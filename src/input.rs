use glam::Vec2;
use web_sys as web;

/// Map a client-space position into canvas backing-store pixels.
///
/// When the canvas has no layout size yet, falls back to the plain
/// offset from the rect origin.
#[inline]
pub fn client_to_canvas(client: Vec2, rect_min: Vec2, rect_size: Vec2, canvas_size: Vec2) -> Vec2 {
    let local = client - rect_min;
    if rect_size.x > 0.0 && rect_size.y > 0.0 {
        local / rect_size * canvas_size
    } else {
        local
    }
}

/// Parse a slider value; rejects anything that is not a finite number.
#[inline]
pub fn parse_slider_value(raw: &str) -> Option<f32> {
    raw.trim().parse::<f32>().ok().filter(|v| v.is_finite())
}

#[inline]
pub fn format_param(value: f32) -> String {
    format!("{:.2}", value)
}

// ---------------- Event helpers ----------------
fn canvas_px(client_x: i32, client_y: i32, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    client_to_canvas(
        Vec2::new(client_x as f32, client_y as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
        Vec2::new(canvas.width() as f32, canvas.height() as f32),
    )
}

#[inline]
pub fn mouse_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    canvas_px(ev.client_x(), ev.client_y(), canvas)
}

/// Position of the first active touch, if any.
#[inline]
pub fn touch_canvas_px(ev: &web::TouchEvent, canvas: &web::HtmlCanvasElement) -> Option<Vec2> {
    ev.touches()
        .get(0)
        .map(|t| canvas_px(t.client_x(), t.client_y(), canvas))
}
