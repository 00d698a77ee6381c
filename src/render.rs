use crate::constants::*;
use curve_core::{curve, FrameView, ARROW_HEAD_LENGTH, GRID_SIZE, POINT_RADIUS, TANGENT_LENGTH};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Canvas2D drawing of one [`FrameView`].
pub struct CanvasRenderer {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    dash: js_sys::Array,
    no_dash: js_sys::Array,
}

impl CanvasRenderer {
    /// Grab an opaque 2D context; no alpha channel keeps compositing cheap.
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let opts = js_sys::Object::new();
        js_sys::Reflect::set(&opts, &JsValue::from_str("alpha"), &JsValue::FALSE)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let ctx = canvas
            .get_context_with_context_options("2d", &opts)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let dash = js_sys::Array::of2(
            &JsValue::from_f64(CONTROL_LINE_DASH),
            &JsValue::from_f64(CONTROL_LINE_DASH),
        );
        Ok(Self {
            canvas,
            ctx,
            dash,
            no_dash: js_sys::Array::new(),
        })
    }

    fn clear(&self, fade_alpha: f32) {
        let (w, h) = (self.canvas.width() as f64, self.canvas.height() as f64);
        self.ctx.set_fill_style_str(BACKGROUND);
        self.ctx.fill_rect(0.0, 0.0, w, h);
        if fade_alpha > 0.0 {
            self.ctx
                .set_fill_style_str(&format!("rgba(0, 10, 20, {})", fade_alpha));
            self.ctx.fill_rect(0.0, 0.0, w, h);
        }
    }

    fn draw_grid(&self) {
        let (w, h) = (self.canvas.width() as f64, self.canvas.height() as f64);
        let step = GRID_SIZE as f64;
        self.ctx.set_stroke_style_str(GRID_COLOR);
        self.ctx.set_line_width(1.0);
        let mut x = 0.0;
        while x <= w {
            self.segment(Vec2::new(x as f32, 0.0), Vec2::new(x as f32, h as f32));
            x += step;
        }
        let mut y = 0.0;
        while y <= h {
            self.segment(Vec2::new(0.0, y as f32), Vec2::new(w as f32, y as f32));
            y += step;
        }
    }

    fn draw_control_lines(&self, p: &[Vec2; 4]) {
        self.ctx.set_stroke_style_str(CONTROL_LINE_COLOR);
        self.ctx.set_line_width(1.0);
        _ = self.ctx.set_line_dash(&self.dash);
        self.segment(p[0], p[1]);
        self.segment(p[2], p[3]);
        _ = self.ctx.set_line_dash(&self.no_dash);
    }

    fn draw_curve(&self, points: &[Vec2]) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.set_stroke_style_str(CURVE_COLOR);
        self.ctx.set_line_width(CURVE_WIDTH);
        self.ctx.set_line_cap("round");
        self.ctx.set_line_join("round");
        self.ctx.stroke();
    }

    fn draw_tangents(&self, frame: &FrameView<'_>) {
        for sample in frame.tangents.iter() {
            let tip = sample.point + sample.direction * TANGENT_LENGTH;
            self.ctx.set_stroke_style_str(TANGENT_COLOR);
            self.ctx.set_line_width(TANGENT_WIDTH);
            self.segment(sample.point, tip);

            self.ctx.begin_path();
            _ = self.ctx.arc(
                sample.point.x as f64,
                sample.point.y as f64,
                TANGENT_DOT_RADIUS,
                0.0,
                TAU,
            );
            self.ctx.set_fill_style_str(TANGENT_COLOR);
            self.ctx.fill();

            if frame.profile.arrow_heads {
                let [a, b] = curve::arrow_head(sample.point, tip, ARROW_HEAD_LENGTH);
                self.ctx.begin_path();
                self.ctx.move_to(tip.x as f64, tip.y as f64);
                self.ctx.line_to(a.x as f64, a.y as f64);
                self.ctx.move_to(tip.x as f64, tip.y as f64);
                self.ctx.line_to(b.x as f64, b.y as f64);
                self.ctx.stroke();
            }
        }
    }

    fn draw_control_points(&self, points: &[Vec2; 4]) {
        for (i, p) in points.iter().enumerate() {
            let (x, y) = (p.x as f64, p.y as f64);
            self.ctx.begin_path();
            _ = self.ctx.arc(x, y, POINT_RADIUS as f64, 0.0, TAU);
            let fill = if i == 0 || i == 3 {
                END_POINT_COLOR
            } else {
                CONTROL_POINT_COLOR
            };
            self.ctx.set_fill_style_str(fill);
            self.ctx.fill();
            self.ctx.set_stroke_style_str("white");
            self.ctx.set_line_width(POINT_OUTLINE_WIDTH);
            self.ctx.stroke();

            self.ctx.set_fill_style_str("white");
            self.ctx.set_font("bold 14px Arial");
            self.ctx.set_text_align("center");
            self.ctx.set_text_baseline("middle");
            _ = self.ctx.fill_text(&format!("P{}", i), x, y - LABEL_OFFSET_Y);
        }
    }

    fn draw_pointer(&self, pointer: Vec2) {
        let (x, y) = (pointer.x as f64, pointer.y as f64);
        self.ctx.begin_path();
        _ = self.ctx.arc(x, y, POINTER_RING_RADIUS, 0.0, TAU);
        self.ctx.set_fill_style_str(POINTER_FILL);
        self.ctx.fill();
        self.ctx.set_stroke_style_str(CONTROL_POINT_COLOR);
        self.ctx.set_line_width(POINT_OUTLINE_WIDTH);
        self.ctx.stroke();

        self.ctx.set_font("12px Arial");
        self.ctx.set_fill_style_str("white");
        self.ctx.set_text_align("center");
        _ = self.ctx.fill_text("Drag", x, y + POINTER_LABEL_OFFSET_Y);
    }

    #[inline]
    fn segment(&self, a: Vec2, b: Vec2) {
        self.ctx.begin_path();
        self.ctx.move_to(a.x as f64, a.y as f64);
        self.ctx.line_to(b.x as f64, b.y as f64);
        self.ctx.stroke();
    }
}

impl curve_core::CurveRenderer for CanvasRenderer {
    fn render(&mut self, frame: &FrameView<'_>) {
        let profile = frame.profile;
        self.clear(profile.fade_alpha);
        if profile.grid {
            self.draw_grid();
        }
        if profile.control_lines {
            self.draw_control_lines(frame.control_points);
        }
        self.draw_curve(frame.curve);
        self.draw_tangents(frame);
        self.draw_control_points(frame.control_points);
        if frame.pointer.pressed {
            self.draw_pointer(frame.pointer.position());
        }
    }
}
