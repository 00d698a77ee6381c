//! Converts a [`FrameView`] into a flat line list for the GPU.

use crate::constants::*;
use curve_core::{curve, FrameView, ARROW_HEAD_LENGTH, GRID_SIZE, POINT_RADIUS, TANGENT_LENGTH};
use glam::Vec2;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub pos: [f32; 2],
    pub color: [f32; 4],
}

#[derive(Default)]
pub struct LineBatch {
    pub vertices: Vec<LineVertex>,
}

impl LineBatch {
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    pub fn segment(&mut self, a: Vec2, b: Vec2, color: [f32; 4]) {
        self.vertices.push(LineVertex {
            pos: a.to_array(),
            color,
        });
        self.vertices.push(LineVertex {
            pos: b.to_array(),
            color,
        });
    }

    pub fn polyline(&mut self, points: &[Vec2], color: [f32; 4]) {
        for w in points.windows(2) {
            self.segment(w[0], w[1], color);
        }
    }

    pub fn dashed(&mut self, a: Vec2, b: Vec2, dash: f32, color: [f32; 4]) {
        let len = a.distance(b);
        if len <= f32::EPSILON {
            return;
        }
        let dir = (b - a) / len;
        let mut s = 0.0;
        while s < len {
            let e = (s + dash).min(len);
            self.segment(a + dir * s, a + dir * e, color);
            s += dash * 2.0;
        }
    }

    pub fn circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]) {
        let ring: Vec<Vec2> = (0..=CIRCLE_SEGMENTS)
            .map(|i| {
                let a = i as f32 / CIRCLE_SEGMENTS as f32 * std::f32::consts::TAU;
                center + radius * Vec2::new(a.cos(), a.sin())
            })
            .collect();
        self.polyline(&ring, color);
    }

    /// Same layers, order and toggles as the Canvas2D renderer. Text labels
    /// and the fade overlay are not drawn in line mode.
    pub fn build(&mut self, frame: &FrameView<'_>, size: Vec2) {
        self.clear();
        let profile = frame.profile;

        if profile.grid {
            let mut x = 0.0;
            while x <= size.x {
                self.segment(Vec2::new(x, 0.0), Vec2::new(x, size.y), GRID_COLOR);
                x += GRID_SIZE;
            }
            let mut y = 0.0;
            while y <= size.y {
                self.segment(Vec2::new(0.0, y), Vec2::new(size.x, y), GRID_COLOR);
                y += GRID_SIZE;
            }
        }

        let p = frame.control_points;
        if profile.control_lines {
            self.dashed(p[0], p[1], CONTROL_LINE_DASH, CONTROL_LINE_COLOR);
            self.dashed(p[2], p[3], CONTROL_LINE_DASH, CONTROL_LINE_COLOR);
        }

        self.polyline(frame.curve, CURVE_COLOR);

        for sample in frame.tangents.iter() {
            let tip = sample.point + sample.direction * TANGENT_LENGTH;
            self.segment(sample.point, tip, TANGENT_COLOR);
            self.circle(sample.point, TANGENT_DOT_RADIUS, TANGENT_COLOR);
            if profile.arrow_heads {
                for barb in curve::arrow_head(sample.point, tip, ARROW_HEAD_LENGTH) {
                    self.segment(tip, barb, TANGENT_COLOR);
                }
            }
        }

        for (i, point) in p.iter().enumerate() {
            let color = if i == 0 || i == 3 {
                END_POINT_COLOR
            } else {
                CONTROL_POINT_COLOR
            };
            self.circle(*point, POINT_RADIUS, color);
        }

        if frame.pointer.pressed {
            self.circle(frame.pointer.position(), POINTER_RING_RADIUS, POINTER_COLOR);
        }
    }
}
