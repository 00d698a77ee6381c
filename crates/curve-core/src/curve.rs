//! Cubic Bezier evaluation helpers.
//!
//! Everything here is pure and allocation-free except [`sample_into`], which
//! reuses the caller's buffer. Inputs are assumed finite.

use glam::Vec2;
use smallvec::SmallVec;

/// Point and unit tangent at one curve parameter, as consumed by renderers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TangentSample {
    pub t: f32,
    pub point: Vec2,
    pub direction: Vec2,
}

/// Tangent samples for one frame; the largest profile asks for five.
pub type TangentSamples = SmallVec<[TangentSample; 5]>;

/// Position on the curve at `t`.
#[inline]
pub fn evaluate(t: f32, p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> Vec2 {
    let u = 1.0 - t;
    u * u * u * p0 + 3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t * p3
}

/// Unit tangent at `t`. Coincident control points yield `Vec2::ZERO`.
#[inline]
pub fn tangent(t: f32, p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> Vec2 {
    let u = 1.0 - t;
    let d = 3.0 * u * u * (p1 - p0) + 6.0 * u * t * (p2 - p1) + 3.0 * t * t * (p3 - p2);
    let len = d.length();
    d / if len == 0.0 { 1.0 } else { len }
}

/// Fill `out` with `segments + 1` points at `t = i / segments`.
pub fn sample_into(points: &[Vec2; 4], segments: usize, out: &mut Vec<Vec2>) {
    out.clear();
    let [p0, p1, p2, p3] = *points;
    if segments == 0 {
        out.push(p0);
        return;
    }
    out.reserve(segments + 1);
    for i in 0..=segments {
        let t = i as f32 / segments as f32;
        out.push(evaluate(t, p0, p1, p2, p3));
    }
}

pub fn tangent_samples(points: &[Vec2; 4], params: &[f32]) -> TangentSamples {
    let [p0, p1, p2, p3] = *points;
    params
        .iter()
        .map(|&t| TangentSample {
            t,
            point: evaluate(t, p0, p1, p2, p3),
            direction: tangent(t, p0, p1, p2, p3),
        })
        .collect()
}

/// End points of the two barbs of an arrow pointing from `from` to `to`.
///
/// Barbs sit at ±30° either side of the shaft, `head_len` back from `to`.
pub fn arrow_head(from: Vec2, to: Vec2, head_len: f32) -> [Vec2; 2] {
    let d = to - from;
    let angle = d.y.atan2(d.x);
    let spread = std::f32::consts::FRAC_PI_6;
    let barb = |a: f32| to - head_len * Vec2::new(a.cos(), a.sin());
    [barb(angle - spread), barb(angle + spread)]
}
