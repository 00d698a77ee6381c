//! Scene state and the per-tick controller shared by the front ends.
//!
//! The controller owns everything the tick touches: control points, the two
//! spring bodies, the last pointer state and the governor. Input handlers only
//! write pointer state and spring targets; the next tick reads them.

use crate::clock::Clock;
use crate::constants::{default_control_points, PHYSICS_DT_SEC};
use crate::curve::{self, TangentSamples};
use crate::error::ConfigError;
use crate::governor::{FrameGate, FrameGovernor};
use crate::quality::{QualityLevel, QualityProfile};
use crate::spring::{follow, SpringBody, SpringParams};
use crate::telemetry::GovernorObserver;
use glam::Vec2;

#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub pressed: bool,
}

impl PointerState {
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Pointer and touch input in canvas-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerInput {
    MouseMove { x: f32, y: f32 },
    MouseDown,
    MouseUp,
    MouseLeave,
    TouchStart { x: f32, y: f32 },
    TouchMove { x: f32, y: f32 },
}

/// Everything a renderer needs for one accepted frame.
#[derive(Clone, Copy, Debug)]
pub struct FrameView<'a> {
    pub control_points: &'a [Vec2; 4],
    pub level: QualityLevel,
    pub profile: &'static QualityProfile,
    /// `profile.sample_count + 1` points from P0 to P3.
    pub curve: &'a [Vec2],
    pub tangents: &'a TangentSamples,
    pub pointer: PointerState,
}

pub trait CurveRenderer {
    fn render(&mut self, frame: &FrameView<'_>);
}

/// Control points P0..P3, the springs driving P1/P2, and the pointer.
#[derive(Clone, Debug)]
pub struct SceneState {
    pub control_points: [Vec2; 4],
    pub springs: [SpringBody; 2],
    pub pointer: PointerState,
    params: SpringParams,
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new(SpringParams::default())
    }
}

impl SceneState {
    pub fn new(params: SpringParams) -> Self {
        let control_points = default_control_points();
        Self {
            springs: [
                SpringBody::at_rest(control_points[1], params),
                SpringBody::at_rest(control_points[2], params),
            ],
            control_points,
            pointer: PointerState::default(),
            params,
        }
    }

    pub fn params(&self) -> SpringParams {
        self.params
    }

    /// Default layout with the current spring parameters.
    pub fn reinitialize(&mut self) {
        let pointer = self.pointer;
        *self = Self::new(self.params);
        self.pointer = pointer;
    }

    pub fn set_params(&mut self, params: SpringParams) {
        self.params = params;
        for s in &mut self.springs {
            s.apply_params(params);
        }
    }

    pub fn set_stiffness(&mut self, stiffness: f32) -> Result<(), ConfigError> {
        let params = self.params.with_stiffness(stiffness)?;
        self.set_params(params);
        Ok(())
    }

    pub fn set_damping(&mut self, damping: f32) -> Result<(), ConfigError> {
        let params = self.params.with_damping(damping)?;
        self.set_params(params);
        Ok(())
    }

    /// Apply one input event. Only spring 0's target is ever driven by input.
    pub fn apply_pointer(&mut self, input: PointerInput) {
        match input {
            PointerInput::MouseMove { x, y } => {
                if !self.move_pointer(x, y) {
                    return;
                }
                if self.pointer.pressed {
                    self.springs[0].set_target(Vec2::new(x, y));
                }
            }
            PointerInput::MouseDown => self.pointer.pressed = true,
            PointerInput::MouseUp | PointerInput::MouseLeave => self.pointer.pressed = false,
            PointerInput::TouchStart { x, y } => {
                if self.move_pointer(x, y) {
                    self.pointer.pressed = true;
                }
            }
            PointerInput::TouchMove { x, y } => {
                if self.move_pointer(x, y) {
                    self.springs[0].set_target(Vec2::new(x, y));
                }
            }
        }
    }

    /// Snap spring 0's target to the last known pointer position.
    pub fn recalculate(&mut self) {
        self.springs[0].set_target(self.pointer.position());
    }

    /// Integrate both springs, publish them as P1/P2, then let spring 1's
    /// target trail spring 0.
    pub fn step_physics(&mut self, dt: f32) {
        for s in &mut self.springs {
            s.step(dt);
        }
        self.control_points[1] = self.springs[0].position;
        self.control_points[2] = self.springs[1].position;

        let [lead, trail] = &mut self.springs;
        follow(trail, lead, dt);
    }

    fn move_pointer(&mut self, x: f32, y: f32) -> bool {
        if !(x.is_finite() && y.is_finite()) {
            log::warn!("[input] ignoring non-finite pointer ({}, {})", x, y);
            return false;
        }
        self.pointer.x = x;
        self.pointer.y = y;
        true
    }
}

/// Owns the scene and governor and runs one tick per host callback.
#[derive(Clone, Debug, Default)]
pub struct SceneController {
    pub scene: SceneState,
    pub governor: FrameGovernor,
    curve_buf: Vec<Vec2>,
    tangent_buf: TangentSamples,
}

impl SceneController {
    pub fn new(scene: SceneState, governor: FrameGovernor) -> Self {
        Self {
            scene,
            governor,
            curve_buf: Vec::new(),
            tangent_buf: TangentSamples::new(),
        }
    }

    /// Gate, simulate, draw, measure. Returns `true` when a frame was drawn.
    ///
    /// Physics only advances on accepted frames and always by the fixed
    /// [`PHYSICS_DT_SEC`], never by measured elapsed time.
    pub fn tick<C, R, O>(&mut self, clock: &mut C, renderer: &mut R, observer: &mut O) -> bool
    where
        C: Clock + ?Sized,
        R: CurveRenderer + ?Sized,
        O: GovernorObserver + ?Sized,
    {
        let now = clock.now_ms();
        let ticket = match self.governor.should_render(now) {
            FrameGate::Skip => return false,
            FrameGate::Render(ticket) => ticket,
        };

        let level = self.governor.level();
        let profile = level.profile();

        self.scene.step_physics(PHYSICS_DT_SEC);
        curve::sample_into(
            &self.scene.control_points,
            profile.sample_count,
            &mut self.curve_buf,
        );
        self.tangent_buf = curve::tangent_samples(&self.scene.control_points, profile.tangent_params);

        renderer.render(&FrameView {
            control_points: &self.scene.control_points,
            level,
            profile,
            curve: &self.curve_buf,
            tangents: &self.tangent_buf,
            pointer: self.scene.pointer,
        });

        let end = clock.now_ms();
        ticket.finish(&mut self.governor, end, observer);
        true
    }

    /// Default control points and full quality.
    pub fn reset(&mut self) {
        self.scene.reinitialize();
        self.governor.reset();
        log::info!("[scene] reset");
    }
}
