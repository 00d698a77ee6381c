use crate::constants::{
    FOLLOW_FACTOR, FOLLOW_REFERENCE_FPS, MAX_SPRING_SPEED, SPRING_PARAM_MAX, SPRING_PARAM_MIN,
};
use crate::error::ConfigError;
use glam::Vec2;

/// Stiffness/damping pair shared by every spring body in a scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringParams {
    stiffness: f32,
    damping: f32,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            stiffness: crate::constants::DEFAULT_STIFFNESS,
            damping: crate::constants::DEFAULT_DAMPING,
        }
    }
}

impl SpringParams {
    pub fn new(stiffness: f32, damping: f32) -> Result<Self, ConfigError> {
        Ok(Self {
            stiffness: check_unit("stiffness", stiffness)?,
            damping: check_unit("damping", damping)?,
        })
    }

    pub fn stiffness(&self) -> f32 {
        self.stiffness
    }

    pub fn damping(&self) -> f32 {
        self.damping
    }

    pub fn with_stiffness(self, stiffness: f32) -> Result<Self, ConfigError> {
        Self::new(stiffness, self.damping)
    }

    pub fn with_damping(self, damping: f32) -> Result<Self, ConfigError> {
        Self::new(self.stiffness, damping)
    }
}

fn check_unit(name: &'static str, value: f32) -> Result<f32, ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NonFinite { name });
    }
    if !(SPRING_PARAM_MIN..=SPRING_PARAM_MAX).contains(&value) {
        return Err(ConfigError::OutOfRange {
            name,
            value: value as f64,
            min: SPRING_PARAM_MIN as f64,
            max: SPRING_PARAM_MAX as f64,
        });
    }
    Ok(value)
}

/// Point mass pulled toward `target` by a damped spring.
///
/// Integrated with semi-implicit Euler: velocity first, then position with
/// the new velocity. Speed is clamped to [`MAX_SPRING_SPEED`] after each step.
#[derive(Clone, Debug, PartialEq)]
pub struct SpringBody {
    pub position: Vec2,
    pub velocity: Vec2,
    pub target: Vec2,
    pub stiffness: f32,
    pub damping: f32,
}

impl SpringBody {
    /// Body at rest on its own target.
    pub fn at_rest(position: Vec2, params: SpringParams) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            target: position,
            stiffness: params.stiffness,
            damping: params.damping,
        }
    }

    pub fn apply_params(&mut self, params: SpringParams) {
        self.stiffness = params.stiffness;
        self.damping = params.damping;
    }

    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
    }

    pub fn step(&mut self, dt: f32) {
        let accel = -self.stiffness * (self.position - self.target) - self.damping * self.velocity;
        self.velocity += accel * dt;
        self.position += self.velocity * dt;

        let speed = self.velocity.length();
        if speed > MAX_SPRING_SPEED {
            self.velocity = self.velocity / speed * MAX_SPRING_SPEED;
        }
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

/// Exponential chase of `follower.target` toward `leader.position`.
///
/// Scaled by `dt * 60` so the factor reads as "per 60 Hz frame".
#[inline]
pub fn follow(follower: &mut SpringBody, leader: &SpringBody, dt: f32) {
    follower.target +=
        (leader.position - follower.target) * FOLLOW_FACTOR * dt * FOLLOW_REFERENCE_FPS;
}
