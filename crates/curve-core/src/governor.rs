//! Frame pacing and adaptive quality.
//!
//! The governor gates frames to a fixed interval and, from the measured cost
//! of each rendered frame, walks a [`QualityLevel`] up or down. Dropping is
//! quick (a handful of slow frames) while raising needs a long run of fast
//! ones, so the level does not flap.

use crate::constants::*;
use crate::error::ConfigError;
use crate::quality::{QualityLevel, QualityProfile};
use crate::telemetry::{FpsBand, GovernorEvent, GovernorObserver};

#[derive(Clone, Debug, PartialEq)]
pub struct GovernorConfig {
    pub target_fps: f64,
    /// Frames costing more than this count as slow.
    pub slow_frame_ms: f64,
    /// Frames costing less than this count as fast.
    pub fast_frame_ms: f64,
    pub slow_frames_to_drop: f32,
    pub fast_frames_to_raise: f32,
    pub fps_window_ms: f64,
    pub warning_cooldown_ms: f64,
    /// Lower edge of the on-target band; windows at or above it start recovery.
    pub recovery_fps: u32,
    pub above_target_fps: u32,
    pub initial_level: QualityLevel,
}

impl Default for GovernorConfig {
    fn default() -> Self {
        Self {
            target_fps: TARGET_FPS,
            slow_frame_ms: SLOW_FRAME_MS,
            fast_frame_ms: FAST_FRAME_MS,
            slow_frames_to_drop: SLOW_FRAMES_TO_DROP,
            fast_frames_to_raise: FAST_FRAMES_TO_RAISE,
            fps_window_ms: FPS_WINDOW_MS,
            warning_cooldown_ms: WARNING_COOLDOWN_MS,
            recovery_fps: RECOVERY_FPS,
            above_target_fps: ABOVE_TARGET_FPS,
            initial_level: QualityLevel::High,
        }
    }
}

impl GovernorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.target_fps.is_finite() && self.target_fps > 0.0) {
            return Err(ConfigError::InvalidGovernor(format!(
                "target_fps must be positive, got {}",
                self.target_fps
            )));
        }
        if !(self.fast_frame_ms < self.slow_frame_ms) {
            return Err(ConfigError::InvalidGovernor(format!(
                "fast_frame_ms ({}) must be below slow_frame_ms ({})",
                self.fast_frame_ms, self.slow_frame_ms
            )));
        }
        for (name, frames) in [
            ("slow_frames_to_drop", self.slow_frames_to_drop),
            ("fast_frames_to_raise", self.fast_frames_to_raise),
        ] {
            if !(frames.is_finite() && frames >= 0.0) {
                return Err(ConfigError::InvalidGovernor(format!(
                    "{} must be a non-negative frame count, got {}",
                    name, frames
                )));
            }
        }
        if self.recovery_fps >= self.above_target_fps {
            return Err(ConfigError::InvalidGovernor(format!(
                "recovery_fps ({}) must be below above_target_fps ({})",
                self.recovery_fps, self.above_target_fps
            )));
        }
        if !(self.fps_window_ms > 0.0) || !(self.warning_cooldown_ms >= 0.0) {
            return Err(ConfigError::InvalidGovernor(
                "fps window must be positive and cooldown non-negative".to_string(),
            ));
        }
        Ok(())
    }

    pub fn frame_interval_ms(&self) -> f64 {
        1000.0 / self.target_fps
    }

    /// Band for a measured rate, using this config's thresholds.
    pub fn classify_fps(&self, fps: u32) -> FpsBand {
        FpsBand::classify(fps, self.recovery_fps, self.above_target_fps)
    }
}

/// Outcome of [`FrameGovernor::should_render`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FrameGate {
    /// Too early; the host should try again on its next tick.
    Skip,
    Render(FrameTicket),
}

impl FrameGate {
    pub fn is_render(&self) -> bool {
        matches!(self, FrameGate::Render(_))
    }
}

/// Proof that a frame was accepted, carrying its start time.
#[must_use = "finish the ticket so the governor can measure the frame"]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTicket {
    pub frame_start_ms: f64,
}

impl FrameTicket {
    /// Report the frame as done at `frame_end_ms`.
    pub fn finish<O: GovernorObserver + ?Sized>(
        self,
        governor: &mut FrameGovernor,
        frame_end_ms: f64,
        observer: &mut O,
    ) {
        let frame_time = (frame_end_ms - self.frame_start_ms).max(0.0);
        governor.on_complete(frame_time, frame_end_ms, observer);
    }
}

#[derive(Clone, Debug)]
pub struct FrameGovernor {
    config: GovernorConfig,
    target_interval_ms: f64,
    last_frame_start_ms: f64,
    slow_frame_score: f32,
    fast_frame_score: f32,
    level: QualityLevel,
    warning_active: bool,
    warning_clear_at_ms: Option<f64>,
    frames_in_window: u32,
    window_start_ms: f64,
    measured_fps: Option<u32>,
}

impl Default for FrameGovernor {
    fn default() -> Self {
        Self::with_valid_config(GovernorConfig::default())
    }
}

impl FrameGovernor {
    pub fn new(config: GovernorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: GovernorConfig) -> Self {
        Self {
            target_interval_ms: config.frame_interval_ms(),
            last_frame_start_ms: 0.0,
            slow_frame_score: 0.0,
            fast_frame_score: 0.0,
            level: config.initial_level,
            warning_active: false,
            warning_clear_at_ms: None,
            frames_in_window: 0,
            window_start_ms: 0.0,
            measured_fps: None,
            config,
        }
    }

    pub fn config(&self) -> &GovernorConfig {
        &self.config
    }

    pub fn level(&self) -> QualityLevel {
        self.level
    }

    pub fn profile(&self) -> &'static QualityProfile {
        self.level.profile()
    }

    pub fn slow_frame_score(&self) -> f32 {
        self.slow_frame_score
    }

    pub fn fast_frame_score(&self) -> f32 {
        self.fast_frame_score
    }

    pub fn warning_active(&self) -> bool {
        self.warning_active
    }

    /// FPS from the last closed telemetry window.
    pub fn measured_fps(&self) -> Option<u32> {
        self.measured_fps
    }

    pub fn last_frame_start_ms(&self) -> f64 {
        self.last_frame_start_ms
    }

    pub fn target_interval_ms(&self) -> f64 {
        self.target_interval_ms
    }

    /// Fixed-interval gate.
    ///
    /// On acceptance the frame start is snapped back onto the interval grid
    /// (`now - elapsed % interval`) instead of `now`, so lateness in one frame
    /// does not push every later frame back.
    pub fn should_render(&mut self, now_ms: f64) -> FrameGate {
        let elapsed = now_ms - self.last_frame_start_ms;
        if !(elapsed >= self.target_interval_ms) {
            return FrameGate::Skip;
        }
        self.last_frame_start_ms = now_ms - elapsed % self.target_interval_ms;
        FrameGate::Render(FrameTicket {
            frame_start_ms: now_ms,
        })
    }

    /// Feed the measured cost of one rendered frame.
    pub fn on_complete<O: GovernorObserver + ?Sized>(
        &mut self,
        frame_time_ms: f64,
        now_ms: f64,
        observer: &mut O,
    ) {
        self.frames_in_window += 1;

        if frame_time_ms > self.config.slow_frame_ms {
            self.slow_frame_score += 1.0;
            self.fast_frame_score = 0.0;
            if self.slow_frame_score > self.config.slow_frames_to_drop {
                if let Some(lower) = self.level.lower() {
                    self.change_level(lower, observer);
                    self.slow_frame_score = 0.0;
                    self.show_warning(observer);
                }
            }
        } else if frame_time_ms < self.config.fast_frame_ms {
            self.fast_frame_score += 1.0;
            self.slow_frame_score = (self.slow_frame_score - 1.0).max(0.0);
            if self.fast_frame_score > self.config.fast_frames_to_raise {
                if let Some(higher) = self.level.raise() {
                    self.change_level(higher, observer);
                    self.fast_frame_score = 0.0;
                }
            }
        } else {
            self.slow_frame_score = (self.slow_frame_score - GOOD_FRAME_DECAY).max(0.0);
            self.fast_frame_score = (self.fast_frame_score - GOOD_FRAME_DECAY).max(0.0);
        }

        self.close_window_if_due(now_ms, observer);
        self.clear_warning_if_due(now_ms, observer);
    }

    /// Back to full quality with clean hysteresis counters.
    pub fn reset(&mut self) {
        if self.level != QualityLevel::High {
            log::info!("[governor] reset quality {} -> High", self.level);
        }
        self.level = QualityLevel::High;
        self.slow_frame_score = 0.0;
        self.fast_frame_score = 0.0;
    }

    fn change_level<O: GovernorObserver + ?Sized>(&mut self, to: QualityLevel, observer: &mut O) {
        let from = self.level;
        self.level = to;
        if to < from {
            log::info!("[governor] lowered quality to {} for performance", to);
        } else {
            log::info!("[governor] raised quality to {}", to);
        }
        observer.on_event(&GovernorEvent::QualityChanged { from, to });
    }

    fn show_warning<O: GovernorObserver + ?Sized>(&mut self, observer: &mut O) {
        // A fresh drop invalidates any recovery already in progress.
        self.warning_clear_at_ms = None;
        if !self.warning_active {
            self.warning_active = true;
            log::warn!("[governor] quality lowered to maintain {} FPS", self.config.target_fps);
            observer.on_event(&GovernorEvent::WarningShown);
        }
    }

    fn close_window_if_due<O: GovernorObserver + ?Sized>(&mut self, now_ms: f64, observer: &mut O) {
        let span = now_ms - self.window_start_ms;
        if !(span > self.config.fps_window_ms) {
            return;
        }
        let fps = (self.frames_in_window as f64 * 1000.0 / span).round() as u32;
        self.measured_fps = Some(fps);
        self.frames_in_window = 0;
        self.window_start_ms = now_ms;

        observer.on_event(&GovernorEvent::Telemetry {
            fps,
            band: self.config.classify_fps(fps),
            level: self.level,
        });

        if fps >= self.config.recovery_fps
            && self.warning_active
            && self.warning_clear_at_ms.is_none()
        {
            self.warning_clear_at_ms = Some(now_ms + self.config.warning_cooldown_ms);
        }
    }

    fn clear_warning_if_due<O: GovernorObserver + ?Sized>(&mut self, now_ms: f64, observer: &mut O) {
        match self.warning_clear_at_ms {
            Some(at) if now_ms >= at => {
                self.warning_clear_at_ms = None;
                self.warning_active = false;
                log::info!("[governor] performance recovered; hiding warning");
                observer.on_event(&GovernorEvent::WarningHidden);
            }
            _ => {}
        }
    }
}
