//! Structured notifications emitted by the governor.
//!
//! Front ends turn these into DOM updates or log lines; the governor itself
//! never touches presentation objects.

use crate::quality::QualityLevel;

/// Coarse classification of a measured frame rate against the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FpsBand {
    Below,
    OnTarget,
    Above,
}

impl FpsBand {
    /// `on_target_from` and `above_from` are the lowest rates in their bands.
    pub fn classify(fps: u32, on_target_from: u32, above_from: u32) -> FpsBand {
        if fps < on_target_from {
            FpsBand::Below
        } else if fps < above_from {
            FpsBand::OnTarget
        } else {
            FpsBand::Above
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            FpsBand::Below => "Performance warning: Below target 60 FPS",
            FpsBand::OnTarget => "Good: Maintaining 60 FPS",
            FpsBand::Above => "Excellent: Above 60 FPS",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GovernorEvent {
    /// Published once per telemetry window.
    Telemetry {
        fps: u32,
        band: FpsBand,
        level: QualityLevel,
    },
    QualityChanged {
        from: QualityLevel,
        to: QualityLevel,
    },
    WarningShown,
    WarningHidden,
}

pub trait GovernorObserver {
    fn on_event(&mut self, event: &GovernorEvent);
}

/// Discards every event.
impl GovernorObserver for () {
    fn on_event(&mut self, _event: &GovernorEvent) {}
}

/// Records every event in order.
impl GovernorObserver for Vec<GovernorEvent> {
    fn on_event(&mut self, event: &GovernorEvent) {
        self.push(*event);
    }
}
