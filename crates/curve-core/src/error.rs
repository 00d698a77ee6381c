use thiserror::Error;

/// Rejected configuration values coming from sliders, keys or builders.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("{name} must be a finite number")]
    NonFinite { name: &'static str },
    #[error("invalid governor config: {0}")]
    InvalidGovernor(String),
}
