//! Discrete render quality levels and their immutable profiles.

/// Ordered from cheapest to most detailed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum QualityLevel {
    Low,
    Medium,
    #[default]
    High,
}

/// What the renderer should draw at a given level.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QualityProfile {
    /// Curve segments; the renderer receives `sample_count + 1` points.
    pub sample_count: usize,
    /// Curve parameters where tangents are drawn, ascending.
    pub tangent_params: &'static [f32],
    pub grid: bool,
    pub control_lines: bool,
    pub arrow_heads: bool,
    pub fade_alpha: f32,
}

static LOW: QualityProfile = QualityProfile {
    sample_count: 50,
    tangent_params: &[0.5],
    grid: false,
    control_lines: false,
    arrow_heads: false,
    fade_alpha: 0.3,
};

static MEDIUM: QualityProfile = QualityProfile {
    sample_count: 100,
    tangent_params: &[0.0, 0.5, 1.0],
    grid: true,
    control_lines: true,
    arrow_heads: false,
    fade_alpha: 0.2,
};

static HIGH: QualityProfile = QualityProfile {
    sample_count: 200,
    tangent_params: &[0.0, 0.25, 0.5, 0.75, 1.0],
    grid: true,
    control_lines: true,
    arrow_heads: true,
    fade_alpha: 0.1,
};

impl QualityLevel {
    pub const ALL: [QualityLevel; 3] = [QualityLevel::Low, QualityLevel::Medium, QualityLevel::High];

    pub fn profile(self) -> &'static QualityProfile {
        match self {
            QualityLevel::Low => &LOW,
            QualityLevel::Medium => &MEDIUM,
            QualityLevel::High => &HIGH,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            QualityLevel::Low => "Low",
            QualityLevel::Medium => "Medium",
            QualityLevel::High => "High",
        }
    }

    /// One step cheaper, or `None` at the bottom.
    pub fn lower(self) -> Option<QualityLevel> {
        match self {
            QualityLevel::Low => None,
            QualityLevel::Medium => Some(QualityLevel::Low),
            QualityLevel::High => Some(QualityLevel::Medium),
        }
    }

    /// One step richer, or `None` at the top.
    pub fn raise(self) -> Option<QualityLevel> {
        match self {
            QualityLevel::Low => Some(QualityLevel::Medium),
            QualityLevel::Medium => Some(QualityLevel::High),
            QualityLevel::High => None,
        }
    }
}

impl std::fmt::Display for QualityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
