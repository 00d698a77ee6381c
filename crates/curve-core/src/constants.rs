use glam::Vec2;

// Shared physics/pacing tuning constants used by both web and native frontends.

// Spring defaults (slider range is 0..=1 for both)
pub const DEFAULT_STIFFNESS: f32 = 0.1;
pub const DEFAULT_DAMPING: f32 = 0.9;
pub const SPRING_PARAM_MIN: f32 = 0.0;
pub const SPRING_PARAM_MAX: f32 = 1.0;

// Integrator
pub const PHYSICS_DT_SEC: f32 = 1.0 / 60.0; // fixed step, independent of frame jitter
pub const MAX_SPRING_SPEED: f32 = 500.0; // units per second
pub const FOLLOW_FACTOR: f32 = 0.3; // body 2 target chases body 1 position
pub const FOLLOW_REFERENCE_FPS: f32 = 60.0;

// Frame pacing
pub const TARGET_FPS: f64 = 60.0;
pub const SLOW_FRAME_MS: f64 = 18.0; // below ~55 FPS
pub const FAST_FRAME_MS: f64 = 14.0; // above ~70 FPS
pub const SLOW_FRAMES_TO_DROP: f32 = 5.0; // drop when score exceeds this
pub const FAST_FRAMES_TO_RAISE: f32 = 30.0; // raise when score exceeds this
pub const GOOD_FRAME_DECAY: f32 = 0.5;

// Telemetry
pub const FPS_WINDOW_MS: f64 = 1000.0;
pub const WARNING_COOLDOWN_MS: f64 = 5000.0;
pub const RECOVERY_FPS: u32 = 58; // also the lower edge of the on-target band
pub const ABOVE_TARGET_FPS: u32 = 62;

// Default curve layout in canvas pixels: P0, P1, P2, P3
pub const DEFAULT_CONTROL_POINTS: [[f32; 2]; 4] =
    [[100.0, 300.0], [200.0, 100.0], [400.0, 100.0], [500.0, 300.0]];

// Shared drawing sizes (pixels)
pub const TANGENT_LENGTH: f32 = 30.0;
pub const ARROW_HEAD_LENGTH: f32 = 10.0;
pub const POINT_RADIUS: f32 = 8.0;
pub const GRID_SIZE: f32 = 50.0;

#[inline]
pub fn default_control_points() -> [Vec2; 4] {
    DEFAULT_CONTROL_POINTS.map(Vec2::from)
}
