// Canvas2D drawing and DOM constants for the web frontend.

// Element ids
pub const CANVAS_ID: &str = "bezierCanvas";
pub const STIFFNESS_SLIDER_ID: &str = "stiffness";
pub const DAMPING_SLIDER_ID: &str = "damping";
pub const STIFFNESS_VALUE_ID: &str = "stiffness-value";
pub const DAMPING_VALUE_ID: &str = "damping-value";
pub const RESET_BUTTON_ID: &str = "reset-btn";
pub const FPS_ID: &str = "fps";
pub const QUALITY_ID: &str = "quality";
pub const WARNING_ID: &str = "performance-warning";
pub const CONTROLS_SELECTOR: &str = ".controls";

// Canvas sizing
pub const CANVAS_HEIGHT_PX: u32 = 500;
pub const CANVAS_CONTAINER_INSET_PX: u32 = 40; // container width minus this

// Palette
pub const BACKGROUND: &str = "rgb(0, 10, 20)";
pub const CURVE_COLOR: &str = "#00b4db";
pub const CONTROL_POINT_COLOR: &str = "#ff4081";
pub const TANGENT_COLOR: &str = "#ffcc00";
pub const END_POINT_COLOR: &str = "#4caf50";
pub const GRID_COLOR: &str = "rgba(255, 255, 255, 0.05)";
pub const CONTROL_LINE_COLOR: &str = "rgba(255, 255, 255, 0.3)";
pub const POINTER_FILL: &str = "rgba(255, 64, 129, 0.3)";

// FPS read-out colours per band
pub const FPS_BELOW_COLOR: &str = "#ff4081";
pub const FPS_ON_TARGET_COLOR: &str = "#4caf50";
pub const FPS_ABOVE_COLOR: &str = "#ffcc00";

// Stroke widths and sizes (pixels)
pub const CURVE_WIDTH: f64 = 4.0;
pub const TANGENT_WIDTH: f64 = 2.0;
pub const TANGENT_DOT_RADIUS: f64 = 4.0;
pub const CONTROL_LINE_DASH: f64 = 5.0;
pub const POINT_OUTLINE_WIDTH: f64 = 2.0;
pub const LABEL_OFFSET_Y: f64 = 20.0;
pub const POINTER_RING_RADIUS: f64 = 15.0;
pub const POINTER_LABEL_OFFSET_Y: f64 = 30.0;

pub const WARNING_TEXT: &str = "Quality lowered to maintain 60 FPS";
