// Native line-renderer palette (linear RGBA written straight to a non-sRGB target).

pub const BACKGROUND: [f64; 3] = [0.0, 10.0 / 255.0, 20.0 / 255.0];
pub const CURVE_COLOR: [f32; 4] = [0.0, 0.706, 0.859, 1.0]; // #00b4db
pub const CONTROL_POINT_COLOR: [f32; 4] = [1.0, 0.251, 0.506, 1.0]; // #ff4081
pub const TANGENT_COLOR: [f32; 4] = [1.0, 0.8, 0.0, 1.0]; // #ffcc00
pub const END_POINT_COLOR: [f32; 4] = [0.298, 0.686, 0.314, 1.0]; // #4caf50
pub const GRID_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 0.05];
pub const CONTROL_LINE_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 0.3];
pub const POINTER_COLOR: [f32; 4] = [1.0, 0.251, 0.506, 0.6];

// Geometry (pixels)
pub const CONTROL_LINE_DASH: f32 = 5.0;
pub const TANGENT_DOT_RADIUS: f32 = 4.0;
pub const POINTER_RING_RADIUS: f32 = 15.0;
pub const CIRCLE_SEGMENTS: usize = 20;

// Window
pub const WINDOW_WIDTH: u32 = 640;
pub const WINDOW_HEIGHT: u32 = 500;
pub const INITIAL_VERTEX_CAPACITY: usize = 4096;

// Keyboard nudges for the spring parameters
pub const PARAM_NUDGE: f32 = 0.05;
