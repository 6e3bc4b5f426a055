use std::ops::Range;

pub const WINDOW_TITLE: &str = "Backdrop";
pub const DEFAULT_WINDOW_WIDTH: i32 = 1280;   // Logical window width at startup
pub const DEFAULT_WINDOW_HEIGHT: i32 = 720;   // Logical window height at startup
pub const FPS: u32 = 60;                      // Frames per second

// Breakpoints on logical width, upper bounds inclusive
pub const NARROW_MAX_WIDTH: f32 = 420.0;
pub const MEDIUM_MAX_WIDTH: f32 = 900.0;

pub const NARROW_PARTICLE_COUNT: usize = 18;
pub const MEDIUM_PARTICLE_COUNT: usize = 28;
pub const WIDE_PARTICLE_COUNT: usize = 40;

pub const NARROW_RADIUS: Range<f32> = 3.0..13.0;
pub const WIDE_RADIUS: Range<f32> = 5.0..15.0;

// (horizontal, vertical) multipliers applied to a [-1, 1) draw
pub const NARROW_VELOCITY_SCALE: (f32, f32) = (2.0, 7.0);
pub const WIDE_VELOCITY_SCALE: (f32, f32) = (3.0, 9.0);

pub const GRADIENT_INNER_RATIO: f32 = 0.05;   // of min(width, height)
pub const GRADIENT_OUTER_RATIO: f32 = 0.8;    // of max(width, height)
pub const GRADIENT_BANDS: usize = 96;         // Concentric discs used to rasterize the gradient

pub const GLOW_MIN_BLUR: f32 = 8.0;
pub const GLOW_RADIUS_FACTOR: f32 = 3.0;
