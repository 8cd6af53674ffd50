//! Widget constants and default values.
//!
//! Eye offsets and radii are expressed in the 256 x 256 reference client
//! area (see [`crate::geometry`]) and scaled at runtime.

use crate::geometry::{EyeSpec, Point, Size};

// === Client Area ===

/// Default client area width in pixels.
pub const DEFAULT_CLIENT_WIDTH: f64 = 256.0;

/// Default client area height in pixels.
pub const DEFAULT_CLIENT_HEIGHT: f64 = 256.0;

/// Smallest client area the widget can be resized to.
pub const MIN_CLIENT_SIZE: f64 = 64.0;

/// Largest client area accepted from the command line.
pub const MAX_CLIENT_SIZE: f64 = 4096.0;

// === Pupils ===

/// Default pupil width at the reference size.
pub const DEFAULT_EYE_WIDTH: f64 = 25.0;

/// Default pupil height at the reference size.
pub const DEFAULT_EYE_HEIGHT: f64 = 50.0;

/// Default pupil size at the reference size.
pub const DEFAULT_PUPIL_SIZE: Size = Size::new(DEFAULT_EYE_WIDTH, DEFAULT_EYE_HEIGHT);

/// Left eye: centre offset and maximum pupil travel.
pub const LEFT_EYE: EyeSpec = EyeSpec::new(Point::new(-57.0, -15.0), Point::new(23.0, 62.0));

/// Right eye: centre offset and maximum pupil travel.
pub const RIGHT_EYE: EyeSpec = EyeSpec::new(Point::new(58.0, -20.0), Point::new(28.0, 67.0));

/// Both eyes, left first.
pub const EYES: [EyeSpec; 2] = [LEFT_EYE, RIGHT_EYE];

/// Extra room between the pupil's furthest reach and the eye outline.
pub const EYE_WHITE_MARGIN: f64 = 4.0;

/// Eye outline stroke width in pixels.
pub const EYE_OUTLINE_WIDTH: f32 = 3.0;

// === Polling ===

/// Default cursor poll interval in milliseconds.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 30;

/// Minimum accepted poll interval in milliseconds.
pub const MIN_POLL_INTERVAL_MS: u64 = 5;

/// Maximum accepted poll interval in milliseconds.
pub const MAX_POLL_INTERVAL_MS: u64 = 1000;

// === Chrome ===

/// Side of the square resize grip in the bottom-right corner.
pub const RESIZE_GRIP_SIZE: f32 = 14.0;

/// Window title (shown by task switchers only, the window is undecorated).
pub const WINDOW_TITLE: &str = "Hello Eyes";
