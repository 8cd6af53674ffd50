//! Pure helpers used by the app. Everything here except [`platform`] and [`ui`]
//! is free of windowing and platform FFI so tests can run as normal
//! integration tests.

pub mod config;
pub mod error;
pub mod events;
pub mod geometry;
pub mod handlers;
pub mod input;
pub mod logging;
pub mod model;
pub mod platform;
pub mod ticker;
pub mod ui;

// Re-export model types for convenience
pub use model::WidgetState;

// Re-export event types for convenience
pub use events::{AppEvent, EventBus, EventPublisher};

pub use error::{EyesError, Result};

/// Clamp a value to [lo, hi]
pub fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    if v < lo {
        lo
    } else if v > hi {
        hi
    } else {
        v
    }
}
