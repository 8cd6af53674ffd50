//! Platform-specific implementations.
//!
//! Each platform exposes a single `cursor_position()` returning the global
//! cursor location in the platform's native units. Platforms without a
//! global query fall back to [`cursor_position`] returning `None`.

#[cfg(target_os = "macos")]
pub mod macos;

#[cfg(target_os = "windows")]
pub mod windows;

// Re-export the current platform's query for convenience
#[cfg(target_os = "macos")]
pub use macos::cursor::{cursor_position, NATIVE_UNITS_ARE_PIXELS};

#[cfg(target_os = "windows")]
pub use windows::cursor::{cursor_position, NATIVE_UNITS_ARE_PIXELS};

/// No global cursor query on this platform.
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
pub fn cursor_position() -> Option<(f64, f64)> {
    None
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
pub const NATIVE_UNITS_ARE_PIXELS: bool = false;
