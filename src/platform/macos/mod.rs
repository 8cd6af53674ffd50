//! macOS-specific implementation using CoreGraphics.

pub mod cursor;
