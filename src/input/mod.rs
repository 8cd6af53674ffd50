//! Input handling module.
//!
//! This module contains:
//! - cursor.rs: global cursor sampling with a window-local fallback

pub mod cursor;

pub use cursor::{CursorSource, CursorTracker, FixedCursor, SystemCursor};
