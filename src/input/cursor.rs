//! Global cursor sampling.
//!
//! The pupils follow the cursor anywhere on screen, so the widget needs the
//! global position, not just pointer events delivered to its own window.
//! [`SystemCursor`] asks the OS directly where it can. Where it can't,
//! [`CursorTracker`] falls back to the pointer position the window itself
//! reports, and finally to the last position it saw.

use crate::geometry::Point;
use crate::platform;

/// Something that can report the cursor position in logical screen points.
pub trait CursorSource {
    fn position(&self) -> Option<Point>;
}

/// The operating system cursor.
#[derive(Debug, Clone, Copy)]
pub struct SystemCursor {
    pixels_per_point: f64,
}

impl SystemCursor {
    pub fn new() -> Self {
        Self {
            pixels_per_point: 1.0,
        }
    }

    /// Display scale used to turn physical pixels into points.
    pub fn set_pixels_per_point(&mut self, pixels_per_point: f64) {
        if pixels_per_point.is_finite() && pixels_per_point > 0.0 {
            self.pixels_per_point = pixels_per_point;
        }
    }
}

impl Default for SystemCursor {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorSource for SystemCursor {
    fn position(&self) -> Option<Point> {
        let (x, y) = platform::cursor_position()?;
        if platform::NATIVE_UNITS_ARE_PIXELS {
            Some(Point::new(x / self.pixels_per_point, y / self.pixels_per_point))
        } else {
            Some(Point::new(x, y))
        }
    }
}

/// A cursor pinned to one position (or absent). Used by tests and demos.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedCursor(pub Option<Point>);

impl CursorSource for FixedCursor {
    fn position(&self) -> Option<Point> {
        self.0
    }
}

/// Combines a [`CursorSource`] with window-local pointer fallbacks.
#[derive(Debug)]
pub struct CursorTracker<S> {
    source: S,
    last_known: Option<Point>,
}

impl<S: CursorSource> CursorTracker<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            last_known: None,
        }
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Last position returned by [`sample`](Self::sample).
    pub fn last_known(&self) -> Option<Point> {
        self.last_known
    }

    /// Best available cursor position.
    ///
    /// `window_pointer` is the pointer position in screen points as seen by
    /// the widget's own window, if the pointer is over it.
    pub fn sample(&mut self, window_pointer: Option<Point>) -> Option<Point> {
        if let Some(p) = self.source.position().or(window_pointer) {
            self.last_known = Some(p);
        }
        self.last_known
    }
}
