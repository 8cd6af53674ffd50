//! Global cursor location through CoreGraphics.

use core_graphics::event::CGEvent;
use core_graphics::event_source::{CGEventSource, CGEventSourceStateID};

/// CoreGraphics reports logical points, not backing pixels.
pub const NATIVE_UNITS_ARE_PIXELS: bool = false;

/// Current cursor location, top-left origin of the main display.
///
/// Creates a null event and reads its location, the same coordinates
/// `CGEventGetLocation` returns for real mouse events.
pub fn cursor_position() -> Option<(f64, f64)> {
    let source = CGEventSource::new(CGEventSourceStateID::CombinedSessionState).ok()?;
    let event = CGEvent::new(source).ok()?;
    let point = event.location();
    Some((point.x, point.y))
}
