//! Global cursor location through `GetCursorPos`.

use windows::Win32::Foundation::POINT;
use windows::Win32::UI::WindowsAndMessaging::GetCursorPos;

/// `GetCursorPos` reports physical pixels for DPI-aware processes.
pub const NATIVE_UNITS_ARE_PIXELS: bool = true;

/// Current cursor location in virtual-screen pixels.
pub fn cursor_position() -> Option<(f64, f64)> {
    let mut cursor = POINT::default();
    unsafe { GetCursorPos(&mut cursor) }.ok()?;
    Some((cursor.x as f64, cursor.y as f64))
}
