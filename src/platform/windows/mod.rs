//! Windows-specific implementation using the Win32 API.

pub mod cursor;
