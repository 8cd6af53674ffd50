//! Widget domain model.
//!
//! This module contains pure state (no FFI dependencies): the eye layout
//! constants and the runtime widget state the UI renders from.

pub mod constants;
pub mod widget_state;

pub use constants::*;
pub use widget_state::WidgetState;
