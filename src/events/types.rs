//! Widget events for communication with the UI thread.
//!
//! These events are published by the poll loop and by UI interactions,
//! and handled by the dispatcher on the UI thread.
//! This module is pure Rust with no FFI dependencies, making it fully testable.

/// Widget-level events.
///
/// Events flow from producers (poll loop, context menu, pointer input)
/// through the EventBus to the dispatcher, which executes the appropriate actions.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    // === Scheduling ===
    /// Poll loop woke up: sample the cursor and move the pupils.
    Tick,

    // === Menu Events ===
    /// Toggle the white background (and grip resizing).
    ToggleBackground,

    /// Close the widget.
    RequestExit,

    // === Window Events ===
    /// Left button pressed on the widget: hand the window to the OS drag loop.
    StartDrag,

    /// Resize grip pressed: hand the window to the OS resize loop.
    BeginResize,

    /// Client area changed size (logical pixels).
    Resized { width: f64, height: f64 },
}

impl AppEvent {
    /// Returns true if this event should trigger a pupil recomputation.
    pub fn requires_eye_update(&self) -> bool {
        matches!(self, AppEvent::Tick | AppEvent::Resized { .. })
    }

    /// Returns a human-readable description of the event for debugging.
    pub fn description(&self) -> &'static str {
        match self {
            AppEvent::Tick => "Poll loop tick",
            AppEvent::ToggleBackground => "Toggle background",
            AppEvent::RequestExit => "Exit widget",
            AppEvent::StartDrag => "Start window drag",
            AppEvent::BeginResize => "Begin window resize",
            AppEvent::Resized { .. } => "Client area resized",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eye_update_required_for_tick_and_resize() {
        assert!(AppEvent::Tick.requires_eye_update());
        assert!(AppEvent::Resized {
            width: 300.0,
            height: 200.0
        }
        .requires_eye_update());
    }

    #[test]
    fn test_eye_update_not_required_for_chrome_events() {
        assert!(!AppEvent::ToggleBackground.requires_eye_update());
        assert!(!AppEvent::RequestExit.requires_eye_update());
        assert!(!AppEvent::StartDrag.requires_eye_update());
        assert!(!AppEvent::BeginResize.requires_eye_update());
    }

    #[test]
    fn test_event_equality() {
        assert_eq!(AppEvent::Tick, AppEvent::Tick);
        assert_ne!(AppEvent::Tick, AppEvent::ToggleBackground);
        assert_ne!(
            AppEvent::Resized {
                width: 1.0,
                height: 2.0
            },
            AppEvent::Resized {
                width: 2.0,
                height: 1.0
            }
        );
    }

    #[test]
    fn test_event_debug() {
        let event = AppEvent::StartDrag;
        let debug_str = format!("{:?}", event);
        assert_eq!(debug_str, "StartDrag");
    }

    #[test]
    fn test_all_events_have_descriptions() {
        let events = [
            AppEvent::Tick,
            AppEvent::ToggleBackground,
            AppEvent::RequestExit,
            AppEvent::StartDrag,
            AppEvent::BeginResize,
            AppEvent::Resized {
                width: 256.0,
                height: 256.0,
            },
        ];

        for event in events {
            assert!(!event.description().is_empty());
        }
    }
}
