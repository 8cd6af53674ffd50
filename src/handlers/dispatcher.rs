//! Event dispatcher for handling widget events.
//!
//! The dispatcher receives events from the event bus and executes
//! the corresponding actions. It's called once per frame on the UI
//! thread and processes all pending events in batch.
//!
//! # Architecture
//!
//! ```text
//! EventBus::drain() → dispatch_events() → EventTarget
//! ```
//!
//! Ticks are coalesced: however many piled up while the UI thread was
//! busy, the eyes are recomputed at most once per drain, after any resize
//! in the same batch has been applied.

use crate::events::AppEvent;

/// Receiver of dispatched actions. Implemented by the window.
pub trait EventTarget {
    /// Sample the cursor and recompute both pupils.
    fn refresh_eyes(&mut self);

    /// Flip the white background and grip resizing.
    fn toggle_background(&mut self);

    /// Hand the window to the OS drag loop.
    fn start_drag(&mut self);

    /// Hand the window to the OS resize loop.
    fn begin_resize(&mut self);

    /// Apply a new client area size.
    fn resized(&mut self, width: f64, height: f64);

    /// Close the widget.
    fn exit(&mut self);
}

/// Dispatch a batch of drained events, in order.
///
/// Returns the number of events handled.
pub fn dispatch_events<T: EventTarget>(events: Vec<AppEvent>, target: &mut T) -> usize {
    let mut needs_refresh = false;

    for event in &events {
        needs_refresh |= event.requires_eye_update();
        dispatch_single_event(target, event);
    }

    if needs_refresh {
        target.refresh_eyes();
    }
    events.len()
}

/// Dispatch a single event. Eye refreshes are handled by the caller.
fn dispatch_single_event<T: EventTarget>(target: &mut T, event: &AppEvent) {
    tracing::trace!(event = event.description(), "dispatch");
    match event {
        AppEvent::Tick => {}
        AppEvent::ToggleBackground => target.toggle_background(),
        AppEvent::RequestExit => target.exit(),
        AppEvent::StartDrag => target.start_drag(),
        AppEvent::BeginResize => target.begin_resize(),
        AppEvent::Resized { width, height } => target.resized(*width, *height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventBus;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl EventTarget for Recorder {
        fn refresh_eyes(&mut self) {
            self.calls.push("refresh".into());
        }
        fn toggle_background(&mut self) {
            self.calls.push("background".into());
        }
        fn start_drag(&mut self) {
            self.calls.push("drag".into());
        }
        fn begin_resize(&mut self) {
            self.calls.push("resize".into());
        }
        fn resized(&mut self, width: f64, height: f64) {
            self.calls.push(format!("resized {}x{}", width, height));
        }
        fn exit(&mut self) {
            self.calls.push("exit".into());
        }
    }

    #[test]
    fn test_ticks_are_coalesced() {
        let bus = EventBus::new();
        let publisher = bus.publisher();
        for _ in 0..5 {
            publisher.publish(AppEvent::Tick);
        }

        let mut target = Recorder::default();
        assert_eq!(dispatch_events(bus.drain(), &mut target), 5);
        assert_eq!(target.calls, vec!["refresh"]);
    }

    #[test]
    fn test_resize_applied_before_refresh() {
        let bus = EventBus::new();
        let publisher = bus.publisher();
        publisher.publish(AppEvent::Tick);
        publisher.publish(AppEvent::Resized {
            width: 300.0,
            height: 150.0,
        });

        let mut target = Recorder::default();
        dispatch_events(bus.drain(), &mut target);
        assert_eq!(target.calls, vec!["resized 300x150", "refresh"]);
    }

    #[test]
    fn test_chrome_events_in_order_without_refresh() {
        let bus = EventBus::new();
        let publisher = bus.publisher();
        publisher.publish(AppEvent::StartDrag);
        publisher.publish(AppEvent::ToggleBackground);
        publisher.publish(AppEvent::BeginResize);
        publisher.publish(AppEvent::RequestExit);

        let mut target = Recorder::default();
        dispatch_events(bus.drain(), &mut target);
        assert_eq!(target.calls, vec!["drag", "background", "resize", "exit"]);
    }

    #[test]
    fn test_empty_bus_does_nothing() {
        let bus = EventBus::new();
        let mut target = Recorder::default();
        assert_eq!(dispatch_events(bus.drain(), &mut target), 0);
        assert!(target.calls.is_empty());
    }
}
