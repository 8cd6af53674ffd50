//! Right-click context menu.

use eframe::egui::Response;

use crate::events::{AppEvent, EventPublisher};

/// Menu labels.
pub const MENU_BACKGROUND: &str = "Background";
pub const MENU_EXIT: &str = "Exit";

/// Attach the widget's context menu to `response`.
///
/// The menu never mutates state directly; it publishes events that the
/// dispatcher handles at the end of the frame.
pub fn show_context_menu(response: &Response, background_visible: bool, publisher: &EventPublisher) {
    response.context_menu(|ui| {
        let mut checked = background_visible;
        if ui.checkbox(&mut checked, MENU_BACKGROUND).clicked() {
            publisher.publish(AppEvent::ToggleBackground);
            ui.close();
        }

        ui.separator();

        if ui.button(MENU_EXIT).clicked() {
            publisher.publish(AppEvent::RequestExit);
            ui.close();
        }
    });
}
