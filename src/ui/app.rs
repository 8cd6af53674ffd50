//! The eframe application: window setup, per-frame input, painting.
//!
//! Frame flow on the UI thread:
//!
//! ```text
//! read viewport ─► dispatch (ticks) ─► paint + interact ─► dispatch (menu/drag) ─► viewport cmds
//! ```

use eframe::egui::{self, viewport::ResizeDirection, Sense, ViewportCommand};
use tracing::{debug, info};

use crate::config::WidgetOptions;
use crate::error::{EyesError, Result};
use crate::events::{AppEvent, EventBus, EventPublisher};
use crate::geometry::{Point, Size};
use crate::handlers::{dispatch_events, EventTarget};
use crate::input::{CursorTracker, SystemCursor};
use crate::model::{WidgetState, MIN_CLIENT_SIZE, WINDOW_TITLE};
use crate::ticker::Ticker;

use super::drawing::{background_fill, draw_eyes, draw_resize_grip, grip_rect};
use super::menu::show_context_menu;

/// Open the widget window and block until it is closed.
pub fn run(options: WidgetOptions) -> Result<()> {
    let mut viewport = egui::ViewportBuilder::default()
        .with_title(WINDOW_TITLE)
        .with_inner_size([options.width as f32, options.height as f32])
        .with_min_inner_size([MIN_CLIENT_SIZE as f32, MIN_CLIENT_SIZE as f32])
        .with_transparent(true)
        .with_decorations(false)
        .with_resizable(options.background_visible);
    if options.always_on_top {
        viewport = viewport.with_always_on_top();
    }

    let native = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    info!(
        width = options.width,
        height = options.height,
        interval_ms = options.poll_interval.as_millis() as u64,
        "opening eyes"
    );

    eframe::run_native(
        WINDOW_TITLE,
        native,
        Box::new(move |cc| {
            let app = EyesApp::new(cc, &options)
                .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| EyesError::Window(e.to_string()))
}

/// Widget application state owned by the UI thread.
pub struct EyesApp {
    state: WidgetState,
    bus: EventBus,
    publisher: EventPublisher,
    cursor: CursorTracker<SystemCursor>,
    /// Screen position of the client area's top-left corner (points).
    client_origin: Point,
    /// Pointer position in screen points while it hovers the window.
    window_pointer: Option<Point>,
    /// Last client size we published a `Resized` for.
    reported_size: Option<Size>,
    /// Viewport commands queued by the dispatcher, sent at frame end.
    pending: Vec<ViewportCommand>,
    ticker: Ticker,
}

impl EyesApp {
    pub fn new(cc: &eframe::CreationContext<'_>, options: &WidgetOptions) -> Result<Self> {
        // Transparent panels; the background is painted explicitly.
        cc.egui_ctx.set_visuals(egui::Visuals {
            window_fill: egui::Color32::TRANSPARENT,
            panel_fill: egui::Color32::TRANSPARENT,
            ..egui::Visuals::light()
        });

        let bus = EventBus::new();
        let publisher = bus.publisher();

        let repaint_ctx = cc.egui_ctx.clone();
        let ticker = Ticker::spawn(options.poll_interval, bus.publisher(), move || {
            repaint_ctx.request_repaint();
        })?;

        Ok(Self {
            state: WidgetState::new(
                Size::new(options.width, options.height),
                options.background_visible,
            ),
            bus,
            publisher,
            cursor: CursorTracker::new(SystemCursor::new()),
            client_origin: Point::ORIGIN,
            window_pointer: None,
            reported_size: None,
            pending: Vec::new(),
            ticker,
        })
    }

    /// Pull window geometry and pointer info for this frame.
    fn read_viewport(&mut self, ctx: &egui::Context) {
        let (inner, hover) = ctx.input(|i| (i.viewport().inner_rect, i.pointer.hover_pos()));

        if let Some(inner) = inner {
            self.client_origin = Point::new(inner.min.x as f64, inner.min.y as f64);

            let size = Size::new(inner.width() as f64, inner.height() as f64);
            if self.reported_size != Some(size) {
                self.reported_size = Some(size);
                self.publisher.publish(AppEvent::Resized {
                    width: size.width,
                    height: size.height,
                });
            }
        }

        self.window_pointer = hover.map(|p| {
            Point::new(
                self.client_origin.x + p.x as f64,
                self.client_origin.y + p.y as f64,
            )
        });

        self.cursor
            .source_mut()
            .set_pixels_per_point(ctx.pixels_per_point() as f64);
    }

    fn paint(&self, ctx: &egui::Context) {
        let frame = egui::Frame::NONE.fill(background_fill(&self.state));
        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            let rect = ui.max_rect();
            let response = ui.interact(rect, ui.id().with("eyes"), Sense::click_and_drag());
            let pressed = ui.input(|i| i.pointer.primary_pressed());

            draw_eyes(ui.painter(), rect, &self.state);

            let mut on_grip = false;
            if self.state.is_resizable() {
                let grip = grip_rect(rect);
                draw_resize_grip(ui.painter(), grip);
                let grip_response = ui.interact(grip, ui.id().with("grip"), Sense::drag());
                on_grip = grip_response.hovered();
                if pressed && grip_response.is_pointer_button_down_on() {
                    self.publisher.publish(AppEvent::BeginResize);
                }
            }

            if pressed && !on_grip && response.is_pointer_button_down_on() {
                self.publisher.publish(AppEvent::StartDrag);
            }

            show_context_menu(&response, self.state.background_visible, &self.publisher);
        });
    }

    fn flush_viewport_commands(&mut self, ctx: &egui::Context) {
        for cmd in self.pending.drain(..) {
            ctx.send_viewport_cmd(cmd);
        }
    }
}

impl EventTarget for EyesApp {
    fn refresh_eyes(&mut self) {
        if let Some(cursor) = self.cursor.sample(self.window_pointer) {
            self.state.update_eyes(cursor, self.client_origin);
        }
    }

    fn toggle_background(&mut self) {
        let visible = self.state.toggle_background();
        info!(visible, "background toggled");
        self.pending.push(ViewportCommand::Resizable(visible));
    }

    fn start_drag(&mut self) {
        self.pending.push(ViewportCommand::StartDrag);
    }

    fn begin_resize(&mut self) {
        if self.state.is_resizable() {
            self.pending
                .push(ViewportCommand::BeginResize(ResizeDirection::SouthEast));
        }
    }

    fn resized(&mut self, width: f64, height: f64) {
        if self.state.set_client_size(width, height) {
            debug!(width, height, "client area resized");
        }
    }

    fn exit(&mut self) {
        info!(interval = ?self.ticker.interval(), "closing eyes");
        self.pending.push(ViewportCommand::Close);
    }
}

impl eframe::App for EyesApp {
    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        // Fully transparent window; the panel paints the optional background
        [0.0, 0.0, 0.0, 0.0]
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.read_viewport(ctx);

        let events = self.bus.drain();
        dispatch_events(events, self);
        self.paint(ctx);
        let events = self.bus.drain();
        dispatch_events(events, self);

        self.flush_viewport_commands(ctx);
    }
}
