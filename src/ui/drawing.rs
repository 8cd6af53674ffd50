//! Painting the eyes.
//!
//! Everything is drawn with egui shapes relative to the client rect:
//! a white eye with a black outline per [`EyeSpec`], a black pupil at the
//! placement stored in [`WidgetState`], and an optional resize grip.
//!
//! [`EyeSpec`]: crate::geometry::EyeSpec

use eframe::egui::{pos2, vec2, Color32, Painter, Pos2, Rect, Shape, Stroke};

use crate::geometry::{self, Point, Size};
use crate::model::{WidgetState, EYES, EYE_OUTLINE_WIDTH, RESIZE_GRIP_SIZE};

const EYE_FILL: Color32 = Color32::WHITE;
const INK: Color32 = Color32::BLACK;
const GRIP_COLOR: Color32 = Color32::from_rgb(140, 140, 140);

/// Client-space point to egui position inside `rect`.
#[inline]
fn to_pos(rect: Rect, p: Point) -> Pos2 {
    pos2(rect.min.x + p.x as f32, rect.min.y + p.y as f32)
}

/// Half-axes of an ellipse covering `size`.
#[inline]
fn half(size: Size) -> eframe::egui::Vec2 {
    vec2(size.width as f32 / 2.0, size.height as f32 / 2.0)
}

/// Background fill for the current mode.
pub fn background_fill(state: &WidgetState) -> Color32 {
    let [r, g, b, a] = state.background_color();
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// Draw both eyes and their pupils.
pub fn draw_eyes(painter: &Painter, rect: Rect, state: &WidgetState) {
    for (spec, pupil) in EYES.iter().zip(state.pupils.iter()) {
        let center = to_pos(rect, geometry::eye_center_local(state.client, spec));
        let white = state.eye_white_radius(spec);
        let radius = vec2(white.width as f32, white.height as f32);

        painter.add(Shape::ellipse_filled(center, radius, EYE_FILL));
        painter.add(Shape::ellipse_stroke(
            center,
            radius,
            Stroke::new(EYE_OUTLINE_WIDTH, INK),
        ));

        painter.add(Shape::ellipse_filled(
            to_pos(rect, pupil.center()),
            half(pupil.size),
            INK,
        ));
    }
}

/// Square in the bottom-right corner that starts a resize.
pub fn grip_rect(rect: Rect) -> Rect {
    Rect::from_min_max(
        pos2(rect.max.x - RESIZE_GRIP_SIZE, rect.max.y - RESIZE_GRIP_SIZE),
        rect.max,
    )
}

/// Draw the diagonal resize grip lines inside `grip`.
pub fn draw_resize_grip(painter: &Painter, grip: Rect) {
    let stroke = Stroke::new(1.0, GRIP_COLOR);
    for step in 1..=3 {
        let d = grip.width() * step as f32 / 4.0;
        painter.line_segment(
            [
                pos2(grip.max.x - d, grip.max.y),
                pos2(grip.max.x, grip.max.y - d),
            ],
            stroke,
        );
    }
}
