//! Tests for the model layer (WidgetState).

use hello_eyes::geometry::{eye_center_local, Point, Size};
use hello_eyes::model::constants::*;
use hello_eyes::model::WidgetState;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

// === Default Values Tests ===

#[test]
fn widget_state_default_client_size() {
    let state = WidgetState::default();
    assert!(approx_eq(state.client.width, DEFAULT_CLIENT_WIDTH));
    assert!(approx_eq(state.client.height, DEFAULT_CLIENT_HEIGHT));
}

#[test]
fn widget_state_default_background_hidden() {
    let state = WidgetState::default();
    assert!(!state.background_visible);
    assert!(!state.is_resizable());
    assert_eq!(state.background_color()[3], 0);
}

#[test]
fn widget_state_default_has_no_cursor_sample() {
    let state = WidgetState::default();
    assert!(state.last_cursor.is_none());
}

#[test]
fn widget_state_default_pupil_size() {
    let state = WidgetState::default();
    let size = state.pupil_size();
    assert!(approx_eq(size.width, DEFAULT_EYE_WIDTH));
    assert!(approx_eq(size.height, DEFAULT_EYE_HEIGHT));
}

// === Resize Tests ===

#[test]
fn set_client_size_clamps_to_minimum() {
    let mut state = WidgetState::default();
    state.set_client_size(10.0, -5.0);
    assert!(approx_eq(state.client.width, MIN_CLIENT_SIZE));
    assert!(approx_eq(state.client.height, MIN_CLIENT_SIZE));
}

#[test]
fn resize_rescales_pupils() {
    let mut state = WidgetState::default();
    assert!(state.set_client_size(512.0, 128.0));

    let size = state.pupil_size();
    assert!(approx_eq(size.width, DEFAULT_EYE_WIDTH * 2.0));
    assert!(approx_eq(size.height, DEFAULT_EYE_HEIGHT * 0.5));
    assert_eq!(state.pupils[0].size, size);
    assert_eq!(state.pupils[1].size, size);
}

#[test]
fn resize_recentres_pupils() {
    let mut state = WidgetState::default();
    state.update_eyes(Point::new(5000.0, 5000.0), Point::ORIGIN);
    state.set_client_size(300.0, 300.0);

    let expected = eye_center_local(state.client, &LEFT_EYE);
    assert!(approx_eq(state.pupils[0].center().x, expected.x));
    assert!(approx_eq(state.pupils[0].center().y, expected.y));
}

// === Update Tests ===

#[test]
fn update_eyes_moves_both_pupils_towards_cursor() {
    let mut state = WidgetState::default();
    let before = state.pupils;

    state.update_eyes(Point::new(-10_000.0, 113.0), Point::ORIGIN);

    assert!(state.pupils[0].center().x < before[0].center().x);
    assert!(state.pupils[1].center().x < before[1].center().x);
    assert_eq!(state.last_cursor, Some(Point::new(-10_000.0, 113.0)));
}

#[test]
fn update_eyes_uses_each_eyes_own_radius() {
    let mut state = WidgetState::default();
    let origin = Point::ORIGIN;
    state.update_eyes(Point::new(10_000.0, 10_000.0), origin);

    let left = eye_center_local(state.client, &LEFT_EYE);
    let right = eye_center_local(state.client, &RIGHT_EYE);
    let dl = state.pupils[0].center().x - left.x;
    let dr = state.pupils[1].center().x - right.x;
    assert!(dl > 0.0 && dl <= LEFT_EYE.max_radius.x);
    assert!(dr > 0.0 && dr <= RIGHT_EYE.max_radius.x);
}

// === Eye Outline Tests ===

#[test]
fn eye_white_radius_at_reference_size() {
    let state = WidgetState::default();
    let left = state.eye_white_radius(&LEFT_EYE);
    assert!(approx_eq(left.width, 23.0 + 12.5 + EYE_WHITE_MARGIN));
    assert!(approx_eq(left.height, 62.0 + 25.0 + EYE_WHITE_MARGIN));
}

#[test]
fn eye_whites_fit_inside_client_area() {
    for client in [Size::new(256.0, 256.0), Size::new(600.0, 200.0)] {
        let state = WidgetState::new(client, true);
        for spec in EYES {
            let c = eye_center_local(state.client, &spec);
            let r = state.eye_white_radius(&spec);
            assert!(c.x - r.width >= 0.0 && c.x + r.width <= client.width);
            assert!(c.y - r.height >= 0.0 && c.y + r.height <= client.height);
        }
    }
}

#[test]
fn pupil_never_leaves_eye_white_along_axes() {
    for spec in EYES {
        let reach_x = spec.max_radius.x + DEFAULT_EYE_WIDTH / 2.0;
        let reach_y = spec.max_radius.y + DEFAULT_EYE_HEIGHT / 2.0;
        let state = WidgetState::default();
        let r = state.eye_white_radius(&spec);
        assert!(reach_x < r.width);
        assert!(reach_y < r.height);
    }
}
