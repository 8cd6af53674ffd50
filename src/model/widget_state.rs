//! Runtime widget state (pure Rust, no FFI).
//!
//! Holds everything the painter needs: the client size, whether the white
//! background is on, and the last computed pupil placements.

use super::constants::*;
use crate::clamp;
use crate::geometry::{self, EyeSpec, Point, PupilPlacement, Size};

/// Opaque white, used while the background is visible.
pub const BACKGROUND_WHITE: [u8; 4] = [255, 255, 255, 255];

/// Fully transparent background.
pub const BACKGROUND_TRANSPARENT: [u8; 4] = [0, 0, 0, 0];

/// Complete widget state, owned by the UI thread.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetState {
    /// Client area size in logical pixels.
    pub client: Size,
    /// White background + resize grip enabled?
    pub background_visible: bool,
    /// Last cursor position used for an update, in screen points.
    pub last_cursor: Option<Point>,
    /// Current pupil placements, left eye first.
    pub pupils: [PupilPlacement; 2],
}

impl Default for WidgetState {
    fn default() -> Self {
        Self::new(
            Size::new(DEFAULT_CLIENT_WIDTH, DEFAULT_CLIENT_HEIGHT),
            false,
        )
    }
}

impl WidgetState {
    /// Create a state for the given client size with centred pupils.
    pub fn new(client: Size, background_visible: bool) -> Self {
        let mut state = Self {
            client: Size::default(),
            background_visible,
            last_cursor: None,
            pupils: [PupilPlacement::default(); 2],
        };
        state.set_client_size(client.width, client.height);
        state
    }

    /// Update the client size, clamped to [`MIN_CLIENT_SIZE`].
    ///
    /// Returns `true` if the size actually changed. Pupils are re-centred
    /// at the new scale until the next cursor sample.
    pub fn set_client_size(&mut self, width: f64, height: f64) -> bool {
        let width = clamp(width, MIN_CLIENT_SIZE, f64::MAX);
        let height = clamp(height, MIN_CLIENT_SIZE, f64::MAX);
        let changed = self.client.width != width || self.client.height != height;
        self.client = Size::new(width, height);
        if changed {
            self.refresh_pupils();
        }
        changed
    }

    /// Flip the background flag and return the new value.
    pub fn toggle_background(&mut self) -> bool {
        self.background_visible = !self.background_visible;
        self.background_visible
    }

    /// Resizing through the grip is only allowed with a visible background.
    pub fn is_resizable(&self) -> bool {
        self.background_visible
    }

    /// Background RGBA for the current mode.
    pub fn background_color(&self) -> [u8; 4] {
        if self.background_visible {
            BACKGROUND_WHITE
        } else {
            BACKGROUND_TRANSPARENT
        }
    }

    /// Pupil size for the current client size.
    pub fn pupil_size(&self) -> Size {
        geometry::pupil_size(self.client, DEFAULT_PUPIL_SIZE)
    }

    /// Half-axes of the eye outline drawn around `spec`, in client pixels.
    pub fn eye_white_radius(&self, spec: &EyeSpec) -> Size {
        let (sx, sy) = geometry::scale_for(self.client);
        Size::new(
            (spec.max_radius.x + DEFAULT_EYE_WIDTH / 2.0 + EYE_WHITE_MARGIN) * sx,
            (spec.max_radius.y + DEFAULT_EYE_HEIGHT / 2.0 + EYE_WHITE_MARGIN) * sy,
        )
    }

    /// Recompute both pupils for a cursor sample.
    ///
    /// `client_origin` is the screen position of the client area's top-left corner.
    pub fn update_eyes(&mut self, cursor: Point, client_origin: Point) {
        let pupil = self.pupil_size();
        for (slot, spec) in self.pupils.iter_mut().zip(EYES.iter()) {
            *slot = geometry::place_pupil(cursor, client_origin, self.client, spec, pupil);
        }
        self.last_cursor = Some(cursor);
    }

    /// Centre both pupils at the current scale.
    fn refresh_pupils(&mut self) {
        let pupil = self.pupil_size();
        for (slot, spec) in self.pupils.iter_mut().zip(EYES.iter()) {
            *slot = geometry::centered_pupil(self.client, spec, pupil);
        }
    }
}
