//! Pupil placement geometry (pure Rust, no FFI).
//!
//! Every eye is described in a 256 x 256 reference client area. At runtime
//! the offsets are scaled to the real client size, the eye centre is moved
//! into screen space, and the pupil is pushed from that centre towards the
//! cursor. The travel is clamped per axis, so pupils stay inside an
//! elliptical bound around the eye centre.
//!
//! ```text
//!   cursor ●
//!           \
//!            \  θ = atan2(dy, dx)
//!        ┌────\────┐
//!        │   (●)   │  pupil centre = eye centre + (rx·cosθ, ry·sinθ)
//!        │    +    │  rx = min(max_radius.x, d)·sx
//!        │         │  ry = min(max_radius.y, d)·sy
//!        └─────────┘
//! ```

/// Width of the reference client area the eye offsets are expressed in.
pub const REFERENCE_CLIENT_WIDTH: f64 = 256.0;

/// Height of the reference client area the eye offsets are expressed in.
pub const REFERENCE_CLIENT_HEIGHT: f64 = 256.0;

/// A point in either screen or client coordinates (y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Translate by another point used as a vector.
    pub fn offset_by(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

/// Width and height of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Size scaled independently per axis.
    pub fn scaled(self, sx: f64, sy: f64) -> Size {
        Size::new(self.width * sx, self.height * sy)
    }
}

/// Static description of one eye in reference-area units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EyeSpec {
    /// Offset of the eye centre from the centre of the client area.
    pub offset: Point,
    /// Maximum pupil travel along each axis.
    pub max_radius: Point,
}

impl EyeSpec {
    pub const fn new(offset: Point, max_radius: Point) -> Self {
        Self { offset, max_radius }
    }
}

/// Where a pupil must be drawn, relative to the client area's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PupilPlacement {
    pub top_left: Point,
    pub size: Size,
}

impl PupilPlacement {
    /// Centre of the pupil in client coordinates.
    pub fn center(&self) -> Point {
        Point::new(
            self.top_left.x + self.size.width / 2.0,
            self.top_left.y + self.size.height / 2.0,
        )
    }
}

/// Euclidean distance between two points.
pub fn distance(p1: Point, p2: Point) -> f64 {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    (dx * dx + dy * dy).sqrt()
}

/// Angle of the vector `p1 -> p2` in radians, in `(-π, π]`.
///
/// Returns 0 when both points coincide.
pub fn angle(p1: Point, p2: Point) -> f64 {
    (p2.y - p1.y).atan2(p2.x - p1.x)
}

/// Per-axis scale of `client` relative to the reference area.
pub fn scale_for(client: Size) -> (f64, f64) {
    (
        client.width / REFERENCE_CLIENT_WIDTH,
        client.height / REFERENCE_CLIENT_HEIGHT,
    )
}

/// Eye centre in client coordinates.
pub fn eye_center_local(client: Size, spec: &EyeSpec) -> Point {
    let (sx, sy) = scale_for(client);
    Point::new(
        client.width / 2.0 + sx * spec.offset.x,
        client.height / 2.0 + sy * spec.offset.y,
    )
}

/// Eye centre in screen coordinates.
pub fn eye_center_screen(client_origin: Point, client: Size, spec: &EyeSpec) -> Point {
    client_origin.offset_by(eye_center_local(client, spec))
}

/// Pupil size for the given client area, scaled from `base`.
pub fn pupil_size(client: Size, base: Size) -> Size {
    let (sx, sy) = scale_for(client);
    base.scaled(sx, sy)
}

/// Compute where the pupil of `spec` goes for a cursor at `cursor`.
///
/// `cursor` and `client_origin` are screen coordinates; the result is in
/// client coordinates. The cursor distance is clamped against the unscaled
/// max radius first and scaled afterwards.
pub fn place_pupil(
    cursor: Point,
    client_origin: Point,
    client: Size,
    spec: &EyeSpec,
    pupil: Size,
) -> PupilPlacement {
    let (sx, sy) = scale_for(client);
    let center = eye_center_screen(client_origin, client, spec);
    let d = distance(center, cursor);
    let rx = spec.max_radius.x.min(d) * sx;
    let ry = spec.max_radius.y.min(d) * sy;
    let theta = angle(center, cursor);

    let local = eye_center_local(client, spec);
    PupilPlacement {
        top_left: Point::new(
            -pupil.width / 2.0 + local.x + rx * theta.cos(),
            -pupil.height / 2.0 + local.y + ry * theta.sin(),
        ),
        size: pupil,
    }
}

/// Pupil placement when no cursor sample is available: centred in the eye.
pub fn centered_pupil(client: Size, spec: &EyeSpec, pupil: Size) -> PupilPlacement {
    let local = eye_center_local(client, spec);
    PupilPlacement {
        top_left: Point::new(local.x - pupil.width / 2.0, local.y - pupil.height / 2.0),
        size: pupil,
    }
}
