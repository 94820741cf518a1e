pub use kurbo::{BezPath, CubicBez, Line, Point, Rect, Vec2};

/// Output units per normalized unit. Normalized `[0, 1]` coordinates are multiplied by this
/// before they leave the engine so that renderers work with whole-ish numbers.
pub const OUTPUT_SCALE: f64 = 1000.0;

/// Horizontal reach of connector control points, in output units.
pub const BEZIER_DISTANCE: f64 = 500.0;

/// Straight (non-premultiplied) RGBA8 colour. Serializes as a hex string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8, // 255 = opaque
}

impl Rgba8 {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// `#rrggbb` for opaque colours, `#rrggbbaa` otherwise.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                self.r, self.g, self.b, self.a
            )
        }
    }
}

/// Scale a normalized point into output units.
pub fn to_output(p: Point) -> Point {
    Point::new(p.x * OUTPUT_SCALE, p.y * OUTPUT_SCALE)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
