use crate::foundation::core::{BEZIER_DISTANCE, CubicBez, Point, to_output};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// A cubic curve joining a band boundary point in one step to the matching point in the
/// adjacent step. All coordinates are in output units.
pub struct Connector {
    pub start: Point,
    pub control1: Point,
    pub control2: Point,
    pub end: Point,
}

impl Connector {
    pub fn to_cubic(self) -> CubicBez {
        CubicBez::new(self.start, self.control1, self.control2, self.end)
    }

    /// Same curve traced from `end` back to `start`.
    pub fn reversed(self) -> Self {
        Self {
            start: self.end,
            control1: self.control2,
            control2: self.control1,
            end: self.start,
        }
    }
}

/// Horizontal control-point offset (output units) for a signed scale.
///
/// The sign carries the traversal direction: positive walks left to right, negative walks
/// right to left.
pub fn control_offset(horizontal_scale: f64) -> f64 {
    horizontal_scale * 0.5 * BEZIER_DISTANCE / 2.0
}

/// Build an S-shaped connector from `p1` to `p2` (normalized coordinates).
///
/// Both control points stay on their endpoint's horizontal line; the first is pushed along
/// the direction of travel and the second against it, so the curve never doubles back in x
/// when the step columns are ordered.
pub fn build_connector(p1: Point, p2: Point, horizontal_scale: f64) -> Connector {
    let start = to_output(p1);
    let end = to_output(p2);
    let dx = control_offset(horizontal_scale);
    Connector {
        start,
        control1: Point::new(start.x + dx, start.y),
        control2: Point::new(end.x - dx, end.y),
        end,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/curve/connector.rs"]
mod tests;
