use crate::{
    curve::connector::{Connector, build_connector},
    foundation::core::{BezPath, Point},
    foundation::error::{FunnelError, FunnelResult},
    layout::band::StepLayout,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Closed outline of one segment across all steps: the top boundary left to right followed
/// by the bottom boundary right to left.
pub struct SegmentPath {
    /// Segment index shared by every step.
    pub segment: usize,
    pub connectors: Vec<Connector>,
}

impl SegmentPath {
    /// Path with a move to the first connector, a line to every following connector start,
    /// one cubic per connector and a final close.
    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        for (i, c) in self.connectors.iter().enumerate() {
            if i == 0 {
                path.move_to(c.start);
            } else {
                path.line_to(c.start);
            }
            path.curve_to(c.control1, c.control2, c.end);
        }
        if !self.connectors.is_empty() {
            path.close_path();
        }
        path
    }

    /// SVG path data (`d` attribute).
    pub fn to_svg_d(&self) -> String {
        self.to_bez_path().to_svg()
    }
}

/// Normalized x position of step `idx` out of `count`, spread across `horizontal_scale`.
pub fn step_x(idx: usize, count: usize, horizontal_scale: f64) -> f64 {
    if count < 2 {
        return 0.0;
    }
    idx as f64 / (count - 1) as f64 * horizontal_scale
}

/// Build one closed [`SegmentPath`] per segment index.
///
/// Steps must all carry the same number of bands. A single step yields paths without
/// connectors.
pub fn build_segment_paths(
    layouts: &[StepLayout],
    horizontal_scale: f64,
) -> FunnelResult<Vec<SegmentPath>> {
    if !horizontal_scale.is_finite() || horizontal_scale <= 0.0 {
        return Err(FunnelError::invalid_input(
            "horizontal scale must be finite and > 0",
        ));
    }
    let Some(first) = layouts.first() else {
        return Ok(Vec::new());
    };
    let segments = first.bands.len();
    for (idx, l) in layouts.iter().enumerate().skip(1) {
        if l.bands.len() != segments {
            return Err(FunnelError::mismatched_segments(format!(
                "step {idx} has {} bands, step 0 has {segments}",
                l.bands.len()
            )));
        }
    }

    let n = layouts.len();
    let point = |step: usize, y: f64| Point::new(step_x(step, n, horizontal_scale), y);

    let paths = (0..segments)
        .map(|seg| {
            let mut connectors = Vec::with_capacity(2 * n.saturating_sub(1));
            for x in 0..n.saturating_sub(1) {
                connectors.push(build_connector(
                    point(x, layouts[x].bands[seg].top_y),
                    point(x + 1, layouts[x + 1].bands[seg].top_y),
                    horizontal_scale,
                ));
            }
            for x in (1..n).rev() {
                connectors.push(build_connector(
                    point(x, layouts[x].bands[seg].bottom_y),
                    point(x - 1, layouts[x - 1].bands[seg].bottom_y),
                    -horizontal_scale,
                ));
            }
            SegmentPath {
                segment: seg,
                connectors,
            }
        })
        .collect();
    Ok(paths)
}

#[cfg(test)]
#[path = "../../tests/unit/curve/assembler.rs"]
mod tests;
