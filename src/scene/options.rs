use crate::{
    foundation::core::{OUTPUT_SCALE, Rect},
    foundation::error::{FunnelError, FunnelResult},
    style::palette::Palette,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Chart-level settings supplied by the host.
pub struct ChartOptions {
    /// Drawing width divided by height. Also sets connector tautness.
    pub aspect: f64,
    /// Viewport padding `[horizontal, vertical]` as fractions of the chart size.
    pub padding: [f64; 2],
    /// Font size (output units) handed to the text measurer for segment labels.
    pub label_font_size: f64,
    /// Reject funnels whose segment names differ between steps.
    pub require_matching_segment_names: bool,
    pub palette: Palette,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            aspect: 2.5,
            padding: [0.05, 0.05],
            label_font_size: 36.0,
            require_matching_segment_names: false,
            palette: Palette::default(),
        }
    }
}

impl ChartOptions {
    /// Options for a chart drawn into a `width` x `height` area.
    pub fn for_size(width: f64, height: f64) -> FunnelResult<Self> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(FunnelError::invalid_input(
                "chart width/height must be finite and > 0",
            ));
        }
        Ok(Self {
            aspect: width / height,
            ..Self::default()
        })
    }

    pub fn validate(&self) -> FunnelResult<()> {
        if !self.aspect.is_finite() || self.aspect <= 0.0 {
            return Err(FunnelError::invalid_input(
                "aspect must be finite and > 0",
            ));
        }
        for (axis, value) in [("x", self.padding[0]), ("y", self.padding[1])] {
            if !value.is_finite() || value < 0.0 {
                return Err(FunnelError::invalid_input(format!(
                    "padding.{axis} must be finite and >= 0"
                )));
            }
        }
        if !self.label_font_size.is_finite() || self.label_font_size <= 0.0 {
            return Err(FunnelError::invalid_input(
                "label_font_size must be finite and > 0",
            ));
        }
        self.palette.validate()
    }

    pub fn viewport(&self) -> Rect {
        viewport(self.aspect, self.padding)
    }
}

/// Bounding box of the drawing in output units, including padding on every side.
pub fn viewport(aspect: f64, padding: [f64; 2]) -> Rect {
    let [px, py] = padding;
    let x = -aspect * px * OUTPUT_SCALE;
    let y = -py * OUTPUT_SCALE;
    let width = aspect * OUTPUT_SCALE * (1.0 + px * 2.0);
    let height = OUTPUT_SCALE * (1.0 + py * 2.0);
    Rect::new(x, y, x + width, y + height)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/options.rs"]
mod tests;
