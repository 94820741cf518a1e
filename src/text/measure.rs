use crate::foundation::{
    core::{Point, Rect},
    error::{FunnelError, FunnelResult},
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Measured size of a single line of text, in output units.
pub struct TextExtent {
    /// Advance width.
    pub width: f64,
    /// Distance from the baseline up to the top of the line box.
    pub ascent: f64,
    /// Distance from the baseline down to the bottom of the line box.
    pub descent: f64,
}

impl TextExtent {
    pub fn height(self) -> f64 {
        self.ascent + self.descent
    }

    /// Bounding box of text whose baseline starts at `origin`.
    pub fn bounds_at(self, origin: Point) -> Rect {
        Rect::new(
            origin.x,
            origin.y - self.ascent,
            origin.x + self.width,
            origin.y + self.descent,
        )
    }
}

/// Text measurement supplied by the rendering side.
///
/// Label backgrounds are sized from real text metrics, so scene compilation calls this
/// synchronously for every label before it places the background rectangle.
pub trait TextMeasure {
    fn measure(&mut self, text: &str, font_size: f64) -> FunnelResult<TextExtent>;
}

impl<F> TextMeasure for F
where
    F: FnMut(&str, f64) -> anyhow::Result<TextExtent>,
{
    fn measure(&mut self, text: &str, font_size: f64) -> FunnelResult<TextExtent> {
        Ok(self(text, font_size)?)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Font-free estimate: every character advances by the same fraction of the font size.
pub struct ApproxTextMeasure {
    pub advance_ratio: f64,
    pub ascent_ratio: f64,
    pub descent_ratio: f64,
}

impl Default for ApproxTextMeasure {
    fn default() -> Self {
        Self {
            advance_ratio: 0.6,
            ascent_ratio: 0.8,
            descent_ratio: 0.2,
        }
    }
}

impl TextMeasure for ApproxTextMeasure {
    fn measure(&mut self, text: &str, font_size: f64) -> FunnelResult<TextExtent> {
        validate_font_size(font_size)?;
        let chars = text.chars().count() as f64;
        Ok(TextExtent {
            width: chars * self.advance_ratio * font_size,
            ascent: self.ascent_ratio * font_size,
            descent: self.descent_ratio * font_size,
        })
    }
}

/// Shapes labels with a caller-supplied font through Parley.
pub struct ParleyTextMeasure {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<()>,
    family_name: String,
}

impl std::fmt::Debug for ParleyTextMeasure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParleyTextMeasure")
            .field("family_name", &self.family_name)
            .finish_non_exhaustive()
    }
}

impl ParleyTextMeasure {
    /// Register `font_bytes` (TTF/OTF) and measure with its first family.
    pub fn from_font_bytes(font_bytes: &[u8]) -> FunnelResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| FunnelError::measure("no font families registered from font bytes"))?;
        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| FunnelError::measure("registered font family has no name"))?
            .to_string();

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
        })
    }

    pub fn family_name(&self) -> &str {
        &self.family_name
    }
}

impl TextMeasure for ParleyTextMeasure {
    fn measure(&mut self, text: &str, font_size: f64) -> FunnelResult<TextExtent> {
        validate_font_size(font_size)?;

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(font_size as f32));

        let mut layout: parley::Layout<()> = builder.build(text);
        layout.break_all_lines(None);

        let mut extent = TextExtent {
            width: 0.0,
            ascent: 0.0,
            descent: 0.0,
        };
        for (i, line) in layout.lines().enumerate() {
            let m = line.metrics();
            extent.width = extent.width.max(f64::from(m.advance));
            if i == 0 {
                extent.ascent = f64::from(m.ascent);
                extent.descent = f64::from(m.descent + m.leading);
            } else {
                extent.descent += f64::from(m.ascent + m.descent + m.leading);
            }
        }
        Ok(extent)
    }
}

fn validate_font_size(font_size: f64) -> FunnelResult<()> {
    if !font_size.is_finite() || font_size <= 0.0 {
        return Err(FunnelError::measure("font size must be finite and > 0"));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/text/measure.rs"]
mod tests;
