use crate::{
    curve::assembler::{SegmentPath, build_segment_paths, step_x},
    foundation::core::{BezPath, Line, OUTPUT_SCALE, Point, Rect, Rgba8},
    foundation::error::FunnelResult,
    foundation::math::percent_label,
    layout::band::{FunnelLayout, layout_funnel},
    model::funnel::FunnelSpec,
    scene::options::ChartOptions,
    text::measure::TextMeasure,
};

/// Divider lines start this far above the column top (output units).
const DIVIDER_OVERHANG_TOP: f64 = 150.0;
/// Divider lines end this far below the column bottom (output units).
const DIVIDER_OVERHANG_BOTTOM: f64 = 100.0;
const DIVIDER_MIN_Y: f64 = -150.0;
const DIVIDER_MAX_Y: f64 = 1150.0;
const HEADER_MIN_Y: f64 = -120.0;
const HEADER_INSET_X: f64 = 30.0;
const HEADER_PERCENT_DY: f64 = 30.0;
const HEADER_NAME_DY: f64 = 90.0;
const SEGMENT_LABEL_INSET_X: f64 = 50.0;
const LABEL_BG_PAD_X: f64 = 20.0;
const LABEL_BG_PAD_Y: f64 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
/// What a text label shows; renderers typically map this to a style class.
pub enum LabelRole {
    /// Step total as a percentage of the reference max.
    StepConversion,
    /// Step name under the conversion header.
    StepName,
    /// Segment total as a percentage of the reference max.
    SegmentValue,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Text drawn with its baseline starting at `anchor`.
pub struct TextLabel {
    pub text: String,
    pub anchor: Point,
    pub role: LabelRole,
}

#[derive(Clone, Debug, serde::Serialize)]
/// Filled region for one segment across all steps.
pub struct BandShape {
    pub segment: usize,
    /// Segment name taken from the first step.
    pub name: String,
    pub color: Rgba8,
    pub outline: SegmentPath,
    pub path: BezPath,
}

#[derive(Clone, Debug, serde::Serialize)]
/// Vertical marker at a step column with its conversion header.
pub struct StepDivider {
    pub step: usize,
    pub line: Line,
    pub conversion: TextLabel,
    pub name: TextLabel,
}

#[derive(Clone, Debug, serde::Serialize)]
/// Percentage label centred on a band, with a background sized from measured text.
pub struct SegmentLabel {
    pub step: usize,
    pub segment: usize,
    pub label: TextLabel,
    pub background: Rect,
}

#[derive(Clone, Debug, serde::Serialize)]
/// Everything a renderer needs to draw a funnel, in output units.
///
/// Paint order is bands, then segment labels, then dividers.
pub struct FunnelScene {
    pub viewport: Rect,
    pub layout: FunnelLayout,
    pub bands: Vec<BandShape>,
    pub segment_labels: Vec<SegmentLabel>,
    pub dividers: Vec<StepDivider>,
}

impl FunnelScene {
    /// Conversion header text for `step`, if that step draws a divider.
    pub fn conversion_label(&self, step: usize) -> Option<&str> {
        self.dividers
            .iter()
            .find(|d| d.step == step)
            .map(|d| d.conversion.text.as_str())
    }
}

/// Lay out `spec`, build band outlines and place every label.
///
/// `measurer` is called once per segment label to size its background.
#[tracing::instrument(skip_all, fields(steps = spec.steps.len(), aspect = options.aspect))]
pub fn compile_funnel<M>(
    spec: &FunnelSpec,
    options: &ChartOptions,
    measurer: &mut M,
) -> FunnelResult<FunnelScene>
where
    M: TextMeasure + ?Sized,
{
    options.validate()?;
    if options.require_matching_segment_names {
        spec.validate_segment_names()?;
    }

    let layout = layout_funnel(spec)?;
    let outlines = build_segment_paths(&layout.steps, options.aspect)?;

    let mut bands = Vec::with_capacity(outlines.len());
    for outline in outlines {
        let segment = outline.segment;
        bands.push(BandShape {
            segment,
            name: spec.steps[0].segments[segment].name.clone(),
            color: options.palette.color_for(segment)?,
            path: outline.to_bez_path(),
            outline,
        });
    }

    let n = layout.steps.len();
    let column_x = |idx: usize| step_x(idx, n, options.aspect) * OUTPUT_SCALE;

    let mut segment_labels = Vec::new();
    for (idx, (step, step_layout)) in spec.steps.iter().zip(&layout.steps).enumerate() {
        if !step.show_segment_labels {
            continue;
        }
        for (seg_idx, (seg, band)) in step.segments.iter().zip(&step_layout.bands).enumerate() {
            let text = percent_label(seg.total, layout.reference_max);
            let anchor = Point::new(
                column_x(idx) + SEGMENT_LABEL_INSET_X,
                band.mid_y() * OUTPUT_SCALE,
            );
            let extent = measurer.measure(&text, options.label_font_size)?;
            let background = extent
                .bounds_at(anchor)
                .inflate(LABEL_BG_PAD_X, LABEL_BG_PAD_Y);
            segment_labels.push(SegmentLabel {
                step: idx,
                segment: seg_idx,
                label: TextLabel {
                    text,
                    anchor,
                    role: LabelRole::SegmentValue,
                },
                background,
            });
        }
    }

    let mut dividers = Vec::new();
    for (idx, (step, step_layout)) in spec.steps.iter().zip(&layout.steps).enumerate() {
        if !step.show_divider_line {
            continue;
        }
        let x = column_x(idx);
        let pad = step_layout.padding * OUTPUT_SCALE;
        let top = (pad - DIVIDER_OVERHANG_TOP).max(DIVIDER_MIN_Y);
        let bottom = (OUTPUT_SCALE - pad + DIVIDER_OVERHANG_BOTTOM).min(DIVIDER_MAX_Y);
        let header_y = (pad - DIVIDER_OVERHANG_TOP).max(HEADER_MIN_Y);
        dividers.push(StepDivider {
            step: idx,
            line: Line::new((x, top), (x, bottom)),
            conversion: TextLabel {
                text: percent_label(step_layout.total, layout.reference_max),
                anchor: Point::new(x + HEADER_INSET_X, header_y + HEADER_PERCENT_DY),
                role: LabelRole::StepConversion,
            },
            name: TextLabel {
                text: step.name.clone(),
                anchor: Point::new(x + HEADER_INSET_X, header_y + HEADER_NAME_DY),
                role: LabelRole::StepName,
            },
        });
    }

    tracing::debug!(
        bands = bands.len(),
        labels = segment_labels.len(),
        dividers = dividers.len(),
        "funnel scene compiled"
    );

    Ok(FunnelScene {
        viewport: options.viewport(),
        layout,
        bands,
        segment_labels,
        dividers,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/scene/compile.rs"]
mod tests;
