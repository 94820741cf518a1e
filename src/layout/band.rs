use crate::{
    foundation::error::{FunnelError, FunnelResult},
    foundation::math::{apply_padding, is_finite_non_negative, rounded_percent},
    model::funnel::FunnelSpec,
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Vertical extent of one segment inside its step column, in normalized `[0, 1]` units
/// (0 = top of the drawing area).
pub struct BandPosition {
    pub top_y: f64,
    pub bottom_y: f64,
}

impl BandPosition {
    /// Vertical centre of the band.
    pub fn mid_y(self) -> f64 {
        (self.top_y + self.bottom_y) * 0.5
    }

    pub fn height(self) -> f64 {
        self.bottom_y - self.top_y
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Normalized layout of one step column.
pub struct StepLayout {
    /// One band per segment, same order as the input totals.
    pub bands: Vec<BandPosition>,
    /// Sum of the step's segment totals.
    pub total: f64,
    /// Inset applied to both the top and bottom of the column.
    pub padding: f64,
}

impl StepLayout {
    /// Top of the first band and bottom of the last band.
    pub fn column_extent(&self) -> (f64, f64) {
        let top = self.bands.first().map_or(0.5, |b| b.top_y);
        let bottom = self.bands.last().map_or(0.5, |b| b.bottom_y);
        (top, bottom)
    }

    /// Step total as a rounded percentage of `reference_max`.
    pub fn conversion_percent(&self, reference_max: f64) -> i64 {
        rounded_percent(self.total, reference_max)
    }
}

/// Compute band positions for one step.
///
/// `reference_max` is the 100% denominator. When it is `None` or zero the step normalizes
/// against its own total, which yields `padding == 0`.
pub fn compute_step_layout(totals: &[f64], reference_max: Option<f64>) -> FunnelResult<StepLayout> {
    if let Some(t) = totals.iter().find(|t| !is_finite_non_negative(**t)) {
        return Err(FunnelError::invalid_step(format!(
            "segment total {t} must be finite and >= 0"
        )));
    }

    let total: f64 = totals.iter().sum();
    if total <= 0.0 {
        return Err(FunnelError::invalid_step(
            "step total is zero; cannot normalize its segments",
        ));
    }
    if !total.is_finite() {
        return Err(FunnelError::invalid_step(
            "step total overflows; cannot normalize its segments",
        ));
    }

    let reference = match reference_max {
        Some(m) if !m.is_finite() || m < 0.0 => {
            return Err(FunnelError::invalid_input(format!(
                "reference max {m} must be finite and >= 0"
            )));
        }
        Some(m) if m > 0.0 => m,
        _ => total,
    };
    let padding = (1.0 - total / reference) / 2.0;

    let mut acc = 0.0;
    let bands = totals
        .iter()
        .map(|t| {
            let frac = t / total;
            acc += frac;
            BandPosition {
                top_y: apply_padding(acc - frac, padding),
                bottom_y: apply_padding(acc, padding),
            }
        })
        .collect();

    Ok(StepLayout {
        bands,
        total,
        padding,
    })
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Layout of every step of a funnel against a shared reference max.
pub struct FunnelLayout {
    pub reference_max: f64,
    pub steps: Vec<StepLayout>,
}

impl FunnelLayout {
    pub fn segment_count(&self) -> usize {
        self.steps.first().map_or(0, |s| s.bands.len())
    }
}

/// Lay out all steps of `spec`, normalizing against the first step's total.
#[tracing::instrument(skip(spec), fields(steps = spec.steps.len()))]
pub fn layout_funnel(spec: &FunnelSpec) -> FunnelResult<FunnelLayout> {
    spec.validate()?;
    let reference_max = spec.reference_max().unwrap_or_default();

    let mut steps = Vec::with_capacity(spec.steps.len());
    for (idx, step) in spec.steps.iter().enumerate() {
        let layout = compute_step_layout(&step.totals(), Some(reference_max)).map_err(|e| {
            match e {
                FunnelError::InvalidStep(msg) => {
                    FunnelError::invalid_step(format!("step {idx} ('{}'): {msg}", step.name))
                }
                other => other,
            }
        })?;
        tracing::debug!(step = idx, total = layout.total, padding = layout.padding, "step laid out");
        steps.push(layout);
    }

    Ok(FunnelLayout {
        reference_max,
        steps,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/layout/band.rs"]
mod tests;
