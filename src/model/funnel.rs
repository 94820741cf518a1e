use crate::foundation::{
    error::{FunnelError, FunnelResult},
    math::is_finite_non_negative,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A named sub-quantity of a step, drawn as one coloured band.
pub struct Segment {
    /// Non-negative weight of this segment within its step.
    pub total: f64,
    /// Display name; also used for optional cross-step identity checks.
    #[serde(default)]
    pub name: String,
}

impl Segment {
    /// Construct a segment.
    pub fn new(name: impl Into<String>, total: f64) -> Self {
        Self {
            total,
            name: name.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One ordered stage of the funnel.
///
/// Deserialization accepts both the canonical field names and the shorter ones used by
/// hand-written sample data (`step`, `data`, `lines`, `labels`).
pub struct Step {
    /// Step name shown under the divider header.
    #[serde(alias = "step")]
    pub name: String,
    /// Ordered segments; index `i` is the same series in every step.
    #[serde(alias = "data")]
    pub segments: Vec<Segment>,
    /// Draw the vertical divider with conversion header for this step.
    #[serde(
        default = "default_true",
        alias = "lines",
        alias = "showDividerLine"
    )]
    pub show_divider_line: bool,
    /// Draw per-segment percentage labels for this step.
    #[serde(
        default = "default_true",
        alias = "labels",
        alias = "showSegmentLabels"
    )]
    pub show_segment_labels: bool,
}

fn default_true() -> bool {
    true
}

impl Step {
    /// Construct a step with dividers and labels enabled.
    pub fn new(name: impl Into<String>, segments: Vec<Segment>) -> Self {
        Self {
            name: name.into(),
            segments,
            show_divider_line: true,
            show_segment_labels: true,
        }
    }

    /// Sum of segment totals.
    pub fn total(&self) -> f64 {
        self.segments.iter().map(|s| s.total).sum()
    }

    /// Segment totals in order.
    pub fn totals(&self) -> Vec<f64> {
        self.segments.iter().map(|s| s.total).collect()
    }

    fn validate(&self, idx: usize) -> FunnelResult<()> {
        if self.segments.is_empty() {
            return Err(FunnelError::invalid_step(format!(
                "step {idx} ('{}') has no segments",
                self.name
            )));
        }
        for seg in &self.segments {
            if !is_finite_non_negative(seg.total) {
                return Err(FunnelError::invalid_step(format!(
                    "step {idx} ('{}') segment '{}' total must be finite and >= 0",
                    self.name, seg.name
                )));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
/// Ordered sequence of steps, left to right.
///
/// The first step is the normalization reference and is expected to hold the largest total.
/// That is a caller contract; it is not checked.
pub struct FunnelSpec {
    /// Steps in funnel order.
    pub steps: Vec<Step>,
}

impl FunnelSpec {
    /// Wrap an ordered list of steps.
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    /// Parse a JSON array of step objects.
    pub fn from_json_str(s: &str) -> FunnelResult<Self> {
        let value: serde_json::Value =
            serde_json::from_str(s).map_err(|e| FunnelError::serde(e.to_string()))?;
        Self::from_json_value(value)
    }

    /// Convert an already-parsed JSON value; the shape is checked before field decoding.
    pub fn from_json_value(value: serde_json::Value) -> FunnelResult<Self> {
        let is_step_array = value
            .as_array()
            .is_some_and(|steps| steps.iter().all(serde_json::Value::is_object));
        if !is_step_array {
            return Err(FunnelError::invalid_input(
                "steps data should be an array of objects",
            ));
        }
        serde_json::from_value(value).map_err(|e| FunnelError::invalid_input(e.to_string()))
    }

    /// Serialize back to pretty JSON using canonical field names.
    pub fn to_json_string(&self) -> FunnelResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| FunnelError::serde(e.to_string()))
    }

    /// Total of the first step, used as the 100% denominator.
    pub fn reference_max(&self) -> Option<f64> {
        self.steps.first().map(Step::total)
    }

    /// Number of segments per step (taken from step 0).
    pub fn segment_count(&self) -> usize {
        self.steps.first().map_or(0, |s| s.segments.len())
    }

    /// Check shape, totals and per-index segment alignment.
    pub fn validate(&self) -> FunnelResult<()> {
        if self.steps.is_empty() {
            return Err(FunnelError::invalid_input(
                "funnel must contain at least one step",
            ));
        }
        for (idx, step) in self.steps.iter().enumerate() {
            step.validate(idx)?;
        }
        let expected = self.segment_count();
        for (idx, step) in self.steps.iter().enumerate().skip(1) {
            if step.segments.len() != expected {
                return Err(FunnelError::mismatched_segments(format!(
                    "step {idx} ('{}') has {} segments, step 0 has {expected}",
                    step.name,
                    step.segments.len()
                )));
            }
        }
        Ok(())
    }

    /// Stricter alignment check: segment `i` must carry the same name in every step.
    pub fn validate_segment_names(&self) -> FunnelResult<()> {
        self.validate()?;
        let first = &self.steps[0];
        for (idx, step) in self.steps.iter().enumerate().skip(1) {
            for (seg_idx, (a, b)) in first.segments.iter().zip(&step.segments).enumerate() {
                if a.name != b.name {
                    return Err(FunnelError::mismatched_segments(format!(
                        "segment {seg_idx} is '{}' in step 0 but '{}' in step {idx}",
                        a.name, b.name
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/funnel.rs"]
mod tests;
