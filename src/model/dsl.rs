use crate::{
    foundation::error::{FunnelError, FunnelResult},
    model::funnel::{FunnelSpec, Segment, Step},
};

/// Fluent builder for [`FunnelSpec`].
///
/// Segments and visibility toggles apply to the most recently opened step.
///
/// ```
/// let spec = funnel::FunnelBuilder::new()
///     .step("Visits")
///     .segment("Organic", 800.0)?
///     .segment("Paid", 200.0)?
///     .step("Signups")
///     .segment("Organic", 120.0)?
///     .segment("Paid", 30.0)?
///     .build()?;
/// assert_eq!(spec.steps.len(), 2);
/// # Ok::<(), funnel::FunnelError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct FunnelBuilder {
    steps: Vec<Step>,
    check_names: bool,
}

impl FunnelBuilder {
    /// Start an empty funnel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Also require segment names to line up across steps when building.
    pub fn require_matching_segment_names(mut self) -> Self {
        self.check_names = true;
        self
    }

    /// Open a new step; following segments are added to it.
    pub fn step(mut self, name: impl Into<String>) -> Self {
        self.steps.push(Step::new(name, Vec::new()));
        self
    }

    /// Append a segment to the current step.
    pub fn segment(mut self, name: impl Into<String>, total: f64) -> FunnelResult<Self> {
        self.current_step()?.segments.push(Segment::new(name, total));
        Ok(self)
    }

    /// Suppress the divider line and header on the current step.
    pub fn hide_divider_line(mut self) -> FunnelResult<Self> {
        self.current_step()?.show_divider_line = false;
        Ok(self)
    }

    /// Suppress per-segment labels on the current step.
    pub fn hide_segment_labels(mut self) -> FunnelResult<Self> {
        self.current_step()?.show_segment_labels = false;
        Ok(self)
    }

    /// Validate and return the funnel.
    pub fn build(self) -> FunnelResult<FunnelSpec> {
        let spec = FunnelSpec::new(self.steps);
        if self.check_names {
            spec.validate_segment_names()?;
        } else {
            spec.validate()?;
        }
        Ok(spec)
    }

    fn current_step(&mut self) -> FunnelResult<&mut Step> {
        self.steps
            .last_mut()
            .ok_or_else(|| FunnelError::invalid_input("call step() before adding to a step"))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/dsl.rs"]
mod tests;
