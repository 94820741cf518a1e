//! Funnel chart geometry.
//!
//! A funnel is an ordered list of steps, each split into weighted segments. This crate turns
//! such a list into drawable geometry: every segment becomes one closed band whose top and
//! bottom edges are smooth cubic curves between step columns, and whose height at each step
//! is proportional to the segment's share of the largest (first) step.
//!
//! # Pipeline overview
//!
//! 1. **Layout**: `FunnelSpec -> FunnelLayout` (normalized band extents per step, see
//!    [`compute_step_layout`] and [`layout_funnel`])
//! 2. **Curves**: `FunnelLayout -> Vec<SegmentPath>` (top boundary left to right, bottom
//!    boundary right to left, see [`build_connector`] and [`build_segment_paths`])
//! 3. **Scene**: `FunnelSpec + ChartOptions -> FunnelScene` (coloured bands, divider lines,
//!    percentage labels with measured backgrounds, see [`compile_funnel`])
//! 4. **Export** (optional): [`FunnelScene::to_svg`]
//!
//! Everything is a pure function of its inputs. There is no IO, no global state, and errors
//! are returned before any partial output is produced.
#![forbid(unsafe_code)]

mod curve;
mod foundation;
mod layout;
mod model;
mod scene;
mod style;
mod svg;
mod text;

pub use curve::assembler::{SegmentPath, build_segment_paths, step_x};
pub use curve::connector::{Connector, build_connector, control_offset};
pub use foundation::core::{
    BEZIER_DISTANCE, BezPath, CubicBez, Line, OUTPUT_SCALE, Point, Rect, Rgba8, Vec2,
};
pub use foundation::error::{FunnelError, FunnelResult};
pub use layout::band::{BandPosition, FunnelLayout, StepLayout, compute_step_layout, layout_funnel};
pub use model::dsl::FunnelBuilder;
pub use model::funnel::{FunnelSpec, Segment, Step};
pub use scene::compile::{
    BandShape, FunnelScene, LabelRole, SegmentLabel, StepDivider, TextLabel, compile_funnel,
};
pub use scene::options::{ChartOptions, viewport};
pub use style::palette::{DEFAULT_COLORS, Palette, PaletteOverflow};
pub use text::measure::{ApproxTextMeasure, ParleyTextMeasure, TextExtent, TextMeasure};
