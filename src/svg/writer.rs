//! Standalone SVG export of a compiled [`FunnelScene`].
//!
//! Output is a plain string; styling beyond fills is left to CSS classes so hosts can theme
//! the chart (`step-marker`, `step-header-conversion`, `step-header-name`, `label-bg`,
//! `segment-value`).

use std::fmt::Write;

use crate::{
    foundation::error::{FunnelError, FunnelResult},
    scene::compile::{FunnelScene, LabelRole, TextLabel},
};

const DIVIDER_STROKE: &str = "#9e9e9e";
const LABEL_BG_FILL: &str = "#ffffff";

impl FunnelScene {
    /// Serialize the scene as an SVG document whose `viewBox` is the scene viewport.
    pub fn to_svg(&self) -> FunnelResult<String> {
        let mut out = String::new();
        write_document(&mut out, self)
            .map_err(|e| FunnelError::serde(format!("svg write failed: {e}")))?;
        Ok(out)
    }
}

fn write_document(out: &mut String, scene: &FunnelScene) -> std::fmt::Result {
    let vb = scene.viewport;
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
        vb.x0,
        vb.y0,
        vb.width(),
        vb.height()
    )?;

    writeln!(out, r#"  <g class="bands">"#)?;
    for band in &scene.bands {
        if band.outline.connectors.is_empty() {
            continue;
        }
        writeln!(
            out,
            r#"    <path d="{}" fill="{}"><title>{}</title></path>"#,
            band.path.to_svg(),
            band.color.to_hex(),
            xml_escape(&band.name)
        )?;
    }
    writeln!(out, "  </g>")?;

    writeln!(out, r#"  <g class="segment-labels">"#)?;
    for l in &scene.segment_labels {
        let bg = l.background;
        writeln!(
            out,
            r#"    <rect class="label-bg" x="{}" y="{}" width="{}" height="{}" fill="{LABEL_BG_FILL}"/>"#,
            bg.x0,
            bg.y0,
            bg.width(),
            bg.height()
        )?;
        write_text(out, &l.label)?;
    }
    writeln!(out, "  </g>")?;

    writeln!(out, r#"  <g class="dividers">"#)?;
    for d in &scene.dividers {
        writeln!(
            out,
            r#"    <line class="step-marker" x1="{}" y1="{}" x2="{}" y2="{}" stroke="{DIVIDER_STROKE}"/>"#,
            d.line.p0.x, d.line.p0.y, d.line.p1.x, d.line.p1.y
        )?;
        write_text(out, &d.conversion)?;
        write_text(out, &d.name)?;
    }
    writeln!(out, "  </g>")?;

    writeln!(out, "</svg>")
}

fn write_text(out: &mut String, label: &TextLabel) -> std::fmt::Result {
    let class = match label.role {
        LabelRole::StepConversion => "step-header-conversion",
        LabelRole::StepName => "step-header-name",
        LabelRole::SegmentValue => "segment-value",
    };
    writeln!(
        out,
        r#"    <text class="{class}" x="{}" y="{}">{}</text>"#,
        label.anchor.x,
        label.anchor.y,
        xml_escape(&label.text)
    )
}

fn xml_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/svg/writer.rs"]
mod tests;
