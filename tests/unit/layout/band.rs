use super::*;
use crate::model::funnel::{Segment, Step};

fn approx(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

#[test]
fn reference_step_fills_the_column() {
    let l = compute_step_layout(&[946.0, 444.0], Some(1390.0)).unwrap();
    assert_eq!(l.padding, 0.0);
    assert_eq!(l.total, 1390.0);
    assert_eq!(l.bands[0].top_y, 0.0);
    assert!(approx(l.bands[0].bottom_y, 0.680_576, 1e-6));
    assert!(approx(l.bands[1].bottom_y, 1.0, 1e-12));
}

#[test]
fn smaller_step_is_centered_with_padding() {
    let l = compute_step_layout(&[186.0, 206.0], Some(1390.0)).unwrap();
    assert!(approx(l.padding, 0.358_993, 1e-6));
    assert!(approx(l.bands[0].top_y, 0.358_993, 1e-6));
    // 0.359 + 186/1390
    assert!(approx(l.bands[0].bottom_y, 0.492_806, 1e-6));
    assert!(approx(l.bands[1].bottom_y, 1.0 - 0.358_993, 1e-6));
}

#[test]
fn single_segment_full_reference() {
    let l = compute_step_layout(&[100.0], Some(100.0)).unwrap();
    assert_eq!(l.padding, 0.0);
    assert_eq!(
        l.bands,
        vec![BandPosition {
            top_y: 0.0,
            bottom_y: 1.0
        }]
    );
}

#[test]
fn column_height_matches_ratio_and_is_centered() {
    let cases: [(&[f64], f64); 4] = [
        (&[10.0, 20.0, 30.0], 60.0),
        (&[10.0, 20.0, 30.0], 100.0),
        (&[1.0, 0.0, 2.5], 17.0),
        (&[56.0, 91.0], 1390.0),
    ];
    for (totals, max) in cases {
        let l = compute_step_layout(totals, Some(max)).unwrap();
        let (top, bottom) = l.column_extent();
        let t: f64 = totals.iter().sum();
        assert!(approx(bottom - top, t / max, 1e-12), "{totals:?} / {max}");
        assert!(approx(top + bottom, 1.0, 1e-12));
    }
}

#[test]
fn bands_are_contiguous() {
    let l = compute_step_layout(&[3.0, 0.0, 7.0, 11.0, 2.0], Some(40.0)).unwrap();
    assert_eq!(l.bands.len(), 5);
    for pair in l.bands.windows(2) {
        assert!(approx(pair[0].bottom_y, pair[1].top_y, 1e-12));
        assert!(pair[0].height() >= 0.0);
    }
    assert_eq!(l.bands[1].height(), 0.0);
}

#[test]
fn layout_is_deterministic() {
    let a = compute_step_layout(&[946.0, 444.0], Some(2000.0)).unwrap();
    let b = compute_step_layout(&[946.0, 444.0], Some(2000.0)).unwrap();
    assert_eq!(a, b);
    for (x, y) in a.bands.iter().zip(&b.bands) {
        assert_eq!(x.top_y.to_bits(), y.top_y.to_bits());
        assert_eq!(x.bottom_y.to_bits(), y.bottom_y.to_bits());
    }
}

#[test]
fn omitted_reference_self_normalizes() {
    let totals = [186.0, 206.0];
    let none = compute_step_layout(&totals, None).unwrap();
    let zero = compute_step_layout(&totals, Some(0.0)).unwrap();
    let own = compute_step_layout(&totals, Some(392.0)).unwrap();
    assert_eq!(none, own);
    assert_eq!(zero, own);
    assert_eq!(none.padding, 0.0);
}

#[test]
fn zero_total_step_is_invalid() {
    for totals in [&[0.0, 0.0][..], &[][..]] {
        let err = compute_step_layout(totals, Some(10.0)).unwrap_err();
        assert!(matches!(err, FunnelError::InvalidStep(_)));
    }
}

#[test]
fn overflowing_step_total_is_invalid() {
    let err = compute_step_layout(&[f64::MAX, f64::MAX], None).unwrap_err();
    assert!(matches!(err, FunnelError::InvalidStep(_)));
    assert!(err.to_string().contains("overflows"));
}

#[test]
fn bad_totals_and_reference_are_rejected() {
    let err = compute_step_layout(&[1.0, -2.0], None).unwrap_err();
    assert!(matches!(err, FunnelError::InvalidStep(_)));
    let err = compute_step_layout(&[1.0], Some(f64::NAN)).unwrap_err();
    assert!(matches!(err, FunnelError::InvalidInput(_)));
}

#[test]
fn mid_y_is_band_center() {
    let b = BandPosition {
        top_y: 0.2,
        bottom_y: 0.6,
    };
    assert!(approx(b.mid_y(), 0.4, 1e-12));
}

fn sample_spec() -> FunnelSpec {
    let step = |name: &str, hot: f64, bad: f64| {
        Step::new(
            name,
            vec![Segment::new("Hot Leads", hot), Segment::new("Bad Leads", bad)],
        )
    };
    FunnelSpec::new(vec![
        step("Leads Created", 946.0, 444.0),
        step("Lead to Opportunity Conversion", 186.0, 206.0),
        step("Opportunity to Win Conversion", 56.0, 91.0),
        step("Sale", 56.0, 91.0),
    ])
}

#[test]
fn funnel_layout_uses_first_step_as_reference() {
    let layout = layout_funnel(&sample_spec()).unwrap();
    assert_eq!(layout.reference_max, 1390.0);
    assert_eq!(layout.steps.len(), 4);
    assert_eq!(layout.segment_count(), 2);
    assert_eq!(layout.steps[0].padding, 0.0);
    assert_eq!(layout.steps[0].conversion_percent(1390.0), 100);
    assert_eq!(layout.steps[1].conversion_percent(1390.0), 28);
    assert_eq!(layout.steps[3].conversion_percent(1390.0), 11);
    assert_eq!(layout.steps[2], layout.steps[3]);
}

#[test]
fn funnel_layout_names_the_zero_step() {
    let mut spec = sample_spec();
    spec.steps[2].segments[0].total = 0.0;
    spec.steps[2].segments[1].total = 0.0;
    let err = layout_funnel(&spec).unwrap_err();
    assert!(matches!(err, FunnelError::InvalidStep(_)));
    assert!(err.to_string().contains("Opportunity to Win Conversion"));
}

#[test]
fn funnel_layout_rejects_misaligned_steps() {
    let mut spec = sample_spec();
    spec.steps[3].segments.push(Segment::new("Extra", 1.0));
    let err = layout_funnel(&spec).unwrap_err();
    assert!(matches!(err, FunnelError::MismatchedSegmentCount(_)));
}
