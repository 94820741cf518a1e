use super::*;
use serde_json::json;

#[test]
fn viewport_matches_padding_formula() {
    let r = viewport(2.5, [0.05, 0.05]);
    assert!((r.x0 - -125.0).abs() < 1e-9);
    assert!((r.y0 - -50.0).abs() < 1e-9);
    assert!((r.width() - 2750.0).abs() < 1e-9);
    assert!((r.height() - 1100.0).abs() < 1e-9);

    let r = viewport(1.0, [0.0, 0.0]);
    assert_eq!(r, Rect::new(0.0, 0.0, 1000.0, 1000.0));
}

#[test]
fn defaults_mirror_the_sample_host() {
    let o = ChartOptions::default();
    assert_eq!(o.aspect, 2.5);
    assert_eq!(o.padding, [0.05, 0.05]);
    assert_eq!(o.palette.len(), 5);
    o.validate().unwrap();
    assert_eq!(o.viewport(), viewport(2.5, [0.05, 0.05]));
}

#[test]
fn for_size_derives_aspect() {
    let o = ChartOptions::for_size(800.0, 400.0).unwrap();
    assert_eq!(o.aspect, 2.0);
    assert!(matches!(
        ChartOptions::for_size(0.0, 400.0).unwrap_err(),
        FunnelError::InvalidInput(_)
    ));
}

#[test]
fn validate_rejects_out_of_range_values() {
    let bad = [
        ChartOptions {
            aspect: 0.0,
            ..ChartOptions::default()
        },
        ChartOptions {
            padding: [-0.1, 0.0],
            ..ChartOptions::default()
        },
        ChartOptions {
            label_font_size: f64::NAN,
            ..ChartOptions::default()
        },
    ];
    for o in bad {
        assert!(matches!(
            o.validate().unwrap_err(),
            FunnelError::InvalidInput(_)
        ));
    }

    let o = ChartOptions {
        palette: crate::style::palette::Palette::new(
            Vec::new(),
            crate::style::palette::PaletteOverflow::Cycle,
        ),
        ..ChartOptions::default()
    };
    assert!(matches!(o.validate().unwrap_err(), FunnelError::Palette(_)));
}

#[test]
fn partial_json_fills_defaults() {
    let o: ChartOptions = serde_json::from_value(json!({
        "aspect": 3.0,
        "palette": {"colors": ["#112233"], "overflow": "error"}
    }))
    .unwrap();
    assert_eq!(o.aspect, 3.0);
    assert_eq!(o.padding, [0.05, 0.05]);
    assert_eq!(o.palette.len(), 1);
    assert!(!o.require_matching_segment_names);
}
