use super::*;

#[test]
fn builder_collects_steps_in_order() {
    let spec = FunnelBuilder::new()
        .step("a")
        .segment("x", 10.0)
        .unwrap()
        .segment("y", 5.0)
        .unwrap()
        .step("b")
        .segment("x", 4.0)
        .unwrap()
        .segment("y", 1.0)
        .unwrap()
        .hide_divider_line()
        .unwrap()
        .hide_segment_labels()
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(spec.steps.len(), 2);
    assert_eq!(spec.steps[0].name, "a");
    assert!(spec.steps[0].show_divider_line);
    assert!(!spec.steps[1].show_divider_line);
    assert!(!spec.steps[1].show_segment_labels);
    assert_eq!(spec.steps[1].totals(), vec![4.0, 1.0]);
}

#[test]
fn segment_before_step_is_rejected() {
    let err = FunnelBuilder::new().segment("x", 1.0).unwrap_err();
    assert!(matches!(err, FunnelError::InvalidInput(_)));
}

#[test]
fn build_validates_alignment() {
    let err = FunnelBuilder::new()
        .step("a")
        .segment("x", 1.0)
        .unwrap()
        .segment("y", 1.0)
        .unwrap()
        .step("b")
        .segment("x", 1.0)
        .unwrap()
        .build()
        .unwrap_err();
    assert!(matches!(err, FunnelError::MismatchedSegmentCount(_)));
}

#[test]
fn name_check_only_when_requested() {
    let make = |b: FunnelBuilder| {
        b.step("a")
            .segment("x", 1.0)
            .unwrap()
            .step("b")
            .segment("z", 1.0)
            .unwrap()
            .build()
    };
    assert!(make(FunnelBuilder::new()).is_ok());
    let err = make(FunnelBuilder::new().require_matching_segment_names()).unwrap_err();
    assert!(matches!(err, FunnelError::MismatchedSegmentCount(_)));
}
