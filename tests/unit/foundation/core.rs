use super::*;

#[test]
fn hex_formatting_omits_opaque_alpha() {
    assert_eq!(Rgba8::rgb(0x5e, 0xbc, 0xac).to_hex(), "#5ebcac");
    assert_eq!(Rgba8::rgba(0, 0, 255, 0x80).to_hex(), "#0000ff80");
}

#[test]
fn to_output_scales_both_axes() {
    assert_eq!(to_output(Point::new(0.5, 0.25)), Point::new(500.0, 250.0));
    assert_eq!(to_output(Point::ORIGIN), Point::ORIGIN);
}
