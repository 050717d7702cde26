use super::*;

#[test]
fn output_format_is_inferred_from_extension_only() {
    assert_eq!(OutputFormat::from_name("out.jpg"), OutputFormat::Jpeg);
    assert_eq!(OutputFormat::from_name("OUT.JPEG"), OutputFormat::Jpeg);
    assert_eq!(OutputFormat::from_name("out.png"), OutputFormat::Png);
    assert_eq!(OutputFormat::from_name("out.webp"), OutputFormat::Png);
    assert_eq!(OutputFormat::from_name("out"), OutputFormat::Png);
    assert_eq!(OutputFormat::from_name("jpg"), OutputFormat::Png);
}

#[test]
fn form_values_fall_back_to_defaults() {
    assert_eq!(
        Orientation::from_form_value("horizontal"),
        Orientation::Horizontal
    );
    assert_eq!(Orientation::from_form_value("diagonal"), Orientation::Vertical);
    assert_eq!(ResizeMode::from_form_value("fit_max"), ResizeMode::FitMax);
    assert_eq!(ResizeMode::from_form_value("stretch"), ResizeMode::None);
    assert_eq!(Alignment::from_form_value("end"), Alignment::End);
    assert_eq!(Alignment::from_form_value("middle"), Alignment::Center);
}

#[test]
fn alignment_offsets() {
    assert_eq!(Alignment::Start.offset(100, 50), 0);
    assert_eq!(Alignment::End.offset(100, 50), 50);
    assert_eq!(Alignment::Center.offset(100, 50), 25);
    assert_eq!(Alignment::Center.offset(100, 51), 24);
    assert_eq!(Alignment::End.offset(10, 10), 0);
}

#[test]
fn orientation_axes() {
    let s = Size::new(30, 20);
    assert_eq!(Orientation::Horizontal.primary(s), 30);
    assert_eq!(Orientation::Horizontal.cross(s), 20);
    assert_eq!(Orientation::Vertical.primary(s), 20);
    assert_eq!(Orientation::Vertical.cross(s), 30);
}

#[test]
fn enums_serialize_snake_case() {
    assert_eq!(
        serde_json::to_string(&ResizeMode::MatchHeight).unwrap(),
        "\"match_height\""
    );
    let a: Alignment = serde_json::from_str("\"start\"").unwrap();
    assert_eq!(a, Alignment::Start);
}
