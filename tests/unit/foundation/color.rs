use super::*;
use serde_json::json;

#[test]
fn parses_hex_rgb_and_rgba() {
    let c: Color = serde_json::from_value(json!("#ff0000")).unwrap();
    assert_eq!(c, Color::rgba(1.0, 0.0, 0.0, 1.0));

    let c: Color = serde_json::from_value(json!("#0000ff80")).unwrap();
    assert!((c.b - 1.0).abs() < 1e-9);
    assert!((c.a - (128.0 / 255.0)).abs() < 1e-9);

    assert!(Color::from_hex("#12345").is_err());
    assert!(Color::from_hex("#zz0000").is_err());
}

#[test]
fn parses_rgba_object_and_array() {
    let c: Color = serde_json::from_value(json!({"r": 0.25, "g": 0.5, "b": 0.75})).unwrap();
    assert_eq!(c, Color::rgba(0.25, 0.5, 0.75, 1.0));

    let c: Color = serde_json::from_value(json!([0.25, 0.5, 0.75, 0.9])).unwrap();
    assert_eq!(c, Color::rgba(0.25, 0.5, 0.75, 0.9));
}

#[test]
fn parses_hsla_object() {
    let c: Color = serde_json::from_value(json!({"h": 0.0, "s": 1.0, "l": 0.5})).unwrap();
    assert!((c.r - 1.0).abs() < 1e-9);
    assert!((c.g - 0.0).abs() < 1e-9);
    assert!((c.b - 0.0).abs() < 1e-9);
}

#[test]
fn serialized_color_reads_back() {
    let c = Color::from_hex("#10b981").unwrap();
    let v = serde_json::to_value(c).unwrap();
    let back: Color = serde_json::from_value(v).unwrap();
    assert_eq!(back, c);
    assert_eq!(c.to_hex(), "#10b981");
}

#[test]
fn hsl_display_matches_css() {
    assert_eq!(Hsl::new(120.0, 0.6, 0.15).to_string(), "hsl(120, 60%, 15%)");
    let green = Hsl::new(120.0, 1.0, 0.5).to_color(1.0);
    assert_eq!(green.to_rgba8(), [0, 255, 0, 255]);
}
