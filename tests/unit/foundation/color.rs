use super::*;

#[test]
fn parses_hex_with_and_without_hash() {
    assert_eq!(Rgb::from_hex("#ff0000").unwrap(), Rgb::new(255, 0, 0));
    assert_eq!(Rgb::from_hex("00FF7f").unwrap(), Rgb::new(0, 255, 127));
}

#[test]
fn rejects_malformed_hex() {
    for bad in ["", "#", "#ff00", "#ff00zz", "red", "#ff000000"] {
        assert!(
            matches!(Rgb::from_hex(bad), Err(CoverError::InvalidColorFormat(_))),
            "expected rejection for {bad:?}"
        );
    }
}

#[test]
fn malformed_input_falls_back_to_black() {
    assert_eq!(Rgb::from_hex_or_black("#not-a-color"), Rgb::BLACK);
    assert_eq!(Rgb::from_hex_or_black("#102030"), Rgb::new(0x10, 0x20, 0x30));
}

#[test]
fn hex_round_trips_through_serde() {
    let c = Rgb::new(0xab, 0x00, 0xef);
    let json = serde_json::to_string(&c).unwrap();
    assert_eq!(json, "\"#ab00ef\"");
    let back: Rgb = serde_json::from_str(&json).unwrap();
    assert_eq!(back, c);
}

#[test]
fn opacity_scales_alpha_only() {
    assert_eq!(Rgb::WHITE.with_opacity(0.0), [255, 255, 255, 0]);
    assert_eq!(Rgb::WHITE.with_opacity(2.0), [255, 255, 255, 255]);
    assert_eq!(Rgb::BLACK.with_opacity(0.5), [0, 0, 0, 128]);
}
