use super::*;

#[test]
fn setters_clamp_all_fields() {
    let mut t = ImageTransform::default();

    t.set_scale(9.0);
    assert_eq!(t.scale(), 1.5);
    t.set_scale(0.0);
    assert_eq!(t.scale(), 0.5);
    t.set_scale(1.25);
    assert_eq!(t.scale(), 1.25);

    t.set_rotation_deg(720.0);
    assert_eq!(t.rotation_deg(), 180.0);
    t.set_rotation_deg(-999.0);
    assert_eq!(t.rotation_deg(), -180.0);

    t.set_position_pct(-10.0, 140.0);
    assert_eq!(t.position_pct(), (0.0, 100.0));
}

#[test]
fn non_finite_input_keeps_previous_value() {
    let mut t = ImageTransform::default();
    t.set_scale(1.2);
    t.set_scale(f64::NAN);
    assert_eq!(t.scale(), 1.2);

    t.set_rotation_deg(f64::INFINITY);
    assert_eq!(t.rotation_deg(), 0.0);

    t.set_position_pct(f64::NAN, 30.0);
    assert_eq!(t.position_pct(), (50.0, 30.0));
}

#[test]
fn pointer_pan_maps_surface_to_percentages() {
    let mut t = ImageTransform::default();
    t.pan_with_pointer(150.0, 300.0, 600.0, 400.0);
    assert_eq!(t.position_pct(), (25.0, 75.0));

    // Pointer dragged past the surface edge clamps.
    t.pan_with_pointer(900.0, -50.0, 600.0, 400.0);
    assert_eq!(t.position_pct(), (100.0, 0.0));

    // Degenerate surface is ignored.
    t.pan_with_pointer(10.0, 10.0, 0.0, 400.0);
    assert_eq!(t.position_pct(), (100.0, 0.0));
}

#[test]
fn deserialization_funnels_through_clamping() {
    let t: ImageTransform = serde_json::from_str(
        r#"{"position_pct_x": 130.0, "position_pct_y": -4.0, "scale": 7.5, "rotation_deg": 300.0}"#,
    )
    .unwrap();
    assert_eq!(t.position_pct(), (100.0, 0.0));
    assert_eq!(t.scale(), 1.5);
    assert_eq!(t.rotation_deg(), 180.0);

    let d: ImageTransform = serde_json::from_str("{}").unwrap();
    assert_eq!(d, ImageTransform::default());
}
