use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        CoverError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        CoverError::invalid_color("x")
            .to_string()
            .contains("invalid color format:")
    );
    assert!(CoverError::decode("x").to_string().contains("decode failure:"));
}

#[test]
fn dimension_error_reports_bounds() {
    let err = CoverError::InvalidImageDimensions {
        width: 200,
        height: 300,
        min_width: 500,
        min_height: 500,
    };
    let msg = err.to_string();
    assert!(msg.contains("200x300"));
    assert!(msg.contains("500x500"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = CoverError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
