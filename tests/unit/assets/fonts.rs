use super::*;

fn system_font_bytes() -> Option<Vec<u8>> {
    const CANDIDATES: &[&str] = &[
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
        "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
        "/Library/Fonts/Arial.ttf",
        "/System/Library/Fonts/Supplemental/Arial.ttf",
    ];
    CANDIDATES.iter().find_map(|p| std::fs::read(p).ok())
}

#[test]
fn empty_library_has_no_families() {
    let mut fonts = FontLibrary::new();
    assert!(!fonts.has_family(FontFamily::Serif));
    assert!(fonts.measure_width(FontFamily::Serif, 24.0, "x").is_err());
    assert!(fonts.font_data(FontFamily::Serif).is_none());
}

#[test]
fn garbage_bytes_do_not_register() {
    let mut fonts = FontLibrary::new();
    let result = fonts.register_family(FontFamily::Serif, vec![0u8; 32]);
    assert!(result.is_err());
    assert!(!fonts.has_family(FontFamily::Serif));
}

#[test]
fn registered_family_measures_text() {
    // Skipped on hosts without a known system font; the library itself is
    // font-agnostic, so any sans face works here.
    let Some(bytes) = system_font_bytes() else {
        return;
    };
    let mut fonts = FontLibrary::new();
    fonts.register_family(FontFamily::SansSerif, bytes).unwrap();
    assert!(fonts.has_family(FontFamily::SansSerif));

    let narrow = fonts
        .measure_width(FontFamily::SansSerif, 24.0, "i")
        .unwrap();
    let wide = fonts
        .measure_width(FontFamily::SansSerif, 24.0, "monumental width")
        .unwrap();
    assert!(narrow > 0.0);
    assert!(wide > narrow);

    // Measurement scales with the font size.
    let larger = fonts
        .measure_width(FontFamily::SansSerif, 48.0, "monumental width")
        .unwrap();
    assert!(larger > wide);
}

#[test]
fn invalid_size_is_rejected() {
    let Some(bytes) = system_font_bytes() else {
        return;
    };
    let mut fonts = FontLibrary::new();
    fonts.register_family(FontFamily::Serif, bytes).unwrap();
    assert!(fonts.measure_width(FontFamily::Serif, 0.0, "x").is_err());
    assert!(fonts.measure_width(FontFamily::Serif, f64::NAN, "x").is_err());
}
