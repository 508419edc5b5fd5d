use super::*;

#[test]
fn only_modern_carries_a_stripe() {
    assert_eq!(
        Template::Modern.default_config().stripe_width_pct,
        Some(DEFAULT_STRIPE_WIDTH_PCT)
    );
    assert_eq!(Template::Classic.default_config().stripe_width_pct, None);
    assert_eq!(Template::Academic.default_config().stripe_width_pct, None);
}

#[test]
fn default_elements_cover_both_roles() {
    for template in Template::all() {
        let els = template.default_elements();
        assert_eq!(els.len(), 2, "{template} should seed title and author");
        assert_eq!(els[0].id, ROLE_TITLE);
        assert_eq!(els[1].id, ROLE_AUTHOR);
        assert!(els.iter().all(|el| el.text.is_empty()));
        assert!(els.iter().all(|el| el.size_pt >= 12.0 && el.size_pt <= 72.0));
    }
}

#[test]
fn normalize_clamps_knobs() {
    let mut config = Template::Modern.default_config();
    config.gradient_opacity = 4.2;
    config.stripe_width_pct = Some(250.0);
    config.normalize();
    assert_eq!(config.gradient_opacity, 1.0);
    assert_eq!(config.stripe_width_pct, Some(100.0));

    config.gradient_opacity = f64::NAN;
    config.normalize();
    assert_eq!(config.gradient_opacity, 0.85);
}

#[test]
fn template_names_round_trip_through_serde() {
    for template in Template::all() {
        let json = serde_json::to_string(&template).unwrap();
        assert_eq!(json, format!("\"{}\"", template.name()));
        let back: Template = serde_json::from_str(&json).unwrap();
        assert_eq!(back, template);
    }
}
