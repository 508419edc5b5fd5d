use super::*;

#[test]
fn ids_are_unique() {
    let catalog = PresetCatalog::builtin();
    let mut ids: Vec<&str> = catalog.presets().iter().map(|p| p.id.as_str()).collect();
    let total = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), total);
    assert!(total >= 6);
}

#[test]
fn every_template_is_represented() {
    let catalog = PresetCatalog::builtin();
    for template in Template::all() {
        assert!(
            catalog.presets().iter().any(|p| p.template == template),
            "no preset for {template}"
        );
    }
}

#[test]
fn search_matches_name_and_description_case_insensitively() {
    let catalog = PresetCatalog::builtin();

    let by_name = catalog.search("IVORY");
    assert!(by_name.iter().any(|p| p.id == "classic-ivory"));

    let by_description = catalog.search("journals");
    assert!(by_description.iter().any(|p| p.id == "academic-slate"));

    assert!(catalog.search("zzz-no-such-preset").is_empty());
}

#[test]
fn category_filter_is_exact() {
    let catalog = PresetCatalog::builtin();
    let journals = catalog.in_category(PresetCategory::Journal);
    assert!(!journals.is_empty());
    assert!(journals.iter().all(|p| p.category == PresetCategory::Journal));
}

#[test]
fn lookup_by_id() {
    let catalog = PresetCatalog::builtin();
    let preset = catalog.by_id("modern-ember").unwrap();
    assert_eq!(preset.template, Template::Modern);
    assert_eq!(preset.config.stripe_width_pct, Some(45.0));
    assert!(catalog.by_id("nope").is_none());
}
