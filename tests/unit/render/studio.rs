use super::*;

use crate::composition::text::ROLE_TITLE;

#[test]
fn commit_without_photo_is_rejected() {
    let mut studio = CoverStudio::new(FontLibrary::new());
    let err = studio.commit().unwrap_err();
    assert!(err.to_string().contains("no photograph loaded"));
    assert_eq!(studio.history_len(), 0);
}

#[test]
fn export_before_first_render_is_rejected() {
    let studio = CoverStudio::new(FontLibrary::new());
    assert!(studio.export_raster().is_err());
}

#[test]
fn new_studio_uses_cover_resolution_and_classic_defaults() {
    let studio = CoverStudio::new(FontLibrary::new());
    assert_eq!(studio.canvas(), CanvasSize::COVER);
    assert_eq!(studio.template(), Template::Classic);
    assert_eq!(studio.config(), &Template::Classic.default_config());
    assert_eq!(studio.texts().elements().len(), 2);
    assert!(studio.photo_size().is_none());
}

#[test]
fn options_reject_degenerate_canvases() {
    let options = StudioOptions {
        canvas: CanvasSize {
            width: 0,
            height: 100,
        },
        ..StudioOptions::default()
    };
    assert!(CoverStudio::with_options(FontLibrary::new(), options).is_err());

    let too_big = StudioOptions {
        canvas: CanvasSize {
            width: 70_000,
            height: 100,
        },
        ..StudioOptions::default()
    };
    assert!(CoverStudio::with_options(FontLibrary::new(), too_big).is_err());
}

#[test]
fn set_template_reseeds_config_and_elements() {
    let mut studio = CoverStudio::new(FontLibrary::new());
    studio.texts_mut().set_text(ROLE_TITLE, "Kept");
    studio.set_template(Template::Academic);
    assert_eq!(studio.template(), Template::Academic);
    assert_eq!(studio.config(), &Template::Academic.default_config());
    assert_eq!(studio.texts().element(ROLE_TITLE).unwrap().text, "Kept");
}
