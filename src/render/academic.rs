use crate::composition::style::Template;
use crate::composition::text::{ROLE_TITLE, TextElement};
use crate::foundation::error::CoverResult;
use crate::foundation::geom::Rect;
use crate::render::scene::{self, Scene};
use crate::render::style::StyleRenderer;

/// Stroke width of the page frame, in logical pixels.
const FRAME_WIDTH_PX: f64 = 12.0;
/// Vertical extent of the photo band: the middle 40% of the page.
const PHOTO_BAND_TOP_FRACTION: f64 = 0.3;
const PHOTO_BAND_BOTTOM_FRACTION: f64 = 0.7;
const TITLE_WIDTH_RATIO: f64 = 0.8;
const AUTHOR_WIDTH_RATIO: f64 = 0.6;

/// Framed `secondary` page with the photograph in a centered horizontal
/// band; title above the band, byline below.
pub(crate) struct AcademicRenderer;

impl StyleRenderer for AcademicRenderer {
    fn template(&self) -> Template {
        Template::Academic
    }

    fn render(
        &self,
        scene: &mut Scene<'_>,
        ctx: &mut vello_cpu::RenderContext,
    ) -> CoverResult<()> {
        let canvas = scene.canvas;
        let w = f64::from(canvas.width);
        let h = f64::from(canvas.height);

        scene::fill_rect(ctx, canvas.rect(), scene.config.secondary);

        let band = Rect::new(
            0.0,
            h * PHOTO_BAND_TOP_FRACTION,
            w,
            h * PHOTO_BAND_BOTTOM_FRACTION,
        );
        let clip = scene::rect_path(band);
        scene::draw_photo_clipped(scene, ctx, &clip);

        draw_frame(ctx, scene, w, h);

        scene::draw_text_elements(scene, ctx, &max_width_ratio)
    }
}

fn draw_frame(ctx: &mut vello_cpu::RenderContext, scene: &Scene<'_>, w: f64, h: f64) {
    let color = scene.config.primary;
    let t = FRAME_WIDTH_PX;
    scene::fill_rect(ctx, Rect::new(0.0, 0.0, w, t), color);
    scene::fill_rect(ctx, Rect::new(0.0, h - t, w, h), color);
    scene::fill_rect(ctx, Rect::new(0.0, 0.0, t, h), color);
    scene::fill_rect(ctx, Rect::new(w - t, 0.0, w, h), color);
}

fn max_width_ratio(element: &TextElement) -> f64 {
    if element.id == ROLE_TITLE {
        TITLE_WIDTH_RATIO
    } else {
        AUTHOR_WIDTH_RATIO
    }
}
