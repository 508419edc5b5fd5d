use crate::composition::style::Template;
use crate::composition::text::{ROLE_TITLE, TextElement};
use crate::foundation::error::CoverResult;
use crate::foundation::geom::Rect;
use crate::render::scene::{self, Scene};
use crate::render::style::StyleRenderer;

/// Fraction of the canvas height given to the photograph.
const PHOTO_BAND_FRACTION: f64 = 2.0 / 3.0;
const TITLE_WIDTH_RATIO: f64 = 0.8;
const AUTHOR_WIDTH_RATIO: f64 = 0.6;

/// Photograph over the top two thirds, flat `secondary` text panel below.
pub(crate) struct ClassicRenderer;

impl StyleRenderer for ClassicRenderer {
    fn template(&self) -> Template {
        Template::Classic
    }

    fn render(
        &self,
        scene: &mut Scene<'_>,
        ctx: &mut vello_cpu::RenderContext,
    ) -> CoverResult<()> {
        let canvas = scene.canvas;
        let w = f64::from(canvas.width);
        let h = f64::from(canvas.height);
        let split_y = h * PHOTO_BAND_FRACTION;

        scene::fill_rect(ctx, canvas.rect(), scene.config.secondary);

        let clip = scene::rect_path(Rect::new(0.0, 0.0, w, split_y));
        scene::draw_photo_clipped(scene, ctx, &clip);

        // Re-painted so the panel stays flat even when the photo underfills
        // its band at minimum zoom.
        scene::fill_rect(ctx, Rect::new(0.0, split_y, w, h), scene.config.secondary);

        scene::draw_text_elements(scene, ctx, &max_width_ratio)
    }
}

fn max_width_ratio(element: &TextElement) -> f64 {
    if element.id == ROLE_TITLE {
        TITLE_WIDTH_RATIO
    } else {
        AUTHOR_WIDTH_RATIO
    }
}
