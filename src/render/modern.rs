use crate::composition::style::{DEFAULT_STRIPE_WIDTH_PCT, Template};
use crate::composition::text::{ROLE_TITLE, TextElement};
use crate::foundation::error::CoverResult;
use crate::foundation::geom::{self, Rect};
use crate::render::scene::{self, Scene};
use crate::render::style::StyleRenderer;

const TITLE_WIDTH_RATIO: f64 = 0.7;
const AUTHOR_WIDTH_RATIO: f64 = 0.5;

/// Full-bleed photograph with a trailing-edge gradient band.
///
/// The band fades from fully transparent `primary` at its leading edge to
/// `gradient_opacity`-opaque `primary` at the canvas edge; text defaults sit
/// inside the band in light colors.
pub(crate) struct ModernRenderer;

impl StyleRenderer for ModernRenderer {
    fn template(&self) -> Template {
        Template::Modern
    }

    fn render(
        &self,
        scene: &mut Scene<'_>,
        ctx: &mut vello_cpu::RenderContext,
    ) -> CoverResult<()> {
        let canvas = scene.canvas;
        let w = f64::from(canvas.width);
        let h = f64::from(canvas.height);

        scene::fill_rect(ctx, canvas.rect(), scene.config.primary);

        let clip = scene::rect_path(canvas.rect());
        scene::draw_photo_clipped(scene, ctx, &clip);

        let stripe_pct = scene
            .config
            .stripe_width_pct
            .unwrap_or(DEFAULT_STRIPE_WIDTH_PCT)
            .clamp(0.0, 100.0);
        let band_w = w * stripe_pct / 100.0;
        if band_w >= 1.0 {
            let stops = geom::fade_stops(scene.config.primary, scene.config.gradient_opacity);
            let band = scene::horizontal_gradient(
                &stops,
                band_w.round() as u32,
                canvas.height,
            )?;
            ctx.set_transform(scene::affine_to_cpu(geom::Affine::translate((
                w - band_w,
                0.0,
            ))));
            ctx.set_paint(band);
            ctx.fill_rect(&scene::rect_to_cpu(Rect::new(0.0, 0.0, band_w, h)));
        }

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
