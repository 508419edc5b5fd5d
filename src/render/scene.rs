use std::sync::Arc;

use kurbo::Shape as _;

use crate::assets::decode::PreparedPhoto;
use crate::assets::fonts::{FontLibrary, TextBrushRgba8};
use crate::composition::photo::ImageTransform;
use crate::composition::style::StyleConfig;
use crate::composition::text::TextElement;
use crate::foundation::color::Rgb;
use crate::foundation::error::{CoverError, CoverResult};
use crate::foundation::geom::{
    self, Affine, BezPath, CanvasSize, GradientStop, Point, Rect, Vec2,
};
use crate::layout::wrap::TextBlock;

/// Decoded photograph uploaded as a `vello_cpu` image paint.
#[derive(Clone)]
pub(crate) struct PhotoPaint {
    pub(crate) paint: vello_cpu::Image,
    pub(crate) width: u32,
    pub(crate) height: u32,
}

impl PhotoPaint {
    /// Wrap prepared premultiplied pixels into a reusable paint.
    pub(crate) fn from_prepared(photo: &PreparedPhoto) -> CoverResult<Self> {
        let pixmap =
            pixmap_from_premul_bytes(&photo.rgba8_premul, photo.width, photo.height)?;
        Ok(Self {
            paint: vello_cpu::Image {
                image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
                sampler: vello_cpu::peniko::ImageSampler::default(),
            },
            width: photo.width,
            height: photo.height,
        })
    }
}

/// Everything one render pass reads: the validated models plus the font
/// library. Renderers never retain any of it across calls.
pub(crate) struct Scene<'a> {
    pub(crate) canvas: CanvasSize,
    pub(crate) photo: &'a PhotoPaint,
    pub(crate) transform: &'a ImageTransform,
    pub(crate) config: &'a StyleConfig,
    pub(crate) elements: &'a [TextElement],
    pub(crate) fonts: &'a mut FontLibrary,
}

/// World transform of the photograph.
///
/// The base placement covers the full canvas (cover-fit) with the image
/// centered on the pan target; user zoom and rotation then apply about the
/// canvas center so the pan/zoom/rotate controls compose the same way in
/// every template.
pub(crate) fn photo_affine(
    canvas: CanvasSize,
    photo: &PhotoPaint,
    transform: &ImageTransform,
) -> Affine {
    let cw = f64::from(canvas.width);
    let ch = f64::from(canvas.height);
    let iw = f64::from(photo.width);
    let ih = f64::from(photo.height);

    let fit = (cw / iw).max(ch / ih);
    let (px, py) = transform.position_pct();
    let target = geom::to_pixel_offset(px, py, canvas);
    let place = Affine::translate(target.to_vec2())
        * Affine::scale(fit)
        * Affine::translate(Vec2::new(-iw / 2.0, -ih / 2.0));

    geom::compose_transform(canvas.center(), transform.rotation_deg(), transform.scale()) * place
}

/// Fill `rect` with an opaque color in canvas coordinates.
pub(crate) fn fill_rect(ctx: &mut vello_cpu::RenderContext, rect: Rect, color: Rgb) {
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
        color.r, color.g, color.b, 255,
    ));
    ctx.fill_rect(&rect_to_cpu(rect));
}

/// Draw the photograph under the scene transform, clipped to `clip`
/// (canvas coordinates). The clip layer is released before returning.
pub(crate) fn draw_photo_clipped(
    scene: &Scene<'_>,
    ctx: &mut vello_cpu::RenderContext,
    clip: &BezPath,
) {
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.push_clip_layer(&bezpath_to_cpu(clip));

    let tr = photo_affine(scene.canvas, scene.photo, scene.transform);
    ctx.set_transform(affine_to_cpu(tr));
    ctx.set_paint(scene.photo.paint.clone());
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
        0.0,
        0.0,
        f64::from(scene.photo.width),
        f64::from(scene.photo.height),
    ));

    ctx.pop_layer();
}

/// Synthesize a horizontal linear gradient as an image paint.
///
/// Columns sample the stop list left to right; straight-alpha samples are
/// premultiplied into the pixmap.
pub(crate) fn horizontal_gradient(
    stops: &[GradientStop],
    width: u32,
    height: u32,
) -> CoverResult<vello_cpu::Image> {
    let w = width.max(1);
    let h = height.max(1);

    let mut row = Vec::with_capacity(w as usize);
    let mut may_have_opacities = false;
    let denom = f64::from(w.max(2) - 1);
    for x in 0..w {
        let t = f64::from(x) / denom;
        let [r, g, b, a] = geom::sample_linear(stops, t);
        may_have_opacities |= a != 255;
        row.push(vello_cpu::peniko::color::PremulRgba8 {
            r: premul_channel(r, a),
            g: premul_channel(g, a),
            b: premul_channel(b, a),
            a,
        });
    }

    let mut pixels = Vec::with_capacity(w as usize * h as usize);
    for _ in 0..h {
        pixels.extend_from_slice(&row);
    }

    let w16: u16 = w
        .try_into()
        .map_err(|_| CoverError::validation("gradient width exceeds u16"))?;
    let h16: u16 = h
        .try_into()
        .map_err(|_| CoverError::validation("gradient height exceeds u16"))?;
    let pixmap = vello_cpu::Pixmap::from_parts_with_opacity(pixels, w16, h16, may_have_opacities);

    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

/// Draw every text element in declaration order.
///
/// `max_width_ratio` supplies the template-defined wrap width for each role
/// as a fraction of canvas width. Empty elements and elements whose family
/// has no registered font are drawable no-ops.
pub(crate) fn draw_text_elements(
    scene: &mut Scene<'_>,
    ctx: &mut vello_cpu::RenderContext,
    max_width_ratio: &dyn Fn(&TextElement) -> f64,
) -> CoverResult<()> {
    let canvas = scene.canvas;
    let elements = scene.elements;
    let fonts = &mut *scene.fonts;

    for element in elements {
        if element.text.trim().is_empty() {
            continue;
        }
        if !fonts.has_family(element.font) {
            tracing::warn!(role = %element.id, family = ?element.font, "skipping text element: font family not registered");
            continue;
        }

        let max_width_px = max_width_ratio(element) * f64::from(canvas.width);
        let block = {
            let mut measure = |s: &str| {
                fonts
                    .measure_width(element.font, element.size_pt, s)
                    .unwrap_or(0.0)
            };
            TextBlock::compose(&element.text, element.size_pt, max_width_px, &mut measure)
        };
        if block.is_empty() {
            continue;
        }

        let anchor = geom::to_pixel_offset(element.anchor_pct_x, element.anchor_pct_y, canvas);
        let rotation = geom::rotate_about(anchor, element.rotation_deg);

        if element.background.active {
            draw_background_box(ctx, &block, element, anchor, rotation);
        }

        let font = fonts
            .font_data(element.font)
            .ok_or_else(|| CoverError::validation("registered family lost its font data"))?;
        let brush = TextBrushRgba8 {
            r: element.color.r,
            g: element.color.g,
            b: element.color.b,
            a: 255,
        };

        for line in &block.lines {
            let layout = fonts.layout_line(element.font, element.size_pt, brush, &line.text)?;
            let left = anchor.x + block.line_left_offset(line, element.alignment);
            let top = anchor.y + line.center_offset_y - block.line_height_px / 2.0;
            let tr = rotation * Affine::translate(Vec2::new(left, top));
            ctx.set_transform(affine_to_cpu(tr));

            for laid in layout.lines() {
                for item in laid.items() {
                    let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                        continue;
                    };
                    let b = run.style().brush;
                    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(b.r, b.g, b.b, b.a));
                    let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                        id: g.id,
                        x: g.x,
                        y: g.y,
                    });
                    ctx.glyph_run(&font)
                        .font_size(run.run().font_size())
                        .fill_glyphs(glyphs);
                }
            }
        }
    }

    Ok(())
}

fn draw_background_box(
    ctx: &mut vello_cpu::RenderContext,
    block: &TextBlock,
    element: &TextElement,
    anchor: Point,
    rotation: Affine,
) {
    let Some(bb) = block.background_box(
        element.alignment,
        element.background.padding_px,
        element.background.corner_radius_px,
    ) else {
        return;
    };
    let path = geom::rounded_rect_path(
        anchor.x + bb.left_offset,
        anchor.y + bb.top_offset,
        bb.width,
        bb.height,
        bb.corner_radius_px,
    );
    let [r, g, b, a] = element
        .background
        .color
        .with_opacity(element.background.opacity);
    ctx.set_transform(affine_to_cpu(rotation));
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
    ctx.fill_path(&bezpath_to_cpu(&path));
}

pub(crate) fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

pub(crate) fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

pub(crate) fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

/// Rectangle converted to a path for clip layers.
pub(crate) fn rect_path(rect: Rect) -> BezPath {
    rect.to_path(0.1)
}

fn premul_channel(c: u8, a: u8) -> u8 {
    ((u16::from(c) * u16::from(a) + 127) / 255) as u8
}

pub(crate) fn pixmap_from_premul_bytes(
    rgba8_premul: &[u8],
    width: u32,
    height: u32,
) -> CoverResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| CoverError::validation("image width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| CoverError::validation("image height exceeds u16"))?;
    if rgba8_premul.len() != width as usize * height as usize * 4 {
        return Err(CoverError::validation("prepared image byte length mismatch"));
    }

    let mut may_have_opacities = false;
    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for px in rgba8_premul.chunks_exact(4) {
        let a = px[3];
        may_have_opacities |= a != 255;
        pixels.push(vello_cpu::peniko::color::PremulRgba8 {
            r: px[0],
            g: px[1],
            b: px[2],
            a,
        });
    }

    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels,
        w,
        h,
        may_have_opacities,
    ))
}
