use std::sync::Arc;

use anyhow::Context as _;

use crate::assets::decode::{self, PreparedPhoto, UploadLimits};
use crate::assets::fonts::FontLibrary;
use crate::composition::history::{DEFAULT_HISTORY_CAP, HistoryStack};
use crate::composition::photo::ImageTransform;
use crate::composition::presets::Preset;
use crate::composition::style::{StyleConfig, Template};
use crate::composition::text::TextSet;
use crate::foundation::error::{CoverError, CoverResult};
use crate::foundation::geom::CanvasSize;
use crate::render::scene::{PhotoPaint, Scene};
use crate::render::style::renderer_for;

/// An encoded capture of the surface's pixels at one point in time.
///
/// Doubles as the history snapshot and the export artifact handed to the
/// external save collaborator; the bytes are an opaque PNG payload.
#[derive(Clone, Debug)]
pub struct EncodedRaster {
    /// Logical width in pixels.
    pub width: u32,
    /// Logical height in pixels.
    pub height: u32,
    png: Arc<Vec<u8>>,
}

impl EncodedRaster {
    /// The PNG payload.
    pub fn as_bytes(&self) -> &[u8] {
        &self.png
    }
}

/// Raw readback of the drawing surface, premultiplied RGBA8 row-major.
#[derive(Clone, Debug)]
pub struct FrameRgba {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Premultiplied RGBA8 bytes.
    pub data: Vec<u8>,
}

impl FrameRgba {
    /// Premultiplied RGBA of the pixel at `(x, y)`, or `None` out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        self.data.get(idx..idx + 4).map(|px| [px[0], px[1], px[2], px[3]])
    }
}

/// Construction knobs for [`CoverStudio`].
#[derive(Clone, Copy, Debug)]
pub struct StudioOptions {
    /// Output resolution; the engine renders at this size regardless of
    /// on-screen display scale.
    pub canvas: CanvasSize,
    /// Upload validation thresholds.
    pub limits: UploadLimits,
    /// Number of undo snapshots retained.
    pub history_cap: usize,
}

impl Default for StudioOptions {
    fn default() -> Self {
        Self {
            canvas: CanvasSize::COVER,
            limits: UploadLimits::default(),
            history_cap: DEFAULT_HISTORY_CAP,
        }
    }
}

/// The composition orchestrator.
///
/// Owns the three mutable models (photo transform, text set, style config),
/// the decoded photograph, the drawing surface, and the undo history. Every
/// mutation is followed by an explicit [`CoverStudio::commit`], which
/// synchronously re-renders the whole surface through the active template's
/// renderer and pushes a history snapshot; no mutation is reflected anywhere
/// until then, and nothing renders partially.
///
/// The studio is the only writer of the surface. Style renderers receive it
/// per call and never retain a reference across calls.
pub struct CoverStudio {
    canvas: CanvasSize,
    limits: UploadLimits,
    fonts: FontLibrary,

    template: Template,
    config: StyleConfig,
    transform: ImageTransform,
    texts: TextSet,

    photo: Option<PreparedPhoto>,
    photo_paint: Option<PhotoPaint>,

    surface: vello_cpu::Pixmap,
    ctx: Option<vello_cpu::RenderContext>,
    history: HistoryStack<EncodedRaster>,
}

impl CoverStudio {
    /// A studio at the standard cover resolution with default limits.
    pub fn new(fonts: FontLibrary) -> Self {
        // CanvasSize::COVER is compile-time known to fit u16.
        let canvas = CanvasSize::COVER;
        Self::build(fonts, StudioOptions::default(), canvas.width as u16, canvas.height as u16)
    }

    /// A studio with explicit options. Fails when the canvas exceeds the
    /// surface's u16 dimension limit.
    pub fn with_options(fonts: FontLibrary, options: StudioOptions) -> CoverResult<Self> {
        let w: u16 = options
            .canvas
            .width
            .try_into()
            .map_err(|_| CoverError::validation("canvas width exceeds u16"))?;
        let h: u16 = options
            .canvas
            .height
            .try_into()
            .map_err(|_| CoverError::validation("canvas height exceeds u16"))?;
        if w == 0 || h == 0 {
            return Err(CoverError::validation("canvas dimensions must be > 0"));
        }
        Ok(Self::build(fonts, options, w, h))
    }

    fn build(fonts: FontLibrary, options: StudioOptions, w: u16, h: u16) -> Self {
        let template = Template::Classic;
        Self {
            canvas: options.canvas,
            limits: options.limits,
            fonts,
            template,
            config: template.default_config(),
            transform: ImageTransform::default(),
            texts: TextSet::from_template(template),
            photo: None,
            photo_paint: None,
            surface: vello_cpu::Pixmap::new(w, h),
            ctx: None,
            history: HistoryStack::with_capacity(options.history_cap),
        }
    }

    /// Output resolution.
    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    /// Active template.
    pub fn template(&self) -> Template {
        self.template
    }

    /// Active style configuration.
    pub fn config(&self) -> &StyleConfig {
        &self.config
    }

    /// Mutable style configuration; call [`CoverStudio::commit`] afterwards.
    /// The config is re-normalized at commit time.
    pub fn config_mut(&mut self) -> &mut StyleConfig {
        &mut self.config
    }

    /// Photograph transform state.
    pub fn transform(&self) -> &ImageTransform {
        &self.transform
    }

    /// Mutable photograph transform (all setters clamp); call
    /// [`CoverStudio::commit`] afterwards.
    pub fn transform_mut(&mut self) -> &mut ImageTransform {
        &mut self.transform
    }

    /// The ordered text elements.
    pub fn texts(&self) -> &TextSet {
        &self.texts
    }

    /// Mutable text set; call [`CoverStudio::commit`] afterwards.
    pub fn texts_mut(&mut self) -> &mut TextSet {
        &mut self.texts
    }

    /// The font library backing measurement and glyph drawing.
    pub fn fonts_mut(&mut self) -> &mut FontLibrary {
        &mut self.fonts
    }

    /// Decoded photo dimensions, if one has been accepted.
    pub fn photo_size(&self) -> Option<(u32, u32)> {
        self.photo.as_ref().map(|p| (p.width, p.height))
    }

    /// Number of retained history snapshots.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Validate, decode and accept a photograph, then render the first frame.
    ///
    /// Validation happens before any model mutation: a rejected upload
    /// (too large, undecodable, undersized) leaves the previously accepted
    /// photo, transform, and history exactly as they were. On success the
    /// transform resets to its centered default; typed text is untouched.
    #[tracing::instrument(skip_all, fields(len = bytes.len()))]
    pub fn load_photo(&mut self, bytes: &[u8]) -> CoverResult<EncodedRaster> {
        let prepared = decode::decode_photo(bytes, &self.limits)?;
        let paint = PhotoPaint::from_prepared(&prepared)?;

        self.photo = Some(prepared);
        self.photo_paint = Some(paint);
        self.transform = ImageTransform::default();
        self.commit()
    }

    /// Switch the active template: style config and element geometry reset
    /// to the template's presets, typed text is preserved. Call
    /// [`CoverStudio::commit`] to re-render.
    pub fn set_template(&mut self, template: Template) {
        self.template = template;
        self.config = template.default_config();
        self.texts.apply_template(template);
    }

    /// Seed template, config, and elements from a catalog preset, preserving
    /// typed text for matching roles. Call [`CoverStudio::commit`] to
    /// re-render.
    pub fn apply_preset(&mut self, preset: &Preset) {
        self.template = preset.template;
        let mut config = preset.config;
        config.normalize();
        self.config = config;

        let mut elements = preset.elements.clone();
        for el in &mut elements {
            if let Some(existing) = self.texts.element(&el.id) {
                el.text = existing.text.clone();
            }
        }
        self.texts.replace(elements);
    }

    /// Re-render the whole surface from the current models and push a
    /// history snapshot.
    ///
    /// Runs synchronously on the calling thread; the surface reflects the
    /// new state before this returns. Requires an accepted photo.
    #[tracing::instrument(skip_all)]
    pub fn commit(&mut self) -> CoverResult<EncodedRaster> {
        self.config.normalize();

        let mut ctx = match self.ctx.take() {
            Some(ctx) => ctx,
            None => vello_cpu::RenderContext::new(self.surface.width(), self.surface.height()),
        };
        ctx.reset();

        {
            let photo = self.photo_paint.as_ref().ok_or_else(|| {
                CoverError::validation("no photograph loaded; call load_photo first")
            })?;
            let mut scene = Scene {
                canvas: self.canvas,
                photo,
                transform: &self.transform,
                config: &self.config,
                elements: self.texts.elements(),
                fonts: &mut self.fonts,
            };
            renderer_for(self.template).render(&mut scene, &mut ctx)?;
        }

        ctx.flush();
        ctx.render_to_pixmap(&mut self.surface);
        self.ctx = Some(ctx);

        let raster = encode_surface(&self.surface, self.canvas)?;
        self.history.push(raster.clone());
        Ok(raster)
    }

    /// Discard the most recent snapshot and return the one to re-display.
    ///
    /// A no-op returning `None` when fewer than two snapshots exist.
    pub fn undo(&mut self) -> Option<EncodedRaster> {
        self.history.undo().cloned()
    }

    /// The current surface contents as an encoded raster at the fixed
    /// output resolution.
    #[tracing::instrument(skip_all)]
    pub fn export_raster(&self) -> CoverResult<EncodedRaster> {
        if self.history.is_empty() {
            return Err(CoverError::validation(
                "nothing rendered yet; load a photo and commit first",
            ));
        }
        encode_surface(&self.surface, self.canvas)
    }

    /// Raw premultiplied pixels of the current surface.
    pub fn current_frame(&self) -> FrameRgba {
        FrameRgba {
            width: self.canvas.width,
            height: self.canvas.height,
            data: self.surface.data_as_u8_slice().to_vec(),
        }
    }
}

fn encode_surface(surface: &vello_cpu::Pixmap, canvas: CanvasSize) -> CoverResult<EncodedRaster> {
    let mut rgba = surface.data_as_u8_slice().to_vec();
    unpremultiply_rgba8_in_place(&mut rgba);

    let mut cursor = std::io::Cursor::new(Vec::new());
    image::write_buffer_with_format(
        &mut cursor,
        &rgba,
        canvas.width,
        canvas.height,
        image::ExtendedColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .context("encode cover png")?;

    Ok(EncodedRaster {
        width: canvas.width,
        height: canvas.height,
        png: Arc::new(cursor.into_inner()),
    })
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 || a == 255 {
            continue;
        }
        px[0] = ((px[0] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[1] = ((px[1] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[2] = ((px[2] as u16 * 255 + a / 2) / a).min(255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/studio.rs"]
mod tests;
