use std::collections::HashMap;
use std::path::Path;

use crate::composition::text::FontFamily;
use crate::foundation::error::{CoverError, CoverResult};

/// RGBA8 brush color carried through Parley layouts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextBrushRgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

struct RegisteredFont {
    family_name: String,
    font_data: vello_cpu::peniko::FontData,
}

/// Per-family font registry backing text measurement and glyph layout.
///
/// Families map onto the closed [`FontFamily`] set; each is registered from
/// raw font bytes (or a file). Measurement and rendering both resolve
/// through this library, so a wrapped line is always measured with the same
/// face that later rasterizes it.
pub struct FontLibrary {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    families: HashMap<FontFamily, RegisteredFont>,
}

impl Default for FontLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl FontLibrary {
    /// An empty library with fresh Parley contexts.
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            families: HashMap::new(),
        }
    }

    /// Register font bytes for a logical family, replacing any previous
    /// registration.
    pub fn register_family(&mut self, family: FontFamily, bytes: Vec<u8>) -> CoverResult<()> {
        let registered = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(bytes.clone()), None);
        let family_id = registered.first().map(|(id, _)| *id).ok_or_else(|| {
            CoverError::validation("no font families registered from font bytes")
        })?;
        let family_name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| CoverError::validation("registered font family has no name"))?
            .to_string();

        let font_data =
            vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(bytes), 0);
        self.families.insert(
            family,
            RegisteredFont {
                family_name,
                font_data,
            },
        );
        Ok(())
    }

    /// Register a family from a font file on disk.
    pub fn load_family_file(&mut self, family: FontFamily, path: &Path) -> CoverResult<()> {
        let bytes = std::fs::read(path).map_err(|e| {
            CoverError::validation(format!("failed to read font '{}': {e}", path.display()))
        })?;
        self.register_family(family, bytes)
    }

    /// Whether a family has a registered face.
    pub fn has_family(&self, family: FontFamily) -> bool {
        self.families.contains_key(&family)
    }

    /// Raw font handle for glyph rasterization.
    pub(crate) fn font_data(&self, family: FontFamily) -> Option<vello_cpu::peniko::FontData> {
        self.families.get(&family).map(|f| f.font_data.clone())
    }

    /// Shape a single line (no wrapping) at `size_pt` with the given brush.
    pub(crate) fn layout_line(
        &mut self,
        family: FontFamily,
        size_pt: f64,
        brush: TextBrushRgba8,
        text: &str,
    ) -> CoverResult<parley::Layout<TextBrushRgba8>> {
        if !size_pt.is_finite() || size_pt <= 0.0 {
            return Err(CoverError::validation("text size_pt must be finite and > 0"));
        }
        let family_name = self
            .families
            .get(&family)
            .map(|f| f.family_name.clone())
            .ok_or_else(|| {
                CoverError::validation(format!("font family {family:?} is not registered"))
            })?;

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family_name)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_pt as f32));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }

    /// Pixel width of `text` at the family/size, as the wrap algorithm sees
    /// it. Fails when the family has no registered face.
    pub fn measure_width(
        &mut self,
        family: FontFamily,
        size_pt: f64,
        text: &str,
    ) -> CoverResult<f64> {
        let layout = self.layout_line(family, size_pt, TextBrushRgba8::default(), text)?;
        Ok(f64::from(layout.width()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/fonts.rs"]
mod tests;
