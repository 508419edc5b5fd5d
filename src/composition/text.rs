use serde::{Deserialize, Serialize};

use crate::composition::style::Template;
use crate::foundation::color::Rgb;

/// Stable role tag of the headline element.
pub const ROLE_TITLE: &str = "title";
/// Stable role tag of the byline element.
pub const ROLE_AUTHOR: &str = "author";

/// Logical font family selector. A closed set: covers never reference
/// arbitrary font names, only roles resolved through the font library.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontFamily {
    /// Book-weight serif for classic and academic layouts.
    Serif,
    /// Neutral sans-serif for modern layouts.
    SansSerif,
    /// High-contrast display face for accents.
    Display,
}

/// Horizontal anchoring of a multi-line block and its background box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    /// Lines start at the anchor.
    Left,
    /// Lines are centered on the anchor.
    #[default]
    Center,
    /// Lines end at the anchor.
    Right,
}

/// Optional filled box painted behind a text block.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextBackground {
    /// Whether the box is drawn at all.
    pub active: bool,
    /// Fill color.
    pub color: Rgb,
    /// Fill opacity, 0..1.
    pub opacity: f64,
    /// Padding added around the text block on every side, in pixels.
    pub padding_px: f64,
    /// Corner radius in pixels; `<= 0` yields square corners.
    pub corner_radius_px: f64,
}

impl Default for TextBackground {
    fn default() -> Self {
        Self {
            active: false,
            color: Rgb::BLACK,
            opacity: 0.6,
            padding_px: 8.0,
            corner_radius_px: 4.0,
        }
    }
}

impl TextBackground {
    fn normalize(&mut self) {
        self.opacity = finite_clamp(self.opacity, 0.0, 1.0, 0.6);
        self.padding_px = finite_clamp(self.padding_px, 0.0, 200.0, 8.0);
        self.corner_radius_px = finite_clamp(self.corner_radius_px, 0.0, 200.0, 0.0);
    }
}

/// One placed text run on the cover.
///
/// `alignment` and `anchor` jointly determine the block's left/right edge;
/// nothing downstream recomputes that independently.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextElement {
    /// Stable role tag ("title", "author").
    pub id: String,
    /// Text content; may be empty, which makes the element a drawable no-op.
    pub text: String,
    /// Logical font family.
    pub font: FontFamily,
    /// Font size in points, positive.
    pub size_pt: f64,
    /// Fill color of the glyphs.
    pub color: Rgb,
    /// Anchor X as a percentage of canvas width, 0..100.
    pub anchor_pct_x: f64,
    /// Anchor Y as a percentage of canvas height, 0..100.
    pub anchor_pct_y: f64,
    /// Horizontal anchoring of the block relative to the anchor.
    pub alignment: TextAlign,
    /// Rotation about the anchor, -180..180 degrees.
    pub rotation_deg: f64,
    /// Optional background box.
    pub background: TextBackground,
}

impl TextElement {
    /// A centered serif element with library defaults, ready for seeding.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: String::new(),
            font: FontFamily::Serif,
            size_pt: 24.0,
            color: Rgb::BLACK,
            anchor_pct_x: 50.0,
            anchor_pct_y: 50.0,
            alignment: TextAlign::Center,
            rotation_deg: 0.0,
            background: TextBackground::default(),
        }
    }

    /// Clamp every numeric field into its documented range.
    pub fn normalize(&mut self) {
        self.size_pt = finite_clamp(self.size_pt, 4.0, 200.0, 24.0);
        self.anchor_pct_x = finite_clamp(self.anchor_pct_x, 0.0, 100.0, 50.0);
        self.anchor_pct_y = finite_clamp(self.anchor_pct_y, 0.0, 100.0, 50.0);
        self.rotation_deg = finite_clamp(self.rotation_deg, -180.0, 180.0, 0.0);
        self.background.normalize();
    }
}

fn finite_clamp(value: f64, lo: f64, hi: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value.clamp(lo, hi)
    } else {
        fallback
    }
}

/// The ordered set of text elements on a cover and their per-element styling.
///
/// Declaration order is paint order: later elements paint over earlier ones.
/// This controller owns the template merge: switching templates regenerates
/// geometry and style from the new template's presets while preserving the
/// text the user already typed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TextSet {
    elements: Vec<TextElement>,
}

impl TextSet {
    /// Seed the set from a template's default elements.
    pub fn from_template(template: Template) -> Self {
        Self {
            elements: template.default_elements(),
        }
    }

    /// Replace the whole set, normalizing each element.
    pub fn replace(&mut self, elements: Vec<TextElement>) {
        self.elements = elements;
        for el in &mut self.elements {
            el.normalize();
        }
    }

    /// Elements in declaration (paint) order.
    pub fn elements(&self) -> &[TextElement] {
        &self.elements
    }

    /// Look up an element by role tag.
    pub fn element(&self, id: &str) -> Option<&TextElement> {
        self.elements.iter().find(|el| el.id == id)
    }

    /// Set the text content of an element. Unknown ids are ignored.
    pub fn set_text(&mut self, id: &str, text: impl Into<String>) {
        if let Some(el) = self.elements.iter_mut().find(|el| el.id == id) {
            el.text = text.into();
        }
    }

    /// Mutate one element through a closure; the result is re-normalized so
    /// out-of-range writes cannot escape the model.
    pub fn update(&mut self, id: &str, f: impl FnOnce(&mut TextElement)) {
        if let Some(el) = self.elements.iter_mut().find(|el| el.id == id) {
            f(el);
            el.normalize();
        }
    }

    /// Re-seed geometry and style from `template`'s presets, preserving the
    /// textual content already present for matching role tags.
    pub fn apply_template(&mut self, template: Template) {
        let mut seeded = template.default_elements();
        for el in &mut seeded {
            if let Some(existing) = self.elements.iter().find(|e| e.id == el.id) {
                el.text = existing.text.clone();
            }
        }
        self.elements = seeded;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/text.rs"]
mod tests;
