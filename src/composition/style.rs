use serde::{Deserialize, Serialize};

use crate::composition::text::{
    FontFamily, ROLE_AUTHOR, ROLE_TITLE, TextAlign, TextElement,
};
use crate::foundation::color::Rgb;

/// Default width of the Modern template's lateral gradient band, as a
/// percentage of canvas width.
pub const DEFAULT_STRIPE_WIDTH_PCT: f64 = 80.0;

/// The closed set of cover layouts.
///
/// Selecting a template resets [`StyleConfig`] and each text element's
/// geometry/style to the template's presets while preserving typed text
/// (the merge lives in [`crate::TextSet::apply_template`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    /// Photo over the top two thirds, flat text panel below.
    Classic,
    /// Full-bleed photo with a trailing-edge gradient band.
    Modern,
    /// Framed page with a centered photo band, title above, byline below.
    Academic,
}

impl Template {
    /// Every template, in catalog order.
    pub fn all() -> [Template; 3] {
        [Template::Classic, Template::Modern, Template::Academic]
    }

    /// Stable lowercase identifier, as used by the CLI and preset catalog.
    pub fn name(self) -> &'static str {
        match self {
            Template::Classic => "classic",
            Template::Modern => "modern",
            Template::Academic => "academic",
        }
    }

    /// The template's default palette and geometry knobs.
    pub fn default_config(self) -> StyleConfig {
        match self {
            Template::Classic => StyleConfig {
                primary: Rgb::new(0x7a, 0x1f, 0x1f),
                secondary: Rgb::new(0xf4, 0xef, 0xe6),
                gradient_opacity: 0.85,
                stripe_width_pct: None,
            },
            Template::Modern => StyleConfig {
                primary: Rgb::new(0x0e, 0x17, 0x26),
                secondary: Rgb::new(0xe2, 0xe8, 0xf0),
                gradient_opacity: 0.85,
                stripe_width_pct: Some(DEFAULT_STRIPE_WIDTH_PCT),
            },
            Template::Academic => StyleConfig {
                primary: Rgb::new(0x14, 0x21, 0x3d),
                secondary: Rgb::new(0xfd, 0xfd, 0xf8),
                gradient_opacity: 0.85,
                stripe_width_pct: None,
            },
        }
    }

    /// The template's default title/author elements, text left empty.
    pub fn default_elements(self) -> Vec<TextElement> {
        match self {
            Template::Classic => vec![
                seeded_element(
                    ROLE_TITLE,
                    FontFamily::Serif,
                    34.0,
                    Rgb::new(0x2a, 0x21, 0x18),
                    (50.0, 78.0),
                ),
                seeded_element(
                    ROLE_AUTHOR,
                    FontFamily::Serif,
                    18.0,
                    Rgb::new(0x6b, 0x5f, 0x53),
                    (50.0, 89.0),
                ),
            ],
            Template::Modern => vec![
                seeded_element(
                    ROLE_TITLE,
                    FontFamily::SansSerif,
                    36.0,
                    Rgb::WHITE,
                    (60.0, 40.0),
                ),
                seeded_element(
                    ROLE_AUTHOR,
                    FontFamily::SansSerif,
                    16.0,
                    Rgb::new(0xe2, 0xe8, 0xf0),
                    (60.0, 52.0),
                ),
            ],
            Template::Academic => vec![
                seeded_element(
                    ROLE_TITLE,
                    FontFamily::Serif,
                    30.0,
                    Rgb::new(0x14, 0x21, 0x3d),
                    (50.0, 18.0),
                ),
                seeded_element(
                    ROLE_AUTHOR,
                    FontFamily::Serif,
                    16.0,
                    Rgb::new(0x3a, 0x44, 0x5c),
                    (50.0, 85.0),
                ),
            ],
        }
    }
}

impl std::fmt::Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn seeded_element(
    id: &str,
    font: FontFamily,
    size_pt: f64,
    color: Rgb,
    anchor: (f64, f64),
) -> TextElement {
    let mut el = TextElement::new(id);
    el.font = font;
    el.size_pt = size_pt;
    el.color = color;
    el.anchor_pct_x = anchor.0;
    el.anchor_pct_y = anchor.1;
    el.alignment = TextAlign::Center;
    el
}

/// Per-template palette and geometry knobs.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Accent color (frame, gradient band).
    pub primary: Rgb,
    /// Ground color (text panel, page).
    pub secondary: Rgb,
    /// Peak opacity of overlay gradients, 0..1. Meaningful only for
    /// templates with an overlay band.
    pub gradient_opacity: f64,
    /// Width of the lateral accent band as a percentage of canvas width.
    /// Template-specific; `None` for templates without a band.
    pub stripe_width_pct: Option<f64>,
}

impl StyleConfig {
    /// Clamp the numeric knobs into range.
    pub fn normalize(&mut self) {
        if self.gradient_opacity.is_finite() {
            self.gradient_opacity = self.gradient_opacity.clamp(0.0, 1.0);
        } else {
            self.gradient_opacity = 0.85;
        }
        if let Some(w) = self.stripe_width_pct {
            self.stripe_width_pct = if w.is_finite() {
                Some(w.clamp(0.0, 100.0))
            } else {
                Some(DEFAULT_STRIPE_WIDTH_PCT)
            };
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/style.rs"]
mod tests;
