use serde::{Deserialize, Serialize};

use crate::composition::style::{StyleConfig, Template};
use crate::composition::text::{TextBackground, TextElement};
use crate::foundation::color::Rgb;

/// Catalog grouping for presets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetCategory {
    /// General-interest magazine covers.
    Magazine,
    /// Scholarly and review-journal covers.
    Journal,
    /// Reduced, photography-forward covers.
    Minimal,
}

impl PresetCategory {
    /// Stable lowercase identifier.
    pub fn name(self) -> &'static str {
        match self {
            PresetCategory::Magazine => "magazine",
            PresetCategory::Journal => "journal",
            PresetCategory::Minimal => "minimal",
        }
    }
}

/// A named, read-only bundle of template + style + default text elements.
///
/// Presets only ever seed the mutable models; they are never mutated in
/// place and carry no live state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Preset {
    /// Stable catalog id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// One-line description shown in the catalog browser.
    pub description: String,
    /// Reference to a thumbnail asset owned by the embedding application.
    pub thumbnail: String,
    /// Catalog grouping.
    pub category: PresetCategory,
    /// Layout template.
    pub template: Template,
    /// Style knobs applied when the preset is selected.
    pub config: StyleConfig,
    /// Default text elements (text content empty).
    pub elements: Vec<TextElement>,
}

/// The static, read-only preset catalog.
#[derive(Clone, Debug)]
pub struct PresetCatalog {
    presets: Vec<Preset>,
}

impl PresetCatalog {
    /// The built-in catalog shipped with the engine.
    pub fn builtin() -> Self {
        Self {
            presets: builtin_presets(),
        }
    }

    /// All presets in catalog order.
    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    /// Look up a preset by id.
    pub fn by_id(&self, id: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.id == id)
    }

    /// Case-insensitive substring search over name and description.
    pub fn search(&self, query: &str) -> Vec<&Preset> {
        let needle = query.to_lowercase();
        self.presets
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// All presets in one category.
    pub fn in_category(&self, category: PresetCategory) -> Vec<&Preset> {
        self.presets
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }
}

fn builtin_presets() -> Vec<Preset> {
    let mut presets = Vec::new();

    presets.push(Preset {
        id: "classic-ivory".into(),
        name: "Classic Ivory".into(),
        description: "Photograph over an ivory text panel with serif titling".into(),
        thumbnail: "thumbs/classic-ivory.png".into(),
        category: PresetCategory::Magazine,
        template: Template::Classic,
        config: Template::Classic.default_config(),
        elements: Template::Classic.default_elements(),
    });

    presets.push(Preset {
        id: "classic-noir".into(),
        name: "Classic Noir".into(),
        description: "Moody variant of the classic split with a charcoal panel".into(),
        thumbnail: "thumbs/classic-noir.png".into(),
        category: PresetCategory::Magazine,
        template: Template::Classic,
        config: StyleConfig {
            primary: Rgb::new(0xc8, 0xa9, 0x51),
            secondary: Rgb::new(0x23, 0x25, 0x28),
            ..Template::Classic.default_config()
        },
        elements: {
            let mut els = Template::Classic.default_elements();
            for el in &mut els {
                el.color = Rgb::new(0xf2, 0xef, 0xe9);
            }
            els
        },
    });

    presets.push(Preset {
        id: "modern-tide".into(),
        name: "Modern Tide".into(),
        description: "Full-bleed photo with a deep navy gradient band".into(),
        thumbnail: "thumbs/modern-tide.png".into(),
        category: PresetCategory::Magazine,
        template: Template::Modern,
        config: Template::Modern.default_config(),
        elements: Template::Modern.default_elements(),
    });

    presets.push(Preset {
        id: "modern-ember".into(),
        name: "Modern Ember".into(),
        description: "Narrow warm band for photography-led features".into(),
        thumbnail: "thumbs/modern-ember.png".into(),
        category: PresetCategory::Minimal,
        template: Template::Modern,
        config: StyleConfig {
            primary: Rgb::new(0x5c, 0x1a, 0x0b),
            stripe_width_pct: Some(45.0),
            ..Template::Modern.default_config()
        },
        elements: {
            let mut els = Template::Modern.default_elements();
            for el in &mut els {
                el.anchor_pct_x = 76.0;
                el.background = TextBackground {
                    active: true,
                    color: Rgb::BLACK,
                    opacity: 0.35,
                    padding_px: 10.0,
                    corner_radius_px: 6.0,
                };
            }
            els
        },
    });

    presets.push(Preset {
        id: "academic-slate".into(),
        name: "Academic Slate".into(),
        description: "Framed page with a centered photo band for journals".into(),
        thumbnail: "thumbs/academic-slate.png".into(),
        category: PresetCategory::Journal,
        template: Template::Academic,
        config: Template::Academic.default_config(),
        elements: Template::Academic.default_elements(),
    });

    presets.push(Preset {
        id: "academic-archive".into(),
        name: "Academic Archive".into(),
        description: "Warm paper tones and an oxblood frame for review issues".into(),
        thumbnail: "thumbs/academic-archive.png".into(),
        category: PresetCategory::Journal,
        template: Template::Academic,
        config: StyleConfig {
            primary: Rgb::new(0x4f, 0x1c, 0x1c),
            secondary: Rgb::new(0xf7, 0xf2, 0xe7),
            ..Template::Academic.default_config()
        },
        elements: Template::Academic.default_elements(),
    });

    presets
}

#[cfg(test)]
#[path = "../../tests/unit/composition/presets.rs"]
mod tests;
