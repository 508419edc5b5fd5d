//! coverforge composes publication covers from a photograph and text
//! metadata.
//!
//! The engine turns a user-supplied photo plus title/author text into a
//! fixed-resolution (612x792) raster cover under one of a closed set of
//! visual templates, with live pan/zoom/rotate controls for the photo,
//! movable and wrappable text elements, and a bounded whole-frame undo
//! history.
//!
//! # Pipeline overview
//!
//! 1. **Intake**: `decode_photo` validates and decodes the upload into
//!    premultiplied RGBA8 before any model state changes
//! 2. **Model**: [`ImageTransform`], [`TextSet`] and [`StyleConfig`] hold
//!    the live editing state behind clamp-on-write setters
//! 3. **Render**: [`CoverStudio::commit`] re-renders the whole surface
//!    synchronously through the active [`Template`]'s style renderer
//! 4. **History/Export**: every commit pushes an [`EncodedRaster`] snapshot;
//!    `export_raster` hands the same PNG payload to the external save
//!    collaborator
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Single-threaded and synchronous**: every mutation is fully reflected
//!   by the next commit; no render is ever in flight when another starts.
//! - **Validation at the boundary**: uploads and color input are checked
//!   once at intake; style renderers assume valid models and never
//!   re-validate.
//! - **Premultiplied RGBA8** end-to-end on the drawing surface.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod composition;
mod foundation;
mod layout;
mod render;

/// High-level, standalone documentation for the engine's concepts and API.
pub mod guide;

pub use assets::decode::{PreparedPhoto, UploadLimits, decode_photo};
pub use assets::fonts::{FontLibrary, TextBrushRgba8};
pub use composition::history::{DEFAULT_HISTORY_CAP, HistoryStack};
pub use composition::photo::{ImageTransform, ROTATION_RANGE, SCALE_RANGE};
pub use composition::presets::{Preset, PresetCatalog, PresetCategory};
pub use composition::style::{DEFAULT_STRIPE_WIDTH_PCT, StyleConfig, Template};
pub use composition::text::{
    FontFamily, ROLE_AUTHOR, ROLE_TITLE, TextAlign, TextBackground, TextElement, TextSet,
};
pub use foundation::color::Rgb;
pub use foundation::error::{CoverError, CoverResult};
pub use foundation::geom::{
    Affine, BezPath, CanvasSize, GradientStop, Point, Rect, Vec2, compose_transform, fade_stops,
    rotate_about, rounded_rect_path, sample_linear, to_pixel_offset,
};
pub use layout::wrap::{
    BackgroundBox, LINE_HEIGHT_FACTOR, LaidOutLine, TextBlock, wrap_greedy,
};
pub use render::studio::{CoverStudio, EncodedRaster, FrameRgba, StudioOptions};
