//! # coverforge guide
//!
//! This module is a standalone walkthrough of the engine's architecture and
//! public API, for anyone embedding the cover composer in a larger
//! application.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`CoverStudio`](crate::CoverStudio): the orchestrator; owns the models,
//!   the drawing surface, and the undo history
//! - [`ImageTransform`](crate::ImageTransform): live pan/zoom/rotate state of
//!   the photograph, clamped at write time
//! - [`TextSet`](crate::TextSet) / [`TextElement`](crate::TextElement): the
//!   ordered text runs (title, author) and their styling
//! - [`StyleConfig`](crate::StyleConfig): the active template's palette and
//!   geometry knobs
//! - [`Template`](crate::Template): one of the closed layout set (Classic,
//!   Modern, Academic); each template has its own rendering strategy
//! - [`Preset`](crate::Preset) / [`PresetCatalog`](crate::PresetCatalog):
//!   read-only bundles that seed the mutable models
//! - [`EncodedRaster`](crate::EncodedRaster): an opaque PNG capture of the
//!   surface, used both as the undo snapshot and the export artifact
//!
//! ## The editing loop
//!
//! Every interaction follows the same shape:
//!
//! 1. Mutate a model through its owning accessor
//!    ([`transform_mut`](crate::CoverStudio::transform_mut),
//!    [`texts_mut`](crate::CoverStudio::texts_mut),
//!    [`config_mut`](crate::CoverStudio::config_mut),
//!    [`set_template`](crate::CoverStudio::set_template))
//! 2. Call [`commit`](crate::CoverStudio::commit): the whole surface is
//!    re-rendered synchronously and a snapshot is pushed
//! 3. Display the returned raster, or read raw pixels via
//!    [`current_frame`](crate::CoverStudio::current_frame)
//!
//! There is no partial or incremental redraw. The surface is bounded
//! (612x792) and a frame holds at most a handful of text elements, so a full
//! redraw per change keeps the contract simple: after `commit` returns, the
//! surface reflects every mutation made before it.
//!
//! ```no_run
//! use coverforge::{CoverStudio, FontLibrary, ROLE_TITLE, Template};
//!
//! # fn demo(photo_bytes: &[u8]) -> coverforge::CoverResult<()> {
//! let mut studio = CoverStudio::new(FontLibrary::new());
//! studio.load_photo(photo_bytes)?;
//!
//! studio.set_template(Template::Modern);
//! studio.texts_mut().set_text(ROLE_TITLE, "Field Notes");
//! studio.transform_mut().set_scale(1.2);
//! studio.commit()?;
//!
//! let cover = studio.export_raster()?;
//! # let _ = cover.as_bytes();
//! # Ok(())
//! # }
//! ```
//!
//! ## Validation lives at the boundary
//!
//! Uploads are validated by [`decode_photo`](crate::decode_photo) before any
//! model state changes: the encoded-size cap first, then decodability, then
//! the minimum-dimension rule in [`UploadLimits`](crate::UploadLimits). A
//! rejected upload leaves the previously accepted photo, transform, and
//! history untouched.
//!
//! Color input goes through [`Rgb::from_hex`](crate::Rgb::from_hex); a
//! malformed string is non-fatal and callers fall back to
//! [`Rgb::from_hex_or_black`](crate::Rgb::from_hex_or_black) or keep the
//! previous value.
//!
//! Past those boundaries, the style renderers assume valid inputs and do not
//! re-validate. An element with empty text is not an error; it simply draws
//! nothing, background box included.
//!
//! ## Text layout
//!
//! Wrapping is greedy word wrap over a measurement function
//! ([`wrap_greedy`](crate::wrap_greedy)), so the same algorithm is testable
//! with a synthetic measurer and exact with real font metrics from the
//! [`FontLibrary`](crate::FontLibrary). A wrapped block is centered
//! vertically on its anchor: line `i` of `k` sits at
//! `(i - (k - 1) / 2) * line_height`, which keeps the block visually stable
//! when text toggles between one and several lines.
//!
//! ## Undo
//!
//! History is a bounded ring of whole-frame snapshots
//! ([`HistoryStack`](crate::HistoryStack), default 10). `commit` pushes,
//! [`undo`](crate::CoverStudio::undo) pops and returns the frame to
//! re-display, and undoing past the first snapshot is a no-op. Snapshots are
//! never diffed.
//!
//! ## Fonts
//!
//! Text elements name a logical [`FontFamily`](crate::FontFamily); the
//! embedding application registers concrete faces with
//! [`FontLibrary::register_family`](crate::FontLibrary::register_family).
//! An element whose family has no registered face is skipped at render time
//! (with a warning event), mirroring the empty-text no-op.
