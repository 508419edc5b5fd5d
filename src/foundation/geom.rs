use crate::foundation::color::Rgb;

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

use kurbo::{RoundedRect, Shape};

/// Fixed logical output resolution of a composed cover.
///
/// 612x792 matches a common print page proportion at a fixed DPI; the engine
/// renders at this size regardless of on-screen display scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CanvasSize {
    /// Width in logical pixels.
    pub width: u32,
    /// Height in logical pixels.
    pub height: u32,
}

impl CanvasSize {
    /// The standard cover resolution.
    pub const COVER: CanvasSize = CanvasSize {
        width: 612,
        height: 792,
    };

    /// Canvas center point.
    pub fn center(self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }

    /// Full-canvas rectangle.
    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }
}

/// Map an `{x, y}` percentage pair (0..100) onto canvas pixels.
///
/// Linear, no clamping: the owning model already clamped the percentage.
pub fn to_pixel_offset(anchor_pct_x: f64, anchor_pct_y: f64, canvas: CanvasSize) -> Point {
    Point::new(
        anchor_pct_x / 100.0 * f64::from(canvas.width),
        anchor_pct_y / 100.0 * f64::from(canvas.height),
    )
}

/// Compose a transform that rotates and scales about `center`.
///
/// Equivalent to translate-to-center, rotate, scale, translate-back. The
/// pivot is always the canvas center, never the element's own anchor, so pan
/// and rotate/zoom interact consistently regardless of edit order.
pub fn compose_transform(center: Point, rotation_deg: f64, scale: f64) -> Affine {
    Affine::translate(center.to_vec2())
        * Affine::rotate(rotation_deg.to_radians())
        * Affine::scale(scale)
        * Affine::translate(-center.to_vec2())
}

/// Rotation about an arbitrary pivot point.
pub fn rotate_about(pivot: Point, rotation_deg: f64) -> Affine {
    Affine::translate(pivot.to_vec2())
        * Affine::rotate(rotation_deg.to_radians())
        * Affine::translate(-pivot.to_vec2())
}

/// Build a rounded-rectangle path, degenerating to a plain rectangle when
/// `radius <= 0`. The radius is capped at half the shorter side.
pub fn rounded_rect_path(x: f64, y: f64, w: f64, h: f64, radius: f64) -> BezPath {
    let rect = Rect::new(x, y, x + w, y + h);
    if radius <= 0.0 {
        return rect.to_path(0.1);
    }
    let capped = radius.min(w.min(h) / 2.0);
    RoundedRect::from_rect(rect, capped).to_path(0.1)
}

/// One stop of a linear gradient: a color plus its straight alpha at a
/// normalized 0..1 offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    /// Normalized position along the gradient axis.
    pub offset: f64,
    /// Stop color.
    pub color: Rgb,
    /// Straight alpha at this stop, 0..1.
    pub alpha: f64,
}

impl GradientStop {
    /// Construct a stop with a clamped offset and alpha.
    pub fn new(offset: f64, color: Rgb, alpha: f64) -> Self {
        Self {
            offset: offset.clamp(0.0, 1.0),
            color,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }
}

/// The standard two-stop fade used by template overlay bands: fully
/// transparent `color` at the start, `peak_alpha`-opaque `color` at the end.
pub fn fade_stops(color: Rgb, peak_alpha: f64) -> [GradientStop; 2] {
    [
        GradientStop::new(0.0, color, 0.0),
        GradientStop::new(1.0, color, peak_alpha),
    ]
}

/// Sample a straight-alpha RGBA8 color at `t` (0..1) along a stop list.
///
/// Stops must be ordered by offset; outside the covered range the nearest
/// stop is used.
pub fn sample_linear(stops: &[GradientStop], t: f64) -> [u8; 4] {
    let t = t.clamp(0.0, 1.0);

    let Some(first) = stops.first() else {
        return [0, 0, 0, 0];
    };
    if t <= first.offset {
        return first.color.with_opacity(first.alpha);
    }
    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t <= b.offset {
            let span = b.offset - a.offset;
            let local = if span <= 0.0 { 1.0 } else { (t - a.offset) / span };
            let lerp = |x: u8, y: u8| -> u8 {
                (f64::from(x) + (f64::from(y) - f64::from(x)) * local)
                    .round()
                    .clamp(0.0, 255.0) as u8
            };
            let alpha = a.alpha + (b.alpha - a.alpha) * local;
            return [
                lerp(a.color.r, b.color.r),
                lerp(a.color.g, b.color.g),
                lerp(a.color.b, b.color.b),
                (alpha.clamp(0.0, 1.0) * 255.0).round() as u8,
            ];
        }
    }
    let last = stops[stops.len() - 1];
    last.color.with_opacity(last.alpha)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/geom.rs"]
mod tests;
