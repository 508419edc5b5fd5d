use serde::{Deserialize, Serialize};

/// Valid zoom range for the source photograph.
pub const SCALE_RANGE: (f64, f64) = (0.5, 1.5);
/// Valid rotation range in degrees.
pub const ROTATION_RANGE: (f64, f64) = (-180.0, 180.0);

/// Live position/scale/rotation state of the source photograph.
///
/// All three fields are clamped at write time; consumers never re-validate.
/// Non-finite input leaves the previous value in place.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawImageTransform")]
pub struct ImageTransform {
    position_pct_x: f64,
    position_pct_y: f64,
    scale: f64,
    rotation_deg: f64,
}

impl Default for ImageTransform {
    fn default() -> Self {
        Self {
            position_pct_x: 50.0,
            position_pct_y: 50.0,
            scale: 1.0,
            rotation_deg: 0.0,
        }
    }
}

impl ImageTransform {
    /// Photo center position as canvas percentages, each in 0..100.
    pub fn position_pct(&self) -> (f64, f64) {
        (self.position_pct_x, self.position_pct_y)
    }

    /// Zoom factor in 0.5..1.5.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Rotation in -180..180 degrees.
    pub fn rotation_deg(&self) -> f64 {
        self.rotation_deg
    }

    /// Set the position percentages, clamping each axis to 0..100.
    pub fn set_position_pct(&mut self, x: f64, y: f64) {
        self.position_pct_x = clamp_or_keep(x, 0.0, 100.0, self.position_pct_x);
        self.position_pct_y = clamp_or_keep(y, 0.0, 100.0, self.position_pct_y);
    }

    /// Set the zoom factor, clamped to 0.5..1.5.
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = clamp_or_keep(scale, SCALE_RANGE.0, SCALE_RANGE.1, self.scale);
    }

    /// Set the rotation, clamped to -180..180 degrees.
    pub fn set_rotation_deg(&mut self, deg: f64) {
        self.rotation_deg = clamp_or_keep(deg, ROTATION_RANGE.0, ROTATION_RANGE.1, self.rotation_deg);
    }

    /// Map a pointer position over a gesture surface onto `position_pct`.
    ///
    /// Local pointer coordinates are divided by the surface's own size and
    /// scaled to 0..100, then clamped through the ordinary setter. A
    /// degenerate surface (zero width or height) is ignored.
    pub fn pan_with_pointer(&mut self, local_x: f64, local_y: f64, surface_w: f64, surface_h: f64) {
        if !(surface_w > 0.0) || !(surface_h > 0.0) {
            return;
        }
        self.set_position_pct(local_x / surface_w * 100.0, local_y / surface_h * 100.0);
    }
}

fn clamp_or_keep(value: f64, lo: f64, hi: f64, previous: f64) -> f64 {
    if value.is_finite() {
        value.clamp(lo, hi)
    } else {
        previous
    }
}

/// Serde surrogate: deserialized values funnel through the clamping setters.
#[derive(Deserialize)]
struct RawImageTransform {
    #[serde(default = "default_position")]
    position_pct_x: f64,
    #[serde(default = "default_position")]
    position_pct_y: f64,
    #[serde(default = "default_scale")]
    scale: f64,
    #[serde(default)]
    rotation_deg: f64,
}

fn default_position() -> f64 {
    50.0
}

fn default_scale() -> f64 {
    1.0
}

impl From<RawImageTransform> for ImageTransform {
    fn from(raw: RawImageTransform) -> Self {
        let mut t = ImageTransform::default();
        t.set_position_pct(raw.position_pct_x, raw.position_pct_y);
        t.set_scale(raw.scale);
        t.set_rotation_deg(raw.rotation_deg);
        t
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/photo.rs"]
mod tests;
