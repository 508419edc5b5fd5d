/// Convenience result type used across coverforge.
pub type CoverResult<T> = Result<T, CoverError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Upload-time variants (`ImageTooLarge`, `Decode`, `InvalidImageDimensions`)
/// are raised before any model mutation; `InvalidColorFormat` is non-fatal at
/// the color-input boundary and callers substitute a safe default instead of
/// aborting a render.
#[derive(thiserror::Error, Debug)]
pub enum CoverError {
    /// Invalid user-provided or composition data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Malformed color input (expected `RRGGBB` or `#RRGGBB`).
    #[error("invalid color format: {0}")]
    InvalidColorFormat(String),

    /// Uploaded photo is smaller than the documented minimum.
    #[error("image dimensions {width}x{height} are below the minimum {min_width}x{min_height}")]
    InvalidImageDimensions {
        /// Decoded width in pixels.
        width: u32,
        /// Decoded height in pixels.
        height: u32,
        /// Required minimum width.
        min_width: u32,
        /// Required minimum height.
        min_height: u32,
    },

    /// Uploaded photo exceeds the encoded-size cap.
    #[error("image payload of {actual_bytes} bytes exceeds the {max_bytes} byte limit")]
    ImageTooLarge {
        /// Size of the supplied payload.
        actual_bytes: usize,
        /// Configured upper bound.
        max_bytes: usize,
    },

    /// The supplied bytes could not be decoded as an image.
    #[error("decode failure: {0}")]
    Decode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoverError {
    /// Build a [`CoverError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CoverError::InvalidColorFormat`] value.
    pub fn invalid_color(msg: impl Into<String>) -> Self {
        Self::InvalidColorFormat(msg.into())
    }

    /// Build a [`CoverError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
