use std::sync::Arc;

use crate::foundation::error::{CoverError, CoverResult};

/// Upload validation thresholds.
///
/// The legacy platform enforced two different minimum-dimension rules at its
/// two upload entry points; the engine collapses them into this single
/// documented rule. Embedders needing stricter bounds construct their own
/// limits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UploadLimits {
    /// Minimum decoded width in pixels.
    pub min_width: u32,
    /// Minimum decoded height in pixels.
    pub min_height: u32,
    /// Maximum encoded payload size in bytes.
    pub max_bytes: usize,
}

impl Default for UploadLimits {
    fn default() -> Self {
        Self {
            min_width: 500,
            min_height: 500,
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

/// Decoded photograph in premultiplied RGBA8 form.
#[derive(Clone, Debug)]
pub struct PreparedPhoto {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major premultiplied RGBA8.
    pub rgba8_premul: Arc<Vec<u8>>,
}

/// Decode and validate an uploaded photograph.
///
/// The size cap is checked before decoding, decode failures surface as
/// [`CoverError::Decode`], and undersized images as
/// [`CoverError::InvalidImageDimensions`]. No engine state is touched here,
/// so a failed upload leaves any previously accepted photo intact.
#[tracing::instrument(skip(bytes), fields(len = bytes.len()))]
pub fn decode_photo(bytes: &[u8], limits: &UploadLimits) -> CoverResult<PreparedPhoto> {
    if bytes.len() > limits.max_bytes {
        return Err(CoverError::ImageTooLarge {
            actual_bytes: bytes.len(),
            max_bytes: limits.max_bytes,
        });
    }

    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| CoverError::decode(format!("could not decode image: {e}")))?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    if width < limits.min_width || height < limits.min_height {
        return Err(CoverError::InvalidImageDimensions {
            width,
            height,
            min_width: limits.min_width,
            min_height: limits.min_height,
        });
    }

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Ok(PreparedPhoto {
        width,
        height,
        rgba8_premul: Arc::new(rgba8_premul),
    })
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 255 {
            continue;
        }
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
