//! Photo payload handling and the image fit calculator.
//!
//! The Rirekisho photo cell approximates the physical form's 3 cm × 4 cm
//! frame. Embedded photos are scaled with "contain" semantics so the full
//! image fits inside that frame with its aspect ratio preserved. When the
//! natural dimensions cannot be determined the calculator returns the frame
//! dimensions verbatim — photo layout degrades to a non-aspect-correct box
//! rather than aborting the document.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use tracing::warn;

/// Photo frame width, approximating 3 cm at the 96 dpi reference resolution.
pub const PHOTO_BOX_WIDTH_PX: u32 = 113;
/// Photo frame height, approximating 4 cm at the 96 dpi reference resolution.
pub const PHOTO_BOX_HEIGHT_PX: u32 = 151;

/// docx image extents are in English Metric Units: 914400 EMU/inch ÷ 96 dpi.
pub const EMU_PER_PX: u32 = 9525;

/// Glyph rendered in the photo cell when no usable photo is supplied.
pub const PHOTO_PLACEHOLDER: &str = "写真";

/// A decoded photo ready to embed, with its contain-fit display size.
#[derive(Debug, Clone)]
pub struct FittedPhoto {
    pub bytes: Vec<u8>,
    pub width_px: u32,
    pub height_px: u32,
}

/// Computes the largest size that fits inside the photo frame while
/// preserving the image's aspect ratio (`scale = min(tw/nw, th/nh)`).
///
/// `natural = None` (corrupt payload, probing unavailable) falls back to the
/// frame dimensions verbatim. Deterministic for identical inputs.
pub fn contain_fit(natural: Option<(u32, u32)>, target_w: u32, target_h: u32) -> (u32, u32) {
    match natural {
        Some((nw, nh)) if nw > 0 && nh > 0 => {
            let scale = f64::min(target_w as f64 / nw as f64, target_h as f64 / nh as f64);
            let w = ((nw as f64 * scale).round() as u32).clamp(1, target_w);
            let h = ((nh as f64 * scale).round() as u32).clamp(1, target_h);
            (w, h)
        }
        // Dimension fallback: the frame itself, never an error.
        _ => (target_w, target_h),
    }
}

/// Extracts the raw image bytes from a `data:image/...;base64,...` URL.
/// Returns `None` for anything that is not a well-formed data URL — the
/// caller renders the placeholder cell instead.
pub fn decode_data_url(data_url: &str) -> Option<Vec<u8>> {
    let rest = data_url.strip_prefix("data:")?;
    let (meta, payload) = rest.split_once(',')?;
    if !meta.ends_with(";base64") || !meta.starts_with("image/") {
        return None;
    }
    BASE64.decode(payload.trim()).ok()
}

/// Decodes the record's photo payload and probes its natural dimensions.
///
/// Never fails: an absent, undecodable, or unprobeable payload yields `None`
/// and the Rirekisho renders the placeholder glyph. Probing only reads image
/// headers; a payload that passes the probe but is corrupt past that point
/// still aborts at serialization time, which is the documented fatal path.
pub async fn resolve_photo(data_url: Option<&str>) -> Option<FittedPhoto> {
    let bytes = decode_data_url(data_url?)?;

    // Header probe is cheap but still an I/O-shaped decode step; keep it off
    // the async executor alongside the rest of the document building.
    let probed = tokio::task::spawn_blocking(move || {
        let natural = match imagesize::blob_size(&bytes) {
            Ok(size) => Some((size.width as u32, size.height as u32)),
            Err(e) => {
                warn!("Photo dimension probe failed, dropping photo: {e}");
                return None;
            }
        };
        let (width_px, height_px) =
            contain_fit(natural, PHOTO_BOX_WIDTH_PX, PHOTO_BOX_HEIGHT_PX);
        Some(FittedPhoto {
            bytes,
            width_px,
            height_px,
        })
    })
    .await;

    match probed {
        Ok(photo) => photo,
        Err(e) => {
            warn!("Photo probe task failed, dropping photo: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 1x1 transparent PNG.
    const TINY_PNG_B64: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8z8BQDwAEhQGAhKmMIQAAAABJRU5ErkJggg==";

    #[test]
    fn test_contain_fit_preserves_aspect_ratio() {
        // 400x600 portrait into the 113x151 frame: height-bound.
        let (w, h) = contain_fit(Some((400, 600)), 113, 151);
        assert!(w <= 113 && h <= 151);
        let original = 400.0 / 600.0;
        let fitted = w as f64 / h as f64;
        assert!(
            (original - fitted).abs() < 0.02,
            "aspect drift too large: {original} vs {fitted}"
        );
    }

    #[test]
    fn test_contain_fit_landscape_is_width_bound() {
        let (w, h) = contain_fit(Some((800, 400)), 113, 151);
        assert_eq!(w, 113);
        assert!(h < 151);
    }

    #[test]
    fn test_contain_fit_unknown_dimensions_falls_back_to_frame() {
        assert_eq!(contain_fit(None, 113, 151), (113, 151));
        assert_eq!(contain_fit(Some((0, 600)), 113, 151), (113, 151));
    }

    #[test]
    fn test_contain_fit_is_deterministic() {
        let a = contain_fit(Some((1024, 768)), 113, 151);
        let b = contain_fit(Some((1024, 768)), 113, 151);
        assert_eq!(a, b);
    }

    #[test]
    fn test_decode_data_url_accepts_image_payload() {
        let url = format!("data:image/png;base64,{TINY_PNG_B64}");
        let bytes = decode_data_url(&url).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }

    #[test]
    fn test_decode_data_url_rejects_non_image_and_garbage() {
        assert!(decode_data_url("data:text/plain;base64,aGVsbG8=").is_none());
        assert!(decode_data_url("not a data url").is_none());
        assert!(decode_data_url("data:image/png;base64,!!!").is_none());
    }

    #[tokio::test]
    async fn test_resolve_photo_probes_real_png() {
        let url = format!("data:image/png;base64,{TINY_PNG_B64}");
        let photo = resolve_photo(Some(&url)).await.unwrap();
        // 1x1 source: contain-fit scales up to the height-bound square.
        assert!(photo.width_px <= PHOTO_BOX_WIDTH_PX);
        assert!(photo.height_px <= PHOTO_BOX_HEIGHT_PX);
        assert!(!photo.bytes.is_empty());
    }

    #[tokio::test]
    async fn test_resolve_photo_corrupt_payload_degrades_to_none() {
        // Valid base64, not a real image: probe fails, no photo, no error.
        let url = "data:image/png;base64,aGVsbG8gd29ybGQ=";
        assert!(resolve_photo(Some(url)).await.is_none());
        assert!(resolve_photo(None).await.is_none());
    }
}
