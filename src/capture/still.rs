use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;

use crate::error::CaptureError;
use crate::models::StillImage;

/// JPEG quality used for captured stills.
pub const JPEG_QUALITY: u8 = 85;

/// Encode a preview frame as the JPEG still sent to the analysis service.
pub fn encode_jpeg(frame: &DynamicImage) -> Result<StillImage, CaptureError> {
    if frame.width() == 0 || frame.height() == 0 {
        return Err(CaptureError::Frame("preview frame is empty".to_string()));
    }

    // JPEG has no alpha channel.
    let rgb = frame.to_rgb8();
    let mut buf = Vec::new();
    JpegEncoder::new_with_quality(&mut buf, JPEG_QUALITY)
        .encode_image(&rgb)
        .map_err(|e| CaptureError::Encode(e.to_string()))?;

    Ok(StillImage::jpeg(buf))
}
