//! The camera used by the terminal binary.

use async_trait::async_trait;

use super::{FrameDirectoryCamera, KeyboardWedgeDecoder};
use crate::error::CaptureError;
use crate::traits::{Camera, DecodeStream, PreviewFeed};

/// Barcode decoding from a keyboard-wedge scanner, label stills from an
/// optional frame directory.
#[derive(Debug, Clone)]
pub struct TerminalCamera {
    wedge: KeyboardWedgeDecoder,
    frames: Option<FrameDirectoryCamera>,
}

impl TerminalCamera {
    pub fn new(wedge: KeyboardWedgeDecoder, frames: Option<FrameDirectoryCamera>) -> Self {
        Self { wedge, frames }
    }

    /// Handle for forwarding keystrokes to the decoder.
    pub fn wedge(&self) -> &KeyboardWedgeDecoder {
        &self.wedge
    }
}

#[async_trait]
impl Camera for TerminalCamera {
    async fn open_decoder(&self) -> Result<DecodeStream, CaptureError> {
        self.wedge.open_decoder().await
    }

    async fn open_preview(&self) -> Result<Box<dyn PreviewFeed>, CaptureError> {
        match &self.frames {
            Some(frames) => frames.open_preview().await,
            None => Err(CaptureError::NoDevice(
                "set FOODSENSE_FRAME_DIR to a directory of preview frames".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    #[tokio::test]
    async fn test_decoder_goes_through_wedge() {
        let camera = TerminalCamera::new(KeyboardWedgeDecoder::new(), None);
        let mut stream = camera.open_decoder().await.unwrap();
        camera.wedge().push_char('5');
        camera.wedge().finish_line();
        assert_eq!(stream.next().await, Some("5".to_string()));
    }

    #[tokio::test]
    async fn test_preview_without_frame_dir() {
        let camera = TerminalCamera::new(KeyboardWedgeDecoder::new(), None);
        assert!(matches!(
            camera.open_preview().await,
            Err(CaptureError::NoDevice(_))
        ));
    }
}
