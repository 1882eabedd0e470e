//! Camera trait abstraction.
//!
//! The camera is a black box that produces either a live stream of decoded
//! barcodes or a preview feed that can be snapshotted into a still. Barcode
//! symbology decoding happens on the far side of this seam.

use async_trait::async_trait;
use futures::stream::BoxStream;
use image::DynamicImage;

use crate::error::CaptureError;

/// Decoded barcode strings, one item per decode event. The stream ends when
/// the underlying video feed closes. Dropping it releases the camera.
pub type DecodeStream = BoxStream<'static, String>;

/// A live preview that stays open until dropped.
///
/// Implementations that touch the disk or decode images do that work off
/// the event loop.
#[async_trait]
pub trait PreviewFeed: Send {
    /// Grab the frame currently shown in the preview.
    async fn snapshot(&mut self) -> Result<DynamicImage, CaptureError>;
}

/// Trait for acquiring the camera in one of its two shapes.
///
/// Only one shape is held at a time by the capture session; implementations
/// may refuse a second concurrent acquisition.
#[async_trait]
pub trait Camera: Send + Sync {
    /// Acquire the camera and start decoding barcodes from the live stream.
    async fn open_decoder(&self) -> Result<DecodeStream, CaptureError>;

    /// Acquire the camera as a preview feed for still capture.
    async fn open_preview(&self) -> Result<Box<dyn PreviewFeed>, CaptureError>;
}
