//! Mock camera for testing.
//!
//! Provides a camera whose decode events and preview frames are injected by
//! the test, with a counter of live capture resources so tests can assert
//! that at most one is held at a time.

use async_trait::async_trait;
use futures::channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};
use futures::{Stream, StreamExt};
use image::{DynamicImage, Rgb, RgbImage};
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};

use crate::error::CaptureError;
use crate::traits::{Camera, DecodeStream, PreviewFeed};

/// Counts live resources. Held by every stream and preview the mock hands
/// out, released on drop.
#[derive(Debug)]
struct ResourceGuard {
    active: Arc<AtomicUsize>,
}

impl ResourceGuard {
    fn acquire(active: &Arc<AtomicUsize>, peak: &AtomicUsize) -> Self {
        let now = active.fetch_add(1, Ordering::SeqCst) + 1;
        peak.fetch_max(now, Ordering::SeqCst);
        Self {
            active: Arc::clone(active),
        }
    }
}

impl Drop for ResourceGuard {
    fn drop(&mut self) {
        self.active.fetch_sub(1, Ordering::SeqCst);
    }
}

struct MockDecodeStream {
    rx: UnboundedReceiver<String>,
    _guard: ResourceGuard,
}

impl Stream for MockDecodeStream {
    type Item = String;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.get_mut().rx.poll_next_unpin(cx)
    }
}

struct MockPreview {
    frame: Arc<Mutex<DynamicImage>>,
    snapshot_error: Arc<Mutex<Option<CaptureError>>>,
    _guard: ResourceGuard,
}

#[async_trait]
impl PreviewFeed for MockPreview {
    async fn snapshot(&mut self) -> Result<DynamicImage, CaptureError> {
        if let Some(err) = self.snapshot_error.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(self.frame.lock().unwrap().clone())
    }
}

/// Mock camera for testing.
///
/// # Example
///
/// ```ignore
/// use foodsense::adapters::mock::MockCamera;
///
/// let camera = MockCamera::new();
/// let mut stream = camera.open_decoder().await?;
/// camera.emit("0123456789012");
/// assert_eq!(stream.next().await, Some("0123456789012".to_string()));
/// assert_eq!(camera.active_resources(), 1);
/// drop(stream);
/// assert_eq!(camera.active_resources(), 0);
/// ```
#[derive(Clone)]
pub struct MockCamera {
    senders: Arc<Mutex<Vec<UnboundedSender<String>>>>,
    frame: Arc<Mutex<DynamicImage>>,
    decoder_error: Arc<Mutex<Option<CaptureError>>>,
    preview_error: Arc<Mutex<Option<CaptureError>>>,
    snapshot_error: Arc<Mutex<Option<CaptureError>>>,
    active: Arc<AtomicUsize>,
    peak: Arc<AtomicUsize>,
    decoder_opens: Arc<AtomicUsize>,
    preview_opens: Arc<AtomicUsize>,
}

impl MockCamera {
    /// Create a mock camera showing a small solid-colour frame.
    pub fn new() -> Self {
        let frame = RgbImage::from_pixel(8, 8, Rgb([200, 180, 40]));
        Self {
            senders: Arc::new(Mutex::new(Vec::new())),
            frame: Arc::new(Mutex::new(DynamicImage::ImageRgb8(frame))),
            decoder_error: Arc::new(Mutex::new(None)),
            preview_error: Arc::new(Mutex::new(None)),
            snapshot_error: Arc::new(Mutex::new(None)),
            active: Arc::new(AtomicUsize::new(0)),
            peak: Arc::new(AtomicUsize::new(0)),
            decoder_opens: Arc::new(AtomicUsize::new(0)),
            preview_opens: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Deliver a decode event to every open decoder stream.
    ///
    /// Returns how many streams received it.
    pub fn emit(&self, code: &str) -> usize {
        let mut senders = self.senders.lock().unwrap();
        senders.retain(|tx| tx.unbounded_send(code.to_string()).is_ok());
        senders.len()
    }

    /// End every open decoder stream, as if the video feed died.
    pub fn close_feed(&self) {
        self.senders.lock().unwrap().clear();
    }

    /// Replace the frame returned by preview snapshots.
    pub fn set_frame(&self, frame: DynamicImage) {
        *self.frame.lock().unwrap() = frame;
    }

    /// Make `open_decoder` fail with `err` (or succeed again with `None`).
    pub fn fail_decoder(&self, err: Option<CaptureError>) {
        *self.decoder_error.lock().unwrap() = err;
    }

    /// Make `open_preview` fail with `err` (or succeed again with `None`).
    pub fn fail_preview(&self, err: Option<CaptureError>) {
        *self.preview_error.lock().unwrap() = err;
    }

    /// Make preview snapshots fail with `err` (or succeed again with `None`).
    pub fn fail_snapshot(&self, err: Option<CaptureError>) {
        *self.snapshot_error.lock().unwrap() = err;
    }

    /// Number of streams and previews currently alive.
    pub fn active_resources(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }

    /// Highest number of resources ever alive at once.
    pub fn peak_resources(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }

    /// Number of successful `open_decoder` calls.
    pub fn decoder_opens(&self) -> usize {
        self.decoder_opens.load(Ordering::SeqCst)
    }

    /// Number of successful `open_preview` calls.
    pub fn preview_opens(&self) -> usize {
        self.preview_opens.load(Ordering::SeqCst)
    }
}

impl Default for MockCamera {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Camera for MockCamera {
    async fn open_decoder(&self) -> Result<DecodeStream, CaptureError> {
        if let Some(err) = self.decoder_error.lock().unwrap().clone() {
            return Err(err);
        }

        let (tx, rx) = unbounded();
        self.senders.lock().unwrap().push(tx);
        self.decoder_opens.fetch_add(1, Ordering::SeqCst);

        Ok(MockDecodeStream {
            rx,
            _guard: ResourceGuard::acquire(&self.active, &self.peak),
        }
        .boxed())
    }

    async fn open_preview(&self) -> Result<Box<dyn PreviewFeed>, CaptureError> {
        if let Some(err) = self.preview_error.lock().unwrap().clone() {
            return Err(err);
        }

        self.preview_opens.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MockPreview {
            frame: Arc::clone(&self.frame),
            snapshot_error: Arc::clone(&self.snapshot_error),
            _guard: ResourceGuard::acquire(&self.active, &self.peak),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::FutureExt;

    #[tokio::test]
    async fn test_decoder_receives_injected_events() {
        let camera = MockCamera::new();
        let mut stream = camera.open_decoder().await.unwrap();

        assert_eq!(camera.emit("111"), 1);
        assert_eq!(stream.next().await, Some("111".to_string()));
        assert!(stream.next().now_or_never().is_none());
    }

    #[tokio::test]
    async fn test_resource_counter_tracks_drops() {
        let camera = MockCamera::new();
        let stream = camera.open_decoder().await.unwrap();
        let preview = camera.open_preview().await.unwrap();
        assert_eq!(camera.active_resources(), 2);
        assert_eq!(camera.peak_resources(), 2);

        drop(stream);
        assert_eq!(camera.active_resources(), 1);
        drop(preview);
        assert_eq!(camera.active_resources(), 0);
        assert_eq!(camera.emit("x"), 0);
    }

    #[tokio::test]
    async fn test_close_feed_ends_stream() {
        let camera = MockCamera::new();
        let mut stream = camera.open_decoder().await.unwrap();
        camera.close_feed();
        assert_eq!(stream.next().await, None);
    }

    #[tokio::test]
    async fn test_injected_failures() {
        let camera = MockCamera::new();
        camera.fail_decoder(Some(CaptureError::PermissionDenied));
        assert!(matches!(
            camera.open_decoder().await,
            Err(CaptureError::PermissionDenied)
        ));
        assert_eq!(camera.decoder_opens(), 0);

        camera.fail_snapshot(Some(CaptureError::Frame("blank".to_string())));
        let mut preview = camera.open_preview().await.unwrap();
        assert!(preview.snapshot().await.is_err());
        camera.fail_snapshot(None);
        assert_eq!(preview.snapshot().await.unwrap().width(), 8);
    }
}
