use futures::FutureExt;
use std::fmt;
use std::sync::Arc;

use super::still::encode_jpeg;
use super::subscription::{DecodeEvent, DecodeSubscription, SubscriptionId};
use crate::error::CaptureError;
use crate::models::{CaptureMode, StillImage};
use crate::traits::{Camera, PreviewFeed};

/// The single camera resource a session may hold.
enum Resource {
    Idle,
    Decoder(DecodeSubscription),
    Preview(Box<dyn PreviewFeed>),
}

impl Resource {
    fn serves(&self, mode: CaptureMode) -> bool {
        matches!(
            (self, mode),
            (Resource::Decoder(_), CaptureMode::Barcode)
                | (Resource::Preview(_), CaptureMode::Label)
        )
    }
}

/// Coarse session state, for display and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No resource held
    Idle,
    /// A resource is held and decode events are delivered
    Streaming,
    /// A resource is held but decode events are dropped
    Paused,
}

/// Owns the camera while the scanning screen is visible.
///
/// The session never holds more than one resource: every acquisition
/// releases the previous resource first.
pub struct CaptureSession {
    camera: Arc<dyn Camera>,
    mode: CaptureMode,
    resource: Resource,
    scanning: bool,
    paused: bool,
    last_subscription: u64,
}

impl CaptureSession {
    pub fn new(camera: Arc<dyn Camera>) -> Self {
        Self {
            camera,
            mode: CaptureMode::default(),
            resource: Resource::Idle,
            scanning: false,
            paused: false,
            last_subscription: 0,
        }
    }

    pub fn mode(&self) -> CaptureMode {
        self.mode
    }

    pub fn is_scanning(&self) -> bool {
        self.scanning
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn phase(&self) -> SessionPhase {
        match (&self.resource, self.paused) {
            (Resource::Idle, _) => SessionPhase::Idle,
            (_, true) => SessionPhase::Paused,
            (_, false) => SessionPhase::Streaming,
        }
    }

    /// Id of the live decode subscription, if any.
    pub fn active_subscription(&self) -> Option<SubscriptionId> {
        match &self.resource {
            Resource::Decoder(sub) => Some(sub.id()),
            _ => None,
        }
    }

    pub fn has_preview(&self) -> bool {
        matches!(self.resource, Resource::Preview(_))
    }

    /// Whether `event` came from the live subscription.
    pub fn accepts(&self, event: &DecodeEvent) -> bool {
        self.active_subscription() == Some(event.subscription)
    }

    /// Start the resource for the current mode.
    pub async fn enter_scanning(&mut self) -> Result<(), CaptureError> {
        self.scanning = true;
        self.acquire().await
    }

    /// Release whatever resource is held.
    pub fn leave_scanning(&mut self) {
        self.scanning = false;
        self.release();
    }

    /// Change capture mode.
    ///
    /// Switching to the current mode while its resource is live does
    /// nothing. Outside scanning only the mode is recorded.
    pub async fn switch_mode(&mut self, mode: CaptureMode) -> Result<(), CaptureError> {
        if mode == self.mode && (self.resource.serves(mode) || !self.scanning) {
            return Ok(());
        }

        tracing::info!("Capture mode {} -> {}", self.mode.label(), mode.label());
        self.release();
        self.mode = mode;
        if self.scanning {
            self.acquire().await
        } else {
            Ok(())
        }
    }

    /// Pause or resume decode delivery. Events that arrive while paused are
    /// dropped, not queued.
    pub fn set_paused(&mut self, paused: bool) {
        if self.paused != paused {
            tracing::debug!("Capture {}", if paused { "paused" } else { "resumed" });
        }
        if self.paused && !paused {
            self.drain_paused_events();
        }
        self.paused = paused;
    }

    /// Drop decodes buffered while paused so they never surface on resume.
    fn drain_paused_events(&mut self) {
        if let Resource::Decoder(sub) = &mut self.resource {
            while let Some(Some(event)) = sub.next().now_or_never() {
                tracing::debug!("Dropping decode {} while paused", event.code);
            }
        }
    }

    /// Wait for the next decode from the live, unpaused subscription.
    ///
    /// Never resolves while no subscription is held. Returns
    /// `Err(FeedClosed)` once if the feed ends, after releasing it.
    /// Cancel-safe.
    pub async fn next_decode(&mut self) -> Result<DecodeEvent, CaptureError> {
        loop {
            let next = match &mut self.resource {
                Resource::Decoder(sub) => sub.next().await,
                _ => return std::future::pending().await,
            };

            match next {
                Some(event) if self.paused => {
                    tracing::debug!("Dropping decode {} while paused", event.code);
                }
                Some(event) => return Ok(event),
                None => {
                    tracing::warn!("Decode feed closed");
                    self.resource = Resource::Idle;
                    return Err(CaptureError::FeedClosed);
                }
            }
        }
    }

    /// Materialize the current preview frame as a JPEG still. The preview
    /// keeps running.
    ///
    /// Barcode mode is `NotReady`. Label mode without a live preview is
    /// `NoDevice`. Encoding runs on the blocking pool.
    pub async fn capture_still(&mut self) -> Result<StillImage, CaptureError> {
        let feed = match (self.mode, &mut self.resource) {
            (CaptureMode::Label, Resource::Preview(feed)) => feed,
            (CaptureMode::Label, _) => {
                return Err(CaptureError::NoDevice("no preview feed".to_string()))
            }
            (mode, _) => return Err(CaptureError::NotReady { mode }),
        };

        let frame = feed.snapshot().await?;
        let still = tokio::task::spawn_blocking(move || encode_jpeg(&frame))
            .await
            .map_err(|e| CaptureError::Encode(format!("encoder stopped: {}", e)))??;
        tracing::info!("Captured still ({} bytes)", still.len());
        Ok(still)
    }

    async fn acquire(&mut self) -> Result<(), CaptureError> {
        if self.resource.serves(self.mode) {
            return Ok(());
        }
        self.release();

        self.resource = match self.mode {
            CaptureMode::Barcode => {
                let stream = self.camera.open_decoder().await?;
                self.last_subscription += 1;
                let id = SubscriptionId::new(self.last_subscription);
                tracing::info!("Decode subscription {} started", id);
                Resource::Decoder(DecodeSubscription::new(id, stream))
            }
            CaptureMode::Label => {
                let feed = self.camera.open_preview().await?;
                tracing::info!("Preview feed started");
                Resource::Preview(feed)
            }
        };
        Ok(())
    }

    fn release(&mut self) {
        match std::mem::replace(&mut self.resource, Resource::Idle) {
            Resource::Idle => {}
            Resource::Decoder(sub) => tracing::info!("Decode subscription {} stopped", sub.id()),
            Resource::Preview(_) => tracing::info!("Preview feed stopped"),
        }
    }
}

impl fmt::Debug for CaptureSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaptureSession")
            .field("mode", &self.mode)
            .field("phase", &self.phase())
            .field("scanning", &self.scanning)
            .field("subscription", &self.active_subscription())
            .finish()
    }
}
