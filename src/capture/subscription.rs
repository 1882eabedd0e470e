use futures::StreamExt;
use std::fmt;

use crate::traits::DecodeStream;

/// Identifies one decode subscription for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}

/// A decoded barcode, tagged with the subscription that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeEvent {
    pub subscription: SubscriptionId,
    pub code: String,
}

/// An owned, cancellable live decode.
///
/// Dropping the subscription drops the decoder stream, which releases the
/// camera before `drop` returns.
pub struct DecodeSubscription {
    id: SubscriptionId,
    stream: DecodeStream,
}

impl DecodeSubscription {
    pub fn new(id: SubscriptionId, stream: DecodeStream) -> Self {
        Self { id, stream }
    }

    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Wait for the next decode. `None` means the video feed closed.
    ///
    /// Cancel-safe: dropping the future loses no events.
    pub async fn next(&mut self) -> Option<DecodeEvent> {
        let code = self.stream.next().await?;
        Some(DecodeEvent {
            subscription: self.id,
            code,
        })
    }
}

impl fmt::Debug for DecodeSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodeSubscription")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}
