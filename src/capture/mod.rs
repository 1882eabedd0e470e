//! Camera ownership for the scanning screen.
//!
//! [`CaptureSession`] holds at most one camera resource at a time: a
//! [`DecodeSubscription`] in barcode mode or a preview feed in label mode.
//! Swapping modes always tears the old resource down before acquiring the
//! new one.

mod session;
mod still;
mod subscription;

pub use session::{CaptureSession, SessionPhase};
pub use still::{encode_jpeg, JPEG_QUALITY};
pub use subscription::{DecodeEvent, DecodeSubscription, SubscriptionId};
