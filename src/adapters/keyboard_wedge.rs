//! Keyboard-wedge barcode decoder.
//!
//! Hardware barcode scanners in keyboard-wedge mode type the decoded digits
//! followed by Enter. The terminal forwards those keystrokes here and each
//! completed line becomes one decode event on the open stream.

use async_trait::async_trait;
use futures::channel::mpsc::{unbounded, UnboundedSender};
use futures::StreamExt;
use std::sync::{Arc, Mutex};

use crate::error::CaptureError;
use crate::traits::{Camera, DecodeStream, PreviewFeed};

/// Longest line accepted before input is discarded.
const MAX_LINE_LEN: usize = 64;

#[derive(Debug, Default)]
struct WedgeState {
    buffer: String,
    sender: Option<UnboundedSender<String>>,
}

impl WedgeState {
    fn listening(&self) -> bool {
        self.sender.as_ref().is_some_and(|tx| !tx.is_closed())
    }
}

/// Keystroke-driven decoder.
///
/// Clones share state: the input loop keeps one handle to push keys and the
/// capture session opens streams through another.
#[derive(Debug, Clone, Default)]
pub struct KeyboardWedgeDecoder {
    state: Arc<Mutex<WedgeState>>,
}

impl KeyboardWedgeDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a decode stream is currently open.
    pub fn is_listening(&self) -> bool {
        self.lock().listening()
    }

    /// Append a typed character. Ignored unless a stream is open.
    ///
    /// Returns true if the character was accepted.
    pub fn push_char(&self, c: char) -> bool {
        let mut state = self.lock();
        if !state.listening() || !c.is_ascii_alphanumeric() {
            return false;
        }
        if state.buffer.len() >= MAX_LINE_LEN {
            tracing::debug!("Discarding overlong wedge input");
            state.buffer.clear();
        }
        state.buffer.push(c);
        true
    }

    /// Remove the last typed character.
    pub fn backspace(&self) {
        self.lock().buffer.pop();
    }

    /// Complete the current line, emitting it as a decode event.
    ///
    /// Returns true if an event was emitted.
    pub fn finish_line(&self) -> bool {
        let mut state = self.lock();
        let line = std::mem::take(&mut state.buffer);
        if line.is_empty() {
            return false;
        }

        let delivered = state
            .sender
            .as_ref()
            .is_some_and(|tx| tx.unbounded_send(line).is_ok());
        if !delivered {
            state.sender = None;
        }
        delivered
    }

    /// Characters typed since the last completed line.
    pub fn pending(&self) -> String {
        self.lock().buffer.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, WedgeState> {
        // A poisoned lock only means a panic while holding plain data.
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl Camera for KeyboardWedgeDecoder {
    /// Opening a new stream ends the previous one.
    async fn open_decoder(&self) -> Result<DecodeStream, CaptureError> {
        let (tx, rx) = unbounded();
        let mut state = self.lock();
        state.buffer.clear();
        state.sender = Some(tx);
        Ok(rx.boxed())
    }

    async fn open_preview(&self) -> Result<Box<dyn PreviewFeed>, CaptureError> {
        Err(CaptureError::NoDevice(
            "a keyboard-wedge scanner has no preview".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::FutureExt;

    #[tokio::test]
    async fn test_line_becomes_decode_event() {
        let wedge = KeyboardWedgeDecoder::new();
        let mut stream = wedge.open_decoder().await.unwrap();

        for c in "0123456789012".chars() {
            assert!(wedge.push_char(c));
        }
        assert_eq!(wedge.pending(), "0123456789012");
        assert!(wedge.finish_line());
        assert_eq!(wedge.pending(), "");
        assert_eq!(stream.next().await, Some("0123456789012".to_string()));
    }

    #[test]
    fn test_input_ignored_without_stream() {
        let wedge = KeyboardWedgeDecoder::new();
        assert!(!wedge.push_char('1'));
        assert!(!wedge.finish_line());
        assert!(!wedge.is_listening());
    }

    #[tokio::test]
    async fn test_dropped_stream_stops_listening() {
        let wedge = KeyboardWedgeDecoder::new();
        let stream = wedge.open_decoder().await.unwrap();
        assert!(wedge.is_listening());
        drop(stream);
        assert!(!wedge.is_listening());
        assert!(!wedge.push_char('1'));
    }

    #[tokio::test]
    async fn test_reopen_ends_previous_stream() {
        let wedge = KeyboardWedgeDecoder::new();
        let mut first = wedge.open_decoder().await.unwrap();
        let mut second = wedge.open_decoder().await.unwrap();

        assert_eq!(first.next().await, None);
        wedge.push_char('7');
        wedge.finish_line();
        assert_eq!(second.next().now_or_never(), Some(Some("7".to_string())));
    }

    #[tokio::test]
    async fn test_backspace_and_filtering() {
        let wedge = KeyboardWedgeDecoder::new();
        let _stream = wedge.open_decoder().await.unwrap();
        assert!(!wedge.push_char(' '));
        wedge.push_char('1');
        wedge.push_char('2');
        wedge.backspace();
        assert_eq!(wedge.pending(), "1");
    }

    #[tokio::test]
    async fn test_no_preview() {
        let wedge = KeyboardWedgeDecoder::new();
        assert!(matches!(
            wedge.open_preview().await,
            Err(CaptureError::NoDevice(_))
        ));
    }
}
