//! The unit of data the relay forwards.

use axum::extract::ws::Message;

/// One alert as received from a sensor: an opaque text or binary payload,
/// forwarded verbatim with no parsing.
#[derive(Debug, Clone)]
pub struct AlertMessage(Message);

impl AlertMessage {
    /// Accept a received WebSocket frame as an alert.
    ///
    /// Returns `None` for empty payloads and control frames
    /// (Ping/Pong/Close), which are not alerts and must not be relayed.
    pub fn from_frame(frame: Message) -> Option<Self> {
        let empty = match &frame {
            Message::Text(text) => text.is_empty(),
            Message::Binary(bytes) => bytes.is_empty(),
            _ => return None,
        };
        if empty {
            None
        } else {
            Some(Self(frame))
        }
    }

    /// The WebSocket frame to deliver to a viewer.
    pub fn into_frame(self) -> Message {
        self.0
    }
}
