//! Capture session adapter
//!
//! Parses recorded capture sessions (JSON) and replays them into a
//! [`SignalCollector`]. A capture session is the wire form of what a host
//! UI's input handlers would feed the collector live: one entry per key
//! press, password key press, or pointer move, each stamped RFC3339.

use crate::collector::SignalCollector;
use crate::error::SenseError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One raw input event from a capture session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CaptureEvent {
    /// Key-down in a general (non-password) input field.
    KeyPress { timestamp: DateTime<Utc> },
    /// Key-down while the password field has focus.
    PasswordKeyPress { timestamp: DateTime<Utc> },
    /// Pointer movement sample.
    PointerMove {
        timestamp: DateTime<Utc>,
        x: f64,
        y: f64,
    },
}

impl CaptureEvent {
    fn timestamp(&self) -> DateTime<Utc> {
        match self {
            CaptureEvent::KeyPress { timestamp }
            | CaptureEvent::PasswordKeyPress { timestamp }
            | CaptureEvent::PointerMove { timestamp, .. } => *timestamp,
        }
    }
}

/// A recorded authentication attempt's raw input events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureSession {
    /// Attempt identifier, fresh per login attempt.
    pub attempt_id: Uuid,
    /// User the attempt belongs to.
    pub user_id: String,
    /// Raw input events; replay sorts them by timestamp.
    pub events: Vec<CaptureEvent>,
}

impl CaptureSession {
    /// Start an empty session for a user with a fresh attempt id.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            attempt_id: Uuid::new_v4(),
            user_id: user_id.into(),
            events: Vec::new(),
        }
    }
}

/// Parse a capture session JSON string.
pub fn parse_capture(json: &str) -> Result<CaptureSession, SenseError> {
    serde_json::from_str(json)
        .map_err(|e| SenseError::CaptureParse(format!("Failed to parse capture session: {}", e)))
}

/// Replay a session's events into a fresh collector.
///
/// Events are sorted by timestamp first, so a session assembled out of
/// order replays the same as the live event stream. The collector sees
/// exactly the calls the host's handlers would have made.
pub fn replay_capture(session: &CaptureSession) -> SignalCollector {
    let mut events = session.events.clone();
    events.sort_by_key(|e| e.timestamp());

    let mut collector = SignalCollector::new();
    for event in &events {
        match event {
            CaptureEvent::KeyPress { timestamp } => {
                collector.record_key_press_at(timestamp.timestamp_millis());
            }
            CaptureEvent::PasswordKeyPress { timestamp } => {
                collector.record_password_key_press_at(timestamp.timestamp_millis());
            }
            CaptureEvent::PointerMove { x, y, .. } => {
                collector.record_pointer_move(*x, *y);
            }
        }
    }
    collector
}
