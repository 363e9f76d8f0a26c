//! The message record extracted from a transcript line.
//!
//! A [`MessageRecord`] is the raw, un-normalized view of one chat message: the
//! timestamp is kept as the exact text found between the brackets so that the
//! timestamp normalizer, not the extractor, decides what it means.
//!
//! # Example
//!
//! ```
//! use chatpulse::MessageRecord;
//!
//! let msg = MessageRecord::new("01/02/2025, 10:15:00 AM", "Alice", "hahaha");
//! assert_eq!(msg.sender(), "Alice");
//! assert_eq!(msg.body(), "hahaha");
//! ```

use serde::{Deserialize, Serialize};

/// One chat message as it appeared in the transcript.
///
/// Only single-line messages are captured. Continuation lines of a
/// multi-line message are dropped by the extractor, so `body` holds the
/// first line only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    /// Timestamp text, e.g. `15/06/2025, 9:05:30 PM`.
    pub timestamp: String,

    /// Display name of the author.
    pub sender: String,

    /// Message text after the `sender: ` prefix.
    pub body: String,
}

impl MessageRecord {
    /// Creates a new record.
    pub fn new(
        timestamp: impl Into<String>,
        sender: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            sender: sender.into(),
            body: body.into(),
        }
    }

    /// Returns the raw timestamp text.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message body.
    pub fn body(&self) -> &str {
        &self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let msg = MessageRecord::new("15/06/2025, 9:05:30 PM", "Bob", "i love you");
        assert_eq!(msg.timestamp(), "15/06/2025, 9:05:30 PM");
        assert_eq!(msg.sender(), "Bob");
        assert_eq!(msg.body(), "i love you");
    }

    #[test]
    fn test_serde_field_names() {
        let msg = MessageRecord::new("01/02/2025, 10:15:00", "Alice", "hi");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains(r#""timestamp":"01/02/2025, 10:15:00""#));
        assert!(json.contains(r#""sender":"Alice""#));
        assert!(json.contains(r#""body":"hi""#));

        let parsed: MessageRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, msg);
    }
}
