//! Streaming transcript extraction.
//!
//! The transcript is read exactly once, line by line, through a
//! [`TranscriptStream`]. Only the current line is held in memory, and the file
//! handle lives inside the stream so it is released on every exit path.
//!
//! # Example
//!
//! ```rust,no_run
//! use chatpulse::streaming::TranscriptStream;
//!
//! let mut stream = TranscriptStream::open("_chat.txt")?;
//!
//! for result in stream.by_ref() {
//!     let msg = result?;
//!     println!("{}: {}", msg.sender, msg.body);
//! }
//!
//! println!("dropped {} non-message lines", stream.stats().line_mismatches);
//! # Ok::<(), chatpulse::PulseError>(())
//! ```

mod whatsapp;

pub use whatsapp::{DEFAULT_BUFFER_SIZE, LineStats, TranscriptStream, extract_messages};
