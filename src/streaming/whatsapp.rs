//! Line-by-line extractor for WhatsApp TXT transcripts.
//!
//! Reads one line at a time from any [`BufRead`] and yields a
//! [`MessageRecord`] for every line that carries a message header. Everything
//! else is dropped and counted in [`LineStats`]:
//!
//! ```text
//! [01/02/2025, 10:15:00 AM] Alice: hahaha      -> MessageRecord
//! and a second line of the same message         -> mismatch (dropped)
//!                                               -> blank (dropped)
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, trace};

use crate::MessageRecord;
use crate::error::{PulseError, Result};
use crate::parsing::whatsapp::{normalize_invisible, parse_header_line};

/// Default read buffer size for transcript files.
pub const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

/// Counters for lines the extractor has seen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineStats {
    /// All lines read, including blank ones.
    pub lines_read: usize,
    /// Lines that were empty after invisible-character cleanup.
    pub blank_lines: usize,
    /// Non-blank lines without a message header.
    pub line_mismatches: usize,
    /// Lines that produced a [`MessageRecord`].
    pub messages_extracted: usize,
}

/// Lazy iterator over the messages of a transcript.
///
/// The iterator is finite and can't be restarted. It owns the underlying
/// reader, so a file opened with [`TranscriptStream::open`] is closed as soon
/// as the stream is dropped, whether iteration completed or not.
pub struct TranscriptStream<R: BufRead> {
    reader: R,
    line_buffer: String,
    file_size: Option<u64>,
    bytes_read: u64,
    stats: LineStats,
    finished: bool,
}

impl TranscriptStream<BufReader<File>> {
    /// Opens a transcript file with the default buffer size.
    ///
    /// # Errors
    ///
    /// Returns [`PulseError::SourceNotFound`] if the file can't be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with_buffer(path, DEFAULT_BUFFER_SIZE)
    }

    /// Opens a transcript file with a custom read buffer size.
    pub fn open_with_buffer(path: impl AsRef<Path>, buffer_size: usize) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| PulseError::source_not_found(path, e))?;
        let file_size = file.metadata().ok().map(|m| m.len());

        debug!(path = %path.display(), ?file_size, "opened transcript");

        let mut stream = Self::new(BufReader::with_capacity(buffer_size, file));
        stream.file_size = file_size;
        Ok(stream)
    }
}

impl<'a> TranscriptStream<&'a [u8]> {
    /// Creates a stream over an in-memory transcript.
    ///
    /// # Example
    ///
    /// ```
    /// use chatpulse::streaming::TranscriptStream;
    ///
    /// let text = "[01/02/2025, 10:15:00 AM] Alice: hahaha\ncontinued";
    /// let messages: Vec<_> = TranscriptStream::from_str(text)
    ///     .filter_map(Result::ok)
    ///     .collect();
    /// assert_eq!(messages.len(), 1);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &'a str) -> Self {
        let mut stream = Self::new(content.as_bytes());
        stream.file_size = Some(content.len() as u64);
        stream
    }
}

impl<R: BufRead> TranscriptStream<R> {
    /// Wraps an arbitrary buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_buffer: String::with_capacity(1024),
            file_size: None,
            bytes_read: 0,
            stats: LineStats::default(),
            finished: false,
        }
    }

    /// Returns line counters accumulated so far.
    pub fn stats(&self) -> LineStats {
        self.stats
    }

    /// Returns the number of bytes consumed so far.
    pub fn bytes_processed(&self) -> u64 {
        self.bytes_read
    }

    /// Returns the total input size in bytes, if known.
    pub fn total_bytes(&self) -> Option<u64> {
        self.file_size
    }

    /// Returns approximate progress as a percentage (0.0 to 100.0).
    pub fn progress(&self) -> Option<f64> {
        match self.file_size {
            Some(0) | None => None,
            Some(size) => Some((self.bytes_read as f64 / size as f64) * 100.0),
        }
    }
}

impl<R: BufRead> Iterator for TranscriptStream<R> {
    type Item = Result<MessageRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            self.line_buffer.clear();
            match self.reader.read_line(&mut self.line_buffer) {
                Ok(0) => {
                    self.finished = true;
                    return None;
                }
                Ok(bytes) => {
                    self.bytes_read += bytes as u64;
                    self.stats.lines_read += 1;
                    let line_no = self.stats.lines_read;

                    if let Some(record) = parse_header_line(&self.line_buffer) {
                        self.stats.messages_extracted += 1;
                        return Some(Ok(record));
                    }

                    if normalize_invisible(&self.line_buffer).is_empty() {
                        self.stats.blank_lines += 1;
                    } else {
                        self.stats.line_mismatches += 1;
                        trace!(line = line_no, "no message header, line dropped");
                    }
                }
                Err(e) => {
                    // A broken read (e.g. invalid UTF-8) ends the stream
                    self.finished = true;
                    return Some(Err(e.into()));
                }
            }
        }
    }
}

/// Extracts all messages from an in-memory transcript.
///
/// Convenience wrapper over [`TranscriptStream::from_str`] that discards the
/// line counters.
pub fn extract_messages(content: &str) -> Vec<MessageRecord> {
    TranscriptStream::from_str(content)
        .filter_map(Result::ok)
        .collect()
}
