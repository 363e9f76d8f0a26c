//! Shared parsing utilities.
//!
//! This module contains the line-level and timestamp-level parsing used by
//! both the in-memory extractor and the streaming extractor.

pub mod timestamp;
pub mod whatsapp;

// Re-export commonly used items
pub use timestamp::{TIMESTAMP_FORMATS, normalize_timestamp, parse_timestamp_date};
pub use whatsapp::{HEADER_PATTERN, is_message_header, normalize_invisible, parse_header_line};
