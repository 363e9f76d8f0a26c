//! Shared WhatsApp line parsing utilities.
//!
//! This module contains the pieces shared between the in-memory and streaming
//! extractors: invisible-character cleanup and the header pattern that
//! recognizes the start of a message.
//!
//! Supported header shape (iOS export, day-first):
//!
//! ```text
//! [15/06/2025, 9:05:30 PM] Bob: i love you so much
//! [01/02/2025, 10:15:00] Alice: hahaha
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::MessageRecord;

/// `[dd/mm/yyyy, h:mm:ss<anything>] Sender: Body`
///
/// The time part is matched lazily up to the first `]`, so am/pm markers and
/// locale-specific suffixes are carried into the timestamp text verbatim.
pub const HEADER_PATTERN: &str =
    r"^\[(\d{2}/\d{2}/\d{4}, \d{1,2}:\d{2}:\d{2}.*?)\] ([^:]+): (.*)";

static HEADER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(HEADER_PATTERN).expect("header pattern is valid"));

/// Characters dropped outright: directional marks, embeddings and isolates.
const STRIPPED_CHARS: &[char] = &[
    '\u{200E}', '\u{200F}', '\u{202A}', '\u{202B}', '\u{202C}', '\u{202D}', '\u{202E}',
    '\u{2066}', '\u{2067}', '\u{2068}', '\u{2069}',
];

/// Characters replaced with an ordinary space.
const SPACE_CHARS: &[char] = &['\u{202F}', '\u{00A0}'];

/// Removes invisible formatting characters that exports embed around
/// timestamps, and substitutes narrow/no-break spaces with a plain space.
///
/// The result is trimmed.
///
/// # Example
///
/// ```
/// use chatpulse::parsing::whatsapp::normalize_invisible;
///
/// assert_eq!(normalize_invisible("\u{200E}[1/1]\u{202F}PM "), "[1/1] PM");
/// ```
pub fn normalize_invisible(line: &str) -> String {
    line.chars()
        .filter(|c| !STRIPPED_CHARS.contains(c))
        .map(|c| if SPACE_CHARS.contains(&c) { ' ' } else { c })
        .collect::<String>()
        .trim()
        .to_string()
}

/// Returns `true` if the (already normalized) line starts a message.
pub fn is_message_header(line: &str) -> bool {
    HEADER_REGEX.is_match(line)
}

/// Extracts a [`MessageRecord`] from a single raw transcript line.
///
/// Invisible characters are normalized first. Returns `None` for lines that
/// don't carry a message header: continuation lines, blank lines and
/// anything else that isn't a message.
///
/// # Example
///
/// ```
/// use chatpulse::parsing::whatsapp::parse_header_line;
///
/// let msg = parse_header_line("[01/02/2025, 10:15:00 AM] Alice: hahaha").unwrap();
/// assert_eq!(msg.timestamp, "01/02/2025, 10:15:00 AM");
/// assert_eq!(msg.sender, "Alice");
/// assert_eq!(msg.body, "hahaha");
///
/// assert!(parse_header_line("just a continuation").is_none());
/// ```
pub fn parse_header_line(line: &str) -> Option<MessageRecord> {
    let line = normalize_invisible(line);
    let caps = HEADER_REGEX.captures(&line)?;

    let timestamp = caps.get(1).map_or("", |m| m.as_str());
    let sender = caps.get(2).map_or("", |m| m.as_str());
    let body = caps.get(3).map_or("", |m| m.as_str());

    Some(MessageRecord::new(timestamp, sender, body))
}
