//! Extraction of `(unicode, keysym)` pairs from keysymdef.h lines.
//!
//! The lines that are parsed look like this:
//!
//! ```text
//! #define XK_Aogonek 0x01a1  /* U+0104 LATIN CAPITAL LETTER A WITH OGONEK */
//! ```
//!
//! which yields a `0x0104 -> 0x01a1` mapping.

use lazy_static::lazy_static;
use regex::Regex;

use crate::table::KeysymEntry;

lazy_static! {
    static ref LINE_PATTERN: Regex = Regex::new(r"0x([0-9a-fA-F]+)\s+/\* U\+([0-9a-fA-F]+)").unwrap();
}

/// Keysyms at or above this value encode the code point directly as `unicode | 0x01000000`.
pub const UNICODE_KEYSYM_OFFSET: u32 = 0x0100_0000;

pub fn parse_line(line: &str) -> Option<KeysymEntry> {
    let captures = LINE_PATTERN.captures(line)?;

    // the pattern only captures hex digits, anything failing here is wider than 32 bits
    let keysym = u32::from_str_radix(&captures[1], 16).ok()?;
    let unicode = u32::from_str_radix(&captures[2], 16).ok()?;

    Some(KeysymEntry { unicode, keysym })
}

/// Splits on `\n`, `\r\n` and lone `\r`, the latter being what old Mac headers use.
pub fn split_lines(text: &str) -> impl Iterator<Item=&str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() { return None; }

        let end = rest.find(|c: char| c == '\r' || c == '\n').unwrap_or(rest.len());
        let line = &rest[..end];
        let terminator = if rest[end..].starts_with("\r\n") { 2 } else { (end < rest.len()) as usize };
        rest = &rest[end + terminator..];

        Some(line)
    })
}

/// Whether tabulating `keysym` would be pointless since the consumer can derive it from the code point.
pub fn is_redundant(keysym: u32) -> bool {
    // ignore 1:1 mappings
    matches!(keysym, 0x0020..=0x007e)
        || matches!(keysym, 0x00a0..=0x00ff)
        // ignore unicode | 0x01000000 mappings
        || keysym >= UNICODE_KEYSYM_OFFSET
}
