// Licensed under the Apache-2.0 license

//! Identifier and layout derivation.
//!
//! This module turns raw document names and numbers into the pieces the
//! emitter writes: type names, accessor names, `bitfield!` bit ranges,
//! reset literals and cleaned-up doc comment lines.

use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

use crate::types::Access;

/// Placeholder `bitfield!` uses in the setter position for read-only fields.
pub const NO_SETTER: &str = "_";

lazy_static! {
    /// Embedded table markup in vendor descriptions. Lazy and non-nesting:
    /// a nested table leaves its outer tail behind.
    static ref TABLE_MARKUP: Regex = Regex::new(r"(?is)<table\b.*?</table\s*>").unwrap();
}

/// Converts an underscore-delimited register name to PascalCase.
///
/// Each segment gets an uppercase first character and a lowercase rest.
/// Empty segments are skipped.
///
/// # Examples
/// ```
/// use registers_generator::util::pascal_case;
/// assert_eq!(pascal_case("FREQ_OFF"), "FreqOff");
/// assert_eq!(pascal_case("AGC_CFG2"), "AgcCfg2");
/// ```
pub fn pascal_case(name: &str) -> String {
    let mut result = String::new();
    for segment in name.split('_') {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            for c in chars {
                result.extend(c.to_lowercase());
            }
        }
    }
    result
}

/// Getter identifier for a bitfield: the raw name, lowercased.
pub fn getter_name(name: &str) -> String {
    name.to_lowercase()
}

/// Setter identifier for a bitfield, or [`NO_SETTER`] when read-only.
pub fn setter_name(name: &str, access: Access) -> String {
    if access.is_writable() {
        format!("set_{}", getter_name(name))
    } else {
        NO_SETTER.to_string()
    }
}

/// Inclusive bit range of a bitfield, most significant bit first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitRange {
    pub msb: u8,
    pub lsb: u8,
}

impl BitRange {
    /// Highest bit of the 8-bit register container.
    pub const MAX_BIT: u8 = 7;

    /// Returns `None` when `start < stop` or `start` is past [`Self::MAX_BIT`].
    pub fn new(start: u8, stop: u8) -> Option<Self> {
        if start < stop || start > Self::MAX_BIT {
            None
        } else {
            Some(Self {
                msb: start,
                lsb: stop,
            })
        }
    }

    pub fn width(&self) -> u8 {
        self.msb - self.lsb + 1
    }
}

impl fmt::Display for BitRange {
    /// `7` for a single bit, `7, 4` otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.width() == 1 {
            write!(f, "{}", self.msb)
        } else {
            write!(f, "{}, {}", self.msb, self.lsb)
        }
    }
}

/// Parses a hexadecimal 8-bit reset value with an optional `0x` prefix.
///
/// # Examples
/// ```
/// use registers_generator::util::parse_reset;
/// assert_eq!(parse_reset("0x5"), Some(0x05));
/// assert_eq!(parse_reset("FF"), Some(0xff));
/// assert_eq!(parse_reset("0x100"), None);
/// ```
pub fn parse_reset(value: &str) -> Option<u8> {
    let value = value.trim();
    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u8::from_str_radix(digits, 16).ok()
}

/// Formats a reset value as a two-digit lowercase hex literal.
///
/// # Examples
/// ```
/// use registers_generator::util::reset_literal;
/// assert_eq!(reset_literal(5), "0x05");
/// assert_eq!(reset_literal(0x3c), "0x3c");
/// ```
pub fn reset_literal(value: u8) -> String {
    format!("{value:#04x}")
}

/// Removes every embedded `<table>...</table>` block.
pub fn strip_tables(text: &str) -> String {
    TABLE_MARKUP.replace_all(text, "").into_owned()
}

/// Splits a free-text description into doc comment lines.
///
/// Line endings are normalized, table markup is stripped, the text is
/// trimmed and trailing whitespace is removed from each line. Returns an
/// empty list when nothing is left.
pub fn doc_lines(text: &str) -> Vec<String> {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let stripped = strip_tables(&normalized);
    let trimmed = stripped.trim();
    if trimmed.is_empty() {
        return vec![];
    }
    trimmed
        .lines()
        .map(|line| line.trim_end().to_string())
        .collect()
}
