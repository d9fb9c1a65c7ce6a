//! Publication record type shared by every pipeline step.

use std::fmt;

use serde::{Serialize, Serializer};

/// Placeholder written for text and year fields that are absent from the page.
pub const NOT_AVAILABLE: &str = "N/A";

/// Publication year, or the `N/A` sentinel when the page does not give a usable one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Year {
    Known(u32),
    #[default]
    Unknown,
}

impl Year {
    /// Parses a year cell. Anything other than a positive run of ASCII
    /// digits is [`Year::Unknown`].
    pub fn parse(raw: &str) -> Self {
        match parse_digits(raw.trim()).and_then(|year| u32::try_from(year).ok()) {
            Some(year) if year > 0 => Year::Known(year),
            _ => Year::Unknown,
        }
    }

    pub fn value(&self) -> Option<u32> {
        match self {
            Year::Known(year) => Some(*year),
            Year::Unknown => None,
        }
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Year::Known(year) => write!(f, "{}", year),
            Year::Unknown => f.write_str(NOT_AVAILABLE),
        }
    }
}

impl Serialize for Year {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One paper from a profile.
///
/// Field order is the column order of the tabular files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicationRecord {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Authors")]
    pub authors: String,
    #[serde(rename = "Venue")]
    pub venue: String,
    #[serde(rename = "Citation")]
    pub citations: u64,
    #[serde(rename = "Year")]
    pub year: Year,
}

impl PublicationRecord {
    pub fn new(
        title: impl Into<String>, authors: impl Into<String>, venue: impl Into<String>, citations: u64, year: Year,
    ) -> Self {
        Self { title: title.into(), authors: authors.into(), venue: venue.into(), citations, year }
    }
}

/// Splits a combined `"<authors> - <venue>"` metadata cell on its first delimiter.
///
/// Without a delimiter the whole text is the author list and the venue is `N/A`.
pub fn split_metadata(metadata: &str) -> (String, String) {
    match metadata.split_once(" - ") {
        Some((authors, venue)) => (authors.to_string(), venue.to_string()),
        None => (metadata.to_string(), NOT_AVAILABLE.to_string()),
    }
}

/// Parses a non-empty run of ASCII digits.
///
/// Values that overflow `u64` are rejected like any other malformed count.
pub(crate) fn parse_digits(raw: &str) -> Option<u64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}
