//! Researcher name extraction from the profile page title.

use crate::parse::Document;

/// Name reported when the page has no `<title>` element.
pub const UNKNOWN_RESEARCHER: &str = "Unknown";

/// Delimiter between the name and the site suffix in profile titles.
const TITLE_DELIMITER: &str = " - ";

/// Derives the researcher's display name from the page title.
///
/// Profile titles look like `"<Name> - Google Scholar"`; everything before
/// the first `" - "` is the name. Titles without the delimiter are returned
/// whole. Both cases are trimmed.
///
/// # Example
///
/// ```rust
/// use sieve_core::{Document, researcher_name};
///
/// let doc = Document::parse("<title>Ada Lovelace - Google Scholar</title>").unwrap();
/// assert_eq!(researcher_name(&doc), "Ada Lovelace");
/// ```
pub fn researcher_name(doc: &Document) -> String {
    let Some(title) = doc.title() else {
        return UNKNOWN_RESEARCHER.to_string();
    };

    match title.split_once(TITLE_DELIMITER) {
        Some((name, _)) => name.trim().to_string(),
        None => title.trim().to_string(),
    }
}
