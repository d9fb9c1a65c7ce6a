//! Publication table extraction.
//!
//! A saved profile page lists one publication per table row. Each row is
//! reduced to a [`PublicationRecord`] field by field: a missing or garbled
//! cell falls back to its default (`N/A` or `0`) instead of failing the row.
//! A row carrying none of the expected cells, such as the "no articles"
//! placeholder, still yields an all-default record.
//!
//! # Example
//!
//! ```rust
//! use sieve_core::{Document, TableSelectors, extract_publications};
//!
//! let html = r#"
//!     <table id="gsc_a_t">
//!         <tr class="gsc_a_tr">
//!             <td><a class="gsc_a_at">Fast Graph Algorithms</a>
//!                 <div class="gs_gray">A Smith - STOC</div></td>
//!             <td><a class="gsc_a_ac">5</a></td>
//!             <td><span class="gsc_a_h">2021</span></td>
//!         </tr>
//!     </table>
//! "#;
//!
//! let doc = Document::parse(html).unwrap();
//! let extraction = extract_publications(&doc, &TableSelectors::default()).unwrap();
//! assert_eq!(extraction.records[0].venue, "STOC");
//! assert_eq!(extraction.records[0].citations, 5);
//! ```

use std::fmt;
use std::path::Path;

use scraper::Selector;

use crate::parse::{Document, Element, compile_selector};
use crate::record::{NOT_AVAILABLE, PublicationRecord, Year, parse_digits, split_metadata};
use crate::tabular::write_publications;
use crate::{Result, SieveError};

/// CSS selectors locating the publication table and the cells of each row.
///
/// Defaults match the markup of a saved Google Scholar profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSelectors {
    /// The publication table (default: `table#gsc_a_t`).
    pub table: String,
    /// One publication row (default: `tr.gsc_a_tr`).
    pub row: String,
    /// Title link (default: `a.gsc_a_at`).
    pub title: String,
    /// Combined `"<authors> - <venue>"` block (default: `div.gs_gray`).
    pub metadata: String,
    /// Citation count link (default: `a.gsc_a_ac`).
    pub citation: String,
    /// Year span (default: `span.gsc_a_h`).
    pub year: String,
}

impl Default for TableSelectors {
    fn default() -> Self {
        Self {
            table: "table#gsc_a_t".to_string(),
            row: "tr.gsc_a_tr".to_string(),
            title: "a.gsc_a_at".to_string(),
            metadata: "div.gs_gray".to_string(),
            citation: "a.gsc_a_ac".to_string(),
            year: "span.gsc_a_h".to_string(),
        }
    }
}

impl TableSelectors {
    /// Default selectors with the table located by a different element id.
    pub fn with_table_id(id: &str) -> Self {
        Self { table: format!("table#{}", id), ..Default::default() }
    }
}

/// Row cell selectors, compiled once per extraction.
struct CellSelectors {
    title: Selector,
    metadata: Selector,
    citation: Selector,
    year: Selector,
}

impl CellSelectors {
    fn compile(selectors: &TableSelectors) -> Result<Self> {
        Ok(Self {
            title: compile_selector(&selectors.title)?,
            metadata: compile_selector(&selectors.metadata)?,
            citation: compile_selector(&selectors.citation)?,
            year: compile_selector(&selectors.year)?,
        })
    }
}

/// A row field that fell back to its default value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Metadata,
    Citation,
    Year,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Title, Field::Metadata, Field::Citation, Field::Year];
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Title => "title",
            Field::Metadata => "authors/venue",
            Field::Citation => "citation",
            Field::Year => "year",
        };
        f.write_str(name)
    }
}

/// Result of reducing one table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    /// Every field came from the page.
    Complete(PublicationRecord),
    /// The record was built, but the listed fields use defaults.
    Partial { record: PublicationRecord, missing: Vec<Field> },
}

impl RowOutcome {
    /// The record to write.
    pub fn record(&self) -> &PublicationRecord {
        match self {
            RowOutcome::Complete(record) | RowOutcome::Partial { record, .. } => record,
        }
    }
}

/// The records of a publication table plus per-row tallies.
#[derive(Debug, Clone, Default)]
pub struct TableExtraction {
    /// Records in document row order.
    pub records: Vec<PublicationRecord>,
    /// Rows where every field was present.
    pub complete: usize,
    /// Rows that used at least one default.
    pub partial: usize,
    /// Partial rows without any publication cell; every field is a default.
    pub empty: usize,
}

impl TableExtraction {
    /// Number of publication rows found in the table.
    pub fn rows_seen(&self) -> usize {
        self.complete + self.partial
    }
}

/// Extracts every publication row of the profile table.
///
/// # Errors
///
/// - [`SieveError::StructureError`] if no element matches `selectors.table`.
/// - [`SieveError::HtmlParseError`] if one of the selectors is invalid.
pub fn extract_publications(doc: &Document, selectors: &TableSelectors) -> Result<TableExtraction> {
    let cells = CellSelectors::compile(selectors)?;
    let row_selector = compile_selector(&selectors.row)?;

    let table = doc
        .select_first(&selectors.table)?
        .ok_or_else(|| SieveError::StructureError { selector: selectors.table.clone() })?;

    let mut extraction = TableExtraction::default();

    for (index, row) in table.select_compiled(&row_selector).iter().enumerate() {
        match extract_row(index, row, &cells) {
            RowOutcome::Complete(record) => {
                extraction.complete += 1;
                extraction.records.push(record);
            }
            RowOutcome::Partial { record, missing } => {
                if missing.len() == Field::ALL.len() {
                    tracing::warn!(row = index, "Row has no publication cells; writing default values");
                    extraction.empty += 1;
                } else {
                    let missing = missing.iter().map(Field::to_string).collect::<Vec<_>>().join(", ");
                    tracing::debug!(row = index, title = %record.title, missing = %missing, "Row uses default values");
                }
                extraction.partial += 1;
                extraction.records.push(record);
            }
        }
    }

    tracing::info!(
        rows = extraction.rows_seen(),
        complete = extraction.complete,
        partial = extraction.partial,
        empty = extraction.empty,
        "Extracted publication table"
    );

    Ok(extraction)
}

/// Extracts the publication table and writes it to `output_path` as CSV.
///
/// Returns the number of records written, one per table row.
pub fn parse_table_to_csv(doc: &Document, output_path: impl AsRef<Path>, selectors: &TableSelectors) -> Result<usize> {
    let extraction = extract_publications(doc, selectors)?;
    write_publications(output_path, &extraction.records)
}

/// Reduces one table row, applying a default for each missing field.
fn extract_row(index: usize, row: &Element<'_>, cells: &CellSelectors) -> RowOutcome {
    let title_cell = row.first_compiled(&cells.title);
    let metadata_cell = row.first_compiled(&cells.metadata);
    let citation_cell = row.first_compiled(&cells.citation);
    let year_cell = row.first_compiled(&cells.year);

    let mut missing = Vec::new();

    let title = match title_cell {
        Some(cell) => cell.trimmed_text(),
        None => {
            missing.push(Field::Title);
            NOT_AVAILABLE.to_string()
        }
    };

    let metadata = match metadata_cell {
        Some(cell) => cell.trimmed_text(),
        None => {
            missing.push(Field::Metadata);
            NOT_AVAILABLE.to_string()
        }
    };
    let (authors, venue) = split_metadata(&metadata);

    let raw_citation = citation_cell.map(|cell| cell.trimmed_text()).unwrap_or_default();
    let citations = match parse_digits(&raw_citation) {
        Some(count) => count,
        None => {
            if !raw_citation.is_empty() {
                tracing::debug!(row = index, value = %raw_citation, "Unreadable citation count; using 0");
            }
            missing.push(Field::Citation);
            0
        }
    };

    let year = year_cell.map(|cell| Year::parse(&cell.trimmed_text())).unwrap_or_default();
    if year == Year::Unknown {
        missing.push(Field::Year);
    }

    let record = PublicationRecord { title, authors, venue, citations, year };
    if missing.is_empty() { RowOutcome::Complete(record) } else { RowOutcome::Partial { record, missing } }
}
