//! Reading and writing publication sets as CSV.
//!
//! Files always start with the header `Title,Authors,Venue,Citation,Year`
//! and use standard CSV quoting, so titles containing commas or quotes
//! survive a round trip unchanged.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::record::{PublicationRecord, Year};
use crate::{Result, SieveError};

/// Column names in file order.
pub const COLUMNS: [&str; 5] = ["Title", "Authors", "Venue", "Citation", "Year"];

/// Writes a publication set to `path`, replacing any existing file.
///
/// The header row is written even when `records` is empty.
pub fn write_publications(path: impl AsRef<Path>, records: &[PublicationRecord]) -> Result<usize> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(path.as_ref())?;

    writer.write_record(COLUMNS)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(records.len())
}

/// Loads a publication set from `path`.
///
/// Columns are matched by header name, so their order and any extra
/// columns do not matter.
///
/// # Errors
///
/// - [`SieveError::FileNotFound`] if `path` does not exist.
/// - [`SieveError::SchemaError`] if a column is missing or a citation is
///   not a non-negative integer.
/// - [`SieveError::Csv`] for malformed CSV such as rows of uneven length.
pub fn read_publications(path: impl AsRef<Path>) -> Result<Vec<PublicationRecord>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(SieveError::FileNotFound(path.to_path_buf()));
    }

    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new().from_reader(BufReader::new(file));

    let headers = reader.headers()?.clone();
    let positions = column_positions(&headers)?;
    let [title, authors, venue, citation, year] = positions;

    let mut records = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let fields = result?;
        let field = |idx: usize| fields.get(idx).unwrap_or_default();

        let raw_citation = field(citation).trim();
        let citations = raw_citation.parse::<u64>().map_err(|_| {
            SieveError::SchemaError(format!(
                "row {} has non-numeric citation count '{}'",
                row + 1,
                raw_citation
            ))
        })?;

        records.push(PublicationRecord {
            title: field(title).to_string(),
            authors: field(authors).to_string(),
            venue: field(venue).to_string(),
            citations,
            year: Year::parse(field(year)),
        });
    }

    Ok(records)
}

/// Resolves the index of every required column, reporting all missing ones at once.
fn column_positions(headers: &csv::StringRecord) -> Result<[usize; 5]> {
    let mut positions = [0usize; 5];
    let mut missing = Vec::new();

    for (slot, name) in positions.iter_mut().zip(COLUMNS) {
        match headers.iter().position(|h| h.trim() == name) {
            Some(idx) => *slot = idx,
            None => missing.push(name),
        }
    }

    if missing.is_empty() {
        Ok(positions)
    } else {
        Err(SieveError::SchemaError(format!("missing column(s): {}", missing.join(", "))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn sample() -> Vec<PublicationRecord> {
        vec![
            PublicationRecord::new(
                "Graphs, Trees, and \"Forests\"",
                "A Smith, B Jones",
                "Journal of Things 4",
                17,
                Year::Known(2018),
            ),
            PublicationRecord::new("Untitled", "N/A", "N/A", 0, Year::Unknown),
            PublicationRecord::new("Untitled", "N/A", "N/A", 0, Year::Unknown),
        ]
    }

    #[test]
    fn test_write_then_read_preserves_records() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("profile.csv");

        let written = write_publications(&path, &sample()).unwrap();
        assert_eq!(written, 3);
        assert_eq!(read_publications(&path).unwrap(), sample());
    }

    #[test]
    fn test_header_and_quoting() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("profile.csv");
        write_publications(&path, &sample()[..1]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("Title,Authors,Venue,Citation,Year"));
        assert_eq!(
            lines.next(),
            Some(r#""Graphs, Trees, and ""Forests""","A Smith, B Jones",Journal of Things 4,17,2018"#)
        );
    }

    #[test]
    fn test_empty_set_still_has_header() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("empty.csv");
        write_publications(&path, &[]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap().trim_end(), "Title,Authors,Venue,Citation,Year");
        assert!(read_publications(&path).unwrap().is_empty());
    }

    #[test]
    fn test_overwrites_existing_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("profile.csv");
        write_publications(&path, &sample()).unwrap();
        write_publications(&path, &sample()[..1]).unwrap();

        assert_eq!(read_publications(&path).unwrap().len(), 1);
    }

    #[test]
    fn test_columns_matched_by_name() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("reordered.csv");
        fs::write(&path, "Year,Citation,Extra,Venue,Authors,Title\n2020,12,x,ICML,A B,Some Paper\n").unwrap();

        let records = read_publications(&path).unwrap();
        assert_eq!(
            records,
            vec![PublicationRecord::new("Some Paper", "A B", "ICML", 12, Year::Known(2020))]
        );
    }

    #[test]
    fn test_missing_column_is_schema_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.csv");
        fs::write(&path, "Title,Authors,Venue,Year\nPaper,A,V,2020\n").unwrap();

        match read_publications(&path) {
            Err(SieveError::SchemaError(msg)) => assert!(msg.contains("Citation")),
            other => panic!("expected schema error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_citation_is_schema_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.csv");
        fs::write(&path, "Title,Authors,Venue,Citation,Year\nPaper,A,V,many,2020\n").unwrap();

        assert!(matches!(read_publications(&path), Err(SieveError::SchemaError(_))));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            read_publications("/nonexistent/profile.csv"),
            Err(SieveError::FileNotFound(_))
        ));
    }
}
