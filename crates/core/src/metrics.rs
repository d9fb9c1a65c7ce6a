//! Citation indices and the survey exclusion step.
//!
//! [`exclude_surveys`] loads a profile CSV, drops survey papers, writes the
//! remainder and returns an [`ExclusionReport`] comparing the h-index,
//! i10-index and citation totals before and after the exclusion.

use std::path::Path;

use serde::Serialize;

use crate::Result;
use crate::record::PublicationRecord;
use crate::survey::{Partition, SurveyClassifier};
use crate::tabular::{read_publications, write_publications};

/// Minimum citation count for a paper to count towards the i10-index.
pub const I10_THRESHOLD: u64 = 10;

/// h-index and i10-index of a publication set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Indices {
    pub h_index: usize,
    pub i10_index: usize,
}

/// Computes the h-index and i10-index of `records`.
///
/// Citation counts are ranked in descending order and the h-index is the
/// number of 1-based ranks whose count is at least the rank.
///
/// # Example
///
/// ```rust
/// use sieve_core::{PublicationRecord, Year, calculate_indices};
///
/// let papers: Vec<_> = [10, 8, 5, 4, 3]
///     .into_iter()
///     .map(|c| PublicationRecord::new("Paper", "A", "V", c, Year::Unknown))
///     .collect();
/// let indices = calculate_indices(&papers);
/// assert_eq!(indices.h_index, 4);
/// assert_eq!(indices.i10_index, 1);
/// ```
pub fn calculate_indices(records: &[PublicationRecord]) -> Indices {
    let mut citations: Vec<u64> = records.iter().map(|r| r.citations).collect();
    citations.sort_unstable_by(|a, b| b.cmp(a));

    let h_index = citations
        .iter()
        .enumerate()
        .filter(|&(i, &count)| count >= (i + 1) as u64)
        .count();
    let i10_index = citations.iter().filter(|&&count| count >= I10_THRESHOLD).count();

    Indices { h_index, i10_index }
}

/// Totals of one side of the comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SetSummary {
    pub papers: usize,
    pub citations: u64,
    #[serde(flatten)]
    pub indices: Indices,
}

impl SetSummary {
    pub fn of(records: &[PublicationRecord]) -> Self {
        Self { papers: records.len(), citations: total_citations(records), indices: calculate_indices(records) }
    }
}

/// Comparison of a profile with and without its survey papers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExclusionReport {
    pub with_surveys: SetSummary,
    pub without_surveys: SetSummary,
    pub excluded_papers: usize,
    pub excluded_citations: u64,
    /// Share of papers excluded, in percent. 0 for an empty profile.
    pub percent_excluded_papers: f64,
    /// Share of citations excluded, in percent. 0 when nothing is cited.
    pub percent_excluded_citations: f64,
}

impl ExclusionReport {
    /// Builds the report for `all` records split into `partition`.
    pub fn new(all: &[PublicationRecord], partition: &Partition) -> Self {
        let with_surveys = SetSummary::of(all);
        let without_surveys = SetSummary::of(&partition.non_surveys);
        let excluded_papers = partition.surveys.len();
        let excluded_citations = total_citations(&partition.surveys);

        Self {
            with_surveys,
            without_surveys,
            excluded_papers,
            excluded_citations,
            percent_excluded_papers: percentage(excluded_papers as u64, with_surveys.papers as u64),
            percent_excluded_citations: percentage(excluded_citations, with_surveys.citations),
        }
    }
}

/// Removes survey papers from the CSV at `input_path`.
///
/// The non-survey papers are written to `output_path` in the same schema,
/// replacing any existing file.
///
/// # Errors
///
/// Returns [`SieveError::SchemaError`](crate::SieveError::SchemaError) when
/// the input does not follow the publication schema, plus the usual I/O and
/// CSV errors.
pub fn exclude_surveys(
    input_path: impl AsRef<Path>, output_path: impl AsRef<Path>, classifier: &SurveyClassifier,
) -> Result<ExclusionReport> {
    let records = read_publications(input_path)?;
    let partition = classifier.partition(&records);

    write_publications(output_path, &partition.non_surveys)?;

    let report = ExclusionReport::new(&records, &partition);
    tracing::info!(
        papers = report.with_surveys.papers,
        excluded = report.excluded_papers,
        h_index = report.without_surveys.indices.h_index,
        "Excluded survey papers"
    );

    Ok(report)
}

fn total_citations(records: &[PublicationRecord]) -> u64 {
    records.iter().map(|r| r.citations).sum()
}

fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 { 0.0 } else { part as f64 / whole as f64 * 100.0 }
}
