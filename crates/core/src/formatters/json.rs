use crate::Result;
use crate::metrics::ExclusionReport;
use crate::pipeline::PipelineSummary;
use serde::Serialize;

/// Serialize any report value, optionally pretty printed
fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    if pretty { Ok(serde_json::to_string_pretty(value)?) } else { Ok(serde_json::to_string(value)?) }
}

/// Convert an exclusion report to JSON
pub fn report_to_json(report: &ExclusionReport, pretty: bool) -> Result<String> {
    to_json(report, pretty)
}

/// Convert a full pipeline run to JSON (for the --json flag)
pub fn summary_to_json(summary: &PipelineSummary, pretty: bool) -> Result<String> {
    to_json(summary, pretty)
}
