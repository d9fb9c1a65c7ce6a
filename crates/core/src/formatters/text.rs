use crate::formatters::table::comparison_table;
use crate::metrics::ExclusionReport;

/// Configuration for the plain text report
#[derive(Debug, Clone)]
pub struct TextConfig {
    /// Include the comparison grid after the summary lines
    pub include_table: bool,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self { include_table: true }
    }
}

/// Plain text formatter for exclusion reports
pub struct TextFormatter {
    config: TextConfig,
}

impl TextFormatter {
    pub fn new(config: TextConfig) -> Self {
        Self { config }
    }

    pub fn format_report(&self, report: &ExclusionReport) -> String {
        report_to_text(report, &self.config)
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(TextConfig::default())
    }
}

/// Render the exclusion summary lines and, optionally, the comparison grid.
///
/// Percentages are printed with two decimals.
pub fn report_to_text(report: &ExclusionReport, config: &TextConfig) -> String {
    let mut output = String::new();

    output.push_str(&format!("Number of papers excluded: {}\n", report.excluded_papers));
    output.push_str(&format!(
        "Percentage of papers excluded as survey: {:.2}%\n",
        report.percent_excluded_papers
    ));
    output.push_str(&format!(
        "Percentage of excluded citations compared to total: {:.2}%\n",
        report.percent_excluded_citations
    ));

    if config.include_table {
        output.push_str("\nComparison Table:\n");
        output.push_str(&comparison_table(report));
        output.push('\n');
    }

    output
}
