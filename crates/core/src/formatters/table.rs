use comfy_table::presets::ASCII_FULL;
use comfy_table::{Cell, CellAlignment, Table};

use crate::metrics::ExclusionReport;

/// Column headers of the comparison table.
pub const COMPARISON_HEADERS: [&str; 3] = ["Metric", "With Surveys", "Without Surveys"];

/// Render the with/without surveys comparison as a bordered grid.
///
/// Rows are Total Papers, Total Citations, H-Index and i10-Index, with the
/// numeric columns right aligned.
pub fn comparison_table(report: &ExclusionReport) -> String {
    let with = &report.with_surveys;
    let without = &report.without_surveys;

    let mut table = Table::new();
    table.load_preset(ASCII_FULL).set_header(COMPARISON_HEADERS);

    table.add_row(vec![Cell::new("Total Papers"), Cell::new(with.papers), Cell::new(without.papers)]);
    table.add_row(vec![Cell::new("Total Citations"), Cell::new(with.citations), Cell::new(without.citations)]);
    table.add_row(vec![
        Cell::new("H-Index"),
        Cell::new(with.indices.h_index),
        Cell::new(without.indices.h_index),
    ]);
    table.add_row(vec![
        Cell::new("i10-Index"),
        Cell::new(with.indices.i10_index),
        Cell::new(without.indices.i10_index),
    ]);

    for idx in 1..COMPARISON_HEADERS.len() {
        if let Some(column) = table.column_mut(idx) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{PublicationRecord, Year};
    use crate::survey::SurveyClassifier;

    fn report() -> ExclusionReport {
        let all = vec![
            PublicationRecord::new("Deep Learning Survey", "A", "V", 50, Year::Known(2019)),
            PublicationRecord::new("Fast Graph Algorithms", "B", "V", 5, Year::Known(2021)),
            PublicationRecord::new("Neural Net Approaches", "C", "V", 12, Year::Known(2020)),
        ];
        let partition = SurveyClassifier::standard().unwrap().partition(&all);
        ExclusionReport::new(&all, &partition)
    }

    #[test]
    fn test_comparison_table_layout() {
        let table = comparison_table(&report());
        let lines: Vec<&str> = table.lines().collect();

        assert!(lines[0].starts_with('+'));
        assert!(lines[1].contains("Metric"));
        assert!(lines[1].contains("With Surveys"));
        assert!(lines[1].contains("Without Surveys"));
        assert!(lines[2].contains('='));
        assert_eq!(table.matches("Total Papers").count(), 1);
    }

    #[test]
    fn test_comparison_table_values() {
        let table = comparison_table(&report());
        let row = |name: &str| {
            table
                .lines()
                .find(|l| l.contains(name))
                .map(|l| l.split('|').map(str::trim).filter(|c| !c.is_empty()).collect::<Vec<_>>())
                .unwrap()
        };

        assert_eq!(row("Total Papers"), vec!["Total Papers", "3", "1"]);
        assert_eq!(row("Total Citations"), vec!["Total Citations", "67", "5"]);
        assert_eq!(row("H-Index"), vec!["H-Index", "3", "1"]);
        assert_eq!(row("i10-Index"), vec!["i10-Index", "2", "0"]);
    }
}
