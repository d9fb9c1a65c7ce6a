//! Library API integration tests
use sieve_core::*;
use tempfile::TempDir;

fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

fn load_fixture(name: &str) -> Document {
    let html = read_file(get_fixture_path(name)).expect("fixture should exist");
    Document::parse(&html).expect("should parse")
}

#[test]
fn test_researcher_name_from_fixture() {
    assert_eq!(researcher_name(&load_fixture("papers.html")), "Jane Q. Researcher");
    assert_eq!(researcher_name(&load_fixture("profile_edge_cases.html")), "Émile Borel");
}

#[test]
fn test_extract_publications_from_fixture() {
    let doc = load_fixture("papers.html");
    let extraction = extract_publications(&doc, &TableSelectors::default()).expect("should extract");

    assert_eq!(extraction.rows_seen(), 3);
    assert_eq!(extraction.complete, 3);
    assert_eq!(
        extraction.records[0],
        PublicationRecord::new(
            "Deep Learning Survey",
            "JQ Researcher, A Colleague",
            "Journal of Machine Learning Research",
            50,
            Year::Known(2019)
        )
    );
}

#[test]
fn test_edge_case_fixture() {
    let doc = load_fixture("profile_edge_cases.html");
    let extraction = extract_publications(&doc, &TableSelectors::default()).expect("should extract");

    assert_eq!(extraction.complete, 3);
    assert_eq!(extraction.partial, 2);
    assert_eq!(extraction.empty, 1);
    assert_eq!(extraction.records.len(), 5);

    let first = &extraction.records[0];
    assert_eq!(first.title, "Measure, Probability, and \"Chance\"");
    assert_eq!(first.authors, "E Borel");
    assert_eq!(first.venue, "Annales - Série 3");

    let uncited = &extraction.records[1];
    assert_eq!(uncited.venue, NOT_AVAILABLE);
    assert_eq!(uncited.citations, 0);
    assert_eq!(uncited.year, Year::Unknown);

    assert_eq!(extraction.records[2], PublicationRecord::new("N/A", "N/A", "N/A", 0, Year::Unknown));
}

#[test]
fn test_no_table_is_structure_error() {
    let doc = load_fixture("no_table.html");
    let tmp = TempDir::new().unwrap();

    let result = parse_table_to_csv(&doc, tmp.path().join("out.csv"), &TableSelectors::default());
    assert!(matches!(result, Err(SieveError::StructureError { .. })));
}

#[test]
fn test_csv_round_trip_from_fixture() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("GScholar-profile.csv");
    let doc = load_fixture("profile_edge_cases.html");

    let extraction = extract_publications(&doc, &TableSelectors::default()).unwrap();
    let written = parse_table_to_csv(&doc, &path, &TableSelectors::default()).unwrap();

    assert_eq!(written, extraction.records.len());
    assert_eq!(read_publications(&path).unwrap(), extraction.records);
}

#[test]
fn test_exclude_surveys_end_to_end() {
    let tmp = TempDir::new().unwrap();
    let intermediate = tmp.path().join("GScholar-profile.csv");
    let output = tmp.path().join("Non-Survey-Papers.csv");

    let doc = load_fixture("papers.html");
    let written = parse_table_to_csv(&doc, &intermediate, &TableSelectors::default()).unwrap();
    assert_eq!(written, 3);

    let report = exclude_surveys(&intermediate, &output, &SurveyClassifier::standard().unwrap()).unwrap();

    assert_eq!(report.excluded_papers, 2);
    assert_eq!(format!("{:.2}", report.percent_excluded_papers), "66.67");
    assert_eq!(report.with_surveys.citations, 67);
    assert_eq!(report.excluded_citations, 62);
    assert_eq!(report.without_surveys.papers, 1);
    assert_eq!(report.without_surveys.indices, Indices { h_index: 1, i10_index: 0 });

    let kept = read_publications(&output).unwrap();
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].title, "Fast Graph Algorithms");
    assert_eq!(kept[0].citations, 5);
    assert_eq!(kept[0].year, Year::Known(2021));
}

#[test]
fn test_exclude_surveys_rejects_bad_schema() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("broken.csv");
    std::fs::write(&input, "Title,Citation\nPaper,3\n").unwrap();

    let result = exclude_surveys(&input, tmp.path().join("out.csv"), &SurveyClassifier::standard().unwrap());
    assert!(matches!(result, Err(SieveError::SchemaError(_))));
}

#[test]
fn test_run_pipeline_with_config() {
    let tmp = TempDir::new().unwrap();
    let config = PipelineConfig::builder()
        .input_html(get_fixture_path("profile_edge_cases.html"))
        .intermediate_csv(tmp.path().join("all.csv"))
        .output_csv(tmp.path().join("kept.csv"))
        .build();

    let summary = run_pipeline(&config).expect("pipeline should run");

    assert_eq!(summary.researcher, "Émile Borel");
    assert_eq!(summary.rows_written, 5);
    assert_eq!(summary.report.excluded_papers, 1);
    assert_eq!(summary.report.with_surveys.indices, Indices { h_index: 3, i10_index: 2 });
    assert_eq!(summary.report.without_surveys.indices, Indices { h_index: 2, i10_index: 1 });
    assert_eq!(format!("{:.2}", summary.report.percent_excluded_papers), "20.00");
    assert_eq!(format!("{:.2}", summary.report.percent_excluded_citations), "6.29");

    let text = report_to_text(&summary.report, &TextConfig::default());
    assert!(text.contains("Number of papers excluded: 1"));
    assert!(text.contains("i10-Index"));
}

#[test]
fn test_extra_keywords_change_partition() {
    let tmp = TempDir::new().unwrap();
    let config = PipelineConfig::builder()
        .input_html(get_fixture_path("profile_edge_cases.html"))
        .intermediate_csv(tmp.path().join("all.csv"))
        .output_csv(tmp.path().join("kept.csv"))
        .extra_keyword("note")
        .build();

    let summary = run_pipeline(&config).unwrap();
    assert_eq!(summary.report.excluded_papers, 3);
    assert_eq!(read_publications(&config.output_csv).unwrap().len(), 2);
}

#[cfg(feature = "json")]
#[test]
fn test_summary_json() {
    let tmp = TempDir::new().unwrap();
    let config = PipelineConfig::builder()
        .input_html(get_fixture_path("papers.html"))
        .intermediate_csv(tmp.path().join("all.csv"))
        .output_csv(tmp.path().join("kept.csv"))
        .build();

    let summary = run_pipeline(&config).unwrap();
    let json: serde_json::Value = serde_json::from_str(&summary_to_json(&summary, true).unwrap()).unwrap();

    assert_eq!(json["researcher"], "Jane Q. Researcher");
    assert_eq!(json["rows_written"], 3);
    assert_eq!(json["report"]["excluded_papers"], 2);
}
