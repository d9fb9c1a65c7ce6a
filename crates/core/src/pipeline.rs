//! End-to-end pipeline configuration and runner.
//!
//! The three steps run strictly in sequence: the researcher name and the
//! publication table are read from the saved profile page, then the
//! intermediate CSV is filtered and summarised. Every path is configurable;
//! the defaults are the conventional file names in the working directory.
//!
//! # Example
//!
//! ```rust,no_run
//! use sieve_core::{PipelineConfig, run_pipeline};
//!
//! let config = PipelineConfig::builder()
//!     .input_html("saved/profile.html")
//!     .output_csv("out/non-surveys.csv")
//!     .extra_keyword("overview")
//!     .build();
//! let summary = run_pipeline(&config)?;
//! println!("{} has h-index {}", summary.researcher, summary.report.without_surveys.indices.h_index);
//! # Ok::<(), sieve_core::SieveError>(())
//! ```

use std::path::PathBuf;

use serde::Serialize;

use crate::Result;
use crate::metrics::{ExclusionReport, exclude_surveys};
use crate::parse::Document;
use crate::profile::researcher_name;
use crate::source::read_file;
use crate::survey::SurveyClassifier;
use crate::table::{TableExtraction, TableSelectors, extract_publications};
use crate::tabular::write_publications;

/// Default saved profile page.
pub const DEFAULT_INPUT_HTML: &str = "papers.html";
/// Default CSV holding every extracted publication.
pub const DEFAULT_INTERMEDIATE_CSV: &str = "GScholar-profile.csv";
/// Default CSV holding the non-survey publications.
pub const DEFAULT_OUTPUT_CSV: &str = "Non-Survey-Papers.csv";

/// Configuration for a pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Saved profile page (default: `papers.html`).
    pub input_html: PathBuf,

    /// CSV of all publications (default: `GScholar-profile.csv`).
    pub intermediate_csv: PathBuf,

    /// CSV of non-survey publications (default: `Non-Survey-Papers.csv`).
    pub output_csv: PathBuf,

    /// Selectors locating the publication table.
    pub selectors: TableSelectors,

    /// Keywords added to the default survey keyword set.
    pub extra_keywords: Vec<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_html: PathBuf::from(DEFAULT_INPUT_HTML),
            intermediate_csv: PathBuf::from(DEFAULT_INTERMEDIATE_CSV),
            output_csv: PathBuf::from(DEFAULT_OUTPUT_CSV),
            selectors: TableSelectors::default(),
            extra_keywords: Vec::new(),
        }
    }
}

impl PipelineConfig {
    /// Creates a new builder for PipelineConfig.
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::new()
    }

    /// The survey classifier described by this configuration.
    pub fn classifier(&self) -> Result<SurveyClassifier> {
        SurveyClassifier::with_extra_keywords(self.extra_keywords.iter().cloned())
    }
}

/// Builder for PipelineConfig.
pub struct PipelineConfigBuilder {
    config: PipelineConfig,
}

impl PipelineConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: PipelineConfig::default() }
    }

    /// Sets the saved profile page.
    pub fn input_html(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.input_html = path.into();
        self
    }

    /// Sets the CSV of all publications.
    pub fn intermediate_csv(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.intermediate_csv = path.into();
        self
    }

    /// Sets the CSV of non-survey publications.
    pub fn output_csv(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output_csv = path.into();
        self
    }

    /// Sets the table selectors.
    pub fn selectors(mut self, selectors: TableSelectors) -> Self {
        self.config.selectors = selectors;
        self
    }

    /// Adds a survey keyword on top of the defaults.
    pub fn extra_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.config.extra_keywords.push(keyword.into());
        self
    }

    /// Builds the config.
    pub fn build(self) -> PipelineConfig {
        self.config
    }
}

impl Default for PipelineConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything a pipeline run produced.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineSummary {
    /// Researcher name from the page title.
    pub researcher: String,
    /// Records written to the intermediate CSV.
    pub rows_written: usize,
    /// Per-row tallies of the table extraction.
    #[serde(skip)]
    pub extraction: TableExtraction,
    /// Comparison with and without survey papers.
    pub report: ExclusionReport,
}

/// Runs all three steps on an already parsed document.
///
/// The keyword set is compiled first, so a bad set fails before any file is
/// written.
pub fn run_pipeline_on(doc: &Document, config: &PipelineConfig) -> Result<PipelineSummary> {
    let classifier = config.classifier()?;

    let researcher = researcher_name(doc);
    tracing::info!(researcher = %researcher, "Read profile title");

    let extraction = extract_publications(doc, &config.selectors)?;
    let rows_written = write_publications(&config.intermediate_csv, &extraction.records)?;
    let report = exclude_surveys(&config.intermediate_csv, &config.output_csv, &classifier)?;

    Ok(PipelineSummary { researcher, rows_written, extraction, report })
}

/// Reads `config.input_html` and runs all three steps.
pub fn run_pipeline(config: &PipelineConfig) -> Result<PipelineSummary> {
    let html = read_file(&config.input_html)?;
    let doc = Document::parse(&html)?;
    run_pipeline_on(&doc, config)
}
