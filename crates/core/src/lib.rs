pub mod error;
pub mod formatters;
pub mod metrics;
pub mod parse;
pub mod pipeline;
pub mod profile;
pub mod record;
pub mod source;
pub mod survey;
pub mod table;
pub mod tabular;

pub use error::{Result, SieveError};
#[cfg(feature = "json")]
pub use formatters::{report_to_json, summary_to_json};
pub use formatters::{COMPARISON_HEADERS, TextConfig, TextFormatter, comparison_table, report_to_text};
pub use metrics::{ExclusionReport, I10_THRESHOLD, Indices, SetSummary, calculate_indices, exclude_surveys};
pub use parse::{Document, Element};
pub use pipeline::{
    DEFAULT_INPUT_HTML, DEFAULT_INTERMEDIATE_CSV, DEFAULT_OUTPUT_CSV, PipelineConfig, PipelineConfigBuilder,
    PipelineSummary, run_pipeline, run_pipeline_on,
};
pub use profile::{UNKNOWN_RESEARCHER, researcher_name};
pub use record::{NOT_AVAILABLE, PublicationRecord, Year, split_metadata};
pub use source::{read_file, read_stdin};
pub use survey::{DEFAULT_SURVEY_KEYWORDS, Partition, SurveyClassifier};
pub use table::{Field, RowOutcome, TableExtraction, TableSelectors, extract_publications, parse_table_to_csv};
pub use tabular::{COLUMNS, read_publications, write_publications};
