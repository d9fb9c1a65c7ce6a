#[cfg(feature = "json")]
pub mod json;
pub mod table;
pub mod text;

#[cfg(feature = "json")]
pub use json::{report_to_json, summary_to_json};
pub use table::{COMPARISON_HEADERS, comparison_table};
pub use text::{TextConfig, TextFormatter, report_to_text};
