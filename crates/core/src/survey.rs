//! Keyword heuristic separating survey/review papers from original research.
//!
//! A title is a survey when it contains any keyword as a case-insensitive
//! substring. Matching is not whole-word: "trends" matches "Cybersecurity
//! Trends", and "review" matches "Reviewing".

use regex::{Regex, RegexBuilder};

use crate::record::PublicationRecord;
use crate::{Result, SieveError};

/// Keywords that mark a title as a survey.
pub const DEFAULT_SURVEY_KEYWORDS: &[&str] = &[
    "survey",
    "review",
    "directions",
    "challenges",
    "trends",
    "approaches",
    "opportunities",
    "concepts",
    "roadmap",
    "Advances in",
    "Analysis of",
];

/// Upper bound on the compiled keyword matcher, in bytes.
const PATTERN_SIZE_LIMIT: usize = 10 * (1 << 20);

/// Classifies titles against a keyword set.
#[derive(Debug, Clone)]
pub struct SurveyClassifier {
    keywords: Vec<String>,
    pattern: Option<Regex>,
}

impl SurveyClassifier {
    /// Builds a classifier for the given keywords.
    ///
    /// Keywords are matched literally; blank keywords are ignored. An empty
    /// set classifies nothing as a survey.
    ///
    /// # Errors
    ///
    /// Returns [`SieveError::KeywordError`] when the keyword set is too
    /// large to compile.
    pub fn new<I, S>(keywords: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keywords: Vec<String> = keywords
            .into_iter()
            .map(Into::into)
            .filter(|k| !k.trim().is_empty())
            .collect();
        let pattern = compile_keywords(&keywords, PATTERN_SIZE_LIMIT)?;

        Ok(Self { keywords, pattern })
    }

    /// Classifier for [`DEFAULT_SURVEY_KEYWORDS`].
    pub fn standard() -> Result<Self> {
        Self::new(DEFAULT_SURVEY_KEYWORDS.iter().copied())
    }

    /// Default keywords plus `extra`.
    pub fn with_extra_keywords<I, S>(extra: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keywords = DEFAULT_SURVEY_KEYWORDS
            .iter()
            .map(|k| k.to_string())
            .chain(extra.into_iter().map(Into::into));
        Self::new(keywords)
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Whether `title` contains any keyword, ignoring case.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sieve_core::SurveyClassifier;
    ///
    /// let classifier = SurveyClassifier::standard().unwrap();
    /// assert!(classifier.is_survey("A SURVEY of Graph Neural Networks"));
    /// assert!(!classifier.is_survey("An Overview of Graph Neural Networks"));
    /// ```
    pub fn is_survey(&self, title: &str) -> bool {
        match &self.pattern {
            Some(pattern) => pattern.is_match(title),
            None => false,
        }
    }

    /// Splits `records` into surveys and non-surveys, keeping the original
    /// order within each side.
    pub fn partition(&self, records: &[PublicationRecord]) -> Partition {
        let (surveys, non_surveys): (Vec<_>, Vec<_>) =
            records.iter().cloned().partition(|r| self.is_survey(&r.title));
        Partition { surveys, non_surveys }
    }
}

/// Joins the escaped keywords into one case-insensitive alternation.
fn compile_keywords(keywords: &[String], size_limit: usize) -> Result<Option<Regex>> {
    if keywords.is_empty() {
        return Ok(None);
    }

    let alternation = keywords.iter().map(|k| regex::escape(k)).collect::<Vec<_>>().join("|");
    RegexBuilder::new(&alternation)
        .case_insensitive(true)
        .size_limit(size_limit)
        .build()
        .map(Some)
        .map_err(|e| SieveError::KeywordError(format!("{} keyword(s): {}", keywords.len(), e)))
}

/// A publication set split by [`SurveyClassifier::partition`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    pub surveys: Vec<PublicationRecord>,
    pub non_surveys: Vec<PublicationRecord>,
}
