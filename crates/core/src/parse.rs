//! HTML parsing and DOM navigation.
//!
//! This module provides the [`Document`] and [`Element`] types that wrap
//! `scraper` and expose the handful of queries the profile extractors need:
//! CSS selection, the page title, and whitespace-trimmed text.
//!
//! # Example
//!
//! ```rust
//! use sieve_core::parse::Document;
//!
//! let html = r#"
//!     <html>
//!         <head><title>Ada Lovelace - Google Scholar</title></head>
//!         <body>
//!             <table id="gsc_a_t"><tr class="gsc_a_tr"><td>Row</td></tr></table>
//!         </body>
//!     </html>
//! "#;
//!
//! let doc = Document::parse(html).unwrap();
//! assert_eq!(doc.title(), Some("Ada Lovelace - Google Scholar".to_string()));
//! assert_eq!(doc.select("tr.gsc_a_tr").unwrap().len(), 1);
//! ```

use scraper::{Html, Selector};

use crate::{Result, SieveError};

/// Represents a parsed HTML document.
///
/// # Example
///
/// ```rust
/// use sieve_core::parse::Document;
///
/// let html = "<html><head><title>Test</title></head><body><p>Hello</p></body></html>";
/// let doc = Document::parse(html).unwrap();
/// assert_eq!(doc.title(), Some("Test".to_string()));
/// ```
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses HTML from a string.
    ///
    /// The HTML5 parser is error tolerant, so malformed markup still yields
    /// a document.
    pub fn parse(html: &str) -> Result<Self> {
        let html = Html::parse_document(html);
        Ok(Self { html })
    }

    /// Selects elements using a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns [`SieveError::HtmlParseError`] if the selector is invalid.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sieve_core::parse::Document;
    ///
    /// let html = r#"<a class="gsc_a_at">First</a><a class="gsc_a_at">Second</a>"#;
    /// let doc = Document::parse(html).unwrap();
    /// let elements = doc.select("a.gsc_a_at").unwrap();
    /// assert_eq!(elements.len(), 2);
    /// ```
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel = compile_selector(selector)?;
        Ok(self.html.select(&sel).map(|el| Element { element: el }).collect())
    }

    /// Selects the first element matching a CSS selector, if any.
    pub fn select_first(&'_ self, selector: &str) -> Result<Option<Element<'_>>> {
        let sel = compile_selector(selector)?;
        Ok(self.html.select(&sel).next().map(|el| Element { element: el }))
    }

    /// Gets the title of the document.
    ///
    /// Returns the untrimmed content of the first `<title>` element if present.
    pub fn title(&self) -> Option<String> {
        let selector = Selector::parse("title").ok()?;
        self.html
            .select(&selector)
            .next()
            .map(|el| el.text().collect::<String>())
    }
}

/// A wrapper around scraper's ElementRef.
///
/// # Example
///
/// ```rust
/// use sieve_core::parse::Document;
///
/// let html = r#"<a class="gsc_a_ac" href="/citations?cites=1"> 42 </a>"#;
/// let doc = Document::parse(html).unwrap();
/// let link = &doc.select("a").unwrap()[0];
///
/// assert_eq!(link.trimmed_text(), "42");
/// ```
#[derive(Clone, Debug)]
pub struct Element<'a> {
    element: scraper::ElementRef<'a>,
}

impl<'a> Element<'a> {
    /// Gets the text content with each text node trimmed and the empty
    /// ones dropped.
    ///
    /// Text nodes are concatenated without separators, so markup such as
    /// `<b>Graph</b> Algorithms` collapses whitespace that sits directly
    /// next to a tag boundary.
    pub fn trimmed_text(&self) -> String {
        self.element
            .text()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }

    /// Selects descendant elements using a pre-compiled selector.
    pub fn select_compiled(&self, selector: &Selector) -> Vec<Element<'a>> {
        self.element.select(selector).map(|el| Element { element: el }).collect()
    }

    /// Selects the first descendant matching a pre-compiled selector.
    pub fn first_compiled(&self, selector: &Selector) -> Option<Element<'a>> {
        self.element.select(selector).next().map(|el| Element { element: el })
    }

    /// Selects descendant elements using a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns [`SieveError::HtmlParseError`] if the selector is invalid.
    pub fn select(&self, selector: &str) -> Result<Vec<Element<'a>>> {
        let sel = compile_selector(selector)?;
        Ok(self.select_compiled(&sel))
    }
}

/// Compiles a CSS selector, mapping parse failures to [`SieveError::HtmlParseError`].
pub fn compile_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| SieveError::HtmlParseError(format!("Invalid selector '{}': {}", selector, e)))
}
