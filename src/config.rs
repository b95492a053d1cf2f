//! Configuration types for page-text extraction.
//!
//! All extraction behaviour is controlled through [`ExtractionConfig`], built
//! via its [`ExtractionConfigBuilder`]. Keeping every knob in one struct makes
//! it trivial to share configs across threads, serialise them for logging, and
//! diff two runs to understand why their outputs differ.
//!
//! The requested page range lives here as *raw*, possibly-absent values.
//! Normalisation against the document's real page count (defaulting, clamping,
//! bounds checks) happens inside the pipeline once the document is open — the
//! builder can only reject requests that are invalid for every document.

use crate::error::ExtractError;
use serde::{Deserialize, Serialize};

/// Configuration for one extraction request.
///
/// Built via [`ExtractionConfig::builder()`] or using
/// [`ExtractionConfig::default()`] (all pages, best-effort page failures).
///
/// # Example
/// ```rust
/// use pagelift::{ExtractionConfig, PageFailurePolicy};
///
/// let config = ExtractionConfig::builder()
///     .page_range(1, 5)
///     .page_failure(PageFailurePolicy::FailFast)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// First page to extract, 1-indexed inclusive. Default: page 1.
    pub start_page: Option<usize>,

    /// Last page to extract, 1-indexed inclusive. Default: the last page.
    ///
    /// Values beyond the document's page count are clamped, not rejected —
    /// this is what lets a caller probe with a guessed end page before it
    /// knows the document's real length.
    pub end_page: Option<usize>,

    /// What to do when a single page cannot be decoded. Default: best-effort.
    pub page_failure: PageFailurePolicy,

    /// Prepend YAML front-matter with document metadata. Default: false.
    ///
    /// Off by default so the assembled Markdown matches the documented
    /// page-section format byte for byte.
    pub include_metadata: bool,
}

impl ExtractionConfig {
    /// Create a new builder for `ExtractionConfig`.
    pub fn builder() -> ExtractionConfigBuilder {
        ExtractionConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ExtractionConfig`].
#[derive(Debug)]
pub struct ExtractionConfigBuilder {
    config: ExtractionConfig,
}

impl ExtractionConfigBuilder {
    pub fn start_page(mut self, page: usize) -> Self {
        self.config.start_page = Some(page);
        self
    }

    pub fn end_page(mut self, page: usize) -> Self {
        self.config.end_page = Some(page);
        self
    }

    /// Set both bounds of the range at once (1-indexed, inclusive).
    pub fn page_range(mut self, start: usize, end: usize) -> Self {
        self.config.start_page = Some(start);
        self.config.end_page = Some(end);
        self
    }

    pub fn page_failure(mut self, policy: PageFailurePolicy) -> Self {
        self.config.page_failure = policy;
        self
    }

    pub fn include_metadata(mut self, v: bool) -> Self {
        self.config.include_metadata = v;
        self
    }

    /// Build the configuration, rejecting ranges that are invalid for every
    /// document. Document-dependent checks (clamping against the real page
    /// count) are deferred to extraction time.
    pub fn build(self) -> Result<ExtractionConfig, ExtractError> {
        let c = &self.config;
        if c.start_page == Some(0) || c.end_page == Some(0) {
            return Err(ExtractError::InvalidConfig(
                "pages are 1-indexed, minimum is 1".into(),
            ));
        }
        if let (Some(start), Some(end)) = (c.start_page, c.end_page) {
            if start > end {
                return Err(ExtractError::InvalidConfig(format!(
                    "start page {start} exceeds end page {end}"
                )));
            }
        }
        Ok(self.config)
    }
}

/// What the pipeline does when one page cannot be decoded.
///
/// Whichever policy is chosen applies uniformly to every page of the request;
/// the two variants exist because the right trade-off depends on the caller.
/// A human-facing viewer wants the readable pages (availability); an archival
/// pipeline wants to know the output is complete (completeness).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PageFailurePolicy {
    /// Substitute an empty string for the failed page, record the failure in
    /// [`crate::output::PageText::error`], and continue. (default)
    #[default]
    BestEffort,
    /// Abort the whole request with [`ExtractError::PageFailed`] on the first
    /// page that cannot be decoded.
    FailFast,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_whole_document_best_effort() {
        let c = ExtractionConfig::default();
        assert_eq!(c.start_page, None);
        assert_eq!(c.end_page, None);
        assert_eq!(c.page_failure, PageFailurePolicy::BestEffort);
        assert!(!c.include_metadata);
    }

    #[test]
    fn builder_sets_range() {
        let c = ExtractionConfig::builder()
            .page_range(2, 7)
            .build()
            .unwrap();
        assert_eq!(c.start_page, Some(2));
        assert_eq!(c.end_page, Some(7));
    }

    #[test]
    fn builder_rejects_zero_pages() {
        assert!(ExtractionConfig::builder().start_page(0).build().is_err());
        assert!(ExtractionConfig::builder().end_page(0).build().is_err());
    }

    #[test]
    fn builder_rejects_inverted_range() {
        let err = ExtractionConfig::builder()
            .page_range(5, 2)
            .build()
            .unwrap_err();
        assert!(matches!(err, ExtractError::InvalidConfig(_)));
    }

    #[test]
    fn builder_accepts_open_ended_range() {
        // end beyond any plausible document is still fine here; it gets
        // clamped against the real page count at extraction time.
        let c = ExtractionConfig::builder().start_page(3).build().unwrap();
        assert_eq!(c.start_page, Some(3));
        assert_eq!(c.end_page, None);
    }
}
