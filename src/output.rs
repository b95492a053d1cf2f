//! Output types: per-page text, the assembled result, and the JSON envelope
//! consumed by an HTTP front-end.
//!
//! Everything here is created for a single request and immutable once the
//! pipeline returns it; nothing is cached or shared across requests.

use crate::error::{ExtractError, PageError};
use serde::{Deserialize, Serialize};

/// Text extracted from one page.
///
/// Produced in ascending page order. `text` may be empty — a page with no
/// extractable text is valid — but it is never absent. When the best-effort
/// policy absorbed a per-page failure, `text` is empty and `error` records
/// what went wrong.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageText {
    /// 1-indexed page number.
    pub page_number: usize,
    /// Extracted text, cleaned of layout noise. Empty string when the page
    /// yielded nothing (or failed under best-effort).
    pub text: String,
    /// Per-page failure recorded under the best-effort policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<PageError>,
}

impl PageText {
    /// A successfully extracted page (possibly with empty text).
    pub fn extracted(page_number: usize, text: String) -> Self {
        Self {
            page_number,
            text,
            error: None,
        }
    }

    /// A page the parser could not decode: empty text, failure recorded.
    pub fn failed(page_number: usize, error: PageError) -> Self {
        Self {
            page_number,
            text: String::new(),
            error: Some(error),
        }
    }
}

/// Document properties read from the PDF trailer without extracting content.
///
/// This is the discovery-probe payload: `page_count` is authoritative and is
/// all a caller needs before committing to a page range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub creator: Option<String>,
    pub producer: Option<String>,
    /// Total number of pages in the document. Zero-page documents are valid.
    pub page_count: usize,
    /// PDF specification version from the file header, e.g. "1.7".
    pub pdf_version: String,
}

/// Timing and page counters for one extraction run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// Pages in the whole document, not just the requested range.
    pub total_pages: usize,
    /// Pages in the range that yielded text (including empty pages).
    pub extracted_pages: usize,
    /// Pages absorbed as failures under the best-effort policy.
    pub failed_pages: usize,
    /// Wall-clock time for the whole request.
    pub total_duration_ms: u64,
    /// Wall-clock time spent in the per-page extraction loop.
    pub extract_duration_ms: u64,
}

/// The complete result of one extraction request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionOutput {
    /// Assembled Markdown: one `## Page N` section per page, separated by
    /// horizontal rules.
    pub markdown: String,
    /// The normalised range that was extracted, rendered as `"start-end"`.
    pub pages_extracted: String,
    /// Total pages in the document, reported alongside every result so a
    /// probe call learns the document length.
    pub total_pages: usize,
    /// Per-page results in ascending page order.
    pub pages: Vec<PageText>,
    /// Counters and timings.
    pub stats: ExtractionStats,
}

/// Wire envelope for an HTTP front-end (and the CLI `--json` flag).
///
/// Mirrors the response shape a browser client expects:
/// `{"success": true, "markdown": …, "pages_extracted": "1-5",
/// "total_pages": 12}` on success, `{"success": false, "error": …}` with
/// `total_pages` attached when the document had already been counted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages_extracted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExtractResponse {
    /// Success envelope from a completed extraction.
    pub fn success(output: &ExtractionOutput) -> Self {
        Self {
            success: true,
            markdown: Some(output.markdown.clone()),
            pages_extracted: Some(output.pages_extracted.clone()),
            total_pages: Some(output.total_pages),
            error: None,
        }
    }

    /// Failure envelope; carries the page count when the error knows it.
    pub fn failure(error: &ExtractError) -> Self {
        Self {
            success: false,
            markdown: None,
            pages_extracted: None,
            total_pages: error.total_pages(),
            error: Some(error.to_string()),
        }
    }

    /// Envelope for either outcome of an extraction call.
    pub fn from_result(result: &Result<ExtractionOutput, ExtractError>) -> Self {
        match result {
            Ok(output) => Self::success(output),
            Err(error) => Self::failure(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_output() -> ExtractionOutput {
        ExtractionOutput {
            markdown: "## Page 1\n\nhello".into(),
            pages_extracted: "1-1".into(),
            total_pages: 3,
            pages: vec![PageText::extracted(1, "hello".into())],
            stats: ExtractionStats {
                total_pages: 3,
                extracted_pages: 1,
                ..Default::default()
            },
        }
    }

    #[test]
    fn success_envelope_shape() {
        let resp = ExtractResponse::success(&sample_output());
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["pages_extracted"], "1-1");
        assert_eq!(json["total_pages"], 3);
        assert!(json.get("error").is_none());
    }

    #[test]
    fn failure_envelope_reports_total_pages_when_known() {
        let err = ExtractError::InvalidRange {
            start: 4,
            end: 9,
            total_pages: 3,
        };
        let resp = ExtractResponse::failure(&err);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["total_pages"], 3);
        assert!(json["error"].as_str().unwrap().contains("4-9"));
        assert!(json.get("markdown").is_none());
    }

    #[test]
    fn failure_envelope_omits_unknown_total_pages() {
        let resp = ExtractResponse::failure(&ExtractError::EmptyInput);
        let json = serde_json::to_value(&resp).unwrap();
        assert!(json.get("total_pages").is_none());
    }

    #[test]
    fn page_text_serialises_without_error_field_on_success() {
        let json = serde_json::to_value(PageText::extracted(2, "x".into())).unwrap();
        assert!(json.get("error").is_none());
        assert_eq!(json["page_number"], 2);
    }
}
