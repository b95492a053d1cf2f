//! Error types for the pagelift library.
//!
//! Two distinct error types reflect two distinct failure modes:
//!
//! * [`ExtractError`] — **Fatal**: the extraction cannot proceed at all
//!   (empty upload, corrupt document, invalid page range). Returned as
//!   `Err(ExtractError)` from the top-level `extract*` functions.
//!
//! * [`PageError`] — **Non-fatal**: a single page could not be decoded but
//!   the rest of the document is fine. Under the default best-effort policy
//!   it is stored inside [`crate::output::PageText`] so callers can inspect
//!   partial success rather than losing the whole document to one bad page.
//!
//! Every fatal error raised after the document has been opened carries the
//! total page count, so a caller probing an unknown document still learns
//! its length from a failed request (see [`ExtractError::total_pages`]).
//! None of these errors are fatal to a hosting process.

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the pagelift library.
///
/// Page-level failures use [`PageError`] and are stored in
/// [`crate::output::PageText`] rather than propagated here, unless the
/// [`crate::config::PageFailurePolicy::FailFast`] policy is selected.
#[derive(Debug, Error)]
pub enum ExtractError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// The supplied byte buffer contained zero bytes.
    ///
    /// Always reported before any parsing is attempted, so an empty upload
    /// is never misdiagnosed as a corrupt document.
    #[error("empty input: the document contained zero bytes")]
    EmptyInput,

    /// Input file was not found at the given path.
    #[error("PDF file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The bytes do not begin with the `%PDF` magic marker.
    #[error("input is not a PDF (first bytes: {magic:?})")]
    NotAPdf { magic: [u8; 4] },

    // ── Document errors ───────────────────────────────────────────────────
    /// The byte stream claims to be a PDF but its structure cannot be parsed.
    #[error("corrupt PDF document: {detail}")]
    CorruptDocument { detail: String },

    /// The document is encrypted; pagelift does not decrypt.
    #[error("PDF document is encrypted; extraction of protected documents is not supported")]
    EncryptedDocument,

    // ── Range errors ──────────────────────────────────────────────────────
    /// Requested page range failed normalisation or bounds checks.
    ///
    /// `start` and `end` are the requested values after defaulting but
    /// before clamping, so the message shows what the caller asked for.
    #[error("invalid page range {start}-{end}: document has {total_pages} pages (pages are 1-indexed, start must not exceed end)")]
    InvalidRange {
        start: usize,
        end: usize,
        total_pages: usize,
    },

    /// A page could not be extracted and the fail-fast policy is active.
    #[error("failed to extract page {page} (document has {total_pages} pages): {detail}")]
    PageFailed {
        page: usize,
        total_pages: usize,
        detail: String,
    },

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not create or write the output Markdown file.
    #[error("failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ExtractError {
    /// Total page count of the document, when the error was raised after the
    /// document had been opened and counted.
    ///
    /// This is what lets the discovery probe succeed even when the probed
    /// range is rejected: the failure response still reports the count.
    pub fn total_pages(&self) -> Option<usize> {
        match self {
            ExtractError::InvalidRange { total_pages, .. }
            | ExtractError::PageFailed { total_pages, .. } => Some(*total_pages),
            _ => None,
        }
    }
}

/// A non-fatal error for a single page.
///
/// Stored alongside the page's (empty) text in [`crate::output::PageText`]
/// when the best-effort policy substitutes an empty string for a page the
/// parser could not decode. The extraction continues with remaining pages.
#[derive(Debug, Clone, Error, serde::Serialize, serde::Deserialize)]
pub enum PageError {
    /// The parser could not decode this page's content streams.
    #[error("page {page}: text extraction failed: {detail}")]
    ExtractFailed { page: usize, detail: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_range_display_names_bounds() {
        let e = ExtractError::InvalidRange {
            start: 7,
            end: 3,
            total_pages: 10,
        };
        let msg = e.to_string();
        assert!(msg.contains("7-3"), "got: {msg}");
        assert!(msg.contains("10 pages"), "got: {msg}");
    }

    #[test]
    fn total_pages_known_after_counting() {
        let e = ExtractError::InvalidRange {
            start: 1,
            end: 1,
            total_pages: 0,
        };
        assert_eq!(e.total_pages(), Some(0));

        let e = ExtractError::PageFailed {
            page: 2,
            total_pages: 5,
            detail: "bad stream".into(),
        };
        assert_eq!(e.total_pages(), Some(5));
    }

    #[test]
    fn total_pages_unknown_before_open() {
        assert_eq!(ExtractError::EmptyInput.total_pages(), None);
        let e = ExtractError::CorruptDocument {
            detail: "no trailer".into(),
        };
        assert_eq!(e.total_pages(), None);
    }

    #[test]
    fn page_error_display() {
        let e = PageError::ExtractFailed {
            page: 4,
            detail: "unsupported encoding".into(),
        };
        assert!(e.to_string().contains("page 4"));
        assert!(e.to_string().contains("unsupported encoding"));
    }
}
