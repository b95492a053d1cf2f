//! Page-range normalisation and validation.
//!
//! A [`PageRange`] can only be obtained through [`PageRange::resolve`], so a
//! constructed range always satisfies `1 <= start <= end <= total_pages`.
//!
//! The asymmetry in the rules is deliberate: an `end` beyond the document is
//! *clamped* rather than rejected, because callers routinely guess an end
//! page before they know the document's length, but a `start` beyond the
//! document (or an inverted range, or a zero bound) can never mean anything
//! and is rejected.

use crate::error::ExtractError;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// A validated, inclusive, 1-indexed page range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRange {
    start: usize,
    end: usize,
}

impl PageRange {
    /// Normalise a raw, possibly partially-specified range against the
    /// document's page count.
    ///
    /// * missing `start` defaults to 1; missing `end` defaults to the last page
    /// * `start == 0` or `end == 0` is rejected (pages are 1-indexed)
    /// * `start > end` is rejected
    /// * `end > total_pages` is clamped to `total_pages`
    /// * `start > total_pages` (after clamping) is rejected
    ///
    /// On a zero-page document every request is rejected, since no start
    /// page can be in bounds.
    pub fn resolve(
        start: Option<usize>,
        end: Option<usize>,
        total_pages: usize,
    ) -> Result<Self, ExtractError> {
        let start = start.unwrap_or(1);
        let end = end.unwrap_or(total_pages);

        if start == 0 || end == 0 {
            return Err(ExtractError::InvalidRange {
                start,
                end,
                total_pages,
            });
        }
        if start > end {
            return Err(ExtractError::InvalidRange {
                start,
                end,
                total_pages,
            });
        }

        let clamped_end = end.min(total_pages);
        if start > clamped_end {
            return Err(ExtractError::InvalidRange {
                start,
                end,
                total_pages,
            });
        }

        Ok(Self {
            start,
            end: clamped_end,
        })
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of pages in the range. Never zero: the invariant
    /// `start <= end` means a resolved range always holds at least one page.
    pub fn page_count(&self) -> usize {
        self.end - self.start + 1
    }

    /// Iterate the page numbers in ascending order.
    pub fn pages(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }

    /// The `"start-end"` label reported in results, e.g. `"1-5"`.
    pub fn label(&self) -> String {
        format!("{}-{}", self.start, self.end)
    }
}
