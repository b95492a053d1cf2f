//! Markdown assembly: per-page cleanup plus the page-section layout.
//!
//! The output format is a compatibility contract with downstream renderers
//! and must not drift: each page is a level-2 heading `## Page N`, a blank
//! line, then the page's cleaned text; pages are separated by a horizontal
//! rule with blank lines on both sides; there is no trailing separator.
//! Pages with no text still emit their heading, so the page structure stays
//! visible even when a page yields nothing.
//!
//! Cleanup is deterministic and cheap: extracted PDF text arrives with
//! carriage returns, trailing spaces, invisible Unicode, and blank filler
//! lines, none of which carry content. Each rule is a pure `&str → String`
//! function, independently testable.

use crate::output::PageText;
use once_cell::sync::Lazy;
use regex::Regex;

/// Separator inserted between page sections. The blank lines on both sides
/// are part of the format: the heading of the next page must be preceded by
/// a blank line for standard Markdown renderers.
pub const PAGE_SEPARATOR: &str = "\n\n---\n\n";

/// Join per-page results into the final Markdown document.
pub fn assemble(pages: &[PageText]) -> String {
    let sections: Vec<String> = pages.iter().map(page_section).collect();
    sections.join(PAGE_SEPARATOR)
}

/// Render one page section: heading, blank line, cleaned text.
///
/// An empty page collapses to just the heading; the surrounding separators
/// still mark where the page sits in the document.
fn page_section(page: &PageText) -> String {
    let text = clean_page_text(&page.text);
    if text.is_empty() {
        format!("## Page {}", page.page_number)
    } else {
        format!("## Page {}\n\n{}", page.page_number, text)
    }
}

// ── Cleanup rules ────────────────────────────────────────────────────────

static RE_INVISIBLE: Lazy<Regex> = Lazy::new(|| {
    // Zero-width spaces/joiners, word joiner, BOM, soft hyphen.
    Regex::new("[\u{200B}\u{200C}\u{200D}\u{2060}\u{FEFF}\u{00AD}]").unwrap()
});

/// Normalise one page's raw extracted text.
///
/// Rules (applied in order):
/// 1. Normalise line endings (CRLF / CR → LF)
/// 2. Strip invisible Unicode
/// 3. Trim each line and drop lines that are blank after trimming
pub fn clean_page_text(input: &str) -> String {
    let s = normalise_line_endings(input);
    let s = RE_INVISIBLE.replace_all(&s, "");
    s.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn normalise_line_endings(input: &str) -> String {
    input.replace("\r\n", "\n").replace('\r', "\n")
}
