//! Extraction entry points and pipeline orchestration.
//!
//! One request walks the stages in order — validate input, open the
//! document, count pages, resolve the range, extract each page, assemble
//! Markdown — and every stage can short-circuit to an error. The document
//! handle lives on this function's stack, so it is closed on every exit
//! path, success or failure.
//!
//! The discovery probe is a first-class operation here
//! ([`page_count_from_bytes`] / [`inspect`]) rather than a degenerate
//! one-page extraction; the legacy probe convention still works because
//! every result and every post-open error reports the total page count.

use crate::config::{ExtractionConfig, PageFailurePolicy};
use crate::error::ExtractError;
use crate::output::{DocumentMetadata, ExtractionOutput, ExtractionStats, PageText};
use crate::pipeline::{assemble, document::PdfDocument, input, range::PageRange};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Extract page text from in-memory PDF bytes and assemble Markdown.
///
/// This is the core operation of the library. The byte buffer is read-only
/// and nothing about it is retained after the call returns.
///
/// # Errors
/// Returns `Err(ExtractError)` for empty input, unparseable documents,
/// rejected page ranges, and — under the fail-fast policy — the first page
/// that cannot be decoded. Range errors carry the document's page count so
/// a probing caller still learns the length.
pub fn extract_from_bytes(
    bytes: &[u8],
    config: &ExtractionConfig,
) -> Result<ExtractionOutput, ExtractError> {
    let total_start = Instant::now();

    // ── Opening ──────────────────────────────────────────────────────────
    input::ensure_pdf_bytes(bytes)?;
    let doc = PdfDocument::open(bytes)?;

    // ── CountingPages ────────────────────────────────────────────────────
    let total_pages = doc.page_count();
    info!("document opened: {} pages", total_pages);

    // ── Validating ───────────────────────────────────────────────────────
    let range = PageRange::resolve(config.start_page, config.end_page, total_pages)?;
    debug!("extracting pages {}", range.label());

    // ── Extracting ───────────────────────────────────────────────────────
    let extract_start = Instant::now();
    let mut pages: Vec<PageText> = Vec::with_capacity(range.page_count());
    for page_number in range.pages() {
        match doc.extract_page(page_number) {
            Ok(text) => pages.push(PageText::extracted(page_number, text)),
            Err(page_err) => match config.page_failure {
                PageFailurePolicy::BestEffort => {
                    warn!("{page_err}; substituting empty text");
                    pages.push(PageText::failed(page_number, page_err));
                }
                PageFailurePolicy::FailFast => {
                    return Err(ExtractError::PageFailed {
                        page: page_number,
                        total_pages,
                        detail: page_err.to_string(),
                    });
                }
            },
        }
    }
    let extract_duration_ms = extract_start.elapsed().as_millis() as u64;

    // ── Assembling ───────────────────────────────────────────────────────
    let mut markdown = assemble::assemble(&pages);
    if config.include_metadata {
        markdown = format!("{}{}", front_matter(&doc.metadata()), markdown);
    }

    // ── Done ─────────────────────────────────────────────────────────────
    let failed = pages.iter().filter(|p| p.error.is_some()).count();
    let stats = ExtractionStats {
        total_pages,
        extracted_pages: pages.len() - failed,
        failed_pages: failed,
        total_duration_ms: total_start.elapsed().as_millis() as u64,
        extract_duration_ms,
    };
    info!(
        "extracted pages {} of {} total in {}ms",
        range.label(),
        total_pages,
        stats.total_duration_ms
    );

    Ok(ExtractionOutput {
        markdown,
        pages_extracted: range.label(),
        total_pages,
        pages,
        stats,
    })
}

/// Extract from a local PDF file.
///
/// Validates existence, readability, and magic bytes, then delegates to
/// [`extract_from_bytes`].
pub fn extract(
    path: impl AsRef<Path>,
    config: &ExtractionConfig,
) -> Result<ExtractionOutput, ExtractError> {
    let bytes = input::read_file(path.as_ref())?;
    extract_from_bytes(&bytes, config)
}

/// Extract from a local PDF file and write the Markdown to `output_path`.
///
/// Uses atomic write (temp file + rename) to prevent partial files, and
/// guarantees the written file ends with exactly one newline.
pub fn extract_to_file(
    path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &ExtractionConfig,
) -> Result<ExtractionStats, ExtractError> {
    let output = extract(path, config)?;
    let dest = output_path.as_ref();

    let mut content = output.markdown;
    if !content.ends_with('\n') {
        content.push('\n');
    }

    let write_err = |source: std::io::Error| ExtractError::OutputWriteFailed {
        path: dest.to_path_buf(),
        source,
    };

    if let Some(parent) = dest.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
    }
    let tmp_path = dest.with_extension("md.tmp");
    std::fs::write(&tmp_path, &content).map_err(write_err)?;
    std::fs::rename(&tmp_path, dest).map_err(write_err)?;

    Ok(output.stats)
}

/// Discovery probe: total page count of an in-memory PDF.
///
/// Opens and counts without extracting any text, so a caller can learn the
/// document's length before committing to a range.
pub fn page_count_from_bytes(bytes: &[u8]) -> Result<usize, ExtractError> {
    input::ensure_pdf_bytes(bytes)?;
    Ok(PdfDocument::open(bytes)?.page_count())
}

/// Document metadata for in-memory PDF bytes, content untouched.
pub fn inspect_from_bytes(bytes: &[u8]) -> Result<DocumentMetadata, ExtractError> {
    input::ensure_pdf_bytes(bytes)?;
    Ok(PdfDocument::open(bytes)?.metadata())
}

/// Document metadata for a local PDF file, content untouched.
pub fn inspect(path: impl AsRef<Path>) -> Result<DocumentMetadata, ExtractError> {
    let bytes = input::read_file(path.as_ref())?;
    inspect_from_bytes(&bytes)
}

/// Render document metadata as a YAML front-matter block, present fields
/// only. String values pass through [`yaml_quote`], since PDF metadata can
/// contain anything.
fn front_matter(meta: &DocumentMetadata) -> String {
    let fields = [
        ("title", meta.title.as_deref()),
        ("author", meta.author.as_deref()),
        ("subject", meta.subject.as_deref()),
        ("creator", meta.creator.as_deref()),
        ("producer", meta.producer.as_deref()),
    ];

    let mut yaml = String::from("---\n");
    for (key, value) in fields {
        if let Some(value) = value {
            yaml.push_str(&format!("{key}: {}\n", yaml_quote(value)));
        }
    }
    yaml.push_str(&format!("pages: {}\n", meta.page_count));
    if !meta.pdf_version.is_empty() {
        yaml.push_str(&format!("pdf_version: {}\n", yaml_quote(&meta.pdf_version)));
    }
    yaml.push_str("---\n\n");
    yaml
}

/// Double-quote a YAML scalar, escaping backslashes and embedded quotes.
fn yaml_quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for ch in value.chars() {
        if ch == '"' || ch == '\\' {
            quoted.push('\\');
        }
        quoted.push(ch);
    }
    quoted.push('"');
    quoted
}
