//! # pagelift
//!
//! Extract the text of selected PDF pages and assemble it into a single
//! Markdown document with per-page headings.
//!
//! ## Why this crate?
//!
//! Plenty of tools turn a whole PDF into text. pagelift is built for the
//! narrower, very common workflow of pulling *a range of pages* out of a
//! document you have as bytes — an upload, a database blob — and getting
//! back Markdown whose page boundaries are still visible, plus the total
//! page count so a client can discover the document's length before
//! committing to a range. Parsing is pure Rust via `lopdf`; there is no
//! OCR, no layout reconstruction, and no native library to install.
//!
//! ## Pipeline Overview
//!
//! ```text
//! PDF bytes
//!  │
//!  ├─ 1. Input     reject empty or non-PDF input
//!  ├─ 2. Open      parse the byte stream once (lopdf)
//!  ├─ 3. Count     total page count — reported even when the range fails
//!  ├─ 4. Validate  default missing bounds, clamp oversized end, reject the rest
//!  ├─ 5. Extract   sequential per-page text extraction, best-effort or fail-fast
//!  └─ 6. Assemble  `## Page N` sections joined by horizontal rules
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pagelift::{extract, ExtractionConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ExtractionConfig::builder().page_range(1, 5).build()?;
//!     let output = extract("document.pdf", &config)?;
//!     println!("{}", output.markdown);
//!     eprintln!("extracted {} of {} pages",
//!         output.pages_extracted, output.total_pages);
//!     Ok(())
//! }
//! ```
//!
//! To learn a document's length without extracting anything, use the probe:
//!
//! ```rust,no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let bytes = std::fs::read("document.pdf")?;
//! let total = pagelift::page_count_from_bytes(&bytes)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `pagelift` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library to avoid pulling in CLI-only deps:
//! ```toml
//! pagelift = { version = "0.1", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod error;
pub mod extract;
pub mod output;
pub mod pipeline;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ExtractionConfig, ExtractionConfigBuilder, PageFailurePolicy};
pub use error::{ExtractError, PageError};
pub use extract::{
    extract, extract_from_bytes, extract_to_file, inspect, inspect_from_bytes,
    page_count_from_bytes,
};
pub use output::{
    DocumentMetadata, ExtractResponse, ExtractionOutput, ExtractionStats, PageText,
};
pub use pipeline::range::PageRange;
