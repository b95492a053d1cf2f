//! Pipeline stages for page-text extraction.
//!
//! Each submodule implements exactly one transformation step.
//! Keeping stages separate makes each independently testable and lets us
//! swap implementations (e.g. switch the PDF backend) without touching
//! other stages.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ document ──▶ range ──▶ document ──▶ assemble
//! (bytes)   (open+count) (validate) (per-page)  (markdown)
//! ```
//!
//! 1. [`input`]    — reject empty input and non-PDF bytes before parsing
//! 2. [`document`] — parse the byte stream once, count pages, extract text
//!    for one page at a time
//! 3. [`range`]    — normalise the requested range against the real page
//!    count: default missing bounds, clamp an oversized end, reject the rest
//! 4. [`assemble`] — clean each page's text and join the pages into one
//!    Markdown document with `## Page N` headings and rule separators
//!
//! The orchestration lives in [`crate::extract`]; it walks the stages in
//! order and owns the document for exactly one request.

pub mod assemble;
pub mod document;
pub mod input;
pub mod range;
