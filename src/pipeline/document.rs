//! PDF document handle: parse once, count pages, extract text per page.
//!
//! Wraps `lopdf` behind a small surface so the rest of the pipeline never
//! touches parser types. A [`PdfDocument`] is owned by one extraction
//! request, never shared or cached, and is dropped on every exit path —
//! lopdf holds per-document internal state, which is also why page
//! extraction is a sequential loop rather than parallel.

use crate::error::{ExtractError, PageError};
use crate::output::DocumentMetadata;
use flate2::bufread::{DeflateDecoder, ZlibDecoder};
use lopdf::{Document, Object};
use std::collections::BTreeMap;
use std::io::Read;
use tracing::debug;

/// An opened PDF, valid for the duration of one request.
#[derive(Debug)]
pub struct PdfDocument {
    inner: Document,
    /// Page number (1-indexed) to object id, as laid out in the page tree.
    pages: BTreeMap<u32, lopdf::ObjectId>,
}

impl PdfDocument {
    /// Parse a PDF from an in-memory byte stream.
    ///
    /// The caller is expected to have run the cheap input checks first
    /// (see [`crate::pipeline::input::ensure_pdf_bytes`]); anything that
    /// fails structural parsing here is a corrupt document.
    pub fn open(bytes: &[u8]) -> Result<Self, ExtractError> {
        let inner = Document::load_mem(bytes).map_err(|e| ExtractError::CorruptDocument {
            detail: e.to_string(),
        })?;
        if inner.is_encrypted() {
            return Err(ExtractError::EncryptedDocument);
        }
        let pages = inner.get_pages();
        debug!("document parsed: {} pages", pages.len());
        Ok(Self { inner, pages })
    }

    /// Total number of pages. Zero is valid.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Extract plain text for one 1-indexed page.
    ///
    /// The pipeline guarantees `page_number` is within bounds before calling.
    /// A failure here means this page's content streams could not be decoded;
    /// it says nothing about the rest of the document, which is why the error
    /// is the non-fatal [`PageError`].
    pub fn extract_page(&self, page_number: usize) -> Result<String, PageError> {
        let page = u32::try_from(page_number).map_err(|_| PageError::ExtractFailed {
            page: page_number,
            detail: "page number out of representable range".into(),
        })?;
        // lopdf's extract_text swallows an undecodable content stream and
        // hands back empty text, so the streams are inflated strictly first.
        self.verify_content_streams(page, page_number)?;
        self.inner
            .extract_text(&[page])
            .map_err(|e| PageError::ExtractFailed {
                page: page_number,
                detail: e.to_string(),
            })
    }

    /// Check that every content stream of the page actually decodes,
    /// so a broken page surfaces as a failure instead of blank text.
    fn verify_content_streams(&self, page: u32, page_number: usize) -> Result<(), PageError> {
        let failed = |detail: String| PageError::ExtractFailed {
            page: page_number,
            detail,
        };
        let page_id = *self
            .pages
            .get(&page)
            .ok_or_else(|| failed("page missing from page tree".into()))?;
        for stream_id in self.inner.get_page_contents(page_id) {
            let stream = self
                .inner
                .get_object(stream_id)
                .and_then(Object::as_stream)
                .map_err(|e| failed(format!("content stream unreadable: {e}")))?;
            if stream_is_flate(stream) {
                inflate(&stream.content)
                    .map_err(|e| failed(format!("content stream does not inflate: {e}")))?;
            }
        }
        Ok(())
    }

    /// Read document properties from the trailer Info dictionary.
    pub fn metadata(&self) -> DocumentMetadata {
        let info = self
            .inner
            .trailer
            .get(b"Info")
            .ok()
            .and_then(|obj| match obj {
                Object::Reference(id) => self.inner.get_object(*id).ok(),
                other => Some(other),
            })
            .and_then(|obj| obj.as_dict().ok());

        let field = |key: &[u8]| {
            info.and_then(|dict| dict.get(key).ok())
                .and_then(decode_text_string)
        };

        DocumentMetadata {
            title: field(b"Title"),
            author: field(b"Author"),
            subject: field(b"Subject"),
            creator: field(b"Creator"),
            producer: field(b"Producer"),
            page_count: self.page_count(),
            pdf_version: self.inner.version.clone(),
        }
    }
}

/// Whether a content stream is FlateDecode-compressed. Other filters are
/// rare in text content and are left to lopdf's own decoding.
fn stream_is_flate(stream: &lopdf::Stream) -> bool {
    match stream.dict.get(b"Filter") {
        Ok(Object::Name(name)) => name.as_slice() == b"FlateDecode",
        Ok(Object::Array(filters)) => {
            matches!(filters.first(), Some(Object::Name(name)) if name.as_slice() == b"FlateDecode")
        }
        _ => false,
    }
}

/// Inflate a FlateDecode stream body: zlib-wrapped per the format, with a
/// fallback to the bare deflate some producers emit.
fn inflate(data: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut out = Vec::new();
    if ZlibDecoder::new(data).read_to_end(&mut out).is_ok() {
        return Ok(out);
    }
    out.clear();
    DeflateDecoder::new(data).read_to_end(&mut out)?;
    Ok(out)
}

/// Decode a PDF text string: UTF-16BE when it carries a BOM, otherwise
/// treated as Latin-1 (a close-enough superset of PDFDocEncoding for the
/// characters that occur in practice).
fn decode_text_string(obj: &Object) -> Option<String> {
    let Object::String(bytes, _) = obj else {
        return None;
    };
    let decoded = if bytes.starts_with(&[0xFE, 0xFF]) {
        let units: Vec<u16> = bytes[2..]
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        String::from_utf16_lossy(&units)
    } else {
        bytes.iter().map(|&b| b as char).collect()
    };
    let trimmed = decoded.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
