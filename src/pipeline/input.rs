//! Input validation: reject empty or obviously non-PDF input before parsing.
//!
//! The empty-input check runs first so a zero-byte upload is reported as
//! exactly that, never as a corrupt document. The `%PDF` magic check is a
//! cheap pre-filter that produces a clearer message than the parser's
//! structural errors when someone uploads a Word file renamed to `.pdf`;
//! malformed content that passes it is still caught when the document is
//! actually parsed.

use crate::error::ExtractError;
use std::path::Path;
use tracing::debug;

/// Validate raw input bytes before they reach the parser.
pub fn ensure_pdf_bytes(bytes: &[u8]) -> Result<(), ExtractError> {
    if bytes.is_empty() {
        return Err(ExtractError::EmptyInput);
    }
    if bytes.len() < 4 || &bytes[..4] != b"%PDF" {
        let mut magic = [0u8; 4];
        let n = bytes.len().min(4);
        magic[..n].copy_from_slice(&bytes[..n]);
        return Err(ExtractError::NotAPdf { magic });
    }
    Ok(())
}

/// Read a local PDF file into memory, mapping I/O failures to the
/// input-error taxonomy.
pub fn read_file(path: &Path) -> Result<Vec<u8>, ExtractError> {
    match std::fs::read(path) {
        Ok(bytes) => {
            debug!("read {} bytes from {}", bytes.len(), path.display());
            Ok(bytes)
        }
        Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
            Err(ExtractError::PermissionDenied {
                path: path.to_path_buf(),
            })
        }
        Err(_) => Err(ExtractError::FileNotFound {
            path: path.to_path_buf(),
        }),
    }
}
