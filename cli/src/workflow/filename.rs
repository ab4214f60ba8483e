//! Target filename sanitization.

use crate::workflow::types::WorkflowError;

/// Characters disallowed on common filesystems.
const RESERVED: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Strips filesystem-reserved characters and control characters from a
/// filename.
///
/// The result is guaranteed to contain none of `< > : " / \ | ? *` and no
/// control characters, which also rules out path traversal via separators.
/// Sanitizing an already-sanitized name is a no-op.
///
/// # Errors
///
/// Returns [`WorkflowError::InvalidFilename`] if nothing remains after
/// stripping.
pub fn sanitize_filename(name: &str) -> Result<String, WorkflowError> {
    let cleaned: String = name
        .chars()
        .filter(|c| !c.is_control() && !RESERVED.contains(c))
        .collect();

    if cleaned.is_empty() {
        Err(WorkflowError::InvalidFilename)
    } else {
        Ok(cleaned)
    }
}
