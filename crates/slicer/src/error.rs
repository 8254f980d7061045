// ABOUTME: Error types for slicing operations.
// ABOUTME: The strict posture: an explicitly empty or inverted range is rejected before any traversal.

use thiserror::Error;

/// Errors that can occur when slicing a document tree.
///
/// This library holds the strict validation posture: a request whose
/// explicit `end` is at or before its `start` fails here, synchronously,
/// before any traversal begins. Geometry that only collapses after
/// clamping (start at or beyond the content length) is a normal empty
/// outcome, never an error.
#[derive(Debug, Error)]
pub enum SliceError {
    /// The requested range is empty or inverted (`end <= start`).
    #[error("invalid range: end {end} must be greater than start {start} (content length {content_length})")]
    InvalidRange {
        start: usize,
        end: usize,
        content_length: usize,
    },
}

impl SliceError {
    /// Creates an InvalidRange error.
    pub fn invalid_range(start: usize, end: usize, content_length: usize) -> Self {
        SliceError::InvalidRange {
            start,
            end,
            content_length,
        }
    }

    /// Returns true if this is an InvalidRange error.
    pub fn is_invalid_range(&self) -> bool {
        matches!(self, SliceError::InvalidRange { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_both_bounds() {
        let err = SliceError::invalid_range(5, 5, 12);
        let msg = err.to_string();
        assert!(msg.contains("start 5"), "got: {}", msg);
        assert!(msg.contains("end 5"), "got: {}", msg);
        assert!(msg.contains("12"), "got: {}", msg);
    }

    #[test]
    fn test_is_invalid_range() {
        assert!(SliceError::invalid_range(3, 1, 0).is_invalid_range());
    }
}
