//! Failure and anomaly types.
//!
//! Numerical failures are surfaced as errors. Buffer size anomalies are
//! non-fatal and reported as diagnostics; absent uniform or attribute slots are
//! not represented at all because they are skipped silently.

use thiserror::Error;

/// Failure of a transform operation.
#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum TransformError {
    /// Inversion was attempted on a matrix whose determinant is within epsilon of zero.
    /// The matrix is left unchanged.
    #[error("matrix is singular (determinant {determinant:e}); inversion skipped")]
    Singular { determinant: f32 },
}

/// Non-fatal anomaly recorded by an array buffer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
pub enum BufferDiagnostic {
    /// `load` received no items; the buffer stays valid but unallocated.
    #[error("load called with no items; buffer left unallocated")]
    EmptyLoad,

    /// `write` produced a float count different from the original load.
    /// The upload still proceeds with the new data.
    #[error("write changed float count from {expected} to {actual}; uploading anyway")]
    SizeMismatch { expected: usize, actual: usize },

    /// `write` was called on a buffer with no backend resource; nothing was uploaded.
    #[error("write called on a buffer that was never loaded")]
    NotLoaded,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_mismatch_message_names_both_counts() {
        let msg = BufferDiagnostic::SizeMismatch { expected: 12, actual: 16 }.to_string();
        assert!(msg.contains("12"));
        assert!(msg.contains("16"));
    }

    #[test]
    fn singular_message_mentions_singular() {
        let msg = TransformError::Singular { determinant: 0.0 }.to_string();
        assert!(msg.contains("singular"));
    }
}
