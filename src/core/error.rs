use thiserror::Error;

/// Coarse classification of a failed decomposition.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input was empty or not square; nothing was computed.
    Shape,
    /// A pivot fell below the tolerance during elimination.
    Singular,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecompositionError {
    #[error("matrix must be square: matrix has no rows")]
    Empty,

    #[error("matrix must be square: row {row} has {found} entries, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("zero pivot or singular matrix: |U[{step}][{step}]| = {pivot:e} at step {step}")]
    Singular { step: usize, pivot: f64 },
}

impl DecompositionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DecompositionError::Empty | DecompositionError::NotSquare { .. } => ErrorKind::Shape,
            DecompositionError::Singular { .. } => ErrorKind::Singular,
        }
    }

    pub fn is_shape_error(&self) -> bool { self.kind() == ErrorKind::Shape }
    pub fn is_singular(&self) -> bool { self.kind() == ErrorKind::Singular }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test] fn test_empty_message() {
        let err = DecompositionError::Empty;
        assert_eq!(err.to_string(), "matrix must be square: matrix has no rows");
        assert_eq!(err.kind(), ErrorKind::Shape);
    }
    #[test] fn test_not_square_message() {
        let err = DecompositionError::NotSquare { row: 1, expected: 2, found: 3 };
        assert_eq!(err.to_string(), "matrix must be square: row 1 has 3 entries, expected 2");
        assert!(err.is_shape_error());
    }
    #[test] fn test_singular_message() {
        let err = DecompositionError::Singular { step: 0, pivot: 0.0 };
        assert_eq!(err.to_string(), "zero pivot or singular matrix: |U[0][0]| = 0e0 at step 0");
        assert!(err.is_singular());
        assert!(!err.is_shape_error());
    }
}
