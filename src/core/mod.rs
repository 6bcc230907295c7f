//! Core numeric tree: matrix storage, the decomposer and its errors.

pub mod decomposer;
pub mod error;
pub mod matrix;

pub use decomposer::{decompose, LuDecomposition, PIVOT_TOLERANCE};
pub use error::{DecompositionError, ErrorKind};
pub use matrix::Matrix;
