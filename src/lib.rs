//! Doolittle LU decomposition without pivoting, plus the console front end
//! that feeds it matrices and presents L and U.
//!
//! ```
//! use ludecomp::core::{decompose, Matrix};
//!
//! let a = Matrix::from_rows(vec![vec![4.0, 3.0], vec![6.0, 3.0]]);
//! let lu = decompose(&a).unwrap();
//! assert_eq!(lu.l.row(1), &[1.5, 1.0]);
//! assert_eq!(lu.reconstruct(), a);
//! ```
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod logging;

pub use crate::core::{decompose, DecompositionError, ErrorKind, LuDecomposition, Matrix};
