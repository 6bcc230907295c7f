//! src/commands/decompose.rs
//! Decompose one matrix and hand the result to the presentation layer.

use std::io::Write;

use anyhow::Result;
use tracing::info;

use crate::config::Settings;
use crate::core::{decompose, Matrix};
use crate::io::report::{present, Presented};

/// Shared by every front end. A `DecompositionError` comes back inside the
/// `anyhow::Error` and can be recovered with `downcast_ref`.
pub fn run<W: Write>(a: &Matrix, settings: &Settings, console: &mut W) -> Result<Presented> {
    let lu = decompose(a)?;
    let presented = present(a, &lu, settings, console)?;
    info!(n = lu.dim(), path = %presented.path.display(), "results written");
    Ok(presented)
}
