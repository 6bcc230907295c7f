//! Presentation of a finished decomposition: text/JSON rendering and the
//! console-or-file decision.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

use crate::config::{ReportFormat, Settings};
use crate::core::{LuDecomposition, Matrix};
use crate::io::atomic::atomic_write;

pub const TITLE: &str = "=== LU Decomposition ===";

/// Where the report ended up besides the results file.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Presentation {
    Console,
    FileOnly,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Presented {
    pub mode: Presentation,
    pub path: PathBuf,
}

/// Fixed-point rows, entries joined by two spaces.
pub fn format_matrix(m: &Matrix, precision: usize) -> String {
    let mut out = String::new();
    for row in m.rows() {
        let line: Vec<String> = row.iter().map(|x| format!("{x:.precision$}")).collect();
        out.push_str(&line.join("  "));
        out.push('\n');
    }
    out
}

pub fn render_text(a: &Matrix, lu: &LuDecomposition, precision: usize) -> String {
    format!(
        "{TITLE}\n\nMatrix A:\n{}\nMatrix L:\n{}\nMatrix U:\n{}",
        format_matrix(a, precision),
        format_matrix(&lu.l, precision),
        format_matrix(&lu.u, precision),
    )
}

#[derive(Serialize)]
struct JsonReport<'a> {
    n: usize,
    a: &'a Matrix,
    l: &'a Matrix,
    u: &'a Matrix,
    residual: f64,
}

pub fn render_json(a: &Matrix, lu: &LuDecomposition) -> Result<String> {
    let report = JsonReport { n: lu.dim(), a, l: &lu.l, u: &lu.u, residual: lu.residual(a) };
    Ok(serde_json::to_string_pretty(&report)?)
}

fn print_colored<W: Write>(console: &mut W, a: &Matrix, lu: &LuDecomposition, precision: usize) -> Result<()> {
    writeln!(console)?;
    writeln!(console, "{}", TITLE.bold().cyan())?;
    writeln!(console)?;
    for (label, m) in [("Matrix A:", a), ("Matrix L:", &lu.l), ("Matrix U:", &lu.u)] {
        writeln!(console, "{}", label.bold())?;
        write!(console, "{}", format_matrix(m, precision))?;
        if label != "Matrix U:" {
            writeln!(console)?;
        }
    }
    Ok(())
}

/// Always persist the report; echo it to `console` only for small matrices.
pub fn present<W: Write>(
    a: &Matrix,
    lu: &LuDecomposition,
    settings: &Settings,
    console: &mut W,
) -> Result<Presented> {
    let body = match settings.format {
        ReportFormat::Text => render_text(a, lu, settings.precision),
        ReportFormat::Json => render_json(a, lu)?,
    };
    atomic_write(&settings.output, body.as_bytes())
        .with_context(|| format!("writing {}", settings.output.display()))?;

    let mode = if lu.dim() <= settings.console_limit {
        print_colored(console, a, lu, settings.precision)?;
        Presentation::Console
    } else {
        writeln!(console, "Matrix is large. Results saved to {}.", settings.output.display())?;
        Presentation::FileOnly
    };

    if settings.verify {
        writeln!(console, "max |A - L·U| = {:e}", lu.residual(a))?;
    }
    Ok(Presented { mode, path: settings.output.clone() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::decompose;

    #[test]
    fn format_matrix_uses_precision() {
        let m = Matrix::from_rows(vec![vec![1.0, -2.5], vec![1.0 / 3.0, 10.0]]);
        assert_eq!(format_matrix(&m, 4), "1.0000  -2.5000\n0.3333  10.0000\n");
        assert_eq!(format_matrix(&m, 1), "1.0  -2.5\n0.3  10.0\n");
    }

    #[test]
    fn json_report_round_trips_matrices() {
        let a = Matrix::from_rows(vec![vec![2.0, 1.0], vec![4.0, 3.0]]);
        let lu = decompose(&a).unwrap();
        let v: serde_json::Value = serde_json::from_str(&render_json(&a, &lu).unwrap()).unwrap();
        assert_eq!(v["n"], 2);
        assert_eq!(v["l"][1][0], 2.0);
        assert_eq!(v["u"][1][1], 1.0);
        assert_eq!(v["residual"], 0.0);
    }
}
