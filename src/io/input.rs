//! Matrix acquisition: interactive prompts, random generation, files.
//!
//! Prompt helpers take any `BufRead` / `Write` pair so the interactive paths
//! can be driven from tests with in-memory buffers.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use crate::core::Matrix;

pub const DEFAULT_RANDOM_MIN: f64 = -10.0;
pub const DEFAULT_RANDOM_MAX: f64 = 10.0;

/// Half-open interval `[min, max)` for random entries.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomRange {
    min: f64,
    max: f64,
}

impl RandomRange {
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            bail!("random range bounds must be finite (got {min}..{max})");
        }
        if min >= max {
            bail!("random range is empty: min {min} must be below max {max}");
        }
        if !(max - min).is_finite() {
            bail!("random range is too wide: {min}..{max} overflows f64");
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 { self.min }
    pub fn max(&self) -> f64 { self.max }
}

impl Default for RandomRange {
    fn default() -> Self {
        Self { min: DEFAULT_RANDOM_MIN, max: DEFAULT_RANDOM_MAX }
    }
}

/// n×n matrix with entries drawn uniformly from `range`.
pub fn random_matrix<R: Rng + ?Sized>(n: usize, range: RandomRange, rng: &mut R) -> Matrix {
    let uniform = Uniform::new(range.min, range.max);
    let mut rows = Vec::with_capacity(n);
    for _ in 0..n {
        let row: Vec<f64> = (0..n).map(|_| uniform.sample(&mut *rng)).collect();
        rows.push(row);
    }
    Matrix::from_rows(rows)
}

fn read_trimmed<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed while prompting"));
    }
    Ok(line.trim().to_string())
}

/// Print `prompt`, flush, and read one trimmed line.
pub fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> io::Result<String> {
    write!(output, "{prompt}")?;
    output.flush()?;
    read_trimmed(input)
}

/// Keep asking until a positive integer is entered.
pub fn prompt_size<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> io::Result<usize> {
    loop {
        let line = ask(input, output, label)?;
        match line.parse::<i64>() {
            Ok(n) if n > 0 => return Ok(n as usize),
            Ok(_) => writeln!(output, "Enter a positive value.")?,
            Err(_) => writeln!(output, "Invalid input.")?,
        }
    }
}

/// Prompt `A[i][j]: ` for every cell, re-asking the same cell on bad input.
pub fn read_matrix_manual<R: BufRead, W: Write>(input: &mut R, output: &mut W, n: usize) -> io::Result<Matrix> {
    let mut rows = Vec::with_capacity(n);
    for i in 0..n {
        let mut row = Vec::with_capacity(n);
        for j in 0..n {
            let value = loop {
                let line = ask(input, output, &format!("A[{i}][{j}]: "))?;
                match parse_entry(&line) {
                    Some(v) => break v,
                    None => writeln!(output, "Invalid number.")?,
                }
            };
            row.push(value);
        }
        rows.push(row);
    }
    Ok(Matrix::from_rows(rows))
}

fn parse_entry(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// One row per non-empty line; entries split on whitespace and commas;
/// `#` starts a comment. Row lengths are not checked here.
pub fn parse_matrix_text(text: &str) -> Result<Matrix> {
    let mut rows = Vec::new();
    for (lineno, raw) in text.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        let row = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|tok| !tok.is_empty())
            .map(|tok| {
                parse_entry(tok).with_context(|| format!("line {}: invalid number '{tok}'", lineno + 1))
            })
            .collect::<Result<Vec<f64>>>()?;
        rows.push(row);
    }
    Ok(Matrix::from_rows(rows))
}

/// `.json` → array of arrays; anything else → the text format.
pub fn load_matrix(path: &Path) -> Result<Matrix> {
    let txt = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));
    if is_json {
        serde_json::from_str(&txt).with_context(|| format!("parsing {}", path.display()))
    } else {
        parse_matrix_text(&txt).with_context(|| format!("parsing {}", path.display()))
    }
}
