//! src/commands/menu.rs
//! Interactive mode (no subcommand): pick manual entry or a random matrix,
//! then decompose it. A failed decomposition is reported, not fatal.

use std::io::{BufRead, Write};

use anyhow::Result;
use colored::Colorize;
use rand::Rng;

use crate::config::Settings;
use crate::core::{DecompositionError, Matrix};
use crate::io::input::{ask, prompt_size, random_matrix, read_matrix_manual};

use super::decompose;

/// Matrix source picked from the menu.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Choice {
    Manual,
    Random,
}

pub fn choose<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Choice> {
    writeln!(output, "How do you want to build the matrix?")?;
    writeln!(output, "1 - Enter manually")?;
    writeln!(output, "2 - Generate randomly")?;
    loop {
        match ask(input, output, "Option: ")?.as_str() {
            "1" => return Ok(Choice::Manual),
            "2" => return Ok(Choice::Random),
            _ => writeln!(output, "Invalid option. Try again.")?,
        }
    }
}

pub fn acquire<R: BufRead, W: Write, G: Rng + ?Sized>(
    input: &mut R,
    output: &mut W,
    settings: &Settings,
    rng: &mut G,
) -> Result<Matrix> {
    Ok(match choose(input, output)? {
        Choice::Manual => {
            let n = prompt_size(input, output, "Square matrix size: ")?;
            read_matrix_manual(input, output, n)?
        }
        Choice::Random => {
            let n = prompt_size(input, output, "Matrix size: ")?;
            random_matrix(n, settings.random, rng)
        }
    })
}

pub fn run<R: BufRead, W: Write, G: Rng + ?Sized>(
    input: &mut R,
    output: &mut W,
    settings: &Settings,
    rng: &mut G,
) -> Result<()> {
    let a = acquire(input, output, settings, rng)?;
    match decompose::run(&a, settings, output) {
        Ok(_) => Ok(()),
        Err(e) => match e.downcast_ref::<DecompositionError>() {
            Some(de) => {
                writeln!(output, "{}", format!("Error: {de}").red())?;
                Ok(())
            }
            None => Err(e),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Cursor;

    fn settings_in(dir: &std::path::Path) -> Settings {
        Settings { output: dir.join("lu.txt"), ..Settings::default() }
    }

    #[test]
    fn invalid_option_reprompts() {
        let mut input = Cursor::new("9\n\n2\n");
        let mut out = Vec::new();
        assert_eq!(choose(&mut input, &mut out).unwrap(), Choice::Random);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Invalid option. Try again.").count(), 2);
    }

    #[test]
    fn manual_path_decomposes_and_saves() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_in(dir.path());
        let mut input = Cursor::new("1\n2\n4\n3\n6\n3\n");
        let mut out = Vec::new();
        run(&mut input, &mut out, &settings, &mut StdRng::seed_from_u64(1)).unwrap();
        let saved = std::fs::read_to_string(&settings.output).unwrap();
        assert!(saved.contains("0.0000  -1.5000"), "{saved}");
    }

    #[test]
    fn random_path_uses_configured_size() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_in(dir.path());
        let mut input = Cursor::new("2\n4\n");
        let a = acquire(&mut input, &mut Vec::<u8>::new(), &settings, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(a.nrows(), 4);
        assert!(a.is_square());
    }

    #[test]
    fn singular_matrix_is_reported_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_in(dir.path());
        let mut input = Cursor::new("1\n2\n1\n2\n2\n4\n");
        let mut out = Vec::new();
        run(&mut input, &mut out, &settings, &mut StdRng::seed_from_u64(1)).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Error: zero pivot or singular matrix"), "{text}");
        assert!(!settings.output.exists());
    }
}
