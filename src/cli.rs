use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{ReportFormat, Settings};

#[derive(Debug, Parser)]
#[command(
    name = "ludecomp",
    about = "LU decomposition (Doolittle, no pivoting) of a square matrix",
    version,
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct LuCli {
    /// Global: path to config (TOML); default: ~/.ludecomp/config.toml
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Global: results file (overwritten each run)
    #[arg(short = 'o', long = "out", value_name = "FILE", global = true)]
    pub out: Option<PathBuf>,

    /// Global: results file format
    #[arg(long = "format", value_enum, global = true)]
    pub format: Option<ReportFormat>,

    /// Global: print results to the console only up to this size
    #[arg(long = "console-limit", value_name = "N", global = true)]
    pub console_limit: Option<usize>,

    /// Global: decimals per entry in the text report
    #[arg(long = "precision", value_name = "P", global = true)]
    pub precision: Option<usize>,

    /// Global: also print max |A - L·U|
    #[arg(long = "verify", action = ArgAction::SetTrue, global = true)]
    pub verify: bool,

    /// Global: log elimination details to stderr (-d debug, -dd trace)
    #[arg(short = 'd', long = "debug", action = ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub cmd: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Prompt for the size and every entry
    Manual,

    /// Decompose a random matrix
    ///
    /// Examples:
    ///   ludecomp random --size 4
    ///   ludecomp random -n 50 --min 0 --max 1 --seed 7
    Random {
        /// Matrix size n (n×n)
        #[arg(short = 'n', long = "size", value_parser = clap::value_parser!(u64).range(1..))]
        size: u64,

        /// Lower bound for entries (default from config, else -10)
        #[arg(long = "min", allow_hyphen_values = true)]
        min: Option<f64>,

        /// Upper bound for entries (default from config, else 10)
        #[arg(long = "max", allow_hyphen_values = true)]
        max: Option<f64>,

        /// Seed for reproducible matrices
        #[arg(long = "seed")]
        seed: Option<u64>,
    },

    /// Load a matrix from a file (.json array of rows, or whitespace/comma text)
    File {
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },
}

impl LuCli {
    /// Flags win over the config file.
    pub fn apply_overrides(&self, mut settings: Settings) -> Settings {
        if let Some(p) = &self.out { settings.output = p.clone(); }
        if let Some(f) = self.format { settings.format = f; }
        if let Some(n) = self.console_limit { settings.console_limit = n; }
        if let Some(p) = self.precision { settings.precision = p; }
        settings.verify |= self.verify;
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_random_with_negative_bounds() {
        let cli = LuCli::try_parse_from(["ludecomp", "random", "-n", "3", "--min", "-5", "--max", "-1"]).unwrap();
        match cli.cmd {
            Some(Command::Random { size, min, max, seed }) => {
                assert_eq!(size, 3);
                assert_eq!(min, Some(-5.0));
                assert_eq!(max, Some(-1.0));
                assert_eq!(seed, None);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn rejects_zero_size() {
        assert!(LuCli::try_parse_from(["ludecomp", "random", "--size", "0"]).is_err());
    }

    #[test]
    fn flags_override_settings() {
        let cli = LuCli::try_parse_from([
            "ludecomp", "file", "a.txt", "--out", "r.json", "--format", "json", "--console-limit", "2", "--verify", "-dd",
        ])
        .unwrap();
        assert_eq!(cli.debug, 2);
        let s = cli.apply_overrides(Settings::default());
        assert_eq!(s.output, PathBuf::from("r.json"));
        assert_eq!(s.format, ReportFormat::Json);
        assert_eq!(s.console_limit, 2);
        assert_eq!(s.precision, 4);
        assert!(s.verify);
    }
}
