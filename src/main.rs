//! ludecomp main: subcommands, interactive menu by default.
use std::io::{self, Write};

use anyhow::Context;
use clap::Parser; // trait import enables LuCli::parse()
use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use ludecomp::cli::{Command, LuCli};
use ludecomp::commands;
use ludecomp::config::Settings;
use ludecomp::io::input::{load_matrix, prompt_size, random_matrix, read_matrix_manual, RandomRange};

fn main() {
    let args = LuCli::parse();
    ludecomp::logging::init(args.debug);

    if let Err(e) = run(args) {
        let _ = io::stdout().flush();
        eprintln!("{} {e:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run(args: LuCli) -> anyhow::Result<()> {
    let settings = args.apply_overrides(Settings::load(&args.config)?);
    debug!(?settings, "effective settings");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let matrix = match args.cmd {
        // No subcommand: the interactive menu reports its own decomposition errors.
        None => {
            return commands::menu::run(&mut input, &mut out, &settings, &mut rand::thread_rng());
        }
        Some(Command::Manual) => {
            let n = prompt_size(&mut input, &mut out, "Square matrix size: ")?;
            read_matrix_manual(&mut input, &mut out, n)?
        }
        Some(Command::Random { size, min, max, seed }) => {
            let n = usize::try_from(size).context("matrix size does not fit in memory")?;
            let range = RandomRange::new(
                min.unwrap_or(settings.random.min()),
                max.unwrap_or(settings.random.max()),
            )?;
            let mut rng = match seed {
                Some(s) => StdRng::seed_from_u64(s),
                None => StdRng::from_entropy(),
            };
            random_matrix(n, range, &mut rng)
        }
        Some(Command::File { path }) => load_matrix(&path)?,
    };

    commands::decompose::run(&matrix, &settings, &mut out)?;
    Ok(())
}
