mod cli;
mod days;
mod error;
mod grid;

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::error::{Error, Result};

fn run(cli: &Cli) -> Result<()> {
    let solve = days::solver(cli.day).ok_or(Error::Unsolved(cli.day))?;
    let path = cli.input_path();
    debug!(path = %path.display(), "reading input");
    let input = std::fs::read_to_string(&path).map_err(|err| Error::from_io(path, err))?;

    for part in cli.parts() {
        let time = Instant::now();
        let answer = solve(part, &input);
        if cli.part.is_some() {
            println!("{}", answer);
        } else {
            println!("part {}: {}", part, answer);
        }
        info!(day = cli.day, part, "{} seconds elapsed", time.elapsed().as_secs_f32());
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
