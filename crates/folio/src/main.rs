use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use console::style;

use folio::cli::{self, Cli};
use folio::logging;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", style("error:").red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    logging::init(cli.verbose)?;
    let cwd = std::env::current_dir().context("failed to read the working directory")?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    cli::run(cli, &cwd, &mut out)
}
