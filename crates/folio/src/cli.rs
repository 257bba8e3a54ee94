//! Command-line interface.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{ArgAction, Args, Parser, Subcommand};
use console::style;

use crate::config::{FolioConfig, ModePreference};
use crate::section::SectionId;
use crate::site;

/// Render a single-page portfolio to static HTML.
#[derive(Debug, Parser)]
#[command(name = "folio", version, about)]
pub struct Cli {
    /// Config file [default: ./folio.yaml when present]
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the page HTML to stdout
    Render(RenderArgs),

    /// Write index.html and assets to an output directory
    Build(BuildArgs),

    /// List the configured projects
    Projects,
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Color scheme [default: from config, else the environment]
    #[arg(long, value_enum)]
    pub mode: Option<ModePreference>,

    /// Scroll to this section before rendering
    #[arg(long, value_name = "SECTION")]
    pub active: Option<SectionId>,
}

#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Output directory [default: from config, else ./dist]
    #[arg(short, long, value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Color scheme [default: from config, else the environment]
    #[arg(long, value_enum)]
    pub mode: Option<ModePreference>,
}

/// Runs `cli` relative to `cwd`, writing command output to `out`.
pub fn run(cli: &Cli, cwd: &Path, out: &mut dyn Write) -> anyhow::Result<()> {
    let explicit = cli.config.as_ref().map(|path| cwd.join(path));
    let config = FolioConfig::load_or_default(explicit.as_deref(), cwd)
        .context("failed to load configuration")?;

    match &cli.command {
        Command::Render(args) => {
            let mode = args.mode.unwrap_or(config.mode);
            let html = site::render_page(&config, mode, args.active).context("failed to render page")?;
            out.write_all(html.as_bytes())?;
        }
        Command::Build(args) => {
            let mode = args.mode.unwrap_or(config.mode);
            let out_dir = match &args.out {
                Some(dir) => cwd.join(dir),
                None => cwd.join(&config.output),
            };
            let report = site::build_site(&config, mode, &out_dir)
                .with_context(|| format!("failed to build site into {}", out_dir.display()))?;
            writeln!(
                out,
                "{} {} ({} assets)",
                style("wrote").green().bold(),
                report.index.display(),
                report.assets_copied
            )?;
        }
        Command::Projects => {
            for (index, project) in config.site_content().projects.iter().enumerate() {
                writeln!(out, "{}. {}", index + 1, style(&project.title).bold())?;
                writeln!(out, "   {}", style(&project.link).cyan())?;
                writeln!(out, "   {}", style(&project.description).dim())?;
            }
        }
    }
    Ok(())
}
