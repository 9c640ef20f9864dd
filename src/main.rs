use std::{path::PathBuf, process::ExitCode};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use relver::{BumpKind, Outcome, Release, VersionFile};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum, Debug)]
enum ModeArg {
    Patch,
    Minor,
    Major,
}

impl ModeArg {
    fn to_bump_kind(self) -> BumpKind {
        match self {
            ModeArg::Patch => BumpKind::Patch,
            ModeArg::Minor => BumpKind::Minor,
            ModeArg::Major => BumpKind::Major,
        }
    }
}

/// Bumps the semantic version stored in a version file.
///
/// Without `--execute`, the next version is only printed. If the version file does not exist, it
/// is created holding `0.0.1` and no bump is applied.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The version level to increment. Lesser levels are reset to zero.
    #[arg(value_enum)]
    mode: ModeArg,

    /// Write the next version back to the version file.
    #[arg(long)]
    execute: bool,

    /// The single-line file holding the version.
    #[arg(short, long, env = "RELVER_FILE", default_value = "version")]
    file: PathBuf,
}

const DRY_RUN_NOTICE: &str =
    "[*] no changes were saved under the dry mode. Please add '--execute' args to confirm changes.";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // clap prints the usage message itself and exits with its usage error code
    let cli = Cli::parse();

    match do_work(&cli) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("[*] Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn do_work(cli: &Cli) -> Result<Vec<String>> {
    let release =
        Release::new(VersionFile::new(&cli.file), cli.mode.to_bump_kind()).execute(cli.execute);
    Ok(render(&release.run()?, cli.execute))
}

fn render(outcome: &Outcome, execute: bool) -> Vec<String> {
    let (mut lines, saved) = match outcome {
        // the bootstrap always writes, but only an executing run counts as confirmed
        Outcome::Bootstrapped { .. } => (vec!["[*] Create new version file".to_owned()], execute),
        Outcome::Bumped {
            current,
            next,
            saved,
        } => (
            vec![
                current.to_string(),
                format!("[-] Update version {current} -> {next}"),
            ],
            *saved,
        ),
    };
    if !saved {
        lines.push(DRY_RUN_NOTICE.to_owned());
    }
    lines
}
