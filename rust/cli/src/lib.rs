pub mod config;
pub mod logging;
pub mod ui;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use nines_engine::errors::SelectionError;
use nines_engine::finger::FingerNumber;
use nines_engine::trainer::Trainer;
use std::io::{self, BufRead, Write};

use crate::config::Config;

pub const EXIT_OK: i32 = 0;
pub const EXIT_CONFIG: i32 = 1;
pub const EXIT_USAGE: i32 = 2;

/// Runs the CLI with provided args and no interactive input.
/// Returns the intended process exit code.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut empty = io::empty();
    run_with_input(args, &mut empty, out, err)
}

/// Like [`run`], reading `play` commands from `input`.
pub fn run_with_input<I, S>(
    args: I,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
    let cli = match NinesCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = write!(out, "{}", e);
            return EXIT_OK;
        }
        Err(e) => {
            let _ = write!(err, "{}", e);
            return EXIT_USAGE;
        }
    };

    let cfg = match config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            return EXIT_CONFIG;
        }
    };
    logging::init(&cfg);

    let outcome = match cli.cmd {
        Commands::Show { finger, json } => show(&cfg, &finger, json, out),
        Commands::Table => writeln!(out, "{}", ui::render_table()).map_err(Into::into),
        Commands::Hands { select } => hands(select.as_deref(), out),
        Commands::Play => play(&cfg, input, out, err),
        Commands::Cfg => print_config(&cfg, out),
    };

    match outcome {
        Ok(()) => EXIT_OK,
        Err(CliError::Selection(e)) => {
            let _ = ui::write_error(err, &e.to_string());
            EXIT_USAGE
        }
        Err(CliError::Io(e)) => {
            let _ = ui::write_error(err, &e.to_string());
            EXIT_CONFIG
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Selection(#[from] SelectionError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

fn show(cfg: &Config, finger: &str, json: bool, out: &mut dyn Write) -> Result<(), CliError> {
    let number: FingerNumber = finger.parse()?;
    let mut trainer = Trainer::new();
    let outcome = trainer.on_select(number.get().into())?;
    if json {
        let body = serde_json::to_string_pretty(&outcome).map_err(io::Error::from)?;
        writeln!(out, "{}", body)?;
        return Ok(());
    }
    writeln!(out, "{}", ui::render_outcome(&outcome, cfg.explain))?;
    if cfg.hands {
        writeln!(out, "\n{}", ui::render_hands(trainer.selection().fingers()))?;
    }
    Ok(())
}

fn hands(select: Option<&str>, out: &mut dyn Write) -> Result<(), CliError> {
    let mut trainer = Trainer::new();
    if let Some(raw) = select {
        let number: FingerNumber = raw.parse()?;
        trainer.on_select(number.get().into())?;
    }
    writeln!(out, "{}", ui::render_hands(trainer.selection().fingers()))?;
    Ok(())
}

fn play(
    cfg: &Config,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let mut trainer = Trainer::new();
    writeln!(out, "{}", ui::PROMPT_MESSAGE)?;
    if cfg.hands {
        writeln!(out, "{}", ui::render_hands(trainer.selection().fingers()))?;
    }

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        // undecodable bytes become U+FFFD and fail to parse as a finger
        let line = String::from_utf8_lossy(&buf);
        let cmd = line.trim();
        match cmd.to_ascii_lowercase().as_str() {
            "" => continue,
            "q" | "quit" | "exit" => break,
            "c" | "clear" => {
                if trainer.on_deselect() {
                    writeln!(out, "{}", ui::PROMPT_MESSAGE)?;
                    if cfg.hands {
                        writeln!(out, "{}", ui::render_hands(trainer.selection().fingers()))?;
                    }
                }
            }
            _ => {
                let selected = cmd
                    .parse::<FingerNumber>()
                    .and_then(|n| trainer.on_select(n.get().into()));
                match selected {
                    Ok(outcome) => {
                        writeln!(out, "{}", ui::render_outcome(&outcome, cfg.explain))?;
                        if cfg.hands {
                            writeln!(out, "{}", ui::render_hands(trainer.selection().fingers()))?;
                        }
                    }
                    Err(e) => {
                        tracing::debug!(input = cmd, error = %e, "ignoring selection");
                        writeln!(err, "{}", ui::RETRY_MESSAGE)?;
                    }
                }
            }
        }
    }
    Ok(())
}

fn print_config(cfg: &Config, out: &mut dyn Write) -> Result<(), CliError> {
    let body = serde_json::to_string_pretty(cfg).map_err(io::Error::from)?;
    writeln!(out, "{}", body)?;
    Ok(())
}

#[derive(Parser, Debug)]
#[command(
    name = "nines",
    version,
    about = "Learn the 9's multiplication finger trick"
)]
struct NinesCli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fold one finger and show 9 × N
    Show {
        #[arg(allow_hyphen_values = true)]
        finger: String,
        #[arg(long)]
        json: bool,
    },
    /// Print the 9's table
    Table,
    /// Draw both hands
    Hands {
        #[arg(long, allow_hyphen_values = true)]
        select: Option<String>,
    },
    /// Pick fingers interactively from stdin
    Play,
    /// Print the effective configuration
    Cfg,
}
