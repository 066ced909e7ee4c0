//! calcsh - interactive shell for the sci-calc engine
//!
//! Feeds keypad input to a single calculator session, either interactively
//! or from the command line.

mod config;
mod repl;
mod session;

use crate::config::CalcshConfig;
use crate::session::{execute_line, render_status, LineOutcome};
use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sci_calc::{AngleMode, CalcEngine, TracingSink};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

#[derive(Parser)]
#[command(name = "calcsh")]
#[command(about = "Scientific calculator shell - immediate execution, no operator precedence")]
#[command(long_about = "Scientific calculator shell - immediate execution, no operator precedence

Keys:
  0-9 .                   build a number
  + - × ÷ ^  (* x / **)   select an operator, = computes
  sqrt cbrt sin cos tan   apply a function to the display
  mode                    toggle DEG/RAD
  clear                   reset

Examples:
  calcsh                          # interactive session
  calcsh run 3 + 4 × 2 =          # prints 14
  calcsh --angle rad run 1 sin    # prints 0.84147098

Configuration is read from calcsh.toml and CALCSH_* environment variables.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file (default: ./calcsh.toml if present)
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,

    /// Angle mode: deg or rad
    #[arg(long, global = true)]
    angle: Option<AngleMode>,

    /// Maximum digits per typed number
    #[arg(long, global = true)]
    max_digits: Option<usize>,

    /// Enable verbose logging of engine diagnostics
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Print status as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session (default)
    Repl,

    /// Press the given keys and print the final display
    Run {
        /// Keys, e.g. `3 + 4 =` or `30 sin`
        #[arg(required = true, allow_hyphen_values = true)]
        keys: Vec<String>,
    },

    /// Show the key reference
    Keys,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = CalcshConfig::load(cli.config.as_deref())?;
    if let Some(angle) = cli.angle {
        config.angle_mode = angle;
    }
    if let Some(max) = cli.max_digits {
        config.max_entry_digits = Some(max);
    }
    if cli.verbose {
        config.log_level = "debug".to_string();
    }

    // Configure colored output
    if cli.no_color || !config.color {
        colored::control::set_override(false);
    }

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(config.log_level.as_str())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    debug!(?config, "configuration loaded");

    let mut engine = CalcEngine::with_options(Arc::new(TracingSink), config.engine_options());
    debug!(options = ?engine.options(), "engine ready");

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => repl::run_repl(&mut engine, cli.json),
        Commands::Run { keys } => {
            let line = keys.join(" ");
            match execute_line(&mut engine, &line) {
                Ok(LineOutcome::Applied { help: true }) => {
                    println!("{}", CalcEngine::<TracingSink>::show_help());
                },
                Ok(_) => {},
                Err(e) => return Err(anyhow!("{} (display: {})", e, engine.display())),
            }
            if cli.json {
                println!("{}", render_status(&engine, true));
            } else {
                println!("{}", engine.display());
            }
            Ok(())
        },
        Commands::Keys => {
            println!("{}", CalcEngine::<TracingSink>::show_help().trim_end());
            println!(
                "\n{} {} at startup",
                "Angle mode:".bright_cyan(),
                config.angle_mode
            );
            Ok(())
        },
    }
}
