//! Interactive REPL

use crate::session::{execute_line, prompt, render_status, LineOutcome};
use anyhow::{Context, Result};
use colored::*;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Editor, Helper};
use sci_calc::keypad::KEY_WORDS;
use sci_calc::{CalcEngine, EventSink};

// ============================================================================
// Tab Completion Helper
// ============================================================================

/// REPL helper completing keypad words
struct CalcHelper;

impl Helper for CalcHelper {}

impl Hinter for CalcHelper {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &rustyline::Context<'_>) -> Option<String> {
        None
    }
}

impl Highlighter for CalcHelper {}

impl Validator for CalcHelper {}

impl Completer for CalcHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(complete_word(&line[..pos]))
    }
}

/// Complete the alphabetic word ending at the cursor
fn complete_word(line: &str) -> (usize, Vec<Pair>) {
    let start = line
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_alphabetic())
        .last()
        .map(|(idx, _)| idx)
        .unwrap_or(line.len());
    let prefix = line[start..].to_ascii_lowercase();

    let matches = KEY_WORDS
        .iter()
        .chain(["quit", "exit"].iter())
        .filter(|word| word.starts_with(&prefix))
        .map(|word| Pair {
            display: (*word).to_string(),
            replacement: (*word).to_string(),
        })
        .collect();

    (start, matches)
}

/// Interactive REPL loop
pub fn run_repl<S: EventSink>(engine: &mut CalcEngine<S>, json: bool) -> Result<()> {
    let config = rustyline::Config::builder()
        .completion_type(rustyline::CompletionType::List)
        .build();
    let mut rl = Editor::with_config(config).context("Failed to initialize readline")?;
    rl.set_helper(Some(CalcHelper));

    println!("{}", "Scientific Calculator".bright_cyan().bold());
    println!(
        "Type '{}' for keys, {} for completion, '{}' to leave\n",
        "help".bright_yellow(),
        "Tab".bright_cyan(),
        "quit".bright_yellow()
    );
    println!("{}", CalcEngine::<S>::show_help());
    println!("{}", render_status(engine, json));

    loop {
        match rl.readline(&prompt(engine)) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    // Add to history (ignore errors)
                    let _ = rl.add_history_entry(line.as_str());
                }

                match execute_line(engine, &line) {
                    Ok(LineOutcome::Quit) => break,
                    Ok(LineOutcome::Empty) => continue,
                    Ok(LineOutcome::Applied { help }) => {
                        if help {
                            println!("{}", CalcEngine::<S>::show_help());
                        }
                        println!("{}", render_status(engine, json));
                    },
                    Err(e) => {
                        eprintln!("{} {}", "Error:".red(), e);
                        println!("{}", render_status(engine, json));
                    },
                }
            },
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C - ignore and continue
                println!("^C");
                continue;
            },
            Err(ReadlineError::Eof) => {
                // Ctrl+D - exit
                break;
            },
            Err(e) => {
                eprintln!("{} {}", "Readline error:".red(), e);
                break;
            },
        }
    }

    println!("Bye!");
    Ok(())
}
