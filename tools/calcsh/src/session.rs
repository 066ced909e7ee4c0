//! Line execution shared by the REPL and `calcsh run`

use colored::*;
use sci_calc::{parse_keys, CalcEngine, CalcError, EventSink, Key};

/// What the shell should do after a line
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    /// Keys were applied; `help` is set when the help key was pressed
    Applied { help: bool },
    /// Nothing to do (blank line)
    Empty,
    Quit,
}

/// Feed one line of input to the engine
///
/// Keys run in order and stop at the first failing one; keys before it stay
/// applied, the same as pressing them one by one.
pub fn execute_line<S: EventSink>(
    engine: &mut CalcEngine<S>,
    line: &str,
) -> Result<LineOutcome, CalcError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(LineOutcome::Empty);
    }
    if matches!(line.to_ascii_lowercase().as_str(), "quit" | "exit" | "q") {
        return Ok(LineOutcome::Quit);
    }

    let keys = parse_keys(line)?;
    let help = keys.contains(&Key::Help);
    engine.press_all(keys)?;

    Ok(LineOutcome::Applied { help })
}

/// Render the engine status for the terminal
///
/// Text form shows the pending operation (if any) before the display:
/// `7 × │ 2`. JSON form is one status object per line.
pub fn render_status<S: EventSink>(engine: &CalcEngine<S>, json: bool) -> String {
    let status = engine.status();
    if json {
        return serde_json::to_string(&status)
            .unwrap_or_else(|e| format!("{{\"error\":\"{e}\"}}"));
    }

    let display = status.display.bright_white().bold();
    match status.pending {
        Some(p) => format!(
            "{} {} {} {}",
            sci_calc::format_number(p.accumulator).dimmed(),
            p.operator.to_string().bright_yellow(),
            "│".dimmed(),
            display
        ),
        None => format!("{} {}", "=".dimmed(), display),
    }
}

/// Prompt reflecting the angle mode and the pending operation
///
/// `calc[DEG]> ` when idle, `calc[DEG 7 ×]> ` while an operator is armed.
pub fn prompt<S: EventSink>(engine: &CalcEngine<S>) -> String {
    let state = engine.state();
    match state.pending() {
        Some(p) => format!(
            "calc[{} {} {}]> ",
            state.angle_mode(),
            sci_calc::format_number(p.accumulator),
            p.operator
        ),
        None => format!("calc[{}]> ", state.angle_mode()),
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)]
mod tests {
    use super::*;
    use sci_calc::{AngleMode, NullSink, Operator};
    use std::sync::Arc;

    fn create_engine() -> CalcEngine<NullSink> {
        CalcEngine::with_sink(Arc::new(NullSink))
    }

    #[test]
    fn test_lines_accumulate_state() {
        let mut engine = create_engine();
        assert_eq!(
            execute_line(&mut engine, "3 +").unwrap(),
            LineOutcome::Applied { help: false }
        );
        execute_line(&mut engine, "4 × 2").unwrap();
        assert_eq!(engine.state().pending_operator(), Some(Operator::Mul));
        execute_line(&mut engine, "=").unwrap();
        assert_eq!(engine.display(), "14");
    }

    #[test]
    fn test_quit_and_blank() {
        let mut engine = create_engine();
        assert_eq!(execute_line(&mut engine, "  ").unwrap(), LineOutcome::Empty);
        assert_eq!(execute_line(&mut engine, "quit").unwrap(), LineOutcome::Quit);
        assert_eq!(execute_line(&mut engine, "EXIT").unwrap(), LineOutcome::Quit);
    }

    #[test]
    fn test_help_flag() {
        let mut engine = create_engine();
        assert_eq!(
            execute_line(&mut engine, "help").unwrap(),
            LineOutcome::Applied { help: true }
        );
        assert_eq!(engine.display(), "0");
    }

    #[test]
    fn test_parse_error_applies_nothing() {
        let mut engine = create_engine();
        let err = execute_line(&mut engine, "5 + log").unwrap_err();
        assert_eq!(err, CalcError::unknown_key("log"));
        assert_eq!(engine.display(), "0");
    }

    #[test]
    fn test_engine_error_keeps_earlier_keys() {
        let mut engine = create_engine();
        let err = execute_line(&mut engine, "0 - 9 = sqrt 1").unwrap_err();
        assert_eq!(err, CalcError::NegativeRadicand(-9.0));
        assert_eq!(engine.display(), "-9");
    }

    #[test]
    fn test_prompt_tracks_mode() {
        let mut engine = create_engine();
        assert_eq!(prompt(&engine), "calc[DEG]> ");
        execute_line(&mut engine, "mode").unwrap();
        assert_eq!(engine.state().angle_mode(), AngleMode::Radians);
        assert_eq!(prompt(&engine), "calc[RAD]> ");
    }

    #[test]
    fn test_prompt_shows_pending_operation() {
        let mut engine = create_engine();
        execute_line(&mut engine, "1.5 ^").unwrap();
        assert_eq!(prompt(&engine), "calc[DEG 1.5 ^]> ");
        execute_line(&mut engine, "2 =").unwrap();
        assert_eq!(prompt(&engine), "calc[DEG]> ");
    }

    #[test]
    fn test_render_json() {
        let mut engine = create_engine();
        execute_line(&mut engine, "7 ×").unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&render_status(&engine, true)).unwrap();
        assert_eq!(json["display"], "7");
        assert_eq!(json["pending"]["operator"], "×");
        assert_eq!(json["angle_mode"], "degrees");
    }

    #[test]
    fn test_render_text() {
        colored::control::set_override(false);
        let mut engine = create_engine();
        execute_line(&mut engine, "7 × 2").unwrap();
        assert_eq!(render_status(&engine, false), "7 × │ 2");
        execute_line(&mut engine, "=").unwrap();
        assert_eq!(render_status(&engine, false), "= 14");
    }
}
