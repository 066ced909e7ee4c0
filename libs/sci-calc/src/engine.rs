//! CalcEngine - immediate-execution calculator state machine
//!
//! Operations mutate a single [`CalculatorState`]:
//! - Entry: digits and a decimal point build the display text
//! - Operators: capture the display as accumulator, resolving any pending
//!   operation first (strict left-to-right, no precedence)
//! - Functions: sqrt, cbrt, sin, cos, tan replace the display in place
//!
//! Every operation returns `Result<()>`. A failure leaves the state unchanged,
//! except division by zero, which clears it. When that happens while chaining
//! into a new operator, the cleared display `0` still becomes the left operand.
//! Outcomes are also reported to the engine's [`EventSink`].

use crate::angle::AngleMode;
use crate::error::{CalcError, Result};
use crate::events::{EngineEvent, EventSink, StatusReport, TracingSink};
use crate::function::ScientificFn;
use crate::help::HELP_TEXT;
use crate::keypad::Key;
use crate::numfmt::{format_number, parse_operand};
use crate::operator::Operator;
use crate::state::CalculatorState;
use std::sync::Arc;
use tracing::debug;

/// Engine construction options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineOptions {
    /// Angle mode at construction and after `clear`
    pub angle_mode: AngleMode,
    /// Maximum digits in a typed entry; `None` means unbounded
    pub max_entry_digits: Option<usize>,
}

/// CalcEngine - one calculator session
///
/// # Example
/// ```
/// use sci_calc::{CalcEngine, Operator};
///
/// let mut engine = CalcEngine::new();
/// engine.enter_digit(3)?;
/// engine.set_operator(Operator::Add)?;
/// engine.enter_digit(4)?;
/// engine.set_operator(Operator::Mul)?;
/// engine.enter_digit(2)?;
/// engine.compute_result()?;
/// assert_eq!(engine.display(), "14");
/// # Ok::<(), sci_calc::CalcError>(())
/// ```
pub struct CalcEngine<S: EventSink = TracingSink> {
    state: CalculatorState,
    sink: Arc<S>,
    options: EngineOptions,
}

impl CalcEngine<TracingSink> {
    /// Engine reporting diagnostics through `tracing`
    pub fn new() -> Self {
        Self::with_sink(Arc::new(TracingSink))
    }
}

impl Default for CalcEngine<TracingSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EventSink> CalcEngine<S> {
    pub fn with_sink(sink: Arc<S>) -> Self {
        Self::with_options(sink, EngineOptions::default())
    }

    /// Create engine
    ///
    /// # Arguments
    /// * `sink` - Receiver for diagnostic events
    /// * `options` - Initial angle mode and entry length cap
    pub fn with_options(sink: Arc<S>, options: EngineOptions) -> Self {
        Self {
            state: CalculatorState::new(options.angle_mode),
            sink,
            options,
        }
    }

    /// Current display text
    pub fn display(&self) -> &str {
        self.state.display()
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn status(&self) -> StatusReport {
        StatusReport::from_state(&self.state)
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Static description of the operation surface
    pub fn show_help() -> &'static str {
        HELP_TEXT
    }

    // ========================================================================
    // Entry
    // ========================================================================

    /// Enter a digit 0-9
    pub fn enter_digit(&mut self, digit: u8) -> Result<()> {
        if digit > 9 {
            return self.reject(CalcError::InvalidDigit(digit));
        }

        let accepted = self.state.push_digit(digit, self.options.max_entry_digits);
        if !accepted {
            debug!(digit, "entry length limit reached, digit ignored");
        }
        self.report();
        Ok(())
    }

    /// Enter the decimal point; a second one in the same number is ignored
    pub fn enter_decimal_point(&mut self) -> Result<()> {
        self.state.push_decimal_point();
        self.report();
        Ok(())
    }

    // ========================================================================
    // Binary operations
    // ========================================================================

    /// Select an operator, capturing the display as the left operand
    ///
    /// When an operation is already pending and a new number has been typed
    /// since, it is resolved first: `3 + 4 × 2` computes `(3 + 4) × 2`.
    /// Selecting operators back to back only replaces the pending operator.
    ///
    /// If the chained computation divides by zero the engine is cleared and
    /// the operator is armed against `0`; the error is still returned.
    pub fn set_operator(&mut self, operator: Operator) -> Result<()> {
        let mut chained = Ok(());
        if self.state.pending().is_some() && !self.state.awaiting_new_entry() {
            if let Err(e) = self.compute_result() {
                if !e.resets_state() {
                    return Err(e);
                }
                chained = Err(e);
            }
        }

        let accumulator = match parse_operand(self.state.display()) {
            Ok(value) => value,
            Err(e) => return self.reject(e),
        };

        debug!(accumulator, operator = %operator, "set_operator");
        self.state.arm(accumulator, operator);
        self.report();
        chained
    }

    /// Resolve the pending operation against the display value
    ///
    /// No-op when nothing is pending.
    pub fn compute_result(&mut self) -> Result<()> {
        let Some(pending) = self.state.pending() else {
            debug!("compute_result: nothing pending");
            return Ok(());
        };

        let operand = match parse_operand(self.state.display()) {
            Ok(value) => value,
            Err(e) => return self.reject(e),
        };

        match pending.operator.apply(pending.accumulator, operand) {
            Ok(value) => {
                debug!(
                    lhs = pending.accumulator,
                    operator = %pending.operator,
                    rhs = operand,
                    result = value,
                    "compute_result"
                );
                self.state.show_result(format_number(value));
                self.state.clear_pending();
                self.report();
                Ok(())
            },
            Err(e) => self.reject(e),
        }
    }

    // ========================================================================
    // Scientific functions
    // ========================================================================

    /// Apply a unary function to the display value
    ///
    /// The pending operation, if any, is left untouched.
    pub fn apply_function(&mut self, function: ScientificFn) -> Result<()> {
        let input = match parse_operand(self.state.display()) {
            Ok(value) => value,
            Err(e) => return self.reject(e),
        };

        match function.evaluate(input, self.state.angle_mode()) {
            Ok(value) => {
                if function.is_trigonometric() {
                    debug!(
                        function = %function,
                        input,
                        angle_mode = %self.state.angle_mode(),
                        result = value,
                        "apply_function"
                    );
                } else {
                    debug!(function = %function, input, result = value, "apply_function");
                }
                self.state.show_result(format_number(value));
                self.report();
                Ok(())
            },
            Err(e) => self.reject(e),
        }
    }

    pub fn sqrt(&mut self) -> Result<()> {
        self.apply_function(ScientificFn::Sqrt)
    }

    pub fn cbrt(&mut self) -> Result<()> {
        self.apply_function(ScientificFn::Cbrt)
    }

    pub fn sin(&mut self) -> Result<()> {
        self.apply_function(ScientificFn::Sin)
    }

    pub fn cos(&mut self) -> Result<()> {
        self.apply_function(ScientificFn::Cos)
    }

    pub fn tan(&mut self) -> Result<()> {
        self.apply_function(ScientificFn::Tan)
    }

    // ========================================================================
    // Mode and reset
    // ========================================================================

    /// Flip between degrees and radians, returning the new mode
    pub fn toggle_angle_mode(&mut self) -> AngleMode {
        let angle_mode = self.state.angle_mode().toggled();
        self.state.set_angle_mode(angle_mode);
        self.sink.emit(&EngineEvent::AngleModeChanged { angle_mode });
        self.report();
        angle_mode
    }

    /// Return to the initial configuration
    pub fn clear(&mut self) {
        self.state.reset(self.options.angle_mode);
        self.report();
    }

    /// Dispatch a keypad key
    pub fn press(&mut self, key: Key) -> Result<()> {
        match key {
            Key::Digit(d) => self.enter_digit(d),
            Key::DecimalPoint => self.enter_decimal_point(),
            Key::Operator(op) => self.set_operator(op),
            Key::Equals => self.compute_result(),
            Key::Function(f) => self.apply_function(f),
            Key::ToggleAngle => {
                self.toggle_angle_mode();
                Ok(())
            },
            Key::Clear => {
                self.clear();
                Ok(())
            },
            // Help is static text; the caller renders `show_help()`
            Key::Help => Ok(()),
        }
    }

    /// Press keys in order, stopping at the first failure
    pub fn press_all(&mut self, keys: impl IntoIterator<Item = Key>) -> Result<()> {
        for key in keys {
            self.press(key)?;
        }
        Ok(())
    }

    fn report(&self) {
        self.sink.emit(&EngineEvent::Status(self.status()));
    }

    fn reject(&mut self, error: CalcError) -> Result<()> {
        if error.resets_state() {
            self.state.reset(self.options.angle_mode);
        }
        self.sink.emit(&EngineEvent::rejected(&error));
        Err(error)
    }
}
