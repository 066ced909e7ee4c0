//! Calculator state owned by the engine
//!
//! The accumulator and the pending operator live together in
//! [`PendingOperation`], so one can never be set without the other.

use crate::angle::AngleMode;
use crate::operator::Operator;
use serde::{Deserialize, Serialize};

/// Left operand captured when an operator was selected
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PendingOperation {
    pub accumulator: f64,
    pub operator: Operator,
}

/// Complete engine state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculatorState {
    /// Current entry or last result, always a decimal numeral with at most one `.`
    display: String,
    pending: Option<PendingOperation>,
    /// Next digit starts a fresh number instead of extending the display
    awaiting_new_entry: bool,
    angle_mode: AngleMode,
}

impl CalculatorState {
    /// Initial configuration: display `0`, nothing pending
    pub fn new(angle_mode: AngleMode) -> Self {
        Self {
            display: "0".to_string(),
            pending: None,
            awaiting_new_entry: false,
            angle_mode,
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn pending(&self) -> Option<PendingOperation> {
        self.pending
    }

    pub fn accumulator(&self) -> Option<f64> {
        self.pending.map(|p| p.accumulator)
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending.map(|p| p.operator)
    }

    pub fn awaiting_new_entry(&self) -> bool {
        self.awaiting_new_entry
    }

    pub fn angle_mode(&self) -> AngleMode {
        self.angle_mode
    }

    /// Number of digits in the current entry
    pub fn entry_digits(&self) -> usize {
        self.display.bytes().filter(u8::is_ascii_digit).count()
    }

    pub(crate) fn reset(&mut self, angle_mode: AngleMode) {
        *self = Self::new(angle_mode);
    }

    /// Append a digit to the entry, or start a new entry with it
    ///
    /// `max_digits` caps the length of an entry being extended; returns false
    /// when the digit was dropped by the cap.
    pub(crate) fn push_digit(&mut self, digit: u8, max_digits: Option<usize>) -> bool {
        let ch = char::from(b'0' + digit);

        if self.awaiting_new_entry {
            self.display = ch.to_string();
            self.awaiting_new_entry = false;
            return true;
        }

        if self.display == "0" {
            self.display = ch.to_string();
            return true;
        }

        if max_digits.is_some_and(|max| self.entry_digits() >= max) {
            return false;
        }

        self.display.push(ch);
        true
    }

    /// Start `0.` on a fresh entry, otherwise add a single `.`
    pub(crate) fn push_decimal_point(&mut self) {
        if self.awaiting_new_entry {
            self.display = "0.".to_string();
            self.awaiting_new_entry = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    /// Store a computed result; the next digit starts a new entry
    pub(crate) fn show_result(&mut self, text: String) {
        self.display = text;
        self.awaiting_new_entry = true;
    }

    pub(crate) fn arm(&mut self, accumulator: f64, operator: Operator) {
        self.pending = Some(PendingOperation {
            accumulator,
            operator,
        });
        self.awaiting_new_entry = true;
    }

    pub(crate) fn clear_pending(&mut self) {
        self.pending = None;
    }

    pub(crate) fn set_angle_mode(&mut self, angle_mode: AngleMode) {
        self.angle_mode = angle_mode;
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new(AngleMode::default())
    }
}
