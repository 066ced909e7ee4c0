//! Error types for sci-calc

use thiserror::Error;

/// Calculation errors
///
/// All variants are recoverable. Only [`CalcError::DivisionByZero`] clears the
/// engine; every other failure leaves the state exactly as it was.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("Invalid operand: {0:?} is not a finite number")]
    InvalidOperand(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Square root of negative number: {0}")]
    NegativeRadicand(f64),

    #[error("Tangent undefined at {0}")]
    UndefinedTangent(f64),

    #[error("Invalid digit: {0} (expected 0-9)")]
    InvalidDigit(u8),

    #[error("Unknown key: {0}")]
    UnknownKey(String),
}

impl CalcError {
    pub fn invalid_operand(text: impl Into<String>) -> Self {
        Self::InvalidOperand(text.into())
    }

    pub fn unknown_key(key: impl Into<String>) -> Self {
        Self::UnknownKey(key.into())
    }

    /// Whether the engine returns to its initial configuration on this error
    pub fn resets_state(&self) -> bool {
        matches!(self, Self::DivisionByZero)
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_division_by_zero_resets() {
        assert!(CalcError::DivisionByZero.resets_state());
        assert!(!CalcError::invalid_operand("NaN").resets_state());
        assert!(!CalcError::NegativeRadicand(-4.0).resets_state());
        assert!(!CalcError::UndefinedTangent(90.0).resets_state());
        assert!(!CalcError::InvalidDigit(12).resets_state());
        assert!(!CalcError::unknown_key("log").resets_state());
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            CalcError::NegativeRadicand(-4.0).to_string(),
            "Square root of negative number: -4"
        );
        assert_eq!(
            CalcError::invalid_operand("Infinity").to_string(),
            "Invalid operand: \"Infinity\" is not a finite number"
        );
    }
}
