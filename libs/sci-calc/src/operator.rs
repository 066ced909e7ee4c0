//! Binary operators and their display symbols
//!
//! Symbols are the boundary representation only: the engine stores and
//! switches on [`Operator`], never on strings.

use crate::error::{CalcError, Result};
use crate::EPSILON;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Pending binary operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Sub,
    #[serde(rename = "×")]
    Mul,
    #[serde(rename = "÷")]
    Div,
    #[serde(rename = "^")]
    Pow,
}

impl Operator {
    pub const ALL: [Operator; 5] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
        Operator::Pow,
    ];

    /// Display symbol: `+`, `-`, `×`, `÷`, `^`
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "×",
            Operator::Div => "÷",
            Operator::Pow => "^",
        }
    }

    /// Apply the operator to `(lhs, rhs)`
    ///
    /// Division by a divisor whose magnitude is below `1e-10` fails with
    /// [`CalcError::DivisionByZero`]. Power follows native float semantics
    /// (a negative base with a fractional exponent yields NaN).
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64> {
        match self {
            Operator::Add => Ok(lhs + rhs),
            Operator::Sub => Ok(lhs - rhs),
            Operator::Mul => Ok(lhs * rhs),
            Operator::Div => {
                if rhs.abs() < EPSILON {
                    Err(CalcError::DivisionByZero)
                } else {
                    Ok(lhs / rhs)
                }
            },
            Operator::Pow => Ok(lhs.powf(rhs)),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    /// Accepts the display symbols plus the ASCII spellings `*`, `x`, `/`, `**`
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Sub),
            "×" | "*" | "x" | "X" => Ok(Operator::Mul),
            "÷" | "/" => Ok(Operator::Div),
            "^" | "**" => Ok(Operator::Pow),
            _ => Err(CalcError::unknown_key(s)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_round_trip() {
        for op in Operator::ALL {
            assert_eq!(op.symbol().parse::<Operator>().unwrap(), op);
            assert_eq!(op.to_string(), op.symbol());
        }
    }

    #[test]
    fn test_ascii_aliases() {
        assert_eq!("*".parse::<Operator>().unwrap(), Operator::Mul);
        assert_eq!("x".parse::<Operator>().unwrap(), Operator::Mul);
        assert_eq!("/".parse::<Operator>().unwrap(), Operator::Div);
        assert_eq!("**".parse::<Operator>().unwrap(), Operator::Pow);
        assert!("%".parse::<Operator>().is_err());
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(Operator::Add.apply(3.0, 4.0).unwrap(), 7.0);
        assert_eq!(Operator::Sub.apply(3.0, 7.0).unwrap(), -4.0);
        assert_eq!(Operator::Mul.apply(7.0, 2.0).unwrap(), 14.0);
        assert_eq!(Operator::Div.apply(9.0, 4.0).unwrap(), 2.25);
        assert_eq!(Operator::Pow.apply(2.0, 10.0).unwrap(), 1024.0);
        assert_eq!(Operator::Pow.apply(4.0, -0.5).unwrap(), 0.5);
    }

    #[test]
    fn test_division_guard() {
        assert_eq!(
            Operator::Div.apply(5.0, 0.0),
            Err(CalcError::DivisionByZero)
        );
        assert_eq!(
            Operator::Div.apply(5.0, 1e-11),
            Err(CalcError::DivisionByZero)
        );
        assert_eq!(Operator::Div.apply(1.0, 1e-9).unwrap(), 1e9);
    }

    #[test]
    fn test_pow_negative_base_fraction_is_nan() {
        assert!(Operator::Pow.apply(-8.0, 1.0 / 3.0).unwrap().is_nan());
    }

    #[test]
    fn test_serde_uses_symbols() {
        assert_eq!(serde_json::to_string(&Operator::Mul).unwrap(), "\"×\"");
        let op: Operator = serde_json::from_str("\"^\"").unwrap();
        assert_eq!(op, Operator::Pow);
    }
}
