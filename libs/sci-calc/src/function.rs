//! Unary scientific functions applied to the display value

use crate::angle::AngleMode;
use crate::error::{CalcError, Result};
use crate::EPSILON;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScientificFn {
    Sqrt,
    Cbrt,
    Sin,
    Cos,
    Tan,
}

impl ScientificFn {
    pub const ALL: [ScientificFn; 5] = [
        ScientificFn::Sqrt,
        ScientificFn::Cbrt,
        ScientificFn::Sin,
        ScientificFn::Cos,
        ScientificFn::Tan,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ScientificFn::Sqrt => "sqrt",
            ScientificFn::Cbrt => "cbrt",
            ScientificFn::Sin => "sin",
            ScientificFn::Cos => "cos",
            ScientificFn::Tan => "tan",
        }
    }

    /// Whether the input is interpreted through the angle mode
    pub fn is_trigonometric(self) -> bool {
        matches!(self, ScientificFn::Sin | ScientificFn::Cos | ScientificFn::Tan)
    }

    /// Evaluate the function
    ///
    /// - `sqrt` rejects negative input with [`CalcError::NegativeRadicand`]
    /// - `tan` rejects angles whose cosine is within `1e-10` of zero with
    ///   [`CalcError::UndefinedTangent`]
    pub fn evaluate(self, value: f64, angle_mode: AngleMode) -> Result<f64> {
        match self {
            ScientificFn::Sqrt => {
                if value < 0.0 {
                    Err(CalcError::NegativeRadicand(value))
                } else {
                    Ok(value.sqrt())
                }
            },
            ScientificFn::Cbrt => Ok(value.cbrt()),
            ScientificFn::Sin => Ok(angle_mode.to_radians(value).sin()),
            ScientificFn::Cos => Ok(angle_mode.to_radians(value).cos()),
            ScientificFn::Tan => {
                let radians = angle_mode.to_radians(value);
                if radians.cos().abs() < EPSILON {
                    Err(CalcError::UndefinedTangent(value))
                } else {
                    Ok(radians.tan())
                }
            },
        }
    }
}

impl fmt::Display for ScientificFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScientificFn {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "sqrt" | "√" => Ok(ScientificFn::Sqrt),
            "cbrt" | "∛" => Ok(ScientificFn::Cbrt),
            "sin" => Ok(ScientificFn::Sin),
            "cos" => Ok(ScientificFn::Cos),
            "tan" => Ok(ScientificFn::Tan),
            _ => Err(CalcError::unknown_key(s)),
        }
    }
}
