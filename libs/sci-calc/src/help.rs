//! Static description of the engine surface

/// Text returned by [`CalcEngine::show_help`](crate::CalcEngine::show_help)
pub const HELP_TEXT: &str = "\
Scientific calculator - immediate execution, no operator precedence

Entry:
  0-9          enter a digit (a leading 0 is replaced)
  .            decimal point (at most one per number)

Operators (applied left to right: 3 + 4 × 2 = 14):
  +  -  ×  ÷  ^     (ASCII: * or x for ×, / for ÷, ** for ^)
  =            compute the pending operation

Functions (act on the displayed value):
  sqrt  cbrt   square root, signed cube root
  sin  cos  tan   trigonometry in the current angle mode

Other:
  mode         toggle angle mode (DEG <-> RAD)
  c, clear     reset to 0 with nothing pending
  help         show this text

Errors:
  division by a value within 1e-10 of zero clears the calculator;
  invalid operands, sqrt of a negative number and tan at 90° + k·180°
  are rejected and leave the state unchanged.
";
