//! sci-calc - Stateful scientific calculator engine
//!
//! Accepts keypad input incrementally and keeps one pending operation, the
//! way a pocket calculator does.
//!
//! # Features
//!
//! - **Immediate execution**: `3 + 4 × 2 =` evaluates left to right to `14`
//! - **Scientific functions**: `sqrt`, `cbrt`, `sin`, `cos`, `tan`
//! - **Angle modes**: degrees (default) or radians for trigonometry
//! - **Diagnostics**: every operation reports to a pluggable [`EventSink`]
//!
//! # Example
//!
//! ```rust
//! use sci_calc::{parse_keys, CalcEngine, CalcError, MemorySink};
//! use std::sync::Arc;
//!
//! let sink = Arc::new(MemorySink::new());
//! let mut engine = CalcEngine::with_sink(Arc::clone(&sink));
//!
//! engine.press_all(parse_keys("1 ÷ 3 =")?)?;
//! assert_eq!(engine.display(), "0.33333333");
//!
//! // Division by zero clears the calculator
//! engine.press_all(parse_keys("5 ÷ 0")?)?;
//! assert_eq!(engine.compute_result(), Err(CalcError::DivisionByZero));
//! assert_eq!(engine.display(), "0");
//! assert!(!sink.is_empty());
//! # Ok::<(), CalcError>(())
//! ```
//!
//! # Errors
//!
//! | Error | Cause | State afterwards |
//! |-------|-------|------------------|
//! | `InvalidOperand` | display is not a finite number | unchanged |
//! | `DivisionByZero` | divisor within `1e-10` of zero | cleared |
//! | `NegativeRadicand` | `sqrt` of a negative number | unchanged |
//! | `UndefinedTangent` | `tan` where cosine is within `1e-10` of zero | unchanged |

pub mod angle;
pub mod engine;
pub mod error;
pub mod events;
pub mod function;
pub mod help;
pub mod keypad;
pub mod numfmt;
pub mod operator;
pub mod state;

/// Tolerance for the division-by-zero and tangent-asymptote guards
pub const EPSILON: f64 = 1e-10;

// Re-exports for convenience
pub use angle::AngleMode;
pub use engine::{CalcEngine, EngineOptions};
pub use error::{CalcError, Result};
pub use events::{EngineEvent, EventSink, MemorySink, NullSink, StatusReport, TracingSink};
pub use function::ScientificFn;
pub use keypad::{parse_keys, Key};
pub use numfmt::{format_number, parse_operand};
pub use operator::Operator;
pub use state::{CalculatorState, PendingOperation};
