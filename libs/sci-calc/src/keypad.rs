//! Textual keypad: maps typed tokens to engine keys
//!
//! A line such as `12.5 × 2 =` or `30 sin` scans into one key per digit,
//! decimal point, operator symbol, or word.

use crate::error::{CalcError, Result};
use crate::function::ScientificFn;
use crate::operator::Operator;
use std::fmt;
use std::str::FromStr;

/// Single keypad input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Digit(u8),
    DecimalPoint,
    Operator(Operator),
    Equals,
    Function(ScientificFn),
    ToggleAngle,
    Clear,
    Help,
}

/// Keypad words offered for completion
pub const KEY_WORDS: &[&str] = &[
    "sqrt", "cbrt", "sin", "cos", "tan", "mode", "clear", "help",
];

impl FromStr for Key {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        if let [b @ b'0'..=b'9'] = s.as_bytes() {
            return Ok(Key::Digit(b - b'0'));
        }

        match s.to_ascii_lowercase().as_str() {
            "." => return Ok(Key::DecimalPoint),
            "=" => return Ok(Key::Equals),
            "mode" | "drg" => return Ok(Key::ToggleAngle),
            "c" | "ac" | "clear" => return Ok(Key::Clear),
            "help" | "?" => return Ok(Key::Help),
            _ => {},
        }

        if let Ok(op) = s.parse::<Operator>() {
            return Ok(Key::Operator(op));
        }
        if let Ok(f) = s.parse::<ScientificFn>() {
            return Ok(Key::Function(f));
        }

        Err(CalcError::unknown_key(s))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Digit(d) => write!(f, "{d}"),
            Key::DecimalPoint => f.write_str("."),
            Key::Operator(op) => write!(f, "{op}"),
            Key::Equals => f.write_str("="),
            Key::Function(func) => write!(f, "{func}"),
            Key::ToggleAngle => f.write_str("mode"),
            Key::Clear => f.write_str("clear"),
            Key::Help => f.write_str("help"),
        }
    }
}

/// Scan a line of input into keys
///
/// Whitespace only separates words; `3+4=` and `3 + 4 =` scan the same.
pub fn parse_keys(line: &str) -> Result<Vec<Key>> {
    let mut keys = Vec::new();
    let mut chars = line.char_indices().peekable();

    while let Some((start, ch)) = chars.next() {
        match ch {
            c if c.is_whitespace() => {},
            '0'..='9' => keys.push(Key::Digit(ch as u8 - b'0')),
            '.' => keys.push(Key::DecimalPoint),
            '=' => keys.push(Key::Equals),
            '?' => keys.push(Key::Help),
            '*' => {
                if chars.next_if(|&(_, c)| c == '*').is_some() {
                    keys.push(Key::Operator(Operator::Pow));
                } else {
                    keys.push(Key::Operator(Operator::Mul));
                }
            },
            '+' | '-' | '×' | '÷' | '/' | '^' => {
                keys.push(Key::Operator(ch.to_string().parse()?));
            },
            '√' => keys.push(Key::Function(ScientificFn::Sqrt)),
            '∛' => keys.push(Key::Function(ScientificFn::Cbrt)),
            c if c.is_alphabetic() => {
                let mut end = start + c.len_utf8();
                while let Some((idx, next)) = chars.next_if(|&(_, n)| n.is_alphabetic()) {
                    end = idx + next.len_utf8();
                }
                keys.push(line[start..end].parse()?);
            },
            other => return Err(CalcError::unknown_key(other.to_string())),
        }
    }

    Ok(keys)
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)]
mod tests {
    use super::*;

    #[test]
    fn test_single_tokens() {
        assert_eq!("7".parse::<Key>().unwrap(), Key::Digit(7));
        assert_eq!("×".parse::<Key>().unwrap(), Key::Operator(Operator::Mul));
        assert_eq!("SIN".parse::<Key>().unwrap(), Key::Function(ScientificFn::Sin));
        assert_eq!("c".parse::<Key>().unwrap(), Key::Clear);
        assert_eq!("mode".parse::<Key>().unwrap(), Key::ToggleAngle);
        assert!("12".parse::<Key>().is_err());
        assert!("log".parse::<Key>().is_err());
    }

    #[test]
    fn test_compact_and_spaced_lines_agree() {
        let compact = parse_keys("3+4×2=").unwrap();
        let spaced = parse_keys(" 3 + 4 × 2 = ").unwrap();
        assert_eq!(compact, spaced);
        assert_eq!(
            compact,
            vec![
                Key::Digit(3),
                Key::Operator(Operator::Add),
                Key::Digit(4),
                Key::Operator(Operator::Mul),
                Key::Digit(2),
                Key::Equals,
            ]
        );
    }

    #[test]
    fn test_words_split_from_digits() {
        assert_eq!(
            parse_keys("30sin").unwrap(),
            vec![Key::Digit(3), Key::Digit(0), Key::Function(ScientificFn::Sin)]
        );
        assert_eq!(
            parse_keys("2x3").unwrap(),
            vec![Key::Digit(2), Key::Operator(Operator::Mul), Key::Digit(3)]
        );
    }

    #[test]
    fn test_double_star_is_power() {
        assert_eq!(
            parse_keys("2**8").unwrap(),
            vec![Key::Digit(2), Key::Operator(Operator::Pow), Key::Digit(8)]
        );
        assert_eq!(
            parse_keys("2*8").unwrap()[1],
            Key::Operator(Operator::Mul)
        );
    }

    #[test]
    fn test_unknown_input() {
        assert_eq!(
            parse_keys("3 % 2"),
            Err(CalcError::unknown_key("%"))
        );
        assert_eq!(parse_keys("log 5"), Err(CalcError::unknown_key("log")));
    }

    #[test]
    fn test_display_round_trips_through_parser() {
        let keys = parse_keys("1.5 ÷ 3 = sqrt mode tan clear help").unwrap();
        let line: Vec<String> = keys.iter().map(Key::to_string).collect();
        assert_eq!(parse_keys(&line.join(" ")).unwrap(), keys);
    }
}
