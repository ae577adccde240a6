//! Validated input prompts
//!
//! `ask_text` reads one trimmed line with an optional default; `ask_int`
//! re-prompts until it gets an integer inside the requested bounds. Neither
//! loop has a retry limit: the terminal user can retry forever, and tests
//! bound the loop through the scripted input stream.

use crate::console::{InputError, LineIo};
use crate::session::messages;

/// Read one line, trimmed. An empty answer falls back to `default` when one
/// is given; otherwise empty is a valid result and the caller decides.
pub fn ask_text(
    io: &mut dyn LineIo,
    prompt: &str,
    default: Option<&str>,
) -> Result<String, InputError> {
    let text = io.read_line(prompt)?.trim().to_string();
    if text.is_empty() {
        if let Some(default) = default {
            return Ok(default.to_string());
        }
    }
    Ok(text)
}

/// Read an integer, re-prompting on anything that is not an optional minus
/// sign followed by digits, and on values outside the given bounds.
pub fn ask_int(
    io: &mut dyn LineIo,
    prompt: &str,
    min: Option<i64>,
    max: Option<i64>,
) -> Result<i64, InputError> {
    loop {
        let raw = io.read_line(prompt)?.trim().to_string();

        let value = match parse_int(&raw) {
            Some(value) => value,
            None => {
                io.write_line(messages::NOT_AN_INTEGER);
                continue;
            }
        };

        if let Some(min) = min {
            if value < min {
                io.write_line(&messages::at_least(min));
                continue;
            }
        }
        if let Some(max) = max {
            if value > max {
                io.write_line(&messages::at_most(max));
                continue;
            }
        }

        return Ok(value);
    }
}

/// Accepts an optional single leading `-` followed by one or more ASCII
/// digits. Values outside the i64 range are rejected like any other bad
/// input.
fn parse_int(raw: &str) -> Option<i64> {
    let digits = raw.strip_prefix('-').unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::BufferedIo;
    use std::io::Cursor;

    fn scripted(lines: &str) -> BufferedIo<Cursor<Vec<u8>>, Vec<u8>> {
        BufferedIo::new(Cursor::new(lines.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_ask_text_trims_whitespace() {
        let mut io = scripted("  hello world  \n");
        assert_eq!(ask_text(&mut io, "? ", None).unwrap(), "hello world");
    }

    #[test]
    fn test_ask_text_empty_uses_default() {
        let mut io = scripted("   \n");
        assert_eq!(ask_text(&mut io, "? ", Some("friend")).unwrap(), "friend");
    }

    #[test]
    fn test_ask_text_empty_without_default_is_empty() {
        let mut io = scripted("\n");
        assert_eq!(ask_text(&mut io, "? ", None).unwrap(), "");
    }

    #[test]
    fn test_ask_text_nonempty_ignores_default() {
        let mut io = scripted("Alice\n");
        assert_eq!(ask_text(&mut io, "? ", Some("friend")).unwrap(), "Alice");
    }

    #[test]
    fn test_ask_int_in_bounds_returns_first_read() {
        let mut io = scripted("7\n");
        assert_eq!(ask_int(&mut io, "? ", Some(1), Some(10)).unwrap(), 7);
        let out = String::from_utf8(io.into_writer()).unwrap();
        assert!(!out.contains(messages::NOT_AN_INTEGER));
    }

    #[test]
    fn test_ask_int_negative_value() {
        let mut io = scripted("-42\n");
        assert_eq!(ask_int(&mut io, "? ", None, None).unwrap(), -42);
    }

    #[test]
    fn test_ask_int_reprompts_until_valid() {
        // "abc" is not an integer, "15" is above the max, "7" terminates
        let mut io = scripted("abc\n15\n7\n");
        assert_eq!(ask_int(&mut io, "? ", Some(1), Some(10)).unwrap(), 7);
        let out = String::from_utf8(io.into_writer()).unwrap();
        assert!(out.contains(messages::NOT_AN_INTEGER));
        assert!(out.contains(&messages::at_most(10)));
    }

    #[test]
    fn test_ask_int_rejects_below_min() {
        let mut io = scripted("-1\n0\n");
        assert_eq!(ask_int(&mut io, "? ", Some(0), Some(120)).unwrap(), 0);
        let out = String::from_utf8(io.into_writer()).unwrap();
        assert!(out.contains(&messages::at_least(0)));
    }

    #[test]
    fn test_ask_int_rejects_double_minus() {
        let mut io = scripted("--5\n5\n");
        assert_eq!(ask_int(&mut io, "? ", None, None).unwrap(), 5);
        let out = String::from_utf8(io.into_writer()).unwrap();
        assert!(out.contains(messages::NOT_AN_INTEGER));
    }

    #[test]
    fn test_ask_int_rejects_overflowing_digits() {
        let mut io = scripted("123456789012345678901234567890\n3\n");
        assert_eq!(ask_int(&mut io, "? ", None, None).unwrap(), 3);
    }

    #[test]
    fn test_ask_int_propagates_closed_stream() {
        let mut io = scripted("abc\n");
        assert!(matches!(
            ask_int(&mut io, "? ", None, None),
            Err(InputError::Closed)
        ));
    }

    #[test]
    fn test_parse_int_shapes() {
        assert_eq!(parse_int("30"), Some(30));
        assert_eq!(parse_int("-2"), Some(-2));
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("-"), None);
        assert_eq!(parse_int("1.5"), None);
        assert_eq!(parse_int("+5"), None);
        assert_eq!(parse_int("five"), None);
    }
}
