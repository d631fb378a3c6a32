//! Define shared Go string semantics (pure helpers).
//!
//! This module holds **pure/deterministic** helpers used by both the front-end (identifier rules)
//! and the driver synthesizer (emitting string literals and references into generated Go).
//!
//! ## Notes
//! - **Quoting** mirrors Go's `strconv.Quote`: the result is an interpreted string literal that
//!   round-trips through the Go compiler, with control characters escaped.
//! - **Identifiers** follow the Go spec: a letter (Unicode letter or `_`) followed by letters and
//!   digits, and not a reserved keyword.

use std::fmt::Write as _;

use crate::lang::keywords;

/// Return `true` if `c` may start a Go identifier.
pub fn is_letter(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

/// Return `true` if `c` may continue a Go identifier.
pub fn is_identifier_char(c: char) -> bool {
    is_letter(c) || c.is_numeric()
}

/// Check whether `s` is a valid, non-keyword Go identifier.
///
/// ## Parameters
/// - `s`: candidate spelling.
///
/// ## Returns
/// - `bool`: `true` if `s` can be used as a declared name or selector.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    is_letter(first) && chars.all(is_identifier_char) && keywords::from_str(s).is_none()
}

/// Check whether an identifier is exported (starts with an upper-case letter).
pub fn is_exported(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

/// Render `s` as a Go interpreted string literal, including the surrounding quotes.
///
/// ## Parameters
/// - `s`: raw string value.
///
/// ## Returns
/// - `String`: the quoted literal, e.g. `"a\"b"` for `a"b`.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{07}' => out.push_str("\\a"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0B}' => out.push_str("\\v"),
            c if c.is_control() => {
                let code = c as u32;
                // Writing into a String cannot fail.
                let _ = if code < 0x80 {
                    write!(out, "\\x{code:02x}")
                } else if code <= 0xFFFF {
                    write!(out, "\\u{code:04x}")
                } else {
                    write!(out, "\\U{code:08x}")
                };
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
