//! Display formatting
//!
//! Pure string formatting for the two display lines. The integer part of an
//! operand gets thousands separators; fractional digits are reattached
//! verbatim so a value under construction (`"1.20"`) displays exactly as
//! typed.

use serde::{Deserialize, Serialize};

use crate::engine::state::ERROR_SENTINEL;

/// The complete render contract: two pre-formatted lines
///
/// Collaborators write these strings verbatim to their display regions;
/// nothing else crosses the boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayState {
    /// The operand under construction or the last result
    pub primary: String,
    /// The pending operand and operator glyph; empty when nothing is
    /// pending
    pub secondary: String,
}

/// Formats an operand string for display
///
/// Splits on the decimal point, groups the integer part with `,`
/// separators, and reattaches the fractional part untouched. The error
/// sentinel formats to itself. An integer part that is not a plain numeral
/// yields an empty integer display, so a bare `"."` renders as `"."`.
#[must_use]
pub fn format_operand(operand: &str) -> String {
    if operand == ERROR_SENTINEL {
        return operand.to_string();
    }
    let (int_part, frac_part) = match operand.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (operand, None),
    };
    let grouped = group_integer(int_part);
    match frac_part {
        Some(frac) => format!("{grouped}.{frac}"),
        None => grouped,
    }
}

/// Inserts thousands separators into a signed digit string
fn group_integer(part: &str) -> String {
    let (sign, digits) = match part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", part),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return String::new();
    }
    let mut out = String::with_capacity(sign.len() + digits.len() + digits.len() / 3);
    out.push_str(sign);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
