//! Display formatting for operand strings
//!
//! Operands live as display strings until the moment of calculation, so the
//! formatter works on strings too: the integer part gets thousands-group
//! separators, the fractional part is appended verbatim - no grouping, no
//! rounding. Long division tails like `1.6666666666666667` survive intact.

/// Formats an operand string for display.
///
/// The integer part is parsed and regrouped with `,` every three digits,
/// which also normalizes any leading zeros the user typed. An unparseable
/// integer part renders as the empty string (the transient empty-operand
/// state); a non-finite one (`inf`, `NaN` from unguarded division) renders
/// verbatim.
pub(crate) fn format_operand(value: &str) -> String {
    let (integer, fraction) = match value.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (value, None),
    };

    let integer_display = match integer.parse::<f64>() {
        Err(_) => String::new(),
        Ok(v) if !v.is_finite() => integer.to_string(),
        Ok(v) => group_thousands(&v.to_string()),
    };

    match fraction {
        Some(frac_part) => format!("{integer_display}.{frac_part}"),
        None => integer_display,
    }
}

/// Inserts `,` every three digits, counting from the right.
///
/// Expects a plain decimal digit run with an optional leading minus sign.
fn group_thousands(digits: &str) -> String {
    let (sign, magnitude) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };

    let mut out = String::with_capacity(sign.len() + magnitude.len() + magnitude.len() / 3);
    out.push_str(sign);
    let len = magnitude.len();
    for (i, c) in magnitude.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
