//! Text coercion for loosely-typed form values
//!
//! Form payloads arrive as JSON, so a field may hold a number, a boolean or
//! nothing at all. The email and password checks read such values through
//! their browser string form (`String(value)`), while the length-based
//! checks only ever accept real strings. This module provides both views.

use serde_json::Value;
use std::borrow::Cow;

/// Text a browser would produce for `value`; `None` stands for an absent field.
pub fn coerce_to_text(value: Option<&Value>) -> Cow<'_, str> {
    match value {
        None => Cow::Borrowed("undefined"),
        Some(Value::String(s)) => Cow::Borrowed(s.as_str()),
        Some(other) => Cow::Owned(value_to_text(other)),
    }
}

/// The string held by `value`, if it is one. No coercion.
pub fn as_text(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str)
}

fn value_to_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.as_f64().map(number_to_text).unwrap_or_default(),
        Value::String(s) => s.clone(),
        // Array elements that are null render as empty strings
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => value_to_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Formats a number the way a browser's `Number.prototype.toString` does.
///
/// Uses the fewest digits that read back as `n`; when several such digit
/// strings exist, the one closest to `n` wins, with exact ties going to the
/// even digit. Switches to exponent notation outside `1e-7 < |n| < 1e21`.
pub fn number_to_text(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let sign = if n < 0.0 { "-" } else { "" };
    // `{:e}` yields a shortest round-trip mantissa, e.g. "1.2345e4"
    let shortest = format!("{:e}", n.abs());
    let precision = shortest
        .split('e')
        .next()
        .unwrap_or_default()
        .matches(|c: char| c.is_ascii_digit())
        .count()
        .saturating_sub(1);
    // Correctly rounded at the same length, which picks the closest candidate
    let closest = format!("{:.*e}", precision, n.abs());
    let scientific = if closest.parse::<f64>() == Ok(n.abs()) {
        closest
    } else {
        shortest
    };

    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let digits = mantissa
        .chars()
        .filter(char::is_ascii_digit)
        .collect::<String>();
    // A carry while rounding can leave trailing zeros, e.g. "1.0e3"
    let digits = match digits.trim_end_matches('0') {
        "" => "0",
        trimmed => trimmed,
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    let k = digits.len() as i32;
    let point = exponent + 1;

    let body = if k <= point && point <= 21 {
        format!("{digits}{}", "0".repeat((point - k) as usize))
    } else if 0 < point && point <= 21 {
        let (int_part, frac_part) = digits.split_at(point as usize);
        format!("{int_part}.{frac_part}")
    } else if -6 < point && point <= 0 {
        format!("0.{}{digits}", "0".repeat((-point) as usize))
    } else {
        let exp_sign = if point - 1 >= 0 { "+" } else { "-" };
        let exp_abs = (point - 1).abs();
        if k == 1 {
            format!("{digits}e{exp_sign}{exp_abs}")
        } else {
            let (first, rest) = digits.split_at(1);
            format!("{first}.{rest}e{exp_sign}{exp_abs}")
        }
    };

    format!("{sign}{body}")
}
