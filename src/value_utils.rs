// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for coercing loosely-typed JSON values.

use serde_json::Value;

/// Coerce a JSON value to a finite, non-negative number.
///
/// Numbers pass through; strings are trimmed and parsed. Anything else
/// (including NaN/infinite parses and negative values) is rejected.
pub fn coerce_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    (n.is_finite() && n >= 0.0).then_some(n)
}

/// Split a `;`/`,` delimited string into numbers, dropping empty and
/// non-numeric segments. Source order is preserved.
pub fn split_numbers(raw: &str) -> Vec<f64> {
    raw.split([';', ','])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| s.parse::<f64>().ok())
        .filter(|n| n.is_finite() && *n >= 0.0)
        .collect()
}

/// Coerce a value into a positional list of numbers.
///
/// Arrays keep one slot per entry (`None` where coercion fails) so that
/// parallel lists can still be paired by original index. A lone number
/// becomes a one-slot list and a delimited string one slot per segment.
pub fn positional_numbers(value: Option<&Value>) -> Vec<Option<f64>> {
    match value {
        Some(Value::Array(items)) => items.iter().map(coerce_number).collect(),
        Some(Value::String(s)) => s
            .split([';', ','])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| coerce_number(&Value::String(s.to_string())))
            .collect(),
        Some(v @ Value::Number(_)) => vec![coerce_number(v)],
        _ => Vec::new(),
    }
}

/// Treat blank strings as absent.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Read a JSON scalar as a string identifier (ids are sometimes numeric).
pub fn identifier(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number(&json!(5)), Some(5.0));
        assert_eq!(coerce_number(&json!(" 10.5 ")), Some(10.5));
        assert_eq!(coerce_number(&json!("abc")), None);
        assert_eq!(coerce_number(&json!("")), None);
        assert_eq!(coerce_number(&json!(null)), None);
        assert_eq!(coerce_number(&json!(true)), None);
        assert_eq!(coerce_number(&json!(-3)), None);
    }

    #[test]
    fn test_split_numbers_mixed_delimiters() {
        assert_eq!(split_numbers("5; 10,,21.1 ; x"), vec![5.0, 10.0, 21.1]);
        assert!(split_numbers("").is_empty());
        assert!(split_numbers(" ; , ").is_empty());
    }

    #[test]
    fn test_positional_numbers_keeps_slots() {
        let v = json!([5, "n/a", 21]);
        assert_eq!(
            positional_numbers(Some(&v)),
            vec![Some(5.0), None, Some(21.0)]
        );
        assert_eq!(positional_numbers(Some(&json!(8))), vec![Some(8.0)]);
        assert!(positional_numbers(None).is_empty());
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(Some("  ".to_string())), None);
        assert_eq!(non_blank(Some(" a ".to_string())), Some("a".to_string()));
    }
}
