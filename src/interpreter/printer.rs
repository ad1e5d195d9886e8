//! The printer module implements `render`, the value-to-text formatter
//! backing both `print` and `Value`'s `Display` impl.

use super::value::Value;

/// Formats `value` the way Rinha's `print` builtin does: no quoting on
/// strings, `true`/`false` for booleans, `<#closure>` for closures, and
/// `(first, second)` — recursively — for tuples.
pub fn render(value: &Value) -> String {
    match value {
        Value::Boolean(b) => if *b { "true" } else { "false" }.to_string(),
        Value::Int(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Closure { .. } => "<#closure>".to_string(),
        Value::Tuple(first, second) => format!("({}, {})", render(first), render(second)),
    }
}
