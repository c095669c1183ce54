//! Type casting of raw tokens against parameter descriptors.

use serde_json::{Value, json};

use crate::spec::{Items, ParamType, ParameterDescriptor};

/// Truthy vocabulary for boolean parameters, matched case-insensitively.
/// Chat-typed input, so the colloquial affirmatives count too.
const TRUTHY: [&str; 6] = ["true", "yes", "yeah", "sure", "ok", "1"];

/// Cast a raw token into a typed value.
///
/// Total: malformed numeric input falls back to a zero value and unknown
/// type tags fall back to string casting. This is a deliberate lenient
/// policy; callers that need strict validation must pre-validate.
pub fn cast(token: &str, descriptor: Option<&ParameterDescriptor>) -> Value {
    let param_type = descriptor
        .map(ParameterDescriptor::param_type)
        .unwrap_or(ParamType::String);

    match param_type {
        ParamType::String => Value::String(token.to_string()),
        ParamType::Integer => json!(cast_integer(token)),
        ParamType::Number => json!(cast_number(token)),
        ParamType::Boolean => json!(TRUTHY.contains(&token.to_lowercase().as_str())),
        ParamType::Array => cast_array(token, descriptor),
        // Structured key:value parsing never shipped in the original
        // system; the raw token is boxed as-is.
        ParamType::Object => Value::String(token.to_string()),
        ParamType::Null => Value::Null,
    }
}

/// Base-10 integer, truncating any fractional part toward zero.
/// Wholly non-numeric input yields 0.
fn cast_integer(token: &str) -> i64 {
    let token = token.trim();
    if let Ok(n) = token.parse::<i64>() {
        return n;
    }
    match token.parse::<f64>() {
        Ok(f) if f.is_finite() => f.trunc() as i64,
        _ => 0,
    }
}

/// Floating point. Non-numeric and non-finite input yields 0, keeping the
/// output JSON-representable.
fn cast_number(token: &str) -> f64 {
    match token.trim().parse::<f64>() {
        Ok(f) if f.is_finite() => f,
        _ => 0.0,
    }
}

fn cast_array(token: &str, descriptor: Option<&ParameterDescriptor>) -> Value {
    let pieces: Vec<&str> = token.split(',').map(str::trim).collect();
    let items = descriptor.and_then(|d| d.items.as_ref());
    let additional = descriptor.and_then(|d| d.additional_items).unwrap_or(true);

    let mut values = Vec::with_capacity(pieces.len());
    match items {
        None => {
            for piece in pieces {
                values.push(Value::String(piece.to_string()));
            }
        }
        Some(Items::Single(item)) => {
            for piece in pieces {
                values.push(cast(piece, Some(item)));
            }
        }
        Some(Items::Tuple(item_seq)) => {
            for (i, piece) in pieces.iter().enumerate() {
                match item_seq.get(i) {
                    Some(item) => values.push(cast(piece, Some(item))),
                    // Past the end of the sequence: keep the raw piece,
                    // unless additionalItems forbids it (then this piece
                    // and everything after it is dropped).
                    None if additional => values.push(Value::String(piece.to_string())),
                    None => break,
                }
            }
        }
    }

    Value::Array(values)
}
