//! Argument binding against a parameter specification.
//!
//! This module turns a raw, human-typed argument string into a typed
//! parameter mapping: tokenize once, resolve each token to a named
//! (`key=value`) or positional parameter, cast per descriptor, then
//! backfill declared defaults.

mod caster;
mod tokenizer;

pub use caster::cast;
pub use tokenizer::tokenize;

use serde_json::{Map, Value};
use std::collections::VecDeque;

use crate::spec::ParameterSpec;

/// Binds raw argument strings against one parameter specification.
pub struct Binder {
    spec: ParameterSpec,
}

impl Binder {
    /// Create a binder for the given specification.
    pub fn new(spec: ParameterSpec) -> Self {
        Self { spec }
    }

    /// Bind a raw argument string into a typed parameter mapping.
    ///
    /// Total for all inputs: malformed values degrade per the casting
    /// rules and positional overflow is ignored. The result contains only
    /// parameters claimed by a token or carrying a default; everything
    /// else is absent.
    pub fn bind(&self, raw: &str) -> Map<String, Value> {
        let mut result = Map::new();

        // Names not yet claimed, in declaration order. Positional tokens
        // pop from the front. An explicit name=value claim removes the
        // name wherever it sits, so a later positional token cannot
        // overwrite an explicit assignment.
        let mut positional: VecDeque<&str> = self.spec.keys().map(String::as_str).collect();

        for token in tokenize(raw) {
            if let Some((name, value)) = split_named(&token) {
                result.insert(name.to_string(), cast(value, self.spec.get(name)));
                positional.retain(|n| *n != name);
            } else if let Some(name) = positional.pop_front() {
                result.insert(name.to_string(), cast(&token, self.spec.get(name)));
            }
            // No remaining positional slot: the token is ignored.
        }

        // Backfill defaults for unset keys, verbatim, never re-cast.
        for (name, descriptor) in &self.spec {
            if let Some(default) = &descriptor.default {
                if !result.contains_key(name) {
                    result.insert(name.clone(), default.clone());
                }
            }
        }

        result
    }
}

/// Split a `name=value` token. The name must be a nonempty leading run of
/// word characters immediately followed by `=`; the value is everything
/// after the first `=` and may itself contain `=`.
fn split_named(token: &str) -> Option<(&str, &str)> {
    let eq = token.find('=')?;
    let (name, rest) = token.split_at(eq);
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }
    Some((name, &rest[1..]))
}
