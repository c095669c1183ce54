//! Parameter specification types.
//!
//! An action declares its parameters as an ordered mapping from parameter
//! name to a descriptor carrying an optional type tag, a default value and
//! array item typing. Declaration order matters: it is the order in which
//! positional arguments are claimed during binding.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Ordered mapping from parameter name to its descriptor.
///
/// Insertion order survives serde round-trips, so the key order of an
/// action definition document is the positional binding order.
pub type ParameterSpec = IndexMap<String, ParameterDescriptor>;

/// Declared metadata for a single parameter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    /// Type tag (string, integer, number, boolean, array, object, null).
    /// Kept as a raw string so an unknown tag degrades to string casting
    /// instead of failing deserialization.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_tag: Option<String>,

    /// Default value, merged verbatim when no token claims the parameter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    /// Item typing for array parameters: a single descriptor for
    /// homogeneous arrays, a sequence for tuple-like per-index typing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Items>,

    /// When `items` is a sequence and this is false, pieces past the end
    /// of the sequence are dropped instead of kept raw
    #[serde(
        rename = "additionalItems",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub additional_items: Option<bool>,

    /// Human-readable description, surfaced in catalog listings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ParameterDescriptor {
    /// The resolved type of this parameter.
    pub fn param_type(&self) -> ParamType {
        ParamType::from_tag(self.type_tag.as_deref())
    }
}

/// Item typing of an array parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Items {
    /// Every element shares one descriptor
    Single(Box<ParameterDescriptor>),

    /// The element at index i uses the descriptor at index i
    Tuple(Vec<ParameterDescriptor>),
}

/// The closed set of parameter types the caster dispatches over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    String,
    Integer,
    Number,
    Boolean,
    Array,
    Object,
    Null,
}

impl ParamType {
    /// Resolve a raw type tag. Absent and unknown tags both map to
    /// `String`, which keeps the caster total.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("integer") => ParamType::Integer,
            Some("number") => ParamType::Number,
            Some("boolean") => ParamType::Boolean,
            Some("array") => ParamType::Array,
            Some("object") => ParamType::Object,
            Some("null") => ParamType::Null,
            _ => ParamType::String,
        }
    }
}
