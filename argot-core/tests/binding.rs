//! End-to-end binding behavior over the public API.
//!
//! The fixtures mirror the argument strings a chat user actually types:
//! positional values, key=value overrides, quoted literals and typed
//! parameters, bound against action parameter specifications.

use argot_core::{Binder, ParameterSpec};
use serde_json::{Value, json};

fn spec(json: Value) -> ParameterSpec {
    serde_json::from_value(json).unwrap()
}

fn shell_spec() -> ParameterSpec {
    spec(json!({
        "shell": {"default": "/bin/bash"},
        "cmd": {"default": "echo default"},
        "irrelevant": {}
    }))
}

fn typed_spec() -> ParameterSpec {
    spec(json!({
        "command": {"type": "string"},
        "num": {"type": "integer"},
        "bool": {"type": "boolean"},
        "arr": {"type": "array"},
        "obj": {"type": "object"}
    }))
}

fn bind(raw: &str, spec: ParameterSpec) -> Value {
    Value::Object(Binder::new(spec).bind(raw))
}

#[test]
fn single_positional_argument_claims_the_first_parameter() {
    let bound = bind("some", shell_spec());
    assert_eq!(bound["shell"], json!("some"));
}

#[test]
fn missing_parameters_fall_back_to_their_defaults() {
    assert_eq!(
        bind("sh", shell_spec()),
        json!({"shell": "sh", "cmd": "echo default"})
    );
}

#[test]
fn empty_input_returns_exactly_the_defaults() {
    assert_eq!(
        bind("", shell_spec()),
        json!({"shell": "/bin/bash", "cmd": "echo default"})
    );
}

#[test]
fn named_arguments_bind_without_consuming_positional_slots() {
    assert_eq!(
        bind("cmd=/bin/true", shell_spec()),
        json!({"shell": "/bin/bash", "cmd": "/bin/true"})
    );
}

#[test]
fn named_arguments_override_positional_ones() {
    assert_eq!(
        bind("skipped_value \"echo some\" shell=/bin/zsh", shell_spec()),
        json!({"shell": "/bin/zsh", "cmd": "echo some"})
    );
}

#[test]
fn excess_positional_arguments_are_ignored() {
    assert_eq!(
        bind("/bin/zsh \"echo some\" thing else", shell_spec()),
        json!({"shell": "/bin/zsh", "cmd": "echo some", "irrelevant": "thing"})
    );
}

#[test]
fn parameters_without_token_or_default_are_absent() {
    let bound = bind("/bin/zsh \"echo some\"", shell_spec());
    assert_eq!(
        bound,
        json!({"shell": "/bin/zsh", "cmd": "echo some"})
    );
    assert!(bound.get("irrelevant").is_none());
}

#[test]
fn values_are_cast_to_their_declared_types() {
    assert_eq!(
        bind("count 10", typed_spec()),
        json!({"command": "count", "num": 10})
    );
}

#[test]
fn integer_parameters_truncate_fractional_input() {
    assert_eq!(
        bind("count 10.1", typed_spec()),
        json!({"command": "count", "num": 10})
    );
}

#[test]
fn boolean_parameters_use_the_chat_vocabulary() {
    assert_eq!(bind("bool=false", typed_spec()), json!({"bool": false}));
    assert_eq!(bind("bool=ok", typed_spec()), json!({"bool": true}));
    assert_eq!(bind("bool=nope", typed_spec()), json!({"bool": false}));
}

#[test]
fn array_parameters_default_to_arrays_of_strings() {
    assert_eq!(
        bind("arr=1,2,3,4", typed_spec()),
        json!({"arr": ["1", "2", "3", "4"]})
    );
    assert_eq!(
        bind("arr=\"1, 2, 3, 4\"", typed_spec()),
        json!({"arr": ["1", "2", "3", "4"]})
    );
}

#[test]
fn array_items_descriptor_casts_every_element() {
    let s = spec(json!({
        "arr": {"type": "array", "items": {"type": "number"}}
    }));
    assert_eq!(
        bind("arr=1,2,3,4", s.clone()),
        json!({"arr": [1.0, 2.0, 3.0, 4.0]})
    );
    assert_eq!(
        bind("arr=\"1, 2, 3, 4\"", s),
        json!({"arr": [1.0, 2.0, 3.0, 4.0]})
    );
}

#[test]
fn tuple_items_cast_per_index_and_keep_the_tail_raw() {
    let s = spec(json!({
        "arr": {"type": "array", "items": [{"type": "number"}, {"type": "string"}]}
    }));
    assert_eq!(
        bind("arr=1,2,3,4", s),
        json!({"arr": [1.0, "2", "3", "4"]})
    );
}

#[test]
fn tuple_items_with_additional_items_false_drop_the_tail() {
    let s = spec(json!({
        "arr": {
            "type": "array",
            "items": [{"type": "number"}, {"type": "string"}],
            "additionalItems": false
        }
    }));
    assert_eq!(bind("arr=1,2,3,4", s.clone()), json!({"arr": [1.0, "2"]}));
    assert_eq!(bind("arr=\"1, 2, 3, 4\"", s), json!({"arr": [1.0, "2"]}));
}

#[test]
fn whitespace_separates_positional_arguments() {
    assert_eq!(
        bind("sh /bin/true", shell_spec()),
        json!({"shell": "sh", "cmd": "/bin/true"})
    );
}

#[test]
fn quoted_literals_bind_as_one_value() {
    assert_eq!(
        bind("sh \"echo some\"", shell_spec()),
        json!({"shell": "sh", "cmd": "echo some"})
    );
}

#[test]
fn quotes_of_the_other_kind_are_preserved() {
    assert_eq!(
        bind("sh \"echo 'some thing'\"", shell_spec()),
        json!({"shell": "sh", "cmd": "echo 'some thing'"})
    );
    assert_eq!(
        bind("sh 'echo \"some thing\"'", shell_spec()),
        json!({"shell": "sh", "cmd": "echo \"some thing\""})
    );
}

#[test]
fn escaped_quotes_inside_quotes_are_preserved() {
    assert_eq!(
        bind(r#"sh "echo \'some thing\'""#, shell_spec()),
        json!({"shell": "sh", "cmd": "echo 'some thing'"})
    );
}

#[test]
fn literal_whitespace_inside_quotes_is_preserved() {
    assert_eq!(
        bind("sh \"echo some\n\"", shell_spec()),
        json!({"shell": "sh", "cmd": "echo some\n"})
    );
    assert_eq!(
        bind("sh 'echo \tsome'", shell_spec()),
        json!({"shell": "sh", "cmd": "echo \tsome"})
    );
}

#[test]
fn unterminated_quotes_bind_the_remainder() {
    assert_eq!(
        bind("sh \"echo some thing", shell_spec()),
        json!({"shell": "sh", "cmd": "echo some thing"})
    );
}

#[test]
fn null_typed_parameters_bind_to_explicit_null() {
    let s = spec(json!({"marker": {"type": "null"}}));
    let bound = bind("anything", s);
    assert_eq!(bound, json!({"marker": null}));
    assert!(bound.get("marker").is_some());
}
