//! Command orchestration: from a chat command line to an execution request.
//!
//! A command line is an action reference followed by the argument string
//! for that action. The action is resolved against a catalog, its
//! parameter specification drives the binder, and the bound parameters can
//! be wrapped in the execution-request payload the automation service
//! expects.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::binder::Binder;
use crate::catalog::Catalog;
use crate::error::{ArgotError, Result};

/// A parsed command ready for execution.
#[derive(Debug, Clone)]
pub struct ActionInvocation {
    /// Name of the resolved action
    pub action: String,

    /// Bound parameters for the action
    pub parameters: Map<String, Value>,
}

impl ActionInvocation {
    /// Wrap the invocation in the execution-request payload shape.
    pub fn into_request(self) -> ExecutionRequest {
        ExecutionRequest {
            action: ActionRef { name: self.action },
            parameters: self.parameters,
        }
    }
}

/// The execution-request payload posted to the automation service.
///
/// Serializes as `{"action": {"name": ...}, "parameters": {...}}`.
#[derive(Debug, Clone, Serialize)]
pub struct ExecutionRequest {
    /// The action to execute
    pub action: ActionRef,

    /// Bound parameters for the execution
    pub parameters: Map<String, Value>,
}

/// Reference to an action by name.
#[derive(Debug, Clone, Serialize)]
pub struct ActionRef {
    /// Action name
    pub name: String,
}

/// Parse a raw command line into an invocation.
///
/// The first whitespace-delimited word is the action reference; everything
/// after it is the argument string, handed verbatim (quotes intact) to the
/// binder for that action's parameter specification.
pub fn parse_command(line: &str, catalog: &Catalog) -> Result<ActionInvocation> {
    let line = line.trim();
    if line.is_empty() {
        return Err(ArgotError::EmptyCommand);
    }

    let (name, argstring) = match line.find(char::is_whitespace) {
        Some(idx) => (&line[..idx], line[idx..].trim_start()),
        None => (line, ""),
    };

    let action = catalog
        .find(name)
        .ok_or_else(|| ArgotError::ActionNotFound(name.to_string()))?;

    let parameters = Binder::new(action.parameters.clone()).bind(argstring);

    Ok(ActionInvocation {
        action: action.name.clone(),
        parameters,
    })
}
