//! Core types and functionality for argot.
//!
//! argot turns the free-form argument string a human types at a chat bot
//! into a strongly-typed parameter object for an automation action. The
//! pipeline is shell-like tokenization, positional and named argument
//! resolution against an ordered parameter specification, per-parameter
//! type casting, and default backfilling. Around that core sit the action
//! catalog (where parameter specifications come from) and the command
//! orchestration (action reference + argument string in, execution-request
//! payload out).

mod binder;
mod catalog;
mod command;
mod error;
mod spec;

// Re-export core types
pub use binder::{Binder, cast, tokenize};
pub use catalog::{ActionDefinition, Catalog};
pub use command::{ActionInvocation, ActionRef, ExecutionRequest, parse_command};
pub use error::{ArgotError, Result};
pub use spec::{Items, ParamType, ParameterDescriptor, ParameterSpec};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
