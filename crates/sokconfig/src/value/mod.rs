//! Configuration values
//!
//! - **Raw** (`raw.rs`): untyped external data and runtime kind tags
//! - **Types** (`types.rs`): value types and their constraints
//! - **Typed** (`typed.rs`): the `Value` holder, its builder and aliases
//! - **List** (`list.rs`): in-place list mutation
//! - **Any** (`any.rs`): object-safe view used by the registry

pub mod any;
pub mod list;
pub mod raw;
pub mod typed;
pub mod types;

pub use any::{AnyValue, infer};
pub use raw::{RawValue, ValueKind};
pub use typed::{
	BoolValue, FloatValue, IntValue, ListValue, Mutator, PreMutator, StringValue, Validator, Value,
	ValueBuilder,
};
pub use types::{Bounds, ListRules, NoRules, Rules, ValueType};

// vim: ts=4
