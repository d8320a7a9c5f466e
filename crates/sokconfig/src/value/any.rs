//! Object-safe view of a value for registries and untyped input

use std::any::Any;
use std::fmt;

use super::raw::{RawValue, ValueKind};
use super::typed::{BoolValue, FloatValue, IntValue, ListValue, StringValue, Value};
use super::types::ValueType;
use crate::error::{Error, SokResult};

/// Runtime-tagged access to a [`Value`] of any type
pub trait AnyValue: fmt::Debug + Send + Sync {
	fn name(&self) -> Option<&str>;

	fn description(&self) -> Option<&str>;

	fn value_type(&self) -> ValueKind;

	fn is_set(&self) -> bool;

	/// Current value as raw data, null while unset
	fn raw_value(&self) -> RawValue;

	/// Assign an untyped candidate through the value's pipeline
	fn assign_raw(&mut self, candidate: RawValue) -> SokResult<()>;

	/// Bind `name` unless a name is already set; returns whether it was bound
	fn bind_name_if_empty(&mut self, name: &str) -> bool;

	fn as_any(&self) -> &dyn Any;

	fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: ValueType> AnyValue for Value<T> {
	fn name(&self) -> Option<&str> {
		Value::name(self)
	}

	fn description(&self) -> Option<&str> {
		Value::description(self)
	}

	fn value_type(&self) -> ValueKind {
		T::KIND
	}

	fn is_set(&self) -> bool {
		Value::is_set(self)
	}

	fn raw_value(&self) -> RawValue {
		self.value().cloned().map_or(RawValue::Null, ValueType::into_raw)
	}

	fn assign_raw(&mut self, candidate: RawValue) -> SokResult<()> {
		Value::assign_raw(self, candidate)
	}

	fn bind_name_if_empty(&mut self, name: &str) -> bool {
		Value::bind_name_if_empty(self, name)
	}

	fn as_any(&self) -> &dyn Any {
		self
	}

	fn as_any_mut(&mut self) -> &mut dyn Any {
		self
	}
}

/// Build a value whose type is inferred from a non-null default
pub fn infer(default: RawValue) -> SokResult<Box<dyn AnyValue>> {
	let Some(kind) = default.kind() else {
		return Err(Error::ConfigError(
			"cannot infer a value type from a null default".into(),
		));
	};

	let value: Box<dyn AnyValue> = match kind {
		ValueKind::Int => Box::new(IntValue::builder().default_raw(default).build()?),
		ValueKind::Float => Box::new(FloatValue::builder().default_raw(default).build()?),
		ValueKind::Bool => Box::new(BoolValue::builder().default_raw(default).build()?),
		ValueKind::String => Box::new(StringValue::builder().default_raw(default).build()?),
		ValueKind::List => Box::new(ListValue::builder().default_raw(default).build()?),
	};
	Ok(value)
}


// vim: ts=4
