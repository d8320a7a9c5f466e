//! Self-validating value holder and its builder
//!
//! Assignment runs a fixed pipeline:
//!
//! 1. `pre_mutator` on the raw candidate
//! 2. null short-circuits to unset, otherwise base type check, then the
//!    type's own rules (bounds, element type), then the extra validator
//! 3. `post_mutator` on the validated value, which is then stored
//!
//! A candidate rejected at any step leaves the stored value untouched.

use std::fmt;

use super::raw::{RawValue, ValueKind};
use super::types::{Bounds, Rules, ValueType};
use crate::error::{Error, SokResult};

/// Type alias for the extra validator predicate
pub type Validator<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// Type alias for a typed transform applied after validation
pub type Mutator<T> = Box<dyn Fn(T) -> T + Send + Sync>;

/// Type alias for a transform applied to the raw candidate before validation
pub type PreMutator = Box<dyn Fn(RawValue) -> RawValue + Send + Sync>;

pub type IntValue = Value<i64>;
pub type FloatValue = Value<f64>;
pub type BoolValue = Value<bool>;
pub type StringValue = Value<String>;
pub type ListValue = Value<Vec<RawValue>>;

/// One configuration datum, always unset or well-typed and valid
pub struct Value<T: ValueType> {
	name: Option<String>,
	description: Option<String>,
	pub(super) current: Option<T>,
	pub(super) rules: T::Rules,
	extra_validator: Validator<T>,
	pre_mutator: PreMutator,
	post_mutator: Mutator<T>,
}

impl<T: ValueType> Value<T> {
	/// Create a builder for constructing a Value
	pub fn builder() -> ValueBuilder<T> {
		ValueBuilder::new()
	}

	/// Bound name, if any
	pub fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	pub fn description(&self) -> Option<&str> {
		self.description.as_deref()
	}

	pub fn value_type(&self) -> ValueKind {
		T::KIND
	}

	/// Current value, `None` while unset
	pub fn value(&self) -> Option<&T> {
		self.current.as_ref()
	}

	pub fn is_set(&self) -> bool {
		self.current.is_some()
	}

	pub fn rules(&self) -> &T::Rules {
		&self.rules
	}

	/// Assign a typed candidate through the full pipeline
	pub fn set(&mut self, candidate: impl Into<T>) -> SokResult<()> {
		self.assign_raw(candidate.into().into_raw())
	}

	/// Assign an untyped candidate through the full pipeline
	pub fn assign_raw(&mut self, candidate: RawValue) -> SokResult<()> {
		let prepared = (self.pre_mutator)(candidate);
		self.current = self.accept(prepared)?.map(&self.post_mutator);
		Ok(())
	}

	/// Return to the unset state
	pub fn unset(&mut self) {
		self.current = None;
	}

	/// Check a typed candidate without storing it
	pub fn validate(&self, candidate: &T) -> SokResult<()> {
		self.rules.check(candidate)?;
		if !(self.extra_validator)(candidate) {
			return Err(Error::ValidationError(format!(
				"extra_validator returned false for value({:?})",
				candidate
			)));
		}
		Ok(())
	}

	/// Type-check and validate a prepared candidate; `None` means null
	fn accept(&self, prepared: RawValue) -> SokResult<Option<T>> {
		if prepared.is_null() {
			return Ok(None);
		}
		let typed = T::from_raw(prepared)
			.map_err(|raw| Error::TypeMismatch { expected: T::KIND, found: raw.type_name() })?;
		self.validate(&typed)?;
		Ok(Some(typed))
	}

	/// Set the name only if none is bound yet; returns whether it was set
	pub(crate) fn bind_name_if_empty(&mut self, name: &str) -> bool {
		if self.name.is_some() {
			return false;
		}
		self.name = Some(name.to_string());
		true
	}
}

impl<N> Value<N>
where
	N: ValueType<Rules = Bounds<N>>,
{
	/// Inclusive lower bound
	pub fn min_value(&self) -> Option<&N> {
		self.rules.min.as_ref()
	}

	/// Inclusive upper bound
	pub fn max_value(&self) -> Option<&N> {
		self.rules.max.as_ref()
	}
}

impl<T: ValueType> fmt::Debug for Value<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct(T::KIND.value_class())
			.field("name", &self.name)
			.field("value", &self.current)
			.field("rules", &self.rules)
			.finish_non_exhaustive()
	}
}

/// Builder for Value with fluent API
pub struct ValueBuilder<T: ValueType> {
	default: Option<RawValue>,
	name: Option<String>,
	description: Option<String>,
	rules: T::Rules,
	extra_validator: Option<Validator<T>>,
	pre_mutator: Option<PreMutator>,
	post_mutator: Option<Mutator<T>>,
}

impl<T: ValueType> ValueBuilder<T> {
	fn new() -> Self {
		Self {
			default: None,
			name: None,
			description: None,
			rules: T::Rules::default(),
			extra_validator: None,
			pre_mutator: None,
			post_mutator: None,
		}
	}

	/// Set the default value (if not set, the value starts unset)
	pub fn default(mut self, value: impl Into<T>) -> Self {
		self.default = Some(value.into().into_raw());
		self
	}

	/// Set the default from untyped data, type-checked on build
	pub fn default_raw(mut self, value: RawValue) -> Self {
		self.default = Some(value);
		self
	}

	/// Set an explicit bound name instead of the declaring identifier
	pub fn name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	pub fn description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	/// Set a predicate checked after the type and its rules
	pub fn extra_validator<F>(mut self, f: F) -> Self
	where
		F: Fn(&T) -> bool + Send + Sync + 'static,
	{
		self.extra_validator = Some(Box::new(f));
		self
	}

	/// Set a transform for raw candidates, applied before validation
	///
	/// Not applied to the default.
	pub fn pre_mutator<F>(mut self, f: F) -> Self
	where
		F: Fn(RawValue) -> RawValue + Send + Sync + 'static,
	{
		self.pre_mutator = Some(Box::new(f));
		self
	}

	/// Set a transform for validated values, applied before storing
	pub fn post_mutator<F>(mut self, f: F) -> Self
	where
		F: Fn(T) -> T + Send + Sync + 'static,
	{
		self.post_mutator = Some(Box::new(f));
		self
	}

	/// Build the Value, validating and storing a non-null default
	pub fn build(self) -> SokResult<Value<T>> {
		self.rules.check_config()?;

		let mut value = Value {
			name: self.name,
			description: self.description,
			current: None,
			rules: self.rules,
			extra_validator: self.extra_validator.unwrap_or_else(|| Box::new(|_: &T| true)),
			pre_mutator: self.pre_mutator.unwrap_or_else(|| Box::new(|raw: RawValue| raw)),
			post_mutator: self.post_mutator.unwrap_or_else(|| Box::new(|v: T| v)),
		};

		if let Some(default) = self.default {
			value.current = value.accept(default)?.map(&value.post_mutator);
		}

		Ok(value)
	}
}

impl<N> ValueBuilder<N>
where
	N: ValueType<Rules = Bounds<N>>,
{
	/// Set the inclusive lower bound
	pub fn min_value(mut self, min: impl Into<N>) -> Self {
		self.rules.min = Some(min.into());
		self
	}

	/// Set the inclusive upper bound
	pub fn max_value(mut self, max: impl Into<N>) -> Self {
		self.rules.max = Some(max.into());
		self
	}
}

impl ValueBuilder<Vec<RawValue>> {
	/// Require every element to be of this kind
	pub fn element_type(mut self, kind: ValueKind) -> Self {
		self.rules.element_type = Some(kind);
		self
	}
}


// vim: ts=4
