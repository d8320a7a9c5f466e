//! Compile-time value types and their subtype-specific constraints

use std::cmp::Ordering;
use std::fmt;

use super::raw::{RawValue, ValueKind};
use crate::error::{Error, SokResult};

/// A type a [`Value`](super::Value) can hold
///
/// Conversions are strict: an integer is not accepted where a float is
/// expected, and a boolean is never an integer.
pub trait ValueType: Clone + fmt::Debug + Send + Sync + 'static {
	/// Runtime tag used for dynamic checks
	const KIND: ValueKind;

	/// Constraints checked after the base type check
	type Rules: Rules<Self>;

	/// Convert a raw candidate, handing it back unchanged on a type mismatch
	fn from_raw(raw: RawValue) -> Result<Self, RawValue>;

	fn into_raw(self) -> RawValue;
}

/// Subtype-specific constraints of a value type
pub trait Rules<T>: Default + fmt::Debug + Send + Sync + 'static {
	/// Check a well-typed, non-null candidate
	fn check(&self, value: &T) -> SokResult<()>;

	/// Check the constraints themselves when a value is built
	fn check_config(&self) -> SokResult<()> {
		Ok(())
	}
}

/// No constraints beyond the type itself
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRules;

impl<T> Rules<T> for NoRules {
	fn check(&self, _value: &T) -> SokResult<()> {
		Ok(())
	}
}

/// Inclusive numeric bounds, either side optional
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<N> {
	pub min: Option<N>,
	pub max: Option<N>,
}

impl<N> Default for Bounds<N> {
	fn default() -> Self {
		Self { min: None, max: None }
	}
}

impl<N> Bounds<N>
where
	N: PartialOrd,
{
	/// Incomparable values (NaN) are never within a bound
	fn within(&self, value: &N) -> bool {
		let above_min = self
			.min
			.as_ref()
			.is_none_or(|min| matches!(value.partial_cmp(min), Some(Ordering::Greater | Ordering::Equal)));
		let below_max = self
			.max
			.as_ref()
			.is_none_or(|max| matches!(value.partial_cmp(max), Some(Ordering::Less | Ordering::Equal)));
		above_min && below_max
	}
}

impl<N> Rules<N> for Bounds<N>
where
	N: PartialOrd + fmt::Display + fmt::Debug + Send + Sync + 'static,
{
	fn check(&self, value: &N) -> SokResult<()> {
		if self.within(value) {
			return Ok(());
		}
		Err(Error::OutOfRange {
			value: value.to_string(),
			min: self.min.as_ref().map(ToString::to_string),
			max: self.max.as_ref().map(ToString::to_string),
		})
	}

	fn check_config(&self) -> SokResult<()> {
		for bound in [&self.min, &self.max].into_iter().flatten() {
			if bound.partial_cmp(bound).is_none() {
				return Err(Error::ConfigError(format!("bound {} is not comparable", bound)));
			}
		}
		if let (Some(min), Some(max)) = (&self.min, &self.max) {
			if min > max {
				return Err(Error::ConfigError(format!(
					"min_value ({}) > max_value ({})",
					min, max
				)));
			}
		}
		Ok(())
	}
}

/// Optional element type of a list value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListRules {
	pub element_type: Option<ValueKind>,
}

impl ListRules {
	pub(crate) fn check_element(&self, index: usize, item: &RawValue) -> SokResult<()> {
		match self.element_type {
			Some(expected) if item.kind() != Some(expected) => {
				Err(Error::ElementType { index, expected, found: item.type_name() })
			}
			_ => Ok(()),
		}
	}
}

impl Rules<Vec<RawValue>> for ListRules {
	fn check(&self, value: &Vec<RawValue>) -> SokResult<()> {
		value.iter().enumerate().try_for_each(|(index, item)| self.check_element(index, item))
	}
}

impl ValueType for i64 {
	const KIND: ValueKind = ValueKind::Int;
	type Rules = Bounds<i64>;

	fn from_raw(raw: RawValue) -> Result<Self, RawValue> {
		match raw {
			RawValue::Int(i) => Ok(i),
			other => Err(other),
		}
	}

	fn into_raw(self) -> RawValue {
		RawValue::Int(self)
	}
}

impl ValueType for f64 {
	const KIND: ValueKind = ValueKind::Float;
	type Rules = Bounds<f64>;

	fn from_raw(raw: RawValue) -> Result<Self, RawValue> {
		match raw {
			RawValue::Float(f) => Ok(f),
			other => Err(other),
		}
	}

	fn into_raw(self) -> RawValue {
		RawValue::Float(self)
	}
}

impl ValueType for bool {
	const KIND: ValueKind = ValueKind::Bool;
	type Rules = NoRules;

	fn from_raw(raw: RawValue) -> Result<Self, RawValue> {
		match raw {
			RawValue::Bool(b) => Ok(b),
			other => Err(other),
		}
	}

	fn into_raw(self) -> RawValue {
		RawValue::Bool(self)
	}
}

impl ValueType for String {
	const KIND: ValueKind = ValueKind::String;
	type Rules = NoRules;

	fn from_raw(raw: RawValue) -> Result<Self, RawValue> {
		match raw {
			RawValue::String(s) => Ok(s),
			other => Err(other),
		}
	}

	fn into_raw(self) -> RawValue {
		RawValue::String(self)
	}
}

impl ValueType for Vec<RawValue> {
	const KIND: ValueKind = ValueKind::List;
	type Rules = ListRules;

	fn from_raw(raw: RawValue) -> Result<Self, RawValue> {
		match raw {
			RawValue::List(items) => Ok(items),
			other => Err(other),
		}
	}

	fn into_raw(self) -> RawValue {
		RawValue::List(self)
	}
}


// vim: ts=4
