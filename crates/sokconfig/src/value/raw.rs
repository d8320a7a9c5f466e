//! Untyped external data and runtime type tags

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, SokResult};

/// Runtime type tag of a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
	Int,
	Float,
	Bool,
	String,
	List,
}

impl ValueKind {
	/// Get the type name for error messages
	pub fn name(self) -> &'static str {
		match self {
			ValueKind::Int => "int",
			ValueKind::Float => "float",
			ValueKind::Bool => "bool",
			ValueKind::String => "string",
			ValueKind::List => "list",
		}
	}

	/// Name of the typed value holder for this kind
	pub fn value_class(self) -> &'static str {
		match self {
			ValueKind::Int => "IntValue",
			ValueKind::Float => "FloatValue",
			ValueKind::Bool => "BoolValue",
			ValueKind::String => "StringValue",
			ValueKind::List => "ListValue",
		}
	}
}

impl fmt::Display for ValueKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Raw candidate value, as produced by a file or environment loader
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
	#[default]
	Null,
	Bool(bool), // Must be before Int to avoid bool -> int coercion
	Int(i64),   // Must be before Float so whole numbers stay integers
	Float(f64),
	String(String),
	List(Vec<RawValue>),
}

impl RawValue {
	/// Runtime kind, `None` for null
	pub fn kind(&self) -> Option<ValueKind> {
		match self {
			RawValue::Null => None,
			RawValue::Bool(_) => Some(ValueKind::Bool),
			RawValue::Int(_) => Some(ValueKind::Int),
			RawValue::Float(_) => Some(ValueKind::Float),
			RawValue::String(_) => Some(ValueKind::String),
			RawValue::List(_) => Some(ValueKind::List),
		}
	}

	/// Get the type name for error messages
	pub fn type_name(&self) -> &'static str {
		self.kind().map_or("null", ValueKind::name)
	}

	pub fn is_null(&self) -> bool {
		matches!(self, RawValue::Null)
	}
}

impl From<bool> for RawValue {
	fn from(value: bool) -> Self {
		RawValue::Bool(value)
	}
}

impl From<i64> for RawValue {
	fn from(value: i64) -> Self {
		RawValue::Int(value)
	}
}

impl From<f64> for RawValue {
	fn from(value: f64) -> Self {
		RawValue::Float(value)
	}
}

impl From<&str> for RawValue {
	fn from(value: &str) -> Self {
		RawValue::String(value.to_string())
	}
}

impl From<String> for RawValue {
	fn from(value: String) -> Self {
		RawValue::String(value)
	}
}

impl From<Vec<RawValue>> for RawValue {
	fn from(value: Vec<RawValue>) -> Self {
		RawValue::List(value)
	}
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
	fn from(value: Option<T>) -> Self {
		value.map_or(RawValue::Null, Into::into)
	}
}

impl TryFrom<serde_json::Value> for RawValue {
	type Error = Error;

	fn try_from(value: serde_json::Value) -> SokResult<Self> {
		Ok(match value {
			serde_json::Value::Null => RawValue::Null,
			serde_json::Value::Bool(b) => RawValue::Bool(b),
			serde_json::Value::Number(n) => match n.as_i64() {
				Some(i) => RawValue::Int(i),
				None => RawValue::Float(n.as_f64().ok_or_else(|| {
					Error::Parse(format!("number {} is not representable", n))
				})?),
			},
			serde_json::Value::String(s) => RawValue::String(s),
			serde_json::Value::Array(items) => RawValue::List(
				items.into_iter().map(RawValue::try_from).collect::<SokResult<Vec<_>>>()?,
			),
			serde_json::Value::Object(_) => {
				return Err(Error::Parse("objects are not supported as setting values".into()));
			}
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_deserialize_untagged() {
		let parsed: Vec<RawValue> =
			serde_json::from_str(r#"[null, true, 5, 2.5, "x", [1, "y"]]"#).expect("valid json");

		assert_eq!(
			parsed,
			vec![
				RawValue::Null,
				RawValue::Bool(true),
				RawValue::Int(5),
				RawValue::Float(2.5),
				RawValue::String("x".into()),
				RawValue::List(vec![RawValue::Int(1), RawValue::String("y".into())]),
			]
		);
	}

	#[test]
	fn test_kind_and_type_name() {
		assert_eq!(RawValue::Null.kind(), None);
		assert_eq!(RawValue::Null.type_name(), "null");
		assert_eq!(RawValue::Bool(false).kind(), Some(ValueKind::Bool));
		assert_eq!(RawValue::Float(1.0).type_name(), "float");
		assert_eq!(RawValue::List(vec![]).kind(), Some(ValueKind::List));
	}

	#[test]
	fn test_from_json_value() {
		let value = serde_json::json!({ "a": 1 });
		assert!(matches!(RawValue::try_from(value), Err(Error::Parse(_))));

		let nested = serde_json::json!([1, [true], { "b": 2 }]);
		assert!(RawValue::try_from(nested).is_err());

		let big = serde_json::json!(u64::MAX);
		assert!(matches!(RawValue::try_from(big), Ok(RawValue::Float(_))));
	}

	#[test]
	fn test_from_option() {
		assert_eq!(RawValue::from(None::<bool>), RawValue::Null);
		assert_eq!(RawValue::from(Some("on")), RawValue::String("on".into()));
	}
}

// vim: ts=4
