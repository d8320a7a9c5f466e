//! Declaration, name binding, completeness and bulk assignment

use std::collections::HashSet;

use crate::error::{Error, SokResult};
use crate::value::{AnyValue, RawValue, Value, ValueType};
use tracing::{debug, info, warn};

/// Ordered collection of declared values
#[derive(Debug, Default)]
pub struct Settings {
	values: Vec<(String, Box<dyn AnyValue>)>,
}

impl Settings {
	pub fn new() -> Self {
		Self { values: Vec::new() }
	}

	/// Declare a value under an identifier
	pub fn declare<V>(&mut self, identifier: impl Into<String>, value: V) -> SokResult<()>
	where
		V: AnyValue + 'static,
	{
		self.declare_boxed(identifier, Box::new(value))
	}

	/// Declare an already boxed value, e.g. one built by [`crate::value::infer`]
	pub fn declare_boxed(
		&mut self,
		identifier: impl Into<String>,
		value: Box<dyn AnyValue>,
	) -> SokResult<()> {
		let identifier = identifier.into();
		if self.contains(&identifier) {
			return Err(Error::ConfigError(format!("Setting '{}' is already declared", identifier)));
		}
		if let Some(name) = value.name() {
			if self.find_by_name(name).is_some() {
				return Err(Error::ConfigError(format!(
					"Name '{}' is already bound to another setting",
					name
				)));
			}
		}

		debug!("Declaring setting: {} ({})", identifier, value.value_type());
		self.values.push((identifier, value));
		Ok(())
	}

	/// Chaining form of [`Settings::declare`]
	pub fn with<V>(mut self, identifier: impl Into<String>, value: V) -> SokResult<Self>
	where
		V: AnyValue + 'static,
	{
		self.declare(identifier, value)?;
		Ok(self)
	}

	/// All declared values keyed by identifier, in declaration order
	pub fn get_values(&self) -> impl Iterator<Item = (&str, &(dyn AnyValue + 'static))> {
		self.values.iter().map(|(identifier, value)| (identifier.as_str(), value.as_ref()))
	}

	pub fn get_values_mut(
		&mut self,
	) -> impl Iterator<Item = (&str, &mut (dyn AnyValue + 'static))> {
		self.values.iter_mut().map(|(identifier, value)| (identifier.as_str(), value.as_mut()))
	}

	/// Bind each unnamed value to its identifier
	pub fn fill_empty_names(&mut self) {
		for (identifier, value) in &mut self.values {
			if value.bind_name_if_empty(identifier) {
				debug!("Bound setting {} to name '{}'", identifier, identifier);
			}
		}
	}

	/// Fail if two values share a bound name
	pub fn ensure_unique_names(&self) -> SokResult<()> {
		let mut seen = HashSet::new();
		for (identifier, value) in self.get_values() {
			let Some(name) = value.name() else { continue };
			if !seen.insert(name) {
				warn!("Setting {} reuses bound name '{}'", identifier, name);
				return Err(Error::ConfigError(format!(
					"Name '{}' is bound to more than one setting",
					name
				)));
			}
		}
		Ok(())
	}

	/// Fail on the first value that is still unset
	pub fn validate_values(&self) -> SokResult<()> {
		for (identifier, value) in self.get_values() {
			if !value.is_set() {
				return Err(Error::Incomplete {
					identifier: identifier.to_string(),
					name: value.name().map(str::to_string),
				});
			}
		}
		Ok(())
	}

	/// Assign external values by bound name
	///
	/// Entries are applied one by one and the first error stops the run.
	/// Entries applied before the failing one stay applied; the failing
	/// value keeps its previous content.
	pub fn set_values<I, K>(&mut self, external: I) -> SokResult<()>
	where
		I: IntoIterator<Item = (K, RawValue)>,
		K: AsRef<str>,
	{
		let mut assigned = 0usize;
		for (name, candidate) in external {
			let name = name.as_ref();
			let Some(value) = self.find_by_name_mut(name) else {
				warn!("No setting is bound to name '{}'", name);
				return Err(Error::UnknownName(name.to_string()));
			};
			if let Err(err) = value.assign_raw(candidate) {
				warn!("Rejected value for '{}': {}", name, err);
				return Err(err);
			}
			assigned += 1;
		}

		info!("Assigned {} setting value(s)", assigned);
		Ok(())
	}

	/// Typed access to a declared value
	pub fn value<T: ValueType>(&self, identifier: &str) -> Option<&Value<T>> {
		self.find(identifier)?.as_any().downcast_ref()
	}

	pub fn value_mut<T: ValueType>(&mut self, identifier: &str) -> Option<&mut Value<T>> {
		self.values
			.iter_mut()
			.find(|(id, _)| id == identifier)?
			.1
			.as_any_mut()
			.downcast_mut()
	}

	/// Current value of a declared setting, `None` while unset
	pub fn get<T: ValueType>(&self, identifier: &str) -> SokResult<Option<T>> {
		let value = self
			.find(identifier)
			.ok_or_else(|| Error::UnknownName(identifier.to_string()))?;
		value
			.as_any()
			.downcast_ref::<Value<T>>()
			.map(|typed| typed.value().cloned())
			.ok_or_else(|| Error::TypeMismatch {
				expected: T::KIND,
				found: value.value_type().name(),
			})
	}

	/// Type-safe getters
	pub fn get_int(&self, identifier: &str) -> SokResult<Option<i64>> {
		self.get(identifier)
	}

	pub fn get_float(&self, identifier: &str) -> SokResult<Option<f64>> {
		self.get(identifier)
	}

	pub fn get_bool(&self, identifier: &str) -> SokResult<Option<bool>> {
		self.get(identifier)
	}

	pub fn get_string(&self, identifier: &str) -> SokResult<Option<String>> {
		self.get(identifier)
	}

	pub fn get_list(&self, identifier: &str) -> SokResult<Option<Vec<RawValue>>> {
		self.get(identifier)
	}

	pub fn contains(&self, identifier: &str) -> bool {
		self.find(identifier).is_some()
	}

	/// Get number of declared settings
	pub fn len(&self) -> usize {
		self.values.len()
	}

	/// Check if registry is empty
	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	fn find(&self, identifier: &str) -> Option<&dyn AnyValue> {
		self.values.iter().find(|(id, _)| id == identifier).map(|(_, value)| value.as_ref())
	}

	/// First value bound to `name`
	fn find_by_name(&self, name: &str) -> Option<&dyn AnyValue> {
		self.get_values().map(|(_, value)| value).find(|value| value.name() == Some(name))
	}

	fn find_by_name_mut(&mut self, name: &str) -> Option<&mut (dyn AnyValue + 'static)> {
		self.get_values_mut().map(|(_, value)| value).find(|value| value.name() == Some(name))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::value::{IntValue, StringValue};

	fn registry() -> Settings {
		Settings::new()
			.with("a", IntValue::builder().build().expect("build"))
			.expect("declare a")
			.with("b", IntValue::builder().default(5).build().expect("build"))
			.expect("declare b")
	}

	#[test]
	fn test_declaration_order() {
		let settings = registry()
			.with("c", StringValue::builder().name("see").build().expect("build"))
			.expect("declare c");

		let identifiers: Vec<&str> = settings.get_values().map(|(id, _)| id).collect();
		assert_eq!(identifiers, vec!["a", "b", "c"]);
		assert_eq!(settings.len(), 3);
	}

	#[test]
	fn test_duplicate_identifier() {
		let mut settings = registry();
		let err = settings.declare("a", IntValue::builder().build().expect("build"));
		assert!(matches!(err, Err(Error::ConfigError(_))));
		assert_eq!(settings.len(), 2);
	}

	#[test]
	fn test_duplicate_explicit_name() {
		let mut settings = Settings::new();
		settings
			.declare("first", IntValue::builder().name("port").build().expect("build"))
			.expect("declare");
		let err = settings.declare("second", IntValue::builder().name("port").build().expect("build"));
		assert!(matches!(err, Err(Error::ConfigError(_))));
	}

	#[test]
	fn test_fill_empty_names_idempotent() {
		let mut settings = registry()
			.with("c", StringValue::builder().name("x").build().expect("build"))
			.expect("declare c");

		settings.fill_empty_names();
		let first: Vec<Option<String>> =
			settings.get_values().map(|(_, v)| v.name().map(str::to_string)).collect();
		settings.fill_empty_names();
		let second: Vec<Option<String>> =
			settings.get_values().map(|(_, v)| v.name().map(str::to_string)).collect();

		assert_eq!(first, second);
		assert_eq!(first, vec![Some("a".into()), Some("b".into()), Some("x".into())]);
	}

	#[test]
	fn test_ensure_unique_names() {
		let mut settings = registry()
			.with("c", IntValue::builder().name("a").build().expect("build"))
			.expect("name 'a' is not bound yet");
		assert!(settings.ensure_unique_names().is_ok());

		settings.fill_empty_names();
		assert!(matches!(settings.ensure_unique_names(), Err(Error::ConfigError(_))));
	}

	#[test]
	fn test_validate_values() {
		let mut settings = registry();
		settings.fill_empty_names();

		assert!(matches!(
			settings.validate_values(),
			Err(Error::Incomplete { identifier, name })
				if identifier == "a" && name.as_deref() == Some("a")
		));

		settings.set_values([("a", RawValue::Int(1))]).expect("known name");
		assert!(settings.validate_values().is_ok());
	}

	#[test]
	fn test_set_values_requires_bound_names() {
		let mut settings = registry();
		assert!(matches!(
			settings.set_values([("a", RawValue::Int(1))]),
			Err(Error::UnknownName(name)) if name == "a"
		));

		settings.fill_empty_names();
		settings.set_values([("a", RawValue::Int(1))]).expect("bound now");
		assert_eq!(settings.get_int("a").expect("declared"), Some(1));
	}

	#[test]
	fn test_set_values_unknown_name() {
		let mut settings = registry();
		settings.fill_empty_names();

		let err = settings.set_values([("unknown", RawValue::Int(1))]);
		assert!(matches!(err, Err(Error::UnknownName(name)) if name == "unknown"));
		assert_eq!(settings.get_int("a").expect("declared"), None);
		assert_eq!(settings.get_int("b").expect("declared"), Some(5));
	}

	#[test]
	fn test_set_values_stops_at_first_error() {
		let mut settings = registry();
		settings.fill_empty_names();

		let err = settings.set_values(vec![
			("a", RawValue::Int(1)),
			("b", RawValue::String("six".into())),
			("a", RawValue::Int(2)),
		]);
		assert!(matches!(err, Err(Error::TypeMismatch { .. })));
		assert_eq!(settings.get_int("a").expect("declared"), Some(1));
		assert_eq!(settings.get_int("b").expect("declared"), Some(5));
	}

	#[test]
	fn test_typed_access() {
		let mut settings = registry();
		assert!(matches!(settings.get_string("a"), Err(Error::TypeMismatch { .. })));
		assert!(matches!(settings.get_int("missing"), Err(Error::UnknownName(_))));
		assert!(settings.value::<String>("b").is_none());

		settings.value_mut::<i64>("b").expect("int value").set(6).expect("valid");
		assert_eq!(settings.value::<i64>("b").and_then(|v| v.value().copied()), Some(6));
	}
}

// vim: ts=4
