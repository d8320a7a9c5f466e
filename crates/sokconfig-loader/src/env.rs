//! Environment source
//!
//! `PREFIX_DB__PORT=5432` becomes `db.port = 5432`. Values that parse as a
//! JSON scalar or list keep that type; anything else is a string.

use std::ffi::OsString;

use sokconfig::RawValue;
use tracing::debug;

use crate::RawValues;

/// Collect prefixed variables from the process environment
pub fn from_env(prefix: &str) -> RawValues {
	from_env_vars_os(prefix, std::env::vars_os())
}

/// Collect prefixed variables, skipping any that are not valid UTF-8
pub fn from_env_vars_os<I>(prefix: &str, vars: I) -> RawValues
where
	I: IntoIterator<Item = (OsString, OsString)>,
{
	let vars = vars.into_iter().filter_map(|(key, value)| match (key.into_string(), value.into_string()) {
		(Ok(key), Ok(value)) => Some((key, value)),
		(key, _) => {
			debug!("Skipping non UTF-8 environment variable {:?}", key);
			None
		}
	});
	from_env_vars(prefix, vars)
}

/// Collect prefixed variables from an explicit list
pub fn from_env_vars<I, K, V>(prefix: &str, vars: I) -> RawValues
where
	I: IntoIterator<Item = (K, V)>,
	K: AsRef<str>,
	V: AsRef<str>,
{
	let mut values = RawValues::new();
	for (key, value) in vars {
		let Some(rest) = key.as_ref().strip_prefix(prefix) else { continue };
		if rest.is_empty() {
			continue;
		}
		let name = rest.to_lowercase().replace("__", ".");
		debug!("Setting '{}' taken from environment", name);
		values.insert(name, parse_env_value(value.as_ref()));
	}
	values
}

fn parse_env_value(value: &str) -> RawValue {
	serde_json::from_str::<serde_json::Value>(value)
		.ok()
		.and_then(|parsed| RawValue::try_from(parsed).ok())
		.unwrap_or_else(|| RawValue::String(value.to_string()))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_prefix_and_names() {
		let values = from_env_vars(
			"SOK_",
			[
				("SOK_PORT", "8080"),
				("SOK_DB__HOST", "db.local"),
				("OTHER_PORT", "1"),
				("SOK_", "ignored"),
			],
		);

		assert_eq!(values.len(), 2);
		assert_eq!(values.get("port"), Some(&RawValue::Int(8080)));
		assert_eq!(values.get("db.host"), Some(&RawValue::String("db.local".into())));
	}

	#[test]
	fn test_value_parsing() {
		assert_eq!(parse_env_value("true"), RawValue::Bool(true));
		assert_eq!(parse_env_value("0.25"), RawValue::Float(0.25));
		assert_eq!(parse_env_value("null"), RawValue::Null);
		assert_eq!(
			parse_env_value(r#"["a", 1]"#),
			RawValue::List(vec![RawValue::String("a".into()), RawValue::Int(1)])
		);
		assert_eq!(parse_env_value("hello"), RawValue::String("hello".into()));
		assert_eq!(parse_env_value(r#"{"a": 1}"#), RawValue::String(r#"{"a": 1}"#.into()));
	}

	#[cfg(unix)]
	#[test]
	fn test_skips_non_utf8_variables() {
		use std::os::unix::ffi::OsStringExt;

		let values = from_env_vars_os(
			"SOK_",
			[
				(OsString::from("UNRELATED_VAR"), OsString::from_vec(vec![0xff, 0xfe])),
				(OsString::from_vec(vec![b'S', b'O', b'K', b'_', 0xff]), OsString::from("1")),
				(OsString::from("SOK_BAD"), OsString::from_vec(vec![0xff])),
				(OsString::from("SOK_PORT"), OsString::from("9000")),
			],
		);

		assert_eq!(values.len(), 1);
		assert_eq!(values.get("port"), Some(&RawValue::Int(9000)));
	}
}

// vim: ts=4
