//! JSON source

use std::fs;
use std::path::Path;

use sokconfig::{Error, RawValue, SokResult};
use tracing::debug;

use crate::RawValues;

/// Parse a top-level JSON object into a flat mapping
///
/// Nested objects are flattened: `{"db": {"port": 1}}` yields `db.port`.
pub fn from_json_str(text: &str) -> SokResult<RawValues> {
	let root: serde_json::Value = serde_json::from_str(text)?;
	let serde_json::Value::Object(map) = root else {
		return Err(Error::ConfigError("settings document must be a JSON object".into()));
	};

	let mut values = RawValues::new();
	flatten_into(&mut values, None, map)?;
	Ok(values)
}

/// Read a JSON settings file
///
/// Lines starting with `//` are treated as comments.
pub fn from_json_file(path: impl AsRef<Path>) -> SokResult<RawValues> {
	let path = path.as_ref();
	let contents = fs::read_to_string(path)?;

	// Strip comments (lines starting with //)
	let cleaned = contents
		.lines()
		.filter(|line| !line.trim().starts_with("//"))
		.collect::<Vec<_>>()
		.join("\n");

	let values = from_json_str(&cleaned)?;
	debug!("Loaded {} setting(s) from {}", values.len(), path.display());
	Ok(values)
}

fn flatten_into(
	values: &mut RawValues,
	prefix: Option<&str>,
	map: serde_json::Map<String, serde_json::Value>,
) -> SokResult<()> {
	for (key, value) in map {
		let name = match prefix {
			Some(prefix) => format!("{}.{}", prefix, key),
			None => key,
		};
		match value {
			serde_json::Value::Object(nested) => flatten_into(values, Some(&name), nested)?,
			other => {
				let raw = RawValue::try_from(other)
					.map_err(|e| Error::Parse(format!("setting '{}': {}", name, e)))?;
				if values.contains_key(&name) {
					return Err(Error::Parse(format!("setting '{}' is defined more than once", name)));
				}
				values.insert(name, raw);
			}
		}
	}
	Ok(())
}


// vim: ts=4
