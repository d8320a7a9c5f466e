//! Loaders producing the raw `name -> value` mapping consumed by
//! [`sokconfig::Settings::set_values`].
//!
//! - **JSON** (`json.rs`): JSON text and files, nested objects flattened into
//!   dot-joined names
//! - **Env** (`env.rs`): prefixed environment variables
//!
//! Sources are combined with [`merge`], later sources taking precedence.

pub mod env;
pub mod json;

use std::collections::BTreeMap;

use sokconfig::RawValue;

pub use env::{from_env, from_env_vars, from_env_vars_os};
pub use json::{from_json_file, from_json_str};

/// Flat mapping from external name to raw value
pub type RawValues = BTreeMap<String, RawValue>;

/// Combine two sources, entries of `overlay` replacing those of `base`
pub fn merge(mut base: RawValues, overlay: RawValues) -> RawValues {
	for (name, value) in overlay {
		if base.insert(name.clone(), value).is_some() {
			tracing::debug!("Overriding setting '{}'", name);
		}
	}
	base
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_merge_overlay_wins() {
		let base = RawValues::from([
			("port".to_string(), RawValue::Int(80)),
			("host".to_string(), RawValue::String("a".into())),
		]);
		let overlay = RawValues::from([("port".to_string(), RawValue::Int(8080))]);

		let merged = merge(base, overlay);
		assert_eq!(merged.get("port"), Some(&RawValue::Int(8080)));
		assert_eq!(merged.get("host"), Some(&RawValue::String("a".into())));
	}
}

// vim: ts=4
