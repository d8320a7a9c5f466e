//! Error type shared by values, the settings registry and the loaders

use std::fmt;

use crate::value::ValueKind;

pub type SokResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	/// A default, candidate or dynamic read did not have the required type
	TypeMismatch { expected: ValueKind, found: &'static str },
	/// A value or registry was declared with unusable arguments
	ConfigError(String),
	/// A numeric value fell outside its inclusive bounds
	OutOfRange { value: String, min: Option<String>, max: Option<String> },
	/// A list element did not have the declared element type
	ElementType { index: usize, expected: ValueKind, found: &'static str },
	/// The caller-supplied extra validator rejected a candidate
	ValidationError(String),
	/// A declared value is still unset
	Incomplete { identifier: String, name: Option<String> },
	/// A bulk assignment key matched no bound name
	UnknownName(String),
	/// Malformed external input
	Parse(String),

	// externals
	Io(std::io::Error),
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Error::TypeMismatch { expected, found } => {
				write!(f, "type mismatch: expected {}, got {}", expected, found)
			}
			Error::ConfigError(msg) => write!(f, "configuration error: {}", msg),
			Error::OutOfRange { value, min, max } => {
				write!(f, "value {} is out of range [", value)?;
				write!(f, "{}, ", min.as_deref().unwrap_or("-inf"))?;
				write!(f, "{}]", max.as_deref().unwrap_or("+inf"))
			}
			Error::ElementType { index, expected, found } => {
				write!(f, "list element {} must be {}, got {}", index, expected, found)
			}
			Error::ValidationError(msg) => write!(f, "validation failed: {}", msg),
			Error::Incomplete { identifier, name } => write!(
				f,
				"{}/{} value is not set",
				identifier,
				name.as_deref().unwrap_or("<unbound>")
			),
			Error::UnknownName(name) => write!(f, "{} is not a valid value name", name),
			Error::Parse(msg) => write!(f, "parse error: {}", msg),
			Error::Io(e) => write!(f, "io error: {}", e),
		}
	}
}

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Error::Io(e) => Some(e),
			_ => None,
		}
	}
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl From<serde_json::Error> for Error {
	fn from(err: serde_json::Error) -> Self {
		Self::Parse(err.to_string())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_display_out_of_range() {
		let err = Error::OutOfRange { value: "11".into(), min: Some("0".into()), max: None };
		assert_eq!(err.to_string(), "value 11 is out of range [0, +inf]");
	}

	#[test]
	fn test_display_incomplete() {
		let bound = Error::Incomplete { identifier: "port".into(), name: Some("server_port".into()) };
		assert_eq!(bound.to_string(), "port/server_port value is not set");

		let unbound = Error::Incomplete { identifier: "port".into(), name: None };
		assert_eq!(unbound.to_string(), "port/<unbound> value is not set");
	}
}

// vim: ts=4
