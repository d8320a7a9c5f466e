//! Typed, self-validating configuration values and a name-bound settings registry.
//!
//! A program declares its settings on a [`Settings`] registry, each one a
//! [`Value`] with a type, optional constraints, and optional hooks. External
//! configuration arrives later as a flat `name -> RawValue` mapping and is
//! pushed through every value's validation pipeline by
//! [`Settings::set_values`].
//!
//! ```
//! use sokconfig::prelude::*;
//!
//! # fn main() -> SokResult<()> {
//! let mut settings = Settings::new()
//! 	.with("port", IntValue::builder().default(8080).min_value(1).max_value(65535).build()?)?
//! 	.with("host", StringValue::builder().build()?)?;
//!
//! settings.fill_empty_names();
//! settings.set_values([("host", RawValue::from("localhost"))])?;
//! settings.validate_values()?;
//!
//! assert_eq!(settings.get_int("port")?, Some(8080));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod prelude;
pub mod settings;
pub mod value;

pub use error::{Error, SokResult};
pub use settings::Settings;
pub use value::{
	AnyValue, BoolValue, FloatValue, IntValue, ListValue, RawValue, StringValue, Value, ValueKind,
	ValueType,
};

// vim: ts=4
