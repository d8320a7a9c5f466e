pub use crate::error::{Error, SokResult};
pub use crate::settings::Settings;
pub use crate::value::{
	AnyValue, BoolValue, FloatValue, IntValue, ListValue, RawValue, StringValue, Value, ValueKind,
	ValueType,
};

pub use tracing::{debug, info, warn};

// vim: ts=4
