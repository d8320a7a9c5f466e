//! Loads settings from `SOK_CONFIG` and `SOK_*` variables into a demo
//! registry and reports the result.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use sokconfig::prelude::*;
use sokconfig_loader::{RawValues, from_env, from_json_file, merge};

pub struct Config {
	pub config_file: Option<PathBuf>,
	pub env_prefix: String,
}

fn declare_settings() -> SokResult<Settings> {
	Settings::new()
		.with(
			"port",
			IntValue::builder()
				.default(8080)
				.min_value(1)
				.max_value(65535)
				.description("Listening port")
				.build()?,
		)?
		.with(
			"ratio",
			FloatValue::builder()
				.default(0.5)
				.min_value(0.0)
				.max_value(1.0)
				.description("Sampling ratio")
				.build()?,
		)?
		.with("verbose", BoolValue::builder().default(false).build()?)?
		.with(
			"host",
			StringValue::builder()
				.extra_validator(|host| !host.trim().is_empty())
				.post_mutator(|host| host.trim().to_string())
				.description("Host name to bind")
				.build()?,
		)?
		.with(
			"tags",
			ListValue::builder()
				.default(Vec::<RawValue>::new())
				.element_type(ValueKind::String)
				.build()?,
		)
}

fn run(config: &Config) -> SokResult<Settings> {
	let mut settings = declare_settings()?;
	settings.fill_empty_names();
	settings.ensure_unique_names()?;

	let file_values = match &config.config_file {
		Some(path) => from_json_file(path)?,
		None => RawValues::new(),
	};
	let mut env_values = from_env(&config.env_prefix);
	// SOK_CONFIG names the file itself
	env_values.remove("config");
	settings.set_values(merge(file_values, env_values))?;
	settings.validate_values()?;

	Ok(settings)
}

fn main() -> ExitCode {
	tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.with_target(false)
		.init();

	let config = Config {
		config_file: env::var_os("SOK_CONFIG").map(PathBuf::from),
		env_prefix: "SOK_".to_string(),
	};

	match run(&config) {
		Ok(settings) => {
			for (identifier, value) in settings.get_values() {
				info!("{} = {:?}", identifier, value.raw_value());
			}
			ExitCode::SUCCESS
		}
		Err(err) => {
			tracing::error!("Settings check failed: {}", err);
			ExitCode::FAILURE
		}
	}
}

// vim: ts=4
