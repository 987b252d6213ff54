// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tracing_subscriber::EnvFilter;
use zdb_type::error::{Diagnostic, Error, IntoDiagnostic};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TracingFormat {
	#[default]
	Compact,
	Json,
}

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
	#[error("invalid filter directive `{directive}`: {reason}")]
	InvalidDirective {
		directive: String,
		reason: String,
	},

	#[error("a global tracing subscriber is already installed")]
	AlreadyInstalled {
		reason: String,
	},
}

impl IntoDiagnostic for LoggingError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			LoggingError::InvalidDirective {
				reason,
				..
			} => Diagnostic {
				code: "LOGGING_001".to_string(),
				message,
				label: Some("invalid directive".to_string()),
				help: Some("use a level such as `info` or a target list such as `zdb_core=trace`".to_string()),
				notes: vec![reason],
				cause: None,
			},

			LoggingError::AlreadyInstalled {
				reason,
			} => Diagnostic {
				code: "LOGGING_002".to_string(),
				message,
				label: Some("subscriber already installed".to_string()),
				help: Some("initialise tracing once per process".to_string()),
				notes: vec![reason],
				cause: None,
			},
		}
	}
}

impl From<LoggingError> for Error {
	fn from(err: LoggingError) -> Self {
		Error(err.into_diagnostic())
	}
}

/// Installs a `tracing-subscriber` formatter for the spans and events the
/// zdb crates emit. `RUST_LOG` takes precedence over the configured filter
/// unless env override is turned off.
#[derive(Debug, Clone)]
pub struct TracingBuilder {
	directive: String,
	ansi: bool,
	format: TracingFormat,
	target: bool,
	env_override: bool,
}

impl TracingBuilder {
	pub fn new() -> Self {
		Self {
			directive: "info".to_string(),
			ansi: true,
			format: TracingFormat::Compact,
			target: true,
			env_override: true,
		}
	}

	pub fn with_filter(mut self, directive: impl Into<String>) -> Self {
		self.directive = directive.into();
		self
	}

	pub fn with_ansi(mut self, ansi: bool) -> Self {
		self.ansi = ansi;
		self
	}

	pub fn with_format(mut self, format: TracingFormat) -> Self {
		self.format = format;
		self
	}

	pub fn with_target(mut self, target: bool) -> Self {
		self.target = target;
		self
	}

	pub fn with_env_override(mut self, env_override: bool) -> Self {
		self.env_override = env_override;
		self
	}

	pub fn filter(&self) -> zdb_type::Result<EnvFilter> {
		if self.env_override {
			if let Ok(filter) = EnvFilter::try_from_default_env() {
				return Ok(filter);
			}
		}
		EnvFilter::try_new(&self.directive).map_err(|err| {
			LoggingError::InvalidDirective {
				directive: self.directive.clone(),
				reason: err.to_string(),
			}
			.into()
		})
	}

	pub fn try_init(self) -> zdb_type::Result<()> {
		let filter = self.filter()?;
		let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(self.target);

		let result = match self.format {
			TracingFormat::Compact => builder.with_ansi(self.ansi).compact().try_init(),
			TracingFormat::Json => builder.with_ansi(false).json().try_init(),
		};

		result.map_err(|err| {
			LoggingError::AlreadyInstalled {
				reason: err.to_string(),
			}
			.into()
		})
	}
}

impl Default for TracingBuilder {
	fn default() -> Self {
		Self::new()
	}
}
