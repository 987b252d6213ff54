// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	ops::{Deref, DerefMut},
};

use serde::{Deserialize, Serialize};

pub mod diagnostic;
mod r#macro;
mod render;

pub use diagnostic::Diagnostic;
pub use render::DefaultRenderer;

/// Converts a domain error into the diagnostic carried by [`Error`].
pub trait IntoDiagnostic {
	fn into_diagnostic(self) -> Diagnostic;
}

impl IntoDiagnostic for Diagnostic {
	fn into_diagnostic(self) -> Diagnostic {
		self
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Error(pub Diagnostic);

impl Deref for Error {
	type Target = Diagnostic;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl DerefMut for Error {
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.0
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let out = DefaultRenderer::render_string(&self.0);
		f.write_str(out.as_str())
	}
}

impl Error {
	pub fn diagnostic(self) -> Diagnostic {
		self.0
	}

	pub fn kind(&self) -> ErrorKind {
		ErrorKind::from_code(&self.0.code)
	}
}

impl std::error::Error for Error {}

/// The failure classes every operation reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
	/// The type descriptor does not implement the requested operation
	Unsupported,
	/// A required argument is absent or out of range
	InvalidArgument,
	/// A value does not match the type it is used with
	InvalidCast,
	/// An explicit value was supplied for an auto-increment column
	AutoIncrementViolation,
	/// A type, column, table or configuration was declared incorrectly
	InvalidDefinition,
	/// A sequence has no successor for its last value
	SequenceExhausted,
	/// A diagnostic whose code carries no known prefix
	Internal,
}

impl ErrorKind {
	pub fn from_code(code: &str) -> Self {
		let prefix = code.rsplit_once('_').map(|(prefix, _)| prefix).unwrap_or(code);
		match prefix {
			"UNSUPPORTED" => ErrorKind::Unsupported,
			"ARGUMENT" => ErrorKind::InvalidArgument,
			"CAST" => ErrorKind::InvalidCast,
			"AUTO_INCREMENT" => ErrorKind::AutoIncrementViolation,
			"DEFINITION" => ErrorKind::InvalidDefinition,
			"SEQUENCE" => ErrorKind::SequenceExhausted,
			_ => ErrorKind::Internal,
		}
	}
}

impl Display for ErrorKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			ErrorKind::Unsupported => f.write_str("unsupported"),
			ErrorKind::InvalidArgument => f.write_str("invalid argument"),
			ErrorKind::InvalidCast => f.write_str("invalid cast"),
			ErrorKind::AutoIncrementViolation => f.write_str("auto increment violation"),
			ErrorKind::InvalidDefinition => f.write_str("invalid definition"),
			ErrorKind::SequenceExhausted => f.write_str("sequence exhausted"),
			ErrorKind::Internal => f.write_str("internal"),
		}
	}
}
