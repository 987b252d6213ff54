// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::error::diagnostic::Diagnostic;

/// A required argument was not supplied
pub fn missing_argument(operation: &str, argument: &str) -> Diagnostic {
	Diagnostic {
		code: "ARGUMENT_001".to_string(),
		message: format!("{} requires `{}` but none was given", operation, argument),
		label: Some(format!("missing `{}`", argument)),
		help: None,
		notes: vec![],
		cause: None,
	}
}

/// A destination or source buffer is shorter than the type's storage size
pub fn buffer_too_small(type_name: &str, required: usize, actual: usize) -> Diagnostic {
	Diagnostic {
		code: "ARGUMENT_002".to_string(),
		message: format!(
			"buffer of {} bytes is too small for type `{}` which needs {} bytes",
			actual, type_name, required
		),
		label: Some("buffer too small".to_string()),
		help: Some(format!("pass a buffer of at least {} bytes", required)),
		notes: vec![],
		cause: None,
	}
}

/// A type reported a storage size of zero bytes
pub fn invalid_size(type_name: &str) -> Diagnostic {
	Diagnostic {
		code: "ARGUMENT_003".to_string(),
		message: format!("type `{}` reports a storage size of zero bytes", type_name),
		label: Some("zero sized type".to_string()),
		help: Some("the size function of a type must return a positive byte count".to_string()),
		notes: vec![],
		cause: None,
	}
}
