// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::{error::diagnostic::Diagnostic, value::ValueKind};

/// A value of one kind was handed to a type expecting another
pub fn value_mismatch(type_name: &str, actual: ValueKind) -> Diagnostic {
	Diagnostic {
		code: "CAST_001".to_string(),
		message: format!("cannot cast {} to {}", actual, type_name),
		label: Some(format!("expected a `{}` value", type_name)),
		help: None,
		notes: vec![],
		cause: None,
	}
}

/// Text could not be parsed as a value of the type
pub fn parse_failed(type_name: &str, text: &str) -> Diagnostic {
	Diagnostic {
		code: "CAST_002".to_string(),
		message: format!("cannot cast '{}' to {}", text, type_name),
		label: Some("invalid textual value".to_string()),
		help: Some(format!("provide text that parses as `{}`", type_name)),
		notes: vec![],
		cause: None,
	}
}
