// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::{error::diagnostic::Diagnostic, r#type::Operation};

/// The type descriptor has no function for the requested operation
pub fn operation_unsupported(type_name: &str, operation: Operation) -> Diagnostic {
	Diagnostic {
		code: "UNSUPPORTED_001".to_string(),
		message: format!("type `{}` does not support the {} operation", type_name, operation),
		label: Some(format!("no {} function registered", operation)),
		help: Some(format!(
			"register the type with a {} function, or use a type that provides one",
			operation
		)),
		notes: vec![],
		cause: None,
	}
}

/// Sizing a specific value is reserved for variable-size types
pub fn per_value_size_unsupported(type_name: &str) -> Diagnostic {
	Diagnostic {
		code: "UNSUPPORTED_002".to_string(),
		message: format!("type `{}` cannot size an individual value", type_name),
		label: Some("per-value sizing is not available".to_string()),
		help: Some("ask for the nominal size by passing no value".to_string()),
		notes: vec!["every registered type has a fixed storage size".to_string()],
		cause: None,
	}
}
