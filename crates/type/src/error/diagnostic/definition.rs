// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::{error::diagnostic::Diagnostic, r#type::Operation};

/// Types must carry a name
pub fn type_name_empty() -> Diagnostic {
	Diagnostic {
		code: "DEFINITION_001".to_string(),
		message: "type name must not be empty".to_string(),
		label: Some("empty type name".to_string()),
		help: Some("give the type a symbolic name such as `int` or `varchar`".to_string()),
		notes: vec![],
		cause: None,
	}
}

pub fn type_name_too_long(name: &str, limit: usize) -> Diagnostic {
	Diagnostic {
		code: "DEFINITION_002".to_string(),
		message: format!("type name `{}` exceeds {} bytes", name, limit),
		label: Some("type name too long".to_string()),
		help: None,
		notes: vec![],
		cause: None,
	}
}

/// A type was declared without one of its mandatory functions
pub fn missing_operation(type_name: &str, operation: Operation) -> Diagnostic {
	Diagnostic {
		code: "DEFINITION_003".to_string(),
		message: format!("type `{}` is missing its {} function", type_name, operation),
		label: Some(format!("{} is mandatory", operation)),
		help: Some("every type needs compare, size and to string functions".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// Storage needs both directions of the codec
pub fn unpaired_codec(type_name: &str, present: Operation, missing: Operation) -> Diagnostic {
	Diagnostic {
		code: "DEFINITION_004".to_string(),
		message: format!("type `{}` defines {} without {}", type_name, present, missing),
		label: Some("unpaired storage functions".to_string()),
		help: Some("copy and load must be registered together".to_string()),
		notes: vec![],
		cause: None,
	}
}

pub fn type_already_registered(name: &str) -> Diagnostic {
	Diagnostic {
		code: "DEFINITION_005".to_string(),
		message: format!("a type named `{}` is already registered", name),
		label: Some("duplicate type name".to_string()),
		help: Some("type names must be unique within a registry".to_string()),
		notes: vec![],
		cause: None,
	}
}
