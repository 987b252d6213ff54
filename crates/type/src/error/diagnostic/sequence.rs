// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::{error::diagnostic::Diagnostic, value::Value};

pub fn sequence_exhausted(type_name: &str, last: &Value) -> Diagnostic {
	Diagnostic {
		code: "SEQUENCE_001".to_string(),
		message: format!("sequence generator of type `{}` is exhausted", type_name),
		label: Some("no more values can be generated".to_string()),
		help: Some(format!("the last generated value `{}` has no successor", last)),
		notes: vec![],
		cause: None,
	}
}
