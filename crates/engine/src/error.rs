// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use zdb_type::error::{Diagnostic, Error, IntoDiagnostic};

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
	#[error("query already selects table `{current}`, cannot add `{requested}`")]
	MultipleTables {
		current: String,
		requested: String,
	},

	#[error("table `{table}` not found in database `{database}`")]
	TableNotFound {
		database: String,
		table: String,
	},

	#[error("a table must be selected before adding a condition")]
	NoTable,

	#[error("column index {column} is out of range for table `{table}`")]
	ColumnOutOfRange {
		table: String,
		column: usize,
		columns: usize,
	},

	#[error("recordset is not positioned on a row")]
	NoCurrentRow,

	#[error("column `{column}` of type `{expected}` cannot be compared with `{actual}`")]
	TypeMismatch {
		column: String,
		expected: String,
		actual: String,
	},
}

impl IntoDiagnostic for QueryError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			QueryError::MultipleTables {
				..
			} => Diagnostic {
				code: "UNSUPPORTED_010".to_string(),
				message,
				label: Some("second table in query".to_string()),
				help: Some("queries operate on a single table".to_string()),
				notes: vec!["joins are not supported".to_string()],
				cause: None,
			},

			QueryError::TableNotFound {
				..
			} => Diagnostic {
				code: "ARGUMENT_020".to_string(),
				message,
				label: Some("unknown table".to_string()),
				help: None,
				notes: vec![],
				cause: None,
			},

			QueryError::NoTable => Diagnostic {
				code: "ARGUMENT_021".to_string(),
				message,
				label: Some("no table selected".to_string()),
				help: Some("call `add_table` first".to_string()),
				notes: vec![],
				cause: None,
			},

			QueryError::ColumnOutOfRange {
				columns,
				..
			} => Diagnostic {
				code: "ARGUMENT_022".to_string(),
				message,
				label: Some("column out of range".to_string()),
				help: Some(format!("valid column indexes are 0..{}", columns)),
				notes: vec![],
				cause: None,
			},

			QueryError::NoCurrentRow => Diagnostic {
				code: "ARGUMENT_023".to_string(),
				message,
				label: Some("no current row".to_string()),
				help: Some("advance the recordset with `next_result` and check that it returned true"
					.to_string()),
				notes: vec![],
				cause: None,
			},

			QueryError::TypeMismatch {
				expected,
				..
			} => Diagnostic {
				code: "CAST_020".to_string(),
				message,
				label: Some("type mismatch".to_string()),
				help: Some(format!("use the column type `{}` for the condition value", expected)),
				notes: vec![],
				cause: None,
			},
		}
	}
}

impl From<QueryError> for Error {
	fn from(err: QueryError) -> Self {
		Error(err.into_diagnostic())
	}
}
