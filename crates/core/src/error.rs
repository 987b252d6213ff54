// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use zdb_type::error::{Diagnostic, Error, IntoDiagnostic};

use crate::row::RowNumber;

/// The kind of object a name belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
	Database,
	Table,
	Column,
}

impl Display for NameKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			NameKind::Database => f.write_str("database"),
			NameKind::Table => f.write_str("table"),
			NameKind::Column => f.write_str("column"),
		}
	}
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
	#[error("explicit value for auto increment column `{column}` in table `{table}`")]
	AutoIncrementExplicitValue {
		table: String,
		column: String,
	},

	#[error("{kind} name must not be empty")]
	NameEmpty {
		kind: NameKind,
	},

	#[error("{kind} name `{name}` exceeds {limit} bytes")]
	NameTooLong {
		kind: NameKind,
		name: String,
		limit: usize,
	},

	#[error("column `{column}` of type `{type_name}` cannot auto increment")]
	AutoIncrementUnsupported {
		column: String,
		type_name: String,
	},

	#[error("column `{column}` of type `{type_name}` cannot be stored in a row")]
	ColumnNotStorable {
		column: String,
		type_name: String,
	},

	#[error("table `{table}` must have at least one column")]
	NoColumns {
		table: String,
	},

	#[error("table `{table}` declares {count} columns, the limit is {limit}")]
	TooManyColumns {
		table: String,
		count: usize,
		limit: usize,
	},

	#[error("column `{column}` is declared twice in table `{table}`")]
	DuplicateColumn {
		table: String,
		column: String,
	},

	#[error("table `{table}` already exists in database `{database}`")]
	DuplicateTable {
		database: String,
		table: String,
	},

	#[error("configuration field `{field}` must be greater than zero")]
	InvalidConfig {
		field: &'static str,
	},

	#[error("row {row} does not exist in table `{table}`")]
	RowOutOfRange {
		table: String,
		row: RowNumber,
		rows: usize,
	},

	#[error("column index {column} is out of range for table `{table}`")]
	ColumnOutOfRange {
		table: String,
		column: usize,
		columns: usize,
	},

	#[error("column index {column} is out of range for {columns} columns")]
	ColumnIndexOutOfRange {
		column: usize,
		columns: usize,
	},

	#[error("a row of {columns} columns exceeds the addressable size")]
	RowTooLarge {
		columns: usize,
	},

	#[error("table `{table}` expects {expected} values, got {actual}")]
	ValueCountMismatch {
		table: String,
		expected: usize,
		actual: usize,
	},

	#[error("table `{table}` not found in database `{database}`")]
	TableNotFound {
		database: String,
		table: String,
	},

	#[error("cannot read column `{column}` of type `{expected}` as `{actual}`")]
	TypeMismatch {
		column: String,
		expected: String,
		actual: String,
	},
}

impl IntoDiagnostic for CoreError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			CoreError::AutoIncrementExplicitValue {
				column,
				..
			} => Diagnostic {
				code: "AUTO_INCREMENT_001".to_string(),
				message,
				label: Some("value supplied for a generated column".to_string()),
				help: Some(format!("pass no value for `{}` and let the sequence assign one", column)),
				notes: vec!["auto increment values are immutable once assigned".to_string()],
				cause: None,
			},

			CoreError::NameEmpty {
				..
			} => Diagnostic {
				code: "DEFINITION_010".to_string(),
				message,
				label: Some("empty name".to_string()),
				help: None,
				notes: vec![],
				cause: None,
			},

			CoreError::NameTooLong {
				..
			} => Diagnostic {
				code: "DEFINITION_011".to_string(),
				message,
				label: Some("name too long".to_string()),
				help: Some("use a shorter name or raise `max_name_length`".to_string()),
				notes: vec![],
				cause: None,
			},

			CoreError::AutoIncrementUnsupported {
				..
			} => Diagnostic {
				code: "DEFINITION_012".to_string(),
				message,
				label: Some("type has no sequence".to_string()),
				help: Some("auto increment requires a type with a next value operation, such as `int`"
					.to_string()),
				notes: vec![],
				cause: None,
			},

			CoreError::ColumnNotStorable {
				..
			} => Diagnostic {
				code: "DEFINITION_013".to_string(),
				message,
				label: Some("type has no storage codec".to_string()),
				help: Some("register the type with both copy and load operations".to_string()),
				notes: vec![],
				cause: None,
			},

			CoreError::NoColumns {
				..
			} => Diagnostic {
				code: "DEFINITION_014".to_string(),
				message,
				label: Some("empty column list".to_string()),
				help: None,
				notes: vec![],
				cause: None,
			},

			CoreError::TooManyColumns {
				..
			} => Diagnostic {
				code: "DEFINITION_015".to_string(),
				message,
				label: Some("column limit exceeded".to_string()),
				help: Some("raise `max_columns` in the database configuration".to_string()),
				notes: vec![],
				cause: None,
			},

			CoreError::DuplicateColumn {
				..
			} => Diagnostic {
				code: "DEFINITION_016".to_string(),
				message,
				label: Some("duplicate column".to_string()),
				help: Some("column names must be unique within a table".to_string()),
				notes: vec![],
				cause: None,
			},

			CoreError::DuplicateTable {
				..
			} => Diagnostic {
				code: "DEFINITION_017".to_string(),
				message,
				label: Some("duplicate table".to_string()),
				help: Some("drop the existing table first or choose another name".to_string()),
				notes: vec![],
				cause: None,
			},

			CoreError::InvalidConfig {
				..
			} => Diagnostic {
				code: "DEFINITION_018".to_string(),
				message,
				label: Some("invalid configuration".to_string()),
				help: None,
				notes: vec![],
				cause: None,
			},

			CoreError::RowTooLarge {
				..
			} => Diagnostic {
				code: "DEFINITION_019".to_string(),
				message,
				label: Some("row size overflow".to_string()),
				help: Some("use column types with smaller storage sizes".to_string()),
				notes: vec![],
				cause: None,
			},

			CoreError::RowOutOfRange {
				rows,
				..
			} => Diagnostic {
				code: "ARGUMENT_010".to_string(),
				message,
				label: Some("row out of range".to_string()),
				help: Some(format!("the table holds {} rows", rows)),
				notes: vec![],
				cause: None,
			},

			CoreError::ColumnOutOfRange {
				columns,
				..
			} => Diagnostic {
				code: "ARGUMENT_011".to_string(),
				message,
				label: Some("column out of range".to_string()),
				help: Some(format!("valid column indexes are 0..{}", columns)),
				notes: vec![],
				cause: None,
			},

			CoreError::ColumnIndexOutOfRange {
				columns,
				..
			} => Diagnostic {
				code: "ARGUMENT_014".to_string(),
				message,
				label: Some("column out of range".to_string()),
				help: Some(format!("valid column indexes are 0..{}", columns)),
				notes: vec![],
				cause: None,
			},

			CoreError::ValueCountMismatch {
				..
			} => Diagnostic {
				code: "ARGUMENT_012".to_string(),
				message,
				label: Some("wrong number of values".to_string()),
				help: Some("supply one entry per column, `None` leaves a column unchanged".to_string()),
				notes: vec![],
				cause: None,
			},

			CoreError::TableNotFound {
				..
			} => Diagnostic {
				code: "ARGUMENT_013".to_string(),
				message,
				label: Some("unknown table".to_string()),
				help: None,
				notes: vec![],
				cause: None,
			},

			CoreError::TypeMismatch {
				expected,
				..
			} => Diagnostic {
				code: "CAST_010".to_string(),
				message,
				label: Some("type mismatch".to_string()),
				help: Some(format!("read the column as `{}`", expected)),
				notes: vec![],
				cause: None,
			},
		}
	}
}

impl From<CoreError> for Error {
	fn from(err: CoreError) -> Self {
		Error(err.into_diagnostic())
	}
}
