// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	cmp::Ordering,
	fmt::{Display, Formatter},
};

use tracing::{debug, instrument};
use zdb_core::{Database, RowNumber, Table};
use zdb_type::{StandardTypes, TypeDescriptor, Value, err, error::diagnostic::cast::value_mismatch};

use crate::error::QueryError;

/// How a row value is compared against the condition value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConditionKind {
	/// Every row matches
	#[default]
	None,
	Eq,
	Ne,
	Lt,
	Gt,
	Le,
	Ge,
}

impl ConditionKind {
	/// `ordering` is the row value compared to the condition value.
	pub fn matches(self, ordering: Ordering) -> bool {
		match self {
			ConditionKind::None => true,
			ConditionKind::Eq => ordering == Ordering::Equal,
			ConditionKind::Ne => ordering != Ordering::Equal,
			ConditionKind::Lt => ordering == Ordering::Less,
			ConditionKind::Gt => ordering == Ordering::Greater,
			ConditionKind::Le => ordering != Ordering::Greater,
			ConditionKind::Ge => ordering != Ordering::Less,
		}
	}
}

impl Display for ConditionKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			ConditionKind::None => f.write_str("all"),
			ConditionKind::Eq => f.write_str("=="),
			ConditionKind::Ne => f.write_str("!="),
			ConditionKind::Lt => f.write_str("<"),
			ConditionKind::Gt => f.write_str(">"),
			ConditionKind::Le => f.write_str("<="),
			ConditionKind::Ge => f.write_str(">="),
		}
	}
}

/// A single predicate over one column.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
	pub kind: ConditionKind,
	pub column: usize,
	pub value: Value,
}

/// A scan over one table of a database, filtered by at most one condition.
#[derive(Debug)]
pub struct Query<'a> {
	database: &'a Database,
	table: Option<&'a Table>,
	condition: Option<Condition>,
}

impl<'a> Query<'a> {
	pub fn new(database: &'a Database) -> Self {
		Self {
			database,
			table: None,
			condition: None,
		}
	}

	pub fn table(&self) -> Option<&'a Table> {
		self.table
	}

	pub fn condition(&self) -> Option<&Condition> {
		self.condition.as_ref()
	}

	pub fn add_table(&mut self, name: &str) -> zdb_type::Result<()> {
		if let Some(current) = self.table {
			return Err(QueryError::MultipleTables {
				current: current.name().to_string(),
				requested: name.to_string(),
			}
			.into());
		}

		let Some(table) = self.database.table(name) else {
			return Err(QueryError::TableNotFound {
				database: self.database.name().to_string(),
				table: name.to_string(),
			}
			.into());
		};

		self.table = Some(table);
		Ok(())
	}

	/// Sets the condition, replacing any previous one. `text` is parsed by
	/// `descriptor`, which must be the type of the column.
	pub fn add_condition(
		&mut self,
		kind: ConditionKind,
		column: usize,
		descriptor: &TypeDescriptor,
		text: Option<&str>,
	) -> zdb_type::Result<()> {
		let Some(table) = self.table else {
			return Err(QueryError::NoTable.into());
		};

		let Some(target) = table.column(column) else {
			return Err(QueryError::ColumnOutOfRange {
				table: table.name().to_string(),
				column,
				columns: table.columns().len(),
			}
			.into());
		};

		if target.descriptor() != descriptor {
			return Err(QueryError::TypeMismatch {
				column: target.name().to_string(),
				expected: target.descriptor().name().to_string(),
				actual: descriptor.name().to_string(),
			}
			.into());
		}

		let value = descriptor.new_value(text)?;
		self.condition = Some(Condition {
			kind,
			column,
			value,
		});
		Ok(())
	}

	#[instrument(name = "query::execute", level = "debug", skip(self))]
	pub fn execute(&self) -> zdb_type::Result<Recordset<'a>> {
		let Some(table) = self.table else {
			return Err(QueryError::NoTable.into());
		};

		if let Some(condition) = &self.condition {
			debug!(table = %table.name(), column = condition.column, kind = %condition.kind, value = %condition.value, "filtered scan");
		}

		Ok(Recordset {
			table,
			standard: self.database.registry().standard(),
			condition: self.condition.clone(),
			current: None,
			next: 0,
		})
	}
}

/// A cursor over the rows of a table that satisfy a query.
#[derive(Debug)]
pub struct Recordset<'a> {
	table: &'a Table,
	standard: &'a StandardTypes,
	condition: Option<Condition>,
	current: Option<RowNumber>,
	next: usize,
}

impl<'a> Recordset<'a> {
	pub fn table(&self) -> &'a Table {
		self.table
	}

	/// The row the cursor is on, if any.
	pub fn row(&self) -> Option<RowNumber> {
		self.current
	}

	/// Advances to the next matching row. Returns false once the table is
	/// exhausted.
	pub fn next_result(&mut self) -> zdb_type::Result<bool> {
		while self.next < self.table.len() {
			let row = RowNumber(self.next);
			self.next += 1;

			if self.matches(row)? {
				self.current = Some(row);
				return Ok(true);
			}
		}

		self.current = None;
		Ok(false)
	}

	fn matches(&self, row: RowNumber) -> zdb_type::Result<bool> {
		let Some(condition) = &self.condition else {
			return Ok(true);
		};
		if condition.kind == ConditionKind::None {
			return Ok(true);
		}

		let value = self.table.get_value(row, condition.column)?;
		let Some(column) = self.table.column(condition.column) else {
			return Ok(false);
		};
		let ordering = column.descriptor().compare(&value, &condition.value)?;
		Ok(condition.kind.matches(ordering))
	}

	/// Reads a column of the current row, checking the requested type.
	pub fn get_value(&self, column: usize, descriptor: &TypeDescriptor) -> zdb_type::Result<Value> {
		let Some(row) = self.current else {
			return Err(QueryError::NoCurrentRow.into());
		};
		self.table.get_value_as(row, column, descriptor)
	}

	pub fn get_int(&self, column: usize) -> zdb_type::Result<i32> {
		match self.get_value(column, &self.standard.int)? {
			Value::Int4(value) => Ok(value),
			other => err!(value_mismatch(self.standard.int.name(), other.kind())),
		}
	}

	pub fn get_float(&self, column: usize) -> zdb_type::Result<f32> {
		match self.get_value(column, &self.standard.float)? {
			Value::Float4(value) => Ok(value.value()),
			other => err!(value_mismatch(self.standard.float.name(), other.kind())),
		}
	}

	pub fn get_boolean(&self, column: usize) -> zdb_type::Result<bool> {
		match self.get_value(column, &self.standard.boolean)? {
			Value::Boolean(value) => Ok(value),
			other => err!(value_mismatch(self.standard.boolean.name(), other.kind())),
		}
	}

	pub fn get_string(&self, column: usize) -> zdb_type::Result<String> {
		match self.get_value(column, &self.standard.varchar)? {
			Value::Utf8(value) => Ok(value),
			other => err!(value_mismatch(self.standard.varchar.name(), other.kind())),
		}
	}

	/// Drains the remaining matching rows.
	pub fn collect_rows(mut self) -> zdb_type::Result<Vec<RowNumber>> {
		let mut rows = Vec::new();
		while self.next_result()? {
			if let Some(row) = self.current {
				rows.push(row);
			}
		}
		Ok(rows)
	}
}
