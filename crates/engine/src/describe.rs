// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Tab separated text renderings of columns, rows, tables and databases.
//!
//! Rendering never fails: a value that cannot be read or converted shows up
//! as `ERROR`, and an empty rendering as a single space so columns stay
//! aligned.

use std::fmt::Write;

use zdb_core::{Column, Database, RowNumber, Table};
use zdb_type::{TypeDescriptor, Value};

const RENDER_ERROR: &str = "ERROR";

pub fn describe_column(column: &Column) -> String {
	column.name().to_string()
}

pub fn describe_value(descriptor: &TypeDescriptor, value: &Value) -> String {
	let length = match descriptor.to_string(value, None) {
		Ok(length) => length,
		Err(_) => return RENDER_ERROR.to_string(),
	};
	if length == 0 {
		return " ".to_string();
	}

	let mut buffer = vec![0u8; length + 1];
	match descriptor.to_string(value, Some(&mut buffer)) {
		Ok(written) => {
			buffer.truncate(written);
			String::from_utf8_lossy(&buffer).into_owned()
		}
		Err(_) => RENDER_ERROR.to_string(),
	}
}

pub fn describe_row(table: &Table, row: RowNumber) -> String {
	let mut out = String::new();
	for (index, column) in table.columns().iter().enumerate() {
		match table.get_value(row, index) {
			Ok(value) => out.push_str(&describe_value(column.descriptor(), &value)),
			Err(_) => out.push_str(RENDER_ERROR),
		}
		out.push('\t');
	}
	out
}

pub fn describe_table(table: &Table) -> String {
	let mut out = String::new();
	let _ = writeln!(out, "{}", table.name());

	for column in table.columns() {
		out.push_str(&describe_column(column));
		out.push('\t');
	}
	out.push_str("\n\n");

	for row in table.rows() {
		out.push_str(&describe_row(table, row.number()));
		out.push('\n');
	}
	out
}

pub fn describe_database(database: &Database) -> String {
	let mut out = String::new();
	let _ = write!(out, "Database: {}\n\n", database.name());
	for table in database.tables() {
		out.push_str(&describe_table(table));
		out.push_str("\n\n");
	}
	out
}
