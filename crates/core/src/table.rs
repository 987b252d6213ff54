// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tracing::{debug, instrument};
use zdb_type::{Error, Operation, TypeDescriptor, Value};

use crate::{
	column::{Column, validate_name},
	config::DatabaseConfig,
	error::{CoreError, NameKind},
	row::{Row, RowLayout, RowNumber, RowState},
};

/// An ordered column list and the rows laid out by it.
#[derive(Debug, Clone)]
pub struct Table {
	name: String,
	columns: Vec<Column>,
	layout: RowLayout,
	rows: Vec<Row>,
	row_chunk_size: usize,
}

impl Table {
	pub fn new(name: impl Into<String>, columns: Vec<Column>, config: &DatabaseConfig) -> zdb_type::Result<Self> {
		let name = name.into();
		validate_name(NameKind::Table, &name, config.max_name_length)?;

		if columns.is_empty() {
			return Err(CoreError::NoColumns {
				table: name,
			}
			.into());
		}

		if columns.len() > config.max_columns {
			return Err(CoreError::TooManyColumns {
				table: name,
				count: columns.len(),
				limit: config.max_columns,
			}
			.into());
		}

		for (index, column) in columns.iter().enumerate() {
			validate_name(NameKind::Column, column.name(), config.max_name_length)?;
			if columns[..index].iter().any(|c| c.name() == column.name()) {
				return Err(CoreError::DuplicateColumn {
					table: name,
					column: column.name().to_string(),
				}
				.into());
			}
		}

		let layout = RowLayout::new(&columns)?;
		debug!(table = %name, columns = columns.len(), row_size = layout.size, "table created");

		Ok(Self {
			name,
			columns,
			layout,
			rows: Vec::new(),
			row_chunk_size: config.row_chunk_size,
		})
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn columns(&self) -> &[Column] {
		&self.columns
	}

	pub fn column(&self, index: usize) -> Option<&Column> {
		self.columns.get(index)
	}

	pub fn column_index(&self, name: &str) -> Option<usize> {
		self.columns.iter().position(|column| column.name() == name)
	}

	pub fn layout(&self) -> &RowLayout {
		&self.layout
	}

	pub fn rows(&self) -> &[Row] {
		&self.rows
	}

	pub fn row(&self, number: RowNumber) -> Option<&Row> {
		self.rows.get(number.0)
	}

	pub fn len(&self) -> usize {
		self.rows.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}

	pub fn row_size(&self) -> usize {
		self.layout.size
	}

	pub fn column_offset(&self, index: usize) -> zdb_type::Result<usize> {
		self.layout.field(index).map(|field| field.offset).ok_or_else(|| self.column_out_of_range(index))
	}

	/// Appends a zeroed row. Its values are written by a following
	/// [`update_row_values`](Self::update_row_values).
	#[instrument(name = "table::insert_row", level = "trace", skip(self), fields(table = %self.name))]
	pub fn insert_row(&mut self) -> RowNumber {
		if self.rows.len() == self.rows.capacity() {
			self.rows.reserve_exact(self.row_chunk_size);
		}
		let number = RowNumber(self.rows.len());
		self.rows.push(Row::new(number, self.layout.allocate()));
		number
	}

	/// Writes `values` into `row`, one entry per column.
	///
	/// `None` leaves a column unchanged. On a new row it writes the generated
	/// next value for an auto increment column, and the type default for any
	/// other column whose type can parse. Auto increment columns of a
	/// populated row are never rewritten.
	///
	/// Either every column is written or none is. Returns the number of rows
	/// affected.
	#[instrument(name = "table::update_row_values", level = "trace", skip(self, values), fields(table = %self.name))]
	pub fn update_row_values(&mut self, row: RowNumber, values: &[Option<Value>]) -> zdb_type::Result<usize> {
		self.check_row(row)?;
		self.check_value_count(values.len())?;

		let current = &self.rows[row.0];
		let is_new = current.is_new();
		let mut staged = current.encoded.clone();
		let mut written = Vec::with_capacity(values.len());

		for (index, (column, value)) in self.columns.iter().zip(values).enumerate() {
			let descriptor = column.descriptor();

			let value = if column.is_auto_increment() {
				if !is_new {
					continue;
				}
				if value.is_some() {
					return Err(CoreError::AutoIncrementExplicitValue {
						table: self.name.clone(),
						column: column.name().to_string(),
					}
					.into());
				}
				descriptor.next_value(column.last_inserted_value())?
			} else {
				match value {
					Some(value) => value.clone(),
					None if is_new && descriptor.supports(Operation::FromString) => {
						descriptor.from_string(None)?
					}
					None => continue,
				}
			};

			let Some(slot) = self.layout.slot_mut(&mut staged, index) else {
				return Err(self.column_out_of_range(index));
			};
			descriptor.copy(slot, &value)?;
			written.push((index, value));
		}

		let affected = usize::from(!written.is_empty());

		let target = &mut self.rows[row.0];
		target.encoded = staged;
		target.state = RowState::Populated;
		for (index, value) in written {
			self.columns[index].set_last_inserted_value(value);
		}

		Ok(affected)
	}

	/// Textual variant of [`update_row_values`](Self::update_row_values):
	/// every `Some(text)` is parsed by its column's type first. Text for an
	/// auto increment column is skipped on a populated row and rejected on a
	/// new one, the same as a typed value.
	pub fn update_row(&mut self, row: RowNumber, texts: &[Option<&str>]) -> zdb_type::Result<usize> {
		self.check_row(row)?;
		self.check_value_count(texts.len())?;

		let is_new = self.rows[row.0].is_new();
		let mut values = Vec::with_capacity(texts.len());
		for (column, text) in self.columns.iter().zip(texts) {
			let value = match text {
				None => None,
				Some(_) if column.is_auto_increment() => {
					if is_new {
						return Err(CoreError::AutoIncrementExplicitValue {
							table: self.name.clone(),
							column: column.name().to_string(),
						}
						.into());
					}
					None
				}
				Some(text) => Some(column.descriptor().from_string(Some(text))?),
			};
			values.push(value);
		}

		self.update_row_values(row, &values)
	}

	/// Inserts a row and populates it. A row that cannot be populated is
	/// discarded again.
	#[instrument(name = "table::insert", level = "debug", skip(self, values), fields(table = %self.name))]
	pub fn insert(&mut self, values: &[Option<Value>]) -> zdb_type::Result<RowNumber> {
		self.check_value_count(values.len())?;

		let number = self.insert_row();
		if let Err(err) = self.update_row_values(number, values) {
			self.rows.pop();
			return Err(err);
		}
		Ok(number)
	}

	pub fn get_value(&self, row: RowNumber, column: usize) -> zdb_type::Result<Value> {
		let slot = self.value_slot(row, column)?;
		self.columns[column].descriptor().load(slot)
	}

	/// Reads a value, failing when `descriptor` is not the column's type.
	pub fn get_value_as(&self, row: RowNumber, column: usize, descriptor: &TypeDescriptor) -> zdb_type::Result<Value> {
		let Some(target) = self.columns.get(column) else {
			return Err(self.column_out_of_range(column));
		};
		if target.descriptor() != descriptor {
			return Err(CoreError::TypeMismatch {
				column: target.name().to_string(),
				expected: target.descriptor().name().to_string(),
				actual: descriptor.name().to_string(),
			}
			.into());
		}
		self.get_value(row, column)
	}

	/// The stored bytes of one value, borrowed from the row.
	pub fn value_slot(&self, row: RowNumber, column: usize) -> zdb_type::Result<&[u8]> {
		self.check_row(row)?;
		self.layout.slot(&self.rows[row.0].encoded, column).ok_or_else(|| self.column_out_of_range(column))
	}

	fn check_row(&self, row: RowNumber) -> zdb_type::Result<()> {
		if row.0 >= self.rows.len() {
			return Err(CoreError::RowOutOfRange {
				table: self.name.clone(),
				row,
				rows: self.rows.len(),
			}
			.into());
		}
		Ok(())
	}

	fn check_value_count(&self, count: usize) -> zdb_type::Result<()> {
		if count != self.columns.len() {
			return Err(CoreError::ValueCountMismatch {
				table: self.name.clone(),
				expected: self.columns.len(),
				actual: count,
			}
			.into());
		}
		Ok(())
	}

	fn column_out_of_range(&self, column: usize) -> Error {
		CoreError::ColumnOutOfRange {
			table: self.name.clone(),
			column,
			columns: self.columns.len(),
		}
		.into()
	}
}
