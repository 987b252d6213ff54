// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{ops::Deref, sync::Arc};

use super::encoded::EncodedRow;
use crate::{column::Column, error::CoreError};

/// Byte size of a row for `columns`: the sum of every column type's
/// nominal size.
pub fn row_size(columns: &[Column]) -> zdb_type::Result<usize> {
	let mut size: usize = 0;
	for column in columns {
		size = size.checked_add(column.descriptor().size_of(None)?).ok_or(CoreError::RowTooLarge {
			columns: columns.len(),
		})?;
	}
	Ok(size)
}

/// Byte offset of column `index`: the sum of the sizes of all columns
/// before it.
pub fn column_offset(columns: &[Column], index: usize) -> zdb_type::Result<usize> {
	if index >= columns.len() {
		return Err(CoreError::ColumnIndexOutOfRange {
			column: index,
			columns: columns.len(),
		}
		.into());
	}
	row_size(&columns[..index])
}

/// Offsets and sizes of every column of a table, computed once when the
/// table is created.
#[derive(Debug, Clone)]
pub struct RowLayout(Arc<RowLayoutInner>);

impl Deref for RowLayout {
	type Target = RowLayoutInner;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl RowLayout {
	pub fn new(columns: &[Column]) -> zdb_type::Result<Self> {
		Ok(Self(Arc::new(RowLayoutInner::new(columns)?)))
	}
}

#[derive(Debug)]
pub struct RowLayoutInner {
	pub fields: Vec<Field>,
	/// size of a row in bytes
	pub size: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
	pub offset: usize,
	pub size: usize,
}

impl RowLayoutInner {
	fn new(columns: &[Column]) -> zdb_type::Result<Self> {
		let mut offset: usize = 0;
		let mut fields = Vec::with_capacity(columns.len());

		for column in columns {
			let size = column.descriptor().size_of(None)?;
			fields.push(Field {
				offset,
				size,
			});
			offset = offset.checked_add(size).ok_or(CoreError::RowTooLarge {
				columns: columns.len(),
			})?;
		}

		Ok(Self {
			fields,
			size: offset,
		})
	}

	pub fn allocate(&self) -> EncodedRow {
		EncodedRow::zeroed(self.size)
	}

	pub fn field(&self, index: usize) -> Option<&Field> {
		self.fields.get(index)
	}

	pub fn slot<'a>(&self, row: &'a EncodedRow, index: usize) -> Option<&'a [u8]> {
		let field = self.field(index)?;
		row.get(field.offset..field.offset + field.size)
	}

	pub fn slot_mut<'a>(&self, row: &'a mut EncodedRow, index: usize) -> Option<&'a mut [u8]> {
		let field = *self.field(index)?;
		row.make_mut().get_mut(field.offset..field.offset + field.size)
	}
}
