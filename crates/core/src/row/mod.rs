// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

mod encoded;
mod layout;

pub use encoded::EncodedRow;
pub use layout::{Field, RowLayout, RowLayoutInner, column_offset, row_size};

/// Position of a row within its table, in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RowNumber(pub usize);

impl Display for RowNumber {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		Display::fmt(&self.0, f)
	}
}

impl From<usize> for RowNumber {
	fn from(value: usize) -> Self {
		Self(value)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowState {
	/// Allocated and zeroed, no value written yet
	Uninitialized,
	Populated,
}

/// One record: an encoded buffer laid out by the owning table's columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
	pub(crate) number: RowNumber,
	pub(crate) state: RowState,
	pub(crate) encoded: EncodedRow,
}

impl Row {
	pub(crate) fn new(number: RowNumber, encoded: EncodedRow) -> Self {
		Self {
			number,
			state: RowState::Uninitialized,
			encoded,
		}
	}

	pub fn number(&self) -> RowNumber {
		self.number
	}

	pub fn state(&self) -> RowState {
		self.state
	}

	pub fn is_new(&self) -> bool {
		self.state == RowState::Uninitialized
	}

	pub fn encoded(&self) -> &EncodedRow {
		&self.encoded
	}
}
