// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};
use zdb_type::constants::MAX_NAME_LENGTH;

use crate::error::CoreError;

pub const DEFAULT_ROW_CHUNK_SIZE: usize = 128;
pub const DEFAULT_TABLE_CHUNK_SIZE: usize = 32;
pub const DEFAULT_MAX_COLUMNS: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
	/// Rows reserved each time a table runs out of room
	pub row_chunk_size: usize,
	/// Tables reserved each time a database runs out of room
	pub table_chunk_size: usize,
	pub max_columns: usize,
	/// Byte limit for database, table and column names
	pub max_name_length: usize,
}

impl DatabaseConfig {
	pub fn new() -> Self {
		Self {
			row_chunk_size: DEFAULT_ROW_CHUNK_SIZE,
			table_chunk_size: DEFAULT_TABLE_CHUNK_SIZE,
			max_columns: DEFAULT_MAX_COLUMNS,
			max_name_length: MAX_NAME_LENGTH,
		}
	}

	pub fn with_row_chunk_size(mut self, size: usize) -> Self {
		self.row_chunk_size = size;
		self
	}

	pub fn with_table_chunk_size(mut self, size: usize) -> Self {
		self.table_chunk_size = size;
		self
	}

	pub fn with_max_columns(mut self, limit: usize) -> Self {
		self.max_columns = limit;
		self
	}

	pub fn with_max_name_length(mut self, limit: usize) -> Self {
		self.max_name_length = limit;
		self
	}

	pub fn validate(&self) -> zdb_type::Result<()> {
		let fields = [
			("row_chunk_size", self.row_chunk_size),
			("table_chunk_size", self.table_chunk_size),
			("max_columns", self.max_columns),
			("max_name_length", self.max_name_length),
		];
		for (field, value) in fields {
			if value == 0 {
				return Err(CoreError::InvalidConfig {
					field,
				}
				.into());
			}
		}
		Ok(())
	}
}

impl Default for DatabaseConfig {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use zdb_type::ErrorKind;

	use super::DatabaseConfig;

	#[test]
	fn test_defaults() {
		let config = DatabaseConfig::default();
		assert_eq!(config.row_chunk_size, 128);
		assert_eq!(config.table_chunk_size, 32);
		assert_eq!(config.max_columns, 32);
		assert_eq!(config.max_name_length, 255);
		assert!(config.validate().is_ok());
	}

	#[test]
	fn test_builder() {
		let config = DatabaseConfig::new().with_row_chunk_size(4).with_table_chunk_size(2).with_max_columns(8);
		assert_eq!(config.row_chunk_size, 4);
		assert_eq!(config.table_chunk_size, 2);
		assert_eq!(config.max_columns, 8);
	}

	#[test]
	fn test_validate_rejects_zero() {
		let err = DatabaseConfig::new().with_row_chunk_size(0).validate().unwrap_err();
		assert_eq!(err.kind(), ErrorKind::InvalidDefinition);
		assert!(err.message.contains("row_chunk_size"));
	}

	#[test]
	fn test_load_partial_json() {
		let config: DatabaseConfig = serde_json::from_str(r#"{ "max_columns": 4 }"#).unwrap();
		assert_eq!(config.max_columns, 4);
		assert_eq!(config.row_chunk_size, 128);
	}
}
