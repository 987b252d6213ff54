// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tracing::{debug, instrument};
use zdb_type::TypeRegistry;

use crate::{
	column::{Column, validate_name},
	config::DatabaseConfig,
	error::{CoreError, NameKind},
	table::Table,
};

/// A named collection of tables together with the types they are built from.
#[derive(Debug, Clone)]
pub struct Database {
	name: String,
	config: DatabaseConfig,
	registry: TypeRegistry,
	tables: Vec<Table>,
}

impl Database {
	pub fn new(name: impl Into<String>, config: DatabaseConfig) -> zdb_type::Result<Self> {
		Self::with_registry(name, config, TypeRegistry::new())
	}

	pub fn with_registry(
		name: impl Into<String>,
		config: DatabaseConfig,
		registry: TypeRegistry,
	) -> zdb_type::Result<Self> {
		let name = name.into();
		config.validate()?;
		validate_name(NameKind::Database, &name, config.max_name_length)?;

		debug!(database = %name, types = registry.len(), "database created");

		Ok(Self {
			name,
			config,
			registry,
			tables: Vec::new(),
		})
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn config(&self) -> &DatabaseConfig {
		&self.config
	}

	pub fn registry(&self) -> &TypeRegistry {
		&self.registry
	}

	pub fn registry_mut(&mut self) -> &mut TypeRegistry {
		&mut self.registry
	}

	#[instrument(name = "database::create_table", level = "debug", skip(self, name, columns), fields(database = %self.name))]
	pub fn create_table(&mut self, name: impl Into<String>, columns: Vec<Column>) -> zdb_type::Result<&mut Table> {
		let name = name.into();

		if self.tables.iter().any(|table| table.name() == name) {
			return Err(CoreError::DuplicateTable {
				database: self.name.clone(),
				table: name,
			}
			.into());
		}

		let table = Table::new(name, columns, &self.config)?;

		if self.tables.len() == self.tables.capacity() {
			self.tables.reserve_exact(self.config.table_chunk_size);
		}
		self.tables.push(table);

		let index = self.tables.len() - 1;
		Ok(&mut self.tables[index])
	}

	pub fn table(&self, name: &str) -> Option<&Table> {
		self.tables.iter().find(|table| table.name() == name)
	}

	pub fn table_mut(&mut self, name: &str) -> Option<&mut Table> {
		self.tables.iter_mut().find(|table| table.name() == name)
	}

	pub fn tables(&self) -> &[Table] {
		&self.tables
	}

	/// Removes a table together with its columns and rows.
	#[instrument(name = "database::drop_table", level = "debug", skip(self), fields(database = %self.name))]
	pub fn drop_table(&mut self, name: &str) -> zdb_type::Result<()> {
		let Some(index) = self.tables.iter().position(|table| table.name() == name) else {
			return Err(CoreError::TableNotFound {
				database: self.name.clone(),
				table: name.to_string(),
			}
			.into());
		};
		let table = self.tables.remove(index);
		debug!(table = %table.name(), rows = table.len(), "table dropped");
		Ok(())
	}

	/// Drops every table. The database itself stays usable.
	#[instrument(name = "database::drop_all", level = "debug", skip(self), fields(database = %self.name))]
	pub fn drop_all(&mut self) {
		self.tables.clear();
	}
}
