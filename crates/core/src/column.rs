// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use zdb_type::{Operation, TypeDescriptor, Value, constants::MAX_NAME_LENGTH};

use crate::error::{CoreError, NameKind};

/// A named, typed field of a table.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
	name: String,
	descriptor: TypeDescriptor,
	auto_increment: bool,
	/// Seed for the next generated value; an owned copy, never a view into a row
	last_inserted: Option<Value>,
}

impl Column {
	pub fn new(name: impl Into<String>, descriptor: TypeDescriptor, auto_increment: bool) -> zdb_type::Result<Self> {
		let name = name.into();
		validate_name(NameKind::Column, &name, MAX_NAME_LENGTH)?;

		if !descriptor.supports(Operation::Copy) || !descriptor.supports(Operation::Load) {
			return Err(CoreError::ColumnNotStorable {
				column: name,
				type_name: descriptor.name().to_string(),
			}
			.into());
		}

		if auto_increment && !descriptor.supports(Operation::NextValue) {
			return Err(CoreError::AutoIncrementUnsupported {
				column: name,
				type_name: descriptor.name().to_string(),
			}
			.into());
		}

		Ok(Self {
			name,
			descriptor,
			auto_increment,
			last_inserted: None,
		})
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn descriptor(&self) -> &TypeDescriptor {
		&self.descriptor
	}

	pub fn is_auto_increment(&self) -> bool {
		self.auto_increment
	}

	pub fn last_inserted_value(&self) -> Option<&Value> {
		self.last_inserted.as_ref()
	}

	pub(crate) fn set_last_inserted_value(&mut self, value: Value) {
		self.last_inserted = Some(value);
	}
}

pub(crate) fn validate_name(kind: NameKind, name: &str, limit: usize) -> zdb_type::Result<()> {
	if name.is_empty() {
		return Err(CoreError::NameEmpty {
			kind,
		}
		.into());
	}
	if name.len() > limit {
		return Err(CoreError::NameTooLong {
			kind,
			name: name.to_string(),
			limit,
		}
		.into());
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use std::cmp::Ordering;

	use zdb_type::{ErrorKind, TypeDescriptor, TypeRegistry, Value};

	use super::Column;

	#[test]
	fn test_new() {
		let types = TypeRegistry::new();
		let column = Column::new("ID", types.standard().int.clone(), true).unwrap();
		assert_eq!(column.name(), "ID");
		assert_eq!(column.descriptor(), &types.standard().int);
		assert!(column.is_auto_increment());
		assert!(column.last_inserted_value().is_none());
	}

	#[test]
	fn test_empty_name() {
		let types = TypeRegistry::new();
		let err = Column::new("", types.standard().int.clone(), false).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::InvalidDefinition);
	}

	#[test]
	fn test_name_too_long() {
		let types = TypeRegistry::new();
		let err = Column::new("c".repeat(256), types.standard().int.clone(), false).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::InvalidDefinition);
	}

	#[test]
	fn test_auto_increment_requires_sequence() {
		let types = TypeRegistry::new();
		let err = Column::new("Name", types.standard().varchar.clone(), true).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::InvalidDefinition);
		assert_eq!(err.code, "DEFINITION_012");

		let err = Column::new("Active", types.standard().boolean.clone(), true).unwrap_err();
		assert_eq!(err.code, "DEFINITION_012");
	}

	#[test]
	fn test_requires_storage_codec() {
		fn compare(_: &Value, _: &Value) -> zdb_type::Result<Ordering> {
			Ok(Ordering::Equal)
		}
		fn size(_: Option<&Value>) -> zdb_type::Result<usize> {
			Ok(1)
		}
		fn to_string(value: &Value) -> zdb_type::Result<String> {
			Ok(value.to_string())
		}

		let descriptor =
			TypeDescriptor::builder("opaque").compare(compare).size(size).to_string(to_string).build().unwrap();
		let err = Column::new("Blob", descriptor, false).unwrap_err();
		assert_eq!(err.code, "DEFINITION_013");
	}
}
