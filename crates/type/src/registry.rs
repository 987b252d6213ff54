// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use indexmap::IndexMap;

use crate::{
	error::diagnostic::definition::type_already_registered,
	return_error,
	r#type::{TypeDescriptor, boolean, float, int, varchar},
};

/// Handles to the four built-in kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardTypes {
	pub boolean: TypeDescriptor,
	pub int: TypeDescriptor,
	pub float: TypeDescriptor,
	pub varchar: TypeDescriptor,
}

impl StandardTypes {
	pub fn new() -> Self {
		Self {
			boolean: boolean::descriptor(),
			int: int::descriptor(),
			float: float::descriptor(),
			varchar: varchar::descriptor(),
		}
	}
}

impl Default for StandardTypes {
	fn default() -> Self {
		Self::new()
	}
}

/// Named type descriptors, in registration order.
#[derive(Debug, Clone)]
pub struct TypeRegistry {
	types: IndexMap<String, TypeDescriptor>,
	standard: StandardTypes,
}

impl TypeRegistry {
	/// A registry holding the built-in kinds.
	pub fn new() -> Self {
		let standard = StandardTypes::new();
		let mut types = IndexMap::new();
		for descriptor in [&standard.boolean, &standard.int, &standard.float, &standard.varchar] {
			types.insert(descriptor.name().to_string(), descriptor.clone());
		}
		Self {
			types,
			standard,
		}
	}

	pub fn standard(&self) -> &StandardTypes {
		&self.standard
	}

	pub fn register(&mut self, descriptor: TypeDescriptor) -> crate::Result<TypeDescriptor> {
		if self.types.contains_key(descriptor.name()) {
			return_error!(type_already_registered(descriptor.name()));
		}
		self.types.insert(descriptor.name().to_string(), descriptor.clone());
		Ok(descriptor)
	}

	pub fn get(&self, name: &str) -> Option<&TypeDescriptor> {
		self.types.get(name)
	}

	pub fn iter(&self) -> impl Iterator<Item = &TypeDescriptor> {
		self.types.values()
	}

	pub fn len(&self) -> usize {
		self.types.len()
	}

	pub fn is_empty(&self) -> bool {
		self.types.is_empty()
	}
}

impl Default for TypeRegistry {
	fn default() -> Self {
		Self::new()
	}
}
