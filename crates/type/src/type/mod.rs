// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Type descriptors: named bundles of the functions that measure, store,
//! compare and convert the values of one kind.
//!
//! `compare`, `size` and `to_string` are mandatory. `copy` and `load` form the
//! storage codec of a type and are registered together. `from_string` and
//! `next_value` are optional; a type without `next_value` cannot back an
//! auto-increment column.

use std::{
	cmp::Ordering,
	fmt::{Debug, Display, Formatter},
	sync::Arc,
};

use serde::{Deserialize, Serialize};

use crate::{
	constants::MAX_NAME_LENGTH,
	err,
	error::diagnostic::{
		argument::{buffer_too_small, invalid_size, missing_argument},
		definition::{missing_operation, type_name_empty, type_name_too_long, unpaired_codec},
		r#type::{operation_unsupported, per_value_size_unsupported},
	},
	return_error,
	value::Value,
};

pub mod boolean;
pub mod float;
pub mod int;
pub mod varchar;

pub type CompareFn = fn(&Value, &Value) -> crate::Result<Ordering>;
pub type SizeFn = fn(Option<&Value>) -> crate::Result<usize>;
pub type CopyFn = fn(&mut [u8], &Value) -> crate::Result<()>;
pub type LoadFn = fn(&[u8]) -> crate::Result<Value>;
pub type FromStringFn = fn(Option<&str>) -> crate::Result<Value>;
pub type ToStringFn = fn(&Value) -> crate::Result<String>;
pub type NextValueFn = fn(Option<&Value>) -> crate::Result<Value>;

/// The function slots of a type descriptor.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
	Compare,
	Size,
	Copy,
	Load,
	FromString,
	ToString,
	NextValue,
}

impl Display for Operation {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Operation::Compare => f.write_str("compare"),
			Operation::Size => f.write_str("size"),
			Operation::Copy => f.write_str("copy"),
			Operation::Load => f.write_str("load"),
			Operation::FromString => f.write_str("from string"),
			Operation::ToString => f.write_str("to string"),
			Operation::NextValue => f.write_str("next value"),
		}
	}
}

/// A shared handle to an immutable type definition.
///
/// Columns reference descriptors, they never own them. Two handles are equal
/// only when they point at the same definition.
#[derive(Clone)]
pub struct TypeDescriptor(Arc<TypeDescriptorInner>);

struct TypeDescriptorInner {
	name: String,
	compare: CompareFn,
	size: SizeFn,
	copy: Option<CopyFn>,
	load: Option<LoadFn>,
	from_string: Option<FromStringFn>,
	to_string: ToStringFn,
	next_value: Option<NextValueFn>,
}

impl PartialEq for TypeDescriptor {
	fn eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.0, &other.0)
	}
}

impl Eq for TypeDescriptor {}

impl Debug for TypeDescriptor {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TypeDescriptor")
			.field("name", &self.0.name)
			.field("copy", &self.0.copy.is_some())
			.field("from_string", &self.0.from_string.is_some())
			.field("next_value", &self.0.next_value.is_some())
			.finish()
	}
}

impl Display for TypeDescriptor {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.0.name)
	}
}

impl TypeDescriptor {
	pub fn builder(name: impl Into<String>) -> TypeDescriptorBuilder {
		TypeDescriptorBuilder::new(name)
	}

	pub fn name(&self) -> &str {
		&self.0.name
	}

	pub fn supports(&self, operation: Operation) -> bool {
		match operation {
			Operation::Compare | Operation::Size | Operation::ToString => true,
			Operation::Copy => self.0.copy.is_some(),
			Operation::Load => self.0.load.is_some(),
			Operation::FromString => self.0.from_string.is_some(),
			Operation::NextValue => self.0.next_value.is_some(),
		}
	}

	pub fn compare(&self, a: &Value, b: &Value) -> crate::Result<Ordering> {
		if a.is_undefined() {
			return_error!(missing_argument("compare", "a"));
		}
		if b.is_undefined() {
			return_error!(missing_argument("compare", "b"));
		}
		(self.0.compare)(a, b)
	}

	/// Without a value, returns the nominal storage size of the type. Sizing a
	/// specific value is reserved for variable-size types and always fails.
	pub fn size_of(&self, value: Option<&Value>) -> crate::Result<usize> {
		if value.is_some() {
			return_error!(per_value_size_unsupported(self.name()));
		}
		(self.0.size)(None)
	}

	/// Writes `src` into the storage slot at the start of `dest`.
	pub fn copy(&self, dest: &mut [u8], src: &Value) -> crate::Result<()> {
		let Some(copy) = self.0.copy else {
			return_error!(operation_unsupported(self.name(), Operation::Copy));
		};
		if src.is_undefined() {
			return_error!(missing_argument("copy", "src"));
		}
		let size = self.size_of(None)?;
		if dest.len() < size {
			return_error!(buffer_too_small(self.name(), size, dest.len()));
		}
		copy(&mut dest[..size], src)
	}

	/// Reads the value stored in the slot at the start of `src`.
	pub fn load(&self, src: &[u8]) -> crate::Result<Value> {
		let Some(load) = self.0.load else {
			return_error!(operation_unsupported(self.name(), Operation::Load));
		};
		let size = self.size_of(None)?;
		if src.len() < size {
			return_error!(buffer_too_small(self.name(), size, src.len()));
		}
		load(&src[..size])
	}

	/// Parses `text`. No text yields the default value of the type.
	pub fn from_string(&self, text: Option<&str>) -> crate::Result<Value> {
		let Some(from_string) = self.0.from_string else {
			return_error!(operation_unsupported(self.name(), Operation::FromString));
		};
		from_string(text)
	}

	/// Two-phase conversion to text.
	///
	/// Without an output buffer the required length is returned and nothing
	/// is written. With a buffer, at most `buffer.len() - 1` bytes of text are
	/// written followed by a NUL terminator, and the number of text bytes
	/// written is returned.
	pub fn to_string(&self, value: &Value, out: Option<&mut [u8]>) -> crate::Result<usize> {
		if value.is_undefined() {
			return_error!(missing_argument("to string", "value"));
		}
		let text = (self.0.to_string)(value)?;

		let Some(buffer) = out else {
			return Ok(text.len());
		};

		if buffer.is_empty() {
			return Ok(0);
		}

		let written = text.len().min(buffer.len() - 1);
		buffer[..written].copy_from_slice(&text.as_bytes()[..written]);
		buffer[written] = 0;
		Ok(written)
	}

	/// Measures the length, then fills an exactly sized buffer.
	pub fn render(&self, value: &Value) -> crate::Result<String> {
		let length = self.to_string(value, None)?;
		let mut buffer = vec![0u8; length + 1];
		let written = self.to_string(value, Some(&mut buffer))?;
		buffer.truncate(written);
		Ok(String::from_utf8_lossy(&buffer).into_owned())
	}

	/// Produces the successor of `previous`, or the first value of the
	/// sequence when there is no previous value.
	pub fn next_value(&self, previous: Option<&Value>) -> crate::Result<Value> {
		let Some(next_value) = self.0.next_value else {
			return_error!(operation_unsupported(self.name(), Operation::NextValue));
		};
		next_value(previous.filter(|value| !value.is_undefined()))
	}

	/// Allocates a fresh value from text, checking first that the type has a
	/// usable storage size.
	pub fn new_value(&self, text: Option<&str>) -> crate::Result<Value> {
		if self.size_of(None)? == 0 {
			return err!(invalid_size(self.name()));
		}
		self.from_string(text)
	}
}

/// The slots of a built-in kind. Every built-in carries a storage codec
/// and a parser, so only `next_value` is optional.
pub(crate) struct Builtin {
	pub name: &'static str,
	pub compare: CompareFn,
	pub size: SizeFn,
	pub copy: CopyFn,
	pub load: LoadFn,
	pub from_string: FromStringFn,
	pub to_string: ToStringFn,
	pub next_value: Option<NextValueFn>,
}

impl From<Builtin> for TypeDescriptor {
	fn from(builtin: Builtin) -> Self {
		TypeDescriptor(Arc::new(TypeDescriptorInner {
			name: builtin.name.to_string(),
			compare: builtin.compare,
			size: builtin.size,
			copy: Some(builtin.copy),
			load: Some(builtin.load),
			from_string: Some(builtin.from_string),
			to_string: builtin.to_string,
			next_value: builtin.next_value,
		}))
	}
}

pub struct TypeDescriptorBuilder {
	name: String,
	compare: Option<CompareFn>,
	size: Option<SizeFn>,
	copy: Option<CopyFn>,
	load: Option<LoadFn>,
	from_string: Option<FromStringFn>,
	to_string: Option<ToStringFn>,
	next_value: Option<NextValueFn>,
}

impl TypeDescriptorBuilder {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			compare: None,
			size: None,
			copy: None,
			load: None,
			from_string: None,
			to_string: None,
			next_value: None,
		}
	}

	pub fn compare(mut self, f: CompareFn) -> Self {
		self.compare = Some(f);
		self
	}

	pub fn size(mut self, f: SizeFn) -> Self {
		self.size = Some(f);
		self
	}

	pub fn copy(mut self, f: CopyFn) -> Self {
		self.copy = Some(f);
		self
	}

	pub fn load(mut self, f: LoadFn) -> Self {
		self.load = Some(f);
		self
	}

	pub fn from_string(mut self, f: FromStringFn) -> Self {
		self.from_string = Some(f);
		self
	}

	pub fn to_string(mut self, f: ToStringFn) -> Self {
		self.to_string = Some(f);
		self
	}

	pub fn next_value(mut self, f: NextValueFn) -> Self {
		self.next_value = Some(f);
		self
	}

	pub fn build(self) -> crate::Result<TypeDescriptor> {
		if self.name.is_empty() {
			return_error!(type_name_empty());
		}
		if self.name.len() > MAX_NAME_LENGTH {
			return_error!(type_name_too_long(&self.name, MAX_NAME_LENGTH));
		}

		let Some(compare) = self.compare else {
			return_error!(missing_operation(&self.name, Operation::Compare));
		};
		let Some(size) = self.size else {
			return_error!(missing_operation(&self.name, Operation::Size));
		};
		let Some(to_string) = self.to_string else {
			return_error!(missing_operation(&self.name, Operation::ToString));
		};

		match (self.copy.is_some(), self.load.is_some()) {
			(true, false) => return_error!(unpaired_codec(&self.name, Operation::Copy, Operation::Load)),
			(false, true) => return_error!(unpaired_codec(&self.name, Operation::Load, Operation::Copy)),
			_ => {}
		}

		Ok(TypeDescriptor(Arc::new(TypeDescriptorInner {
			name: self.name,
			compare,
			size,
			copy: self.copy,
			load: self.load,
			from_string: self.from_string,
			to_string,
			next_value: self.next_value,
		})))
	}
}
