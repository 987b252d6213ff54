// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! The built-in `varchar` kind: text in a fixed, NUL-padded slot.

use std::cmp::Ordering;

use crate::{
	constants::VARCHAR_CAPACITY,
	err,
	error::diagnostic::cast::value_mismatch,
	r#type::{Builtin, TypeDescriptor},
	value::Value,
};

pub const NAME: &str = "varchar";
pub const SIZE: usize = VARCHAR_CAPACITY;

pub fn descriptor() -> TypeDescriptor {
	TypeDescriptor::from(Builtin {
		name: NAME,
		compare,
		size,
		copy,
		load,
		from_string,
		to_string,
		next_value: None,
	})
}

fn expect(value: &Value) -> crate::Result<&str> {
	match value {
		Value::Utf8(value) => Ok(value.as_str()),
		other => err!(value_mismatch(NAME, other.kind())),
	}
}

/// Bytewise, like `strcmp`.
fn compare(a: &Value, b: &Value) -> crate::Result<Ordering> {
	Ok(expect(a)?.as_bytes().cmp(expect(b)?.as_bytes()))
}

fn size(_: Option<&Value>) -> crate::Result<usize> {
	Ok(SIZE)
}

/// Text longer than the slot is cut at the last char boundary that fits.
fn copy(dest: &mut [u8], src: &Value) -> crate::Result<()> {
	let text = expect(src)?;
	let mut end = text.len().min(SIZE);
	while !text.is_char_boundary(end) {
		end -= 1;
	}
	let slot = &mut dest[..SIZE];
	slot[..end].copy_from_slice(&text.as_bytes()[..end]);
	slot[end..].fill(0);
	Ok(())
}

fn load(src: &[u8]) -> crate::Result<Value> {
	let slot = &src[..SIZE];
	let end = slot.iter().position(|byte| *byte == 0).unwrap_or(SIZE);
	Ok(Value::Utf8(String::from_utf8_lossy(&slot[..end]).into_owned()))
}

fn from_string(text: Option<&str>) -> crate::Result<Value> {
	Ok(Value::Utf8(text.unwrap_or_default().to_string()))
}

fn to_string(value: &Value) -> crate::Result<String> {
	Ok(expect(value)?.to_string())
}
