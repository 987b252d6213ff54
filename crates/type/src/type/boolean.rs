// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! The built-in `boolean` kind, stored in the same 4-byte format as `int`
//! holding 0 or 1. Booleans do not form a sequence.

use std::cmp::Ordering;

use crate::{
	err, error,
	error::diagnostic::cast::{parse_failed, value_mismatch},
	r#type::{Builtin, TypeDescriptor},
	value::Value,
};

pub const NAME: &str = "boolean";
pub const SIZE: usize = size_of::<i32>();

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

fn expect(value: &Value) -> crate::Result<bool> {
	match value {
		Value::Boolean(value) => Ok(*value),
		other => err!(value_mismatch(NAME, other.kind())),
	}
}

fn compare(a: &Value, b: &Value) -> crate::Result<Ordering> {
	Ok(expect(a)?.cmp(&expect(b)?))
}

fn size(_: Option<&Value>) -> crate::Result<usize> {
	Ok(SIZE)
}

fn copy(dest: &mut [u8], src: &Value) -> crate::Result<()> {
	let stored = i32::from(expect(src)?);
	dest[..SIZE].copy_from_slice(&stored.to_le_bytes());
	Ok(())
}

fn load(src: &[u8]) -> crate::Result<Value> {
	let mut bytes = [0u8; SIZE];
	bytes.copy_from_slice(&src[..SIZE]);
	Ok(Value::Boolean(i32::from_le_bytes(bytes) != 0))
}

/// Accepts `true`/`false` in any case, or an integer where nonzero is true.
fn from_string(text: Option<&str>) -> crate::Result<Value> {
	let Some(text) = text else {
		return Ok(Value::Boolean(false));
	};
	let trimmed = text.trim();
	if trimmed.eq_ignore_ascii_case("true") {
		return Ok(Value::Boolean(true));
	}
	if trimmed.eq_ignore_ascii_case("false") {
		return Ok(Value::Boolean(false));
	}
	trimmed.parse::<i32>().map(|value| Value::Boolean(value != 0)).map_err(|_| error!(parse_failed(NAME, text)))
}

fn to_string(value: &Value) -> crate::Result<String> {
	Ok(if expect(value)? { "true" } else { "false" }.to_string())
}

#[cfg(test)]
mod tests {
	use std::cmp::Ordering;

	use super::descriptor;
	use crate::{ErrorKind, Operation, Value};

	#[test]
	fn test_storage_matches_int() {
		let boolean = descriptor();
		let mut slot = [0xffu8; 4];
		boolean.copy(&mut slot, &Value::bool(true)).unwrap();
		assert_eq!(slot, 1i32.to_le_bytes());
		boolean.copy(&mut slot, &Value::bool(false)).unwrap();
		assert_eq!(slot, [0, 0, 0, 0]);
	}

	#[test]
	fn test_load_nonzero_is_true() {
		assert_eq!(descriptor().load(&7i32.to_le_bytes()).unwrap(), Value::bool(true));
		assert_eq!(descriptor().load(&[0, 0, 0, 0]).unwrap(), Value::bool(false));
	}

	#[test]
	fn test_from_string() {
		let boolean = descriptor();
		assert_eq!(boolean.from_string(Some("1")).unwrap(), Value::bool(true));
		assert_eq!(boolean.from_string(Some("0")).unwrap(), Value::bool(false));
		assert_eq!(boolean.from_string(Some("TRUE")).unwrap(), Value::bool(true));
		assert_eq!(boolean.from_string(Some("false")).unwrap(), Value::bool(false));
		assert_eq!(boolean.from_string(None).unwrap(), Value::bool(false));
	}

	#[test]
	fn test_from_string_invalid() {
		let err = descriptor().from_string(Some("maybe")).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::InvalidCast);
	}

	#[test]
	fn test_compare_false_before_true() {
		assert_eq!(descriptor().compare(&Value::bool(false), &Value::bool(true)).unwrap(), Ordering::Less);
	}

	#[test]
	fn test_compare_is_antisymmetric() {
		let boolean = descriptor();
		for a in [Value::bool(false), Value::bool(true)] {
			assert_eq!(boolean.compare(&a, &a).unwrap(), Ordering::Equal);
			for b in [Value::bool(false), Value::bool(true)] {
				assert_eq!(boolean.compare(&a, &b).unwrap(), boolean.compare(&b, &a).unwrap().reverse());
			}
		}
	}

	#[test]
	fn test_text_round_trip() {
		let boolean = descriptor();
		for value in [Value::bool(true), Value::bool(false)] {
			let text = boolean.render(&value).unwrap();
			assert_eq!(boolean.from_string(Some(&text)).unwrap(), value);
		}
	}

	#[test]
	fn test_no_sequence() {
		let boolean = descriptor();
		assert!(!boolean.supports(Operation::NextValue));
		let err = boolean.next_value(None).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::Unsupported);
	}
}
