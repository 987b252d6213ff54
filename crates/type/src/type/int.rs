// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! The built-in `int` kind: a signed 32-bit integer stored little-endian.

use std::cmp::Ordering;

use crate::{
	err, error,
	error::diagnostic::{
		cast::{parse_failed, value_mismatch},
		sequence::sequence_exhausted,
	},
	r#type::{Builtin, TypeDescriptor},
	value::Value,
};

pub const NAME: &str = "int";
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
		next_value: Some(next_value),
	})
}

fn expect(value: &Value) -> crate::Result<i32> {
	match value {
		Value::Int4(value) => Ok(*value),
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
	dest[..SIZE].copy_from_slice(&expect(src)?.to_le_bytes());
	Ok(())
}

fn load(src: &[u8]) -> crate::Result<Value> {
	let mut bytes = [0u8; SIZE];
	bytes.copy_from_slice(&src[..SIZE]);
	Ok(Value::Int4(i32::from_le_bytes(bytes)))
}

fn from_string(text: Option<&str>) -> crate::Result<Value> {
	let Some(text) = text else {
		return Ok(Value::Int4(0));
	};
	text.trim().parse::<i32>().map(Value::Int4).map_err(|_| error!(parse_failed(NAME, text)))
}

fn to_string(value: &Value) -> crate::Result<String> {
	Ok(expect(value)?.to_string())
}

fn next_value(previous: Option<&Value>) -> crate::Result<Value> {
	let Some(previous) = previous else {
		return Ok(Value::Int4(0));
	};
	let last = expect(previous)?;
	match last.checked_add(1) {
		Some(next) => Ok(Value::Int4(next)),
		None => err!(sequence_exhausted(NAME, previous)),
	}
}

#[cfg(test)]
mod tests {
	use std::cmp::Ordering;

	use super::descriptor;
	use crate::{ErrorKind, Value};

	#[test]
	fn test_size() {
		assert_eq!(descriptor().size_of(None).unwrap(), 4);
	}

	#[test]
	fn test_compare() {
		let int = descriptor();
		assert_eq!(int.compare(&Value::int4(-1), &Value::int4(1)).unwrap(), Ordering::Less);
		assert_eq!(int.compare(&Value::int4(7), &Value::int4(7)).unwrap(), Ordering::Equal);
		assert_eq!(int.compare(&Value::int4(i32::MAX), &Value::int4(0)).unwrap(), Ordering::Greater);
	}

	#[test]
	fn test_compare_is_a_total_order() {
		let int = descriptor();
		let values = [Value::int4(i32::MIN), Value::int4(-7), Value::int4(0), Value::int4(3), Value::int4(i32::MAX)];
		for a in &values {
			assert_eq!(int.compare(a, a).unwrap(), Ordering::Equal);
			for b in &values {
				assert_eq!(int.compare(a, b).unwrap(), int.compare(b, a).unwrap().reverse());
			}
		}
		for window in values.windows(3) {
			assert_eq!(int.compare(&window[0], &window[1]).unwrap(), Ordering::Less);
			assert_eq!(int.compare(&window[1], &window[2]).unwrap(), Ordering::Less);
			assert_eq!(int.compare(&window[0], &window[2]).unwrap(), Ordering::Less);
		}
	}

	#[test]
	fn test_compare_wrong_variant() {
		let err = descriptor().compare(&Value::int4(1), &Value::utf8("1")).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::InvalidCast);
	}

	#[test]
	fn test_size_of_value_unsupported() {
		let err = descriptor().size_of(Some(&Value::int4(1))).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::Unsupported);
	}

	#[test]
	fn test_storage_is_little_endian() {
		let int = descriptor();
		let mut slot = [0u8; 4];
		int.copy(&mut slot, &Value::int4(0x01020304)).unwrap();
		assert_eq!(slot, [0x04, 0x03, 0x02, 0x01]);
		assert_eq!(int.load(&slot).unwrap(), Value::int4(0x01020304));
	}

	#[test]
	fn test_from_string() {
		let int = descriptor();
		assert_eq!(int.from_string(Some("45")).unwrap(), Value::int4(45));
		assert_eq!(int.from_string(Some(" -3 ")).unwrap(), Value::int4(-3));
		assert_eq!(int.from_string(None).unwrap(), Value::int4(0));
	}

	#[test]
	fn test_text_round_trip() {
		let int = descriptor();
		for value in [Value::int4(0), Value::int4(-45), Value::int4(i32::MIN), Value::int4(i32::MAX)] {
			let text = int.render(&value).unwrap();
			assert_eq!(int.from_string(Some(&text)).unwrap(), value);
		}
	}

	#[test]
	fn test_from_string_invalid() {
		let err = descriptor().from_string(Some("forty")).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::InvalidCast);
		assert!(err.message.contains("forty"));
	}

	#[test]
	fn test_next_value() {
		let int = descriptor();
		assert_eq!(int.next_value(None).unwrap(), Value::int4(0));
		assert_eq!(int.next_value(Some(&Value::int4(0))).unwrap(), Value::int4(1));
		assert_eq!(int.next_value(Some(&Value::int4(41))).unwrap(), Value::int4(42));
	}

	#[test]
	fn test_next_value_exhausted() {
		let err = descriptor().next_value(Some(&Value::int4(i32::MAX))).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::SequenceExhausted);
	}
}
