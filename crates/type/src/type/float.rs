// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! The built-in `float` kind: an IEEE-754 single stored little-endian.

use std::cmp::Ordering;

use crate::{
	err, error,
	error::diagnostic::{
		cast::{parse_failed, value_mismatch},
		sequence::sequence_exhausted,
	},
	r#type::{Builtin, TypeDescriptor},
	value::{OrderedF32, Value},
};

pub const NAME: &str = "float";
pub const SIZE: usize = size_of::<f32>();

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

fn expect(value: &Value) -> crate::Result<OrderedF32> {
	match value {
		Value::Float4(value) => Ok(*value),
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
	dest[..SIZE].copy_from_slice(&expect(src)?.value().to_le_bytes());
	Ok(())
}

fn load(src: &[u8]) -> crate::Result<Value> {
	let mut bytes = [0u8; SIZE];
	bytes.copy_from_slice(&src[..SIZE]);
	Ok(Value::float4(f32::from_le_bytes(bytes)))
}

fn from_string(text: Option<&str>) -> crate::Result<Value> {
	let Some(text) = text else {
		return Ok(Value::float4(0.0f32));
	};
	text.trim()
		.parse::<f32>()
		.ok()
		.and_then(|value| OrderedF32::try_from(value).ok())
		.map(Value::Float4)
		.ok_or_else(|| error!(parse_failed(NAME, text)))
}

/// Six fractional digits, matching `%f`.
fn to_string(value: &Value) -> crate::Result<String> {
	Ok(format!("{:.6}", expect(value)?.value()))
}

fn next_value(previous: Option<&Value>) -> crate::Result<Value> {
	let Some(previous) = previous else {
		return Ok(Value::float4(0.0f32));
	};
	let last = expect(previous)?.value();
	let next = last + 1.0;
	if next == last || !next.is_finite() {
		return err!(sequence_exhausted(NAME, previous));
	}
	Ok(Value::float4(next))
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
		let float = descriptor();
		assert_eq!(float.compare(&Value::float4(1.5f32), &Value::float4(2.5f32)).unwrap(), Ordering::Less);
		assert_eq!(float.compare(&Value::float4(-0.0f32), &Value::float4(0.0f32)).unwrap(), Ordering::Equal);
	}

	#[test]
	fn test_compare_is_a_total_order() {
		let float = descriptor();
		let values = [Value::float4(-1.0e9f32), Value::float4(-0.25f32), Value::float4(0.0f32), Value::float4(3.5f32)];
		for a in &values {
			assert_eq!(float.compare(a, a).unwrap(), Ordering::Equal);
			for b in &values {
				assert_eq!(float.compare(a, b).unwrap(), float.compare(b, a).unwrap().reverse());
			}
		}
		for window in values.windows(3) {
			assert_eq!(float.compare(&window[0], &window[1]).unwrap(), Ordering::Less);
			assert_eq!(float.compare(&window[1], &window[2]).unwrap(), Ordering::Less);
			assert_eq!(float.compare(&window[0], &window[2]).unwrap(), Ordering::Less);
		}
	}

	#[test]
	fn test_storage() {
		let float = descriptor();
		let mut slot = [0u8; 4];
		float.copy(&mut slot, &Value::float4(34000.0f32)).unwrap();
		assert_eq!(slot, 34000.0f32.to_le_bytes());
		assert_eq!(float.load(&slot).unwrap(), Value::float4(34000.0f32));
	}

	#[test]
	fn test_to_string_six_digits() {
		assert_eq!(descriptor().render(&Value::float4(34000.0f32)).unwrap(), "34000.000000");
		assert_eq!(descriptor().render(&Value::float4(-0.5f32)).unwrap(), "-0.500000");
	}

	#[test]
	fn test_from_string() {
		let float = descriptor();
		assert_eq!(float.from_string(Some("34000.00")).unwrap(), Value::float4(34000.0f32));
		assert_eq!(float.from_string(None).unwrap(), Value::float4(0.0f32));
	}

	#[test]
	fn test_text_round_trip() {
		let float = descriptor();
		for expected in [0.0f32, -123.456, 34000.0, 0.1] {
			let text = float.render(&Value::float4(expected)).unwrap();
			let Value::Float4(parsed) = float.from_string(Some(&text)).unwrap() else {
				panic!("expected a float from {text}");
			};
			assert!((parsed.value() - expected).abs() < 0.1, "{text} parsed as {}", parsed.value());
		}
	}

	#[test]
	fn test_from_string_rejects_nan() {
		let err = descriptor().from_string(Some("NaN")).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::InvalidCast);
		let err = descriptor().from_string(Some("abc")).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::InvalidCast);
	}

	#[test]
	fn test_next_value() {
		let float = descriptor();
		assert_eq!(float.next_value(None).unwrap(), Value::float4(0.0f32));
		assert_eq!(float.next_value(Some(&Value::float4(2.0f32))).unwrap(), Value::float4(3.0f32));
	}

	#[test]
	fn test_next_value_exhausted() {
		let err = descriptor().next_value(Some(&Value::float4(16_777_216.0f32))).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::SequenceExhausted);
	}
}
