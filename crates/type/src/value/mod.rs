// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

mod ordered_f32;

pub use ordered_f32::{OrderedF32, OrderedFloatError};

/// A value, represented as a native Rust type.
///
/// Which operations apply to a value is decided by the type descriptor it is
/// used with, not by the variant alone: the built-in `boolean` and `int` kinds
/// share a 4-byte storage format but carry distinct variants here.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
	/// Value is not defined (think null in common programming languages)
	Undefined,
	/// A boolean: true or false.
	Boolean(bool),
	/// A 4-byte floating point
	Float4(OrderedF32),
	/// A 4-byte signed integer
	Int4(i32),
	/// A UTF-8 encoded text. Maximum 255 bytes when stored
	Utf8(String),
}

impl Value {
	pub fn undefined() -> Self {
		Value::Undefined
	}

	pub fn bool(v: impl Into<bool>) -> Self {
		Value::Boolean(v.into())
	}

	pub fn float4(v: impl Into<f32>) -> Self {
		OrderedF32::try_from(v.into()).map(Value::Float4).unwrap_or(Value::Undefined)
	}

	pub fn int4(v: impl Into<i32>) -> Self {
		Value::Int4(v.into())
	}

	pub fn utf8(v: impl Into<String>) -> Self {
		Value::Utf8(v.into())
	}

	pub fn is_undefined(&self) -> bool {
		matches!(self, Value::Undefined)
	}

	pub fn kind(&self) -> ValueKind {
		match self {
			Value::Undefined => ValueKind::Undefined,
			Value::Boolean(_) => ValueKind::Boolean,
			Value::Float4(_) => ValueKind::Float4,
			Value::Int4(_) => ValueKind::Int4,
			Value::Utf8(_) => ValueKind::Utf8,
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Boolean(true) => f.write_str("true"),
			Value::Boolean(false) => f.write_str("false"),
			Value::Float4(value) => Display::fmt(value, f),
			Value::Int4(value) => Display::fmt(value, f),
			Value::Utf8(value) => Display::fmt(value, f),
			Value::Undefined => f.write_str("undefined"),
		}
	}
}

impl From<bool> for Value {
	fn from(v: bool) -> Self {
		Value::Boolean(v)
	}
}

impl From<i32> for Value {
	fn from(v: i32) -> Self {
		Value::Int4(v)
	}
}

impl From<f32> for Value {
	fn from(v: f32) -> Self {
		Value::float4(v)
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Value::Utf8(v.to_string())
	}
}

impl From<String> for Value {
	fn from(v: String) -> Self {
		Value::Utf8(v)
	}
}

/// The variant tag of a [`Value`].
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueKind {
	Undefined,
	Boolean,
	Float4,
	Int4,
	Utf8,
}

impl Display for ValueKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			ValueKind::Undefined => f.write_str("undefined"),
			ValueKind::Boolean => f.write_str("boolean"),
			ValueKind::Float4 => f.write_str("float4"),
			ValueKind::Int4 => f.write_str("int4"),
			ValueKind::Utf8 => f.write_str("utf8"),
		}
	}
}
