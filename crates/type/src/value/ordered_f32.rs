// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	cmp::Ordering,
	fmt,
	fmt::{Display, Formatter},
	hash::{Hash, Hasher},
};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// A 4-byte float with a total order. NaN is rejected on construction.
#[repr(transparent)]
#[derive(Copy, Clone, Default)]
pub struct OrderedF32(f32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderedFloatError;

impl Display for OrderedFloatError {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str("NaN is not a valid ordered float")
	}
}

impl std::error::Error for OrderedFloatError {}

impl OrderedF32 {
	pub fn value(&self) -> f32 {
		self.0
	}
}

impl PartialEq for OrderedF32 {
	fn eq(&self, other: &Self) -> bool {
		self.0.to_bits() == other.0.to_bits()
	}
}

impl Eq for OrderedF32 {}

impl PartialOrd for OrderedF32 {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for OrderedF32 {
	fn cmp(&self, other: &Self) -> Ordering {
		self.0.total_cmp(&other.0)
	}
}

impl Hash for OrderedF32 {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.0.to_bits().hash(state);
	}
}

impl fmt::Debug for OrderedF32 {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		fmt::Debug::fmt(&self.0, f)
	}
}

impl Display for OrderedF32 {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Display::fmt(&self.0, f)
	}
}

impl From<OrderedF32> for f32 {
	fn from(v: OrderedF32) -> Self {
		v.0
	}
}

impl TryFrom<f32> for OrderedF32 {
	type Error = OrderedFloatError;

	fn try_from(f: f32) -> Result<Self, Self::Error> {
		let normalized = if f == 0.0 {
			0.0
		} else {
			f
		};
		if f.is_nan() {
			Err(OrderedFloatError)
		} else {
			Ok(OrderedF32(normalized))
		}
	}
}

impl Serialize for OrderedF32 {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_f32(self.0)
	}
}

impl<'de> Deserialize<'de> for OrderedF32 {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let value = f32::deserialize(deserializer)?;
		OrderedF32::try_from(value).map_err(de::Error::custom)
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;

	#[test]
	fn test_sorting() {
		let mut values = vec![
			OrderedF32::try_from(10.0).unwrap(),
			OrderedF32::try_from(-2.0).unwrap(),
			OrderedF32::try_from(5.0).unwrap(),
		];
		values.sort();
		let sorted: Vec<f32> = values.into_iter().map(|v| v.value()).collect();
		assert_eq!(sorted, vec![-2.0, 5.0, 10.0]);
	}

	#[test]
	fn test_normalizes_zero() {
		let pos_zero = OrderedF32::try_from(0.0).unwrap();
		let neg_zero = OrderedF32::try_from(-0.0).unwrap();

		assert_eq!(pos_zero, neg_zero);
		assert_eq!(pos_zero.cmp(&neg_zero), Ordering::Equal);

		let mut set = HashSet::new();
		set.insert(pos_zero);
		assert!(set.contains(&neg_zero));
	}

	#[test]
	fn test_debug_and_display() {
		let value = OrderedF32::try_from(1.5).unwrap();
		assert_eq!(format!("{value:?}"), "1.5");
		assert_eq!(value.to_string(), "1.5");
	}

	#[test]
	fn test_nan_fails() {
		assert!(OrderedF32::try_from(f32::NAN).is_err());
	}
}
