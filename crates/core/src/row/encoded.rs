// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// The raw bytes of a row: column values back to back, no header and no
/// padding. Meaningless without the layout that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedRow(pub Vec<u8>);

impl Deref for EncodedRow {
	type Target = [u8];

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl EncodedRow {
	pub fn zeroed(size: usize) -> Self {
		Self(vec![0u8; size])
	}

	pub fn make_mut(&mut self) -> &mut [u8] {
		&mut self.0
	}
}
