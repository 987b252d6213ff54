// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

/// Fixed storage capacity of a varchar value in bytes
pub const VARCHAR_CAPACITY: usize = 255;

/// Byte limit for type, column, table and database names
pub const MAX_NAME_LENGTH: usize = 255;
