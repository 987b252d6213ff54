// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod describe;
pub mod error;
mod query;

pub use error::QueryError;
pub use query::{Condition, ConditionKind, Query, Recordset};
