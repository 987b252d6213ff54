// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod column;
pub mod config;
mod database;
pub mod error;
pub mod row;
mod table;

pub use column::Column;
pub use config::DatabaseConfig;
pub use database::Database;
pub use error::{CoreError, NameKind};
pub use row::{EncodedRow, Row, RowLayout, RowNumber, RowState, column_offset, row_size};
pub use table::Table;
