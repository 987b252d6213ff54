// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod logging;

pub use logging::{LoggingError, TracingBuilder, TracingFormat};
pub use zdb_core as core;
pub use zdb_core::{Column, Database, DatabaseConfig, Row, RowNumber, RowState, Table};
pub use zdb_engine as engine;
pub use zdb_engine::{
	ConditionKind, Query, Recordset,
	describe::{describe_column, describe_database, describe_row, describe_table, describe_value},
};
pub use zdb_type as r#type;
pub use zdb_type::{Error, ErrorKind, Operation, Result, StandardTypes, TypeDescriptor, TypeRegistry, Value};
