// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

use tracing::{error, info};
use zdb::{
	Column, ConditionKind, Database, DatabaseConfig, Query, TracingBuilder, describe_database, describe_row,
};

const NAME: usize = 1;
const AGE: usize = 2;

fn tracing_configuration(tracing: TracingBuilder) -> TracingBuilder {
	tracing.with_filter("info,zdb_core=debug,zdb_engine=debug").with_ansi(true).with_target(false)
}

fn run() -> zdb::Result<()> {
	let mut db = Database::new("Company", DatabaseConfig::default())?;
	let standard = db.registry().standard().clone();

	let employees = db.create_table(
		"Employees",
		vec![
			Column::new("ID", standard.int.clone(), true)?,
			Column::new("Name", standard.varchar.clone(), false)?,
			Column::new("Age", standard.int.clone(), false)?,
			Column::new("Salary", standard.float.clone(), false)?,
			Column::new("Active", standard.boolean.clone(), false)?,
		],
	)?;

	for (name, age, salary, active) in [
		("Breckin", "30", "34000.00", "1"),
		("Bob", "22", "15600.00", "1"),
		("Jane", "45", "45000.00", "1"),
		("John", "35", "95600.00", "0"),
	] {
		let row = employees.insert_row();
		employees.update_row(row, &[None, Some(name), Some(age), Some(salary), Some(active)])?;
	}

	println!("{}", describe_database(&db));

	let rows = {
		let mut query = Query::new(&db);
		query.add_table("Employees")?;
		query.add_condition(ConditionKind::Eq, NAME, &standard.varchar, Some("Jane"))?;
		query.execute()?.collect_rows()?
	};

	for row in rows {
		let Some(employees) = db.table_mut("Employees") else {
			break;
		};
		let age = match employees.get_value(row, AGE)? {
			zdb::Value::Int4(age) => age,
			other => {
				error!(value = %other, "unexpected age");
				continue;
			}
		};
		employees.update_row_values(row, &[None, None, Some(zdb::Value::int4(age + 1)), None, None])?;
		info!(row = %row, from = age, to = age + 1, "birthday");
		println!("{}", describe_row(employees, row));
	}

	db.drop_all();
	Ok(())
}

fn main() {
	if let Err(err) = tracing_configuration(TracingBuilder::new()).try_init() {
		eprintln!("{}", err);
	}

	if let Err(err) = run() {
		error!(code = %err.code, "playground failed");
		eprintln!("{}", err);
		std::process::exit(1);
	}
}
