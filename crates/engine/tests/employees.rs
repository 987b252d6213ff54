// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use zdb_core::{Column, Database, DatabaseConfig, RowNumber};
use zdb_engine::{ConditionKind, Query, describe::describe_row};
use zdb_type::{ErrorKind, Value};

const ID: usize = 0;
const NAME: usize = 1;
const AGE: usize = 2;
const SALARY: usize = 3;
const ACTIVE: usize = 4;

fn company() -> Database {
	let mut database = Database::new("Company", DatabaseConfig::default()).unwrap();
	let standard = database.registry().standard().clone();

	let employees = database
		.create_table(
			"Employees",
			vec![
				Column::new("ID", standard.int.clone(), true).unwrap(),
				Column::new("Name", standard.varchar.clone(), false).unwrap(),
				Column::new("Age", standard.int.clone(), false).unwrap(),
				Column::new("Salary", standard.float.clone(), false).unwrap(),
				Column::new("Active", standard.boolean.clone(), false).unwrap(),
			],
		)
		.unwrap();

	for (name, age, salary, active) in [
		("Breckin", "30", "34000.00", "1"),
		("Bob", "22", "15600.00", "1"),
		("Jane", "45", "45000.00", "1"),
		("John", "35", "95600.00", "0"),
	] {
		let row = employees.insert_row();
		employees.update_row(row, &[None, Some(name), Some(age), Some(salary), Some(active)]).unwrap();
	}

	database
}

fn find_by_name(database: &Database, name: &str) -> Vec<RowNumber> {
	let varchar = database.registry().standard().varchar.clone();
	let mut query = Query::new(database);
	query.add_table("Employees").unwrap();
	query.add_condition(ConditionKind::Eq, NAME, &varchar, Some(name)).unwrap();
	query.execute().unwrap().collect_rows().unwrap()
}

#[test]
fn test_ids_follow_insertion_order() {
	let database = company();
	let employees = database.table("Employees").unwrap();
	assert_eq!(employees.len(), 4);
	for (index, name) in ["Breckin", "Bob", "Jane", "John"].into_iter().enumerate() {
		let row = RowNumber(index);
		assert_eq!(employees.get_value(row, ID).unwrap(), Value::int4(index as i32));
		assert_eq!(employees.get_value(row, NAME).unwrap(), Value::utf8(name));
	}
}

#[test]
fn test_query_by_name() {
	let database = company();
	let varchar = database.registry().standard().varchar.clone();

	let mut query = Query::new(&database);
	query.add_table("Employees").unwrap();
	query.add_condition(ConditionKind::Eq, NAME, &varchar, Some("Jane")).unwrap();

	let mut recordset = query.execute().unwrap();
	assert!(recordset.next_result().unwrap());
	assert_eq!(recordset.get_int(ID).unwrap(), 2);
	assert_eq!(recordset.get_string(NAME).unwrap(), "Jane");
	assert_eq!(recordset.get_int(AGE).unwrap(), 45);
	assert!(!recordset.next_result().unwrap());
}

#[test]
fn test_update_age() {
	let mut database = company();

	let rows = find_by_name(&database, "Jane");
	assert_eq!(rows, vec![RowNumber(2)]);
	let jane = rows[0];

	let employees = database.table_mut("Employees").unwrap();
	let affected = employees.update_row(jane, &[None, None, Some("46"), None, None]).unwrap();
	assert_eq!(affected, 1);

	let employees = database.table("Employees").unwrap();
	assert_eq!(employees.get_value(jane, ID).unwrap(), Value::int4(2));
	assert_eq!(employees.get_value(jane, NAME).unwrap(), Value::utf8("Jane"));
	assert_eq!(employees.get_value(jane, AGE).unwrap(), Value::int4(46));
	assert_eq!(employees.get_value(jane, SALARY).unwrap(), Value::float4(45000.0f32));
	assert_eq!(employees.get_value(jane, ACTIVE).unwrap(), Value::bool(true));

	assert_eq!(describe_row(employees, jane), "2\tJane\t46\t45000.000000\ttrue\t");
}

#[test]
fn test_explicit_id_is_rejected() {
	let mut database = company();
	let employees = database.table_mut("Employees").unwrap();

	let err = employees.insert(&[Some(Value::int4(10)), Some(Value::utf8("Eve")), None, None, None]).unwrap_err();
	assert_eq!(err.kind(), ErrorKind::AutoIncrementViolation);
	assert_eq!(employees.len(), 4);

	let row = employees.insert(&[None, Some(Value::utf8("Eve")), None, None, None]).unwrap();
	assert_eq!(employees.get_value(row, ID).unwrap(), Value::int4(4));
}

#[test]
fn test_inactive_employees() {
	let database = company();
	let boolean = database.registry().standard().boolean.clone();

	let mut query = Query::new(&database);
	query.add_table("Employees").unwrap();
	query.add_condition(ConditionKind::Eq, ACTIVE, &boolean, Some("0")).unwrap();

	let mut recordset = query.execute().unwrap();
	assert!(recordset.next_result().unwrap());
	assert_eq!(recordset.get_string(NAME).unwrap(), "John");
	assert!(!recordset.get_boolean(ACTIVE).unwrap());
	assert_eq!(recordset.get_float(SALARY).unwrap(), 95600.0);
	assert!(!recordset.next_result().unwrap());
}

#[test]
fn test_drop_database_tables() {
	let mut database = company();
	database.drop_all();
	assert!(database.table("Employees").is_none());

	let err = Query::new(&database).add_table("Employees").unwrap_err();
	assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}
