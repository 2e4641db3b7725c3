use log::info;
use serde::de::DeserializeOwned;

use crate::errors::AppError;
use crate::models::department::Department;
use crate::models::employee::Employee;
use crate::models::schedule::Schedule;

const EMPLOYEES: &str = include_str!("../../data/employees.json");
const DEPARTMENTS: &str = include_str!("../../data/departments.json");
const SCHEDULES: &str = include_str!("../../data/schedules.json");

pub fn employees() -> Result<Vec<Employee>, AppError> {
    parse("employees", EMPLOYEES)
}

pub fn departments() -> Result<Vec<Department>, AppError> {
    parse("departments", DEPARTMENTS)
}

pub fn schedules() -> Result<Vec<Schedule>, AppError> {
    parse("schedules", SCHEDULES)
}

fn parse<T: DeserializeOwned>(kind: &str, raw: &str) -> Result<Vec<T>, AppError> {
    let records: Vec<T> = serde_json::from_str(raw)
        .map_err(|err| AppError::DataError(format!("invalid {} seed data: {}", kind, err)))?;
    info!("loaded {} seed {}", records.len(), kind);
    Ok(records)
}
