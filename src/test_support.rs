//! Record builders shared by unit tests.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::models::department::Department;
use crate::models::employee::{Address, EmergencyContact, Employee, EmployeeStatus, NewEmployee};
use crate::models::schedule::{Schedule, ScheduleStatus};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn seeded_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap()
}

pub fn employee(id: u32, first_name: &str, department: &str) -> Employee {
    Employee {
        id,
        first_name: first_name.to_string(),
        last_name: "Tester".to_string(),
        role: "Engineer".to_string(),
        department: department.to_string(),
        status: EmployeeStatus::Active,
        start_date: date(2023, 1, 1),
        email: format!("{}@example.com", first_name.to_lowercase()),
        phone: "555-0100".to_string(),
        address: Address {
            street: "1 Main St".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            zip_code: "62701".to_string(),
        },
        emergency_contact: EmergencyContact::default(),
        photo: None,
        created_at: seeded_at(),
        updated_at: seeded_at(),
    }
}

pub fn new_employee(first_name: &str, department: &str) -> NewEmployee {
    NewEmployee {
        first_name: first_name.to_string(),
        last_name: "Tester".to_string(),
        role: "Engineer".to_string(),
        department: department.to_string(),
        status: EmployeeStatus::Active,
        start_date: date(2024, 3, 1),
        email: format!("{}@example.com", first_name.to_lowercase()),
        phone: "555-0100".to_string(),
        address: Address::default(),
        emergency_contact: EmergencyContact::default(),
        photo: None,
    }
}

pub fn department(id: u32, name: &str, manager_id: Option<u32>) -> Department {
    Department {
        id,
        name: name.to_string(),
        manager_id,
        description: None,
        created_at: seeded_at(),
        updated_at: seeded_at(),
    }
}

pub fn schedule(id: u32, employee_id: u32, on: NaiveDate, status: ScheduleStatus) -> Schedule {
    Schedule {
        id,
        employee_id,
        date: on,
        status,
        start_time: "09:00".to_string(),
        end_time: "17:00".to_string(),
        created_at: seeded_at(),
        updated_at: seeded_at(),
    }
}
