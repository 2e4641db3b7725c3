use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::models::department::Department;
use crate::models::employee::{Employee, EmployeeStatus};
use crate::views::departments::roster_size;

pub const NEW_HIRE_WINDOW_DAYS: i64 = 30;
pub const RECENT_HIRES_LIMIT: usize = 6;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_employees: usize,
    pub active_employees: usize,
    pub on_leave: usize,
    pub new_hires: usize,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentHeadcount {
    #[serde(rename = "Id")]
    pub id: u32,
    pub name: String,
    pub employees: usize,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub stats: DashboardStats,
    pub departments: Vec<DepartmentHeadcount>,
    pub recent_hires: Vec<Employee>,
}

impl Dashboard {
    pub fn build(employees: &[Employee], departments: &[Department], today: NaiveDate) -> Self {
        Dashboard {
            stats: stats(employees, today),
            departments: headcounts(departments, employees),
            recent_hires: recent_hires(employees),
        }
    }
}

pub fn stats(employees: &[Employee], today: NaiveDate) -> DashboardStats {
    let window_start = today - Duration::days(NEW_HIRE_WINDOW_DAYS);
    DashboardStats {
        total_employees: employees.len(),
        active_employees: count_status(employees, EmployeeStatus::Active),
        on_leave: count_status(employees, EmployeeStatus::OnLeave),
        new_hires: employees
            .iter()
            .filter(|employee| employee.start_date >= window_start)
            .count(),
    }
}

pub(crate) fn count_status(employees: &[Employee], status: EmployeeStatus) -> usize {
    employees
        .iter()
        .filter(|employee| employee.status == status)
        .count()
}

/// Latest start dates first, ties keep storage order.
pub fn recent_hires(employees: &[Employee]) -> Vec<Employee> {
    let mut sorted = employees.to_vec();
    sorted.sort_by(|a, b| b.start_date.cmp(&a.start_date));
    sorted.truncate(RECENT_HIRES_LIMIT);
    sorted
}

pub fn headcounts(departments: &[Department], employees: &[Employee]) -> Vec<DepartmentHeadcount> {
    departments
        .iter()
        .map(|department| DepartmentHeadcount {
            id: department.id,
            name: department.name.clone(),
            employees: roster_size(employees, &department.name),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{date, department, employee};

    fn hired(id: u32, start: NaiveDate, status: EmployeeStatus) -> Employee {
        let mut e = employee(id, &format!("E{id}"), "Engineering");
        e.start_date = start;
        e.status = status;
        e
    }

    #[test]
    fn counts_by_status_and_new_hire_window() {
        let today = date(2024, 3, 31);
        let employees = vec![
            hired(1, date(2020, 1, 1), EmployeeStatus::Active),
            hired(2, date(2024, 3, 1), EmployeeStatus::Active),
            hired(3, date(2024, 2, 29), EmployeeStatus::OnLeave),
            hired(4, date(2024, 3, 30), EmployeeStatus::Terminated),
        ];

        let stats = stats(&employees, today);
        assert_eq!(
            stats,
            DashboardStats {
                total_employees: 4,
                active_employees: 2,
                on_leave: 1,
                new_hires: 2,
            }
        );
    }

    #[test]
    fn recent_hires_sorted_and_truncated() {
        let employees: Vec<Employee> = (1..=8)
            .map(|i| hired(i, date(2024, 1, i), EmployeeStatus::Active))
            .collect();

        let ids: Vec<u32> = recent_hires(&employees).iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![8, 7, 6, 5, 4, 3]);
    }

    #[test]
    fn headcount_matches_department_names_exactly() {
        let departments = vec![department(1, "Engineering", None), department(2, "Sales", None)];
        let employees = vec![
            employee(1, "A", "Engineering"),
            employee(2, "B", "engineering"),
            employee(3, "C", "Engineering"),
            employee(4, "D", "Legal"),
        ];

        let counts = headcounts(&departments, &employees);
        assert_eq!(counts[0].employees, 2);
        assert_eq!(counts[1].employees, 0);
    }
}
