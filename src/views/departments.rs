use serde::Serialize;

use crate::models::department::Department;
use crate::models::employee::{Employee, EmployeeStatus};
use crate::views::dashboard::count_status;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentStats {
    pub total: usize,
    pub active: usize,
    pub on_leave: usize,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentCard {
    pub department: Department,
    pub manager: Option<Employee>,
    pub employees: Vec<Employee>,
    pub stats: DepartmentStats,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentSummary {
    pub total_departments: usize,
    pub total_employees: usize,
    pub average_per_department: usize,
    pub managers: usize,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentsPage {
    pub summary: DepartmentSummary,
    pub departments: Vec<DepartmentCard>,
}

impl DepartmentsPage {
    pub fn build(departments: &[Department], employees: &[Employee]) -> Self {
        DepartmentsPage {
            summary: summary(departments, employees),
            departments: departments
                .iter()
                .map(|department| card(department, employees))
                .collect(),
        }
    }
}

/// Employees whose department text equals `name` exactly.
pub fn roster(employees: &[Employee], name: &str) -> Vec<Employee> {
    employees
        .iter()
        .filter(|employee| employee.department == name)
        .cloned()
        .collect()
}

pub fn roster_size(employees: &[Employee], name: &str) -> usize {
    employees
        .iter()
        .filter(|employee| employee.department == name)
        .count()
}

/// Unknown or missing manager ids resolve to `None`.
pub fn manager<'a>(department: &Department, employees: &'a [Employee]) -> Option<&'a Employee> {
    let manager_id = department.manager_id?;
    employees.iter().find(|employee| employee.id == manager_id)
}

pub fn stats(employees: &[Employee], name: &str) -> DepartmentStats {
    let members = roster(employees, name);
    DepartmentStats {
        total: members.len(),
        active: count_status(&members, EmployeeStatus::Active),
        on_leave: count_status(&members, EmployeeStatus::OnLeave),
    }
}

pub fn card(department: &Department, employees: &[Employee]) -> DepartmentCard {
    DepartmentCard {
        department: department.clone(),
        manager: manager(department, employees).cloned(),
        employees: roster(employees, &department.name),
        stats: stats(employees, &department.name),
    }
}

pub fn summary(departments: &[Department], employees: &[Employee]) -> DepartmentSummary {
    let average_per_department = if departments.is_empty() {
        0
    } else {
        (employees.len() as f64 / departments.len() as f64).round() as usize
    };
    DepartmentSummary {
        total_departments: departments.len(),
        total_employees: employees.len(),
        average_per_department,
        managers: departments
            .iter()
            .filter(|department| department.manager_id.is_some())
            .count(),
    }
}
