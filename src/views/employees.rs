use serde::{Deserialize, Serialize};

use crate::models::employee::Employee;

pub const ALL_DEPARTMENTS: &str = "all";

pub const CSV_HEADER: [&str; 7] = [
    "Name",
    "Email",
    "Phone",
    "Role",
    "Department",
    "Status",
    "Start Date",
];

/// Search box plus department dropdown of the employee directory.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct EmployeeFilter {
    pub search: Option<String>,
    pub department: Option<String>,
}

impl EmployeeFilter {
    pub fn apply(&self, employees: &[Employee]) -> Vec<Employee> {
        let term = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(str::to_lowercase);
        let department = self
            .department
            .as_deref()
            .filter(|department| !department.is_empty() && *department != ALL_DEPARTMENTS);

        employees
            .iter()
            .filter(|employee| term.as_deref().map_or(true, |term| matches_term(employee, term)))
            .filter(|employee| department.map_or(true, |name| employee.department == name))
            .cloned()
            .collect()
    }
}

fn matches_term(employee: &Employee, term: &str) -> bool {
    employee.full_name().to_lowercase().contains(term)
        || employee.email.to_lowercase().contains(term)
        || employee.role.to_lowercase().contains(term)
        || employee.department.to_lowercase().contains(term)
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDirectory {
    pub employees: Vec<Employee>,
    pub showing: usize,
    pub total: usize,
}

impl EmployeeDirectory {
    pub fn build(all: &[Employee], filter: &EmployeeFilter) -> Self {
        let employees = filter.apply(all);
        EmployeeDirectory {
            showing: employees.len(),
            total: all.len(),
            employees,
        }
    }
}

/// Only the name column is quoted; other columns are written as-is.
pub fn to_csv(employees: &[Employee]) -> String {
    let mut lines = Vec::with_capacity(employees.len() + 1);
    lines.push(CSV_HEADER.join(","));
    lines.extend(employees.iter().map(|employee| {
        [
            format!("\"{}\"", employee.full_name()),
            employee.email.clone(),
            employee.phone.clone(),
            employee.role.clone(),
            employee.department.clone(),
            employee.status.as_str().to_string(),
            employee.start_date.format("%Y-%m-%d").to_string(),
        ]
        .join(",")
    }));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::employee::EmployeeStatus;
    use crate::test_support::{date, employee};

    fn directory() -> Vec<Employee> {
        let mut ann = employee(1, "Ann", "Engineering");
        ann.role = "Backend Developer".to_string();
        let mut ben = employee(2, "Ben", "Sales");
        ben.email = "ben.k@corp.example".to_string();
        let carl = employee(3, "Carl", "Engineering");
        vec![ann, ben, carl]
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let employees = directory();
        let search = |term: &str| -> Vec<u32> {
            EmployeeFilter {
                search: Some(term.to_string()),
                department: None,
            }
            .apply(&employees)
            .iter()
            .map(|e| e.id)
            .collect()
        };

        assert_eq!(search("ANN TESTER"), vec![1]);
        assert_eq!(search("corp.example"), vec![2]);
        assert_eq!(search("developer"), vec![1]);
        assert_eq!(search("sales"), vec![2]);
        assert_eq!(search("   "), vec![1, 2, 3]);
    }

    #[test]
    fn department_filter_is_exact_unless_all() {
        let employees = directory();
        let by_department = |department: &str| -> usize {
            EmployeeFilter {
                search: None,
                department: Some(department.to_string()),
            }
            .apply(&employees)
            .len()
        };

        assert_eq!(by_department("Engineering"), 2);
        assert_eq!(by_department("engineering"), 0);
        assert_eq!(by_department(ALL_DEPARTMENTS), 3);
    }

    #[test]
    fn directory_reports_showing_of_total() {
        let employees = directory();
        let page = EmployeeDirectory::build(
            &employees,
            &EmployeeFilter {
                search: Some("carl".to_string()),
                department: Some("Engineering".to_string()),
            },
        );
        assert_eq!((page.showing, page.total), (1, 3));
    }

    #[test]
    fn csv_quotes_name_only() {
        let mut jane = employee(1, "Jane", "R&D");
        jane.last_name = "Doe".to_string();
        jane.email = "j@x.com".to_string();
        jane.phone = "555-0100".to_string();
        jane.role = "Engineer".to_string();
        jane.status = EmployeeStatus::Active;
        jane.start_date = date(2024, 1, 10);

        let csv = to_csv(&[jane]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Name,Email,Phone,Role,Department,Status,Start Date");
        assert_eq!(
            lines[1],
            "\"Jane Doe\",j@x.com,555-0100,Engineer,R&D,active,2024-01-10"
        );
        assert!(!csv.ends_with('\n'));
    }

    #[test]
    fn csv_of_nobody_is_just_the_header() {
        assert_eq!(to_csv(&[]), "Name,Email,Phone,Role,Department,Status,Start Date");
    }
}
