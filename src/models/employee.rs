use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::db::Record;
use crate::utils::validation::validate_not_blank;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum EmployeeStatus {
    Active,
    Inactive,
    OnLeave,
    Terminated,
}

impl EmployeeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "active",
            EmployeeStatus::Inactive => "inactive",
            EmployeeStatus::OnLeave => "onLeave",
            EmployeeStatus::Terminated => "terminated",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct EmergencyContact {
    pub name: String,
    pub relationship: String,
    pub phone: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(rename = "Id")]
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub department: String,
    pub status: EmployeeStatus,
    pub start_date: NaiveDate,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub emergency_contact: EmergencyContact,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Deserialize, Validate, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    #[validate(length(min = 1, max = 64))]
    pub first_name: String,
    #[validate(length(min = 1, max = 64))]
    pub last_name: String,
    #[validate(length(min = 1, max = 128))]
    pub role: String,
    #[validate(length(min = 1, max = 128))]
    pub department: String,
    pub status: EmployeeStatus,
    pub start_date: NaiveDate,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub emergency_contact: EmergencyContact,
    #[validate(url)]
    pub photo: Option<String>,
}

#[derive(Deserialize, Validate, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePatch {
    #[serde(rename = "Id")]
    pub id: Option<u32>,
    #[validate(custom = "validate_not_blank")]
    pub first_name: Option<String>,
    #[validate(custom = "validate_not_blank")]
    pub last_name: Option<String>,
    #[validate(custom = "validate_not_blank")]
    pub role: Option<String>,
    #[validate(custom = "validate_not_blank")]
    pub department: Option<String>,
    pub status: Option<EmployeeStatus>,
    pub start_date: Option<NaiveDate>,
    #[validate(email)]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<Address>,
    pub emergency_contact: Option<EmergencyContact>,
    #[validate(url)]
    pub photo: Option<String>,
}

impl Record for Employee {
    type New = NewEmployee;
    type Patch = EmployeePatch;

    const KIND: &'static str = "Employee";

    fn id(&self) -> u32 {
        self.id
    }

    fn from_new(id: u32, data: NewEmployee, now: DateTime<Utc>) -> Self {
        Employee {
            id,
            first_name: data.first_name,
            last_name: data.last_name,
            role: data.role,
            department: data.department,
            status: data.status,
            start_date: data.start_date,
            email: data.email,
            phone: data.phone,
            address: data.address,
            emergency_contact: data.emergency_contact,
            photo: data.photo,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply(&mut self, patch: EmployeePatch) {
        if let Some(id) = patch.id {
            self.id = id;
        }
        if let Some(first_name) = patch.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = last_name;
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
        if let Some(department) = patch.department {
            self.department = department;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(start_date) = patch.start_date {
            self.start_date = start_date;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(address) = patch.address {
            self.address = address;
        }
        if let Some(emergency_contact) = patch.emergency_contact {
            self.emergency_contact = emergency_contact;
        }
        if let Some(photo) = patch.photo {
            self.photo = Some(photo);
        }
    }

    fn stamp(&mut self, id: u32, now: DateTime<Utc>) {
        self.id = id;
        self.updated_at = now;
    }
}
