use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::db::Record;
use crate::models::deserialize_some;
use crate::utils::validation::validate_not_blank;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    #[serde(rename = "Id")]
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub manager_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize, Validate, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewDepartment {
    #[validate(length(min = 1, max = 64))]
    pub name: String,
    pub manager_id: Option<u32>,
    #[validate(length(max = 512))]
    pub description: Option<String>,
}

/// `managerId: null` clears the manager; an absent `managerId` leaves it alone.
#[derive(Deserialize, Validate, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentPatch {
    #[serde(rename = "Id")]
    pub id: Option<u32>,
    #[validate(custom = "validate_not_blank")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub manager_id: Option<Option<u32>>,
    #[validate(length(max = 512))]
    pub description: Option<String>,
}

impl Record for Department {
    type New = NewDepartment;
    type Patch = DepartmentPatch;

    const KIND: &'static str = "Department";

    fn id(&self) -> u32 {
        self.id
    }

    fn from_new(id: u32, data: NewDepartment, now: DateTime<Utc>) -> Self {
        Department {
            id,
            name: data.name,
            manager_id: data.manager_id,
            description: data.description,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply(&mut self, patch: DepartmentPatch) {
        if let Some(id) = patch.id {
            self.id = id;
        }
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(manager_id) = patch.manager_id {
            self.manager_id = manager_id;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
    }

    fn stamp(&mut self, id: u32, now: DateTime<Utc>) {
        self.id = id;
        self.updated_at = now;
    }
}
