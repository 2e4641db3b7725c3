use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::db::Record;
use crate::utils::validation::validate_clock_time;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum ScheduleStatus {
    Scheduled,
    Present,
    Absent,
    Late,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    #[serde(rename = "Id")]
    pub id: u32,
    pub employee_id: u32,
    pub date: NaiveDate,
    pub status: ScheduleStatus,
    pub start_time: String,
    pub end_time: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize, Validate, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewSchedule {
    pub employee_id: u32,
    pub date: NaiveDate,
    pub status: ScheduleStatus,
    #[validate(custom = "validate_clock_time")]
    pub start_time: String,
    #[validate(custom = "validate_clock_time")]
    pub end_time: String,
}

#[derive(Deserialize, Validate, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SchedulePatch {
    #[serde(rename = "Id")]
    pub id: Option<u32>,
    pub employee_id: Option<u32>,
    pub date: Option<NaiveDate>,
    pub status: Option<ScheduleStatus>,
    #[validate(custom = "validate_clock_time")]
    pub start_time: Option<String>,
    #[validate(custom = "validate_clock_time")]
    pub end_time: Option<String>,
}

impl Record for Schedule {
    type New = NewSchedule;
    type Patch = SchedulePatch;

    const KIND: &'static str = "Schedule";

    fn id(&self) -> u32 {
        self.id
    }

    fn from_new(id: u32, data: NewSchedule, now: DateTime<Utc>) -> Self {
        Schedule {
            id,
            employee_id: data.employee_id,
            date: data.date,
            status: data.status,
            start_time: data.start_time,
            end_time: data.end_time,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply(&mut self, patch: SchedulePatch) {
        if let Some(id) = patch.id {
            self.id = id;
        }
        if let Some(employee_id) = patch.employee_id {
            self.employee_id = employee_id;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(start_time) = patch.start_time {
            self.start_time = start_time;
        }
        if let Some(end_time) = patch.end_time {
            self.end_time = end_time;
        }
    }

    fn stamp(&mut self, id: u32, now: DateTime<Utc>) {
        self.id = id;
        self.updated_at = now;
    }
}
