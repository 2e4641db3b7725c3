use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::validation::{
    validate_clock_time, validate_date_format, validate_not_blank, validate_timezone,
};

#[derive(Serialize, Deserialize, Validate, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorkingHours {
    #[validate(custom = "validate_clock_time")]
    pub start: String,
    #[validate(custom = "validate_clock_time")]
    pub end: String,
}

#[derive(Serialize, Deserialize, Validate, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CompanySettings {
    #[validate(custom = "validate_not_blank")]
    pub company_name: String,
    #[validate(email)]
    pub company_email: String,
    pub company_phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    #[validate(custom = "validate_timezone")]
    pub timezone: String,
    #[validate(custom = "validate_date_format")]
    pub date_format: String,
    #[validate]
    pub working_hours: WorkingHours,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub email_notifications: bool,
    pub employee_updates: bool,
    pub schedule_changes: bool,
    pub attendance_alerts: bool,
    pub weekly_reports: bool,
}

#[derive(Serialize, Deserialize, Validate, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[validate]
    pub company: CompanySettings,
    pub notifications: NotificationSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            company: CompanySettings {
                company_name: "TeamFlow Inc.".to_string(),
                company_email: "admin@teamflow.com".to_string(),
                company_phone: "+1 (555) 123-4567".to_string(),
                address: "123 Business St, Suite 100".to_string(),
                city: "San Francisco".to_string(),
                state: "CA".to_string(),
                zip_code: "94105".to_string(),
                timezone: "America/Los_Angeles".to_string(),
                date_format: "MM/dd/yyyy".to_string(),
                working_hours: WorkingHours {
                    start: "09:00".to_string(),
                    end: "17:00".to_string(),
                },
            },
            notifications: NotificationSettings {
                email_notifications: true,
                employee_updates: true,
                schedule_changes: true,
                attendance_alerts: false,
                weekly_reports: true,
            },
        }
    }
}
