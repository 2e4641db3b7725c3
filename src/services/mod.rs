pub mod crud;
pub mod delay;
pub mod department;
pub mod employee;
pub mod schedule;
pub mod settings;

use crate::errors::AppError;
use crate::models::settings::Settings;

use self::delay::Latency;
use self::department::DepartmentService;
use self::employee::EmployeeService;
use self::schedule::ScheduleService;
use self::settings::SettingsService;

/// One independent service per entity kind plus the settings panel.
pub struct AppState {
    pub employees: EmployeeService,
    pub departments: DepartmentService,
    pub schedules: ScheduleService,
    pub settings: SettingsService,
}

impl AppState {
    pub fn seeded(latency: Latency) -> Result<Self, AppError> {
        Ok(AppState {
            employees: EmployeeService::seeded(latency)?,
            departments: DepartmentService::seeded(latency)?,
            schedules: ScheduleService::seeded(latency)?,
            settings: SettingsService::new(Settings::default(), latency),
        })
    }
}
