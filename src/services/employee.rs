use crate::db::seed;
use crate::errors::AppError;
use crate::models::employee::Employee;
use crate::services::crud::CrudService;
use crate::services::delay::{Delays, Latency};

pub type EmployeeService = CrudService<Employee>;

const DELAYS: Delays = Delays {
    list: 300,
    get: 200,
    create: 400,
    update: 400,
    delete: 300,
};

impl CrudService<Employee> {
    pub fn from_seed(seed: Vec<Employee>, latency: Latency) -> Self {
        CrudService::new(seed, latency, DELAYS)
    }

    pub fn seeded(latency: Latency) -> Result<Self, AppError> {
        Ok(Self::from_seed(seed::employees()?, latency))
    }
}
