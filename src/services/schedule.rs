use crate::db::seed;
use crate::errors::AppError;
use crate::models::schedule::Schedule;
use crate::services::crud::CrudService;
use crate::services::delay::{Delays, Latency};

pub type ScheduleService = CrudService<Schedule>;

const DELAYS: Delays = Delays {
    list: 300,
    get: 200,
    create: 400,
    update: 400,
    delete: 300,
};

const BY_EMPLOYEE_DELAY: u64 = 250;

impl CrudService<Schedule> {
    pub fn from_seed(seed: Vec<Schedule>, latency: Latency) -> Self {
        CrudService::new(seed, latency, DELAYS)
    }

    pub fn seeded(latency: Latency) -> Result<Self, AppError> {
        Ok(Self::from_seed(seed::schedules()?, latency))
    }

    /// Every schedule for `employee_id`, in storage order. Never fails.
    pub async fn get_by_employee_id(&self, employee_id: u32) -> Vec<Schedule> {
        self.latency.wait(BY_EMPLOYEE_DELAY).await;
        self.store
            .filter(|schedule| schedule.employee_id == employee_id)
            .await
    }
}
