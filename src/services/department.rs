use crate::db::seed;
use crate::errors::AppError;
use crate::models::department::Department;
use crate::services::crud::CrudService;
use crate::services::delay::{Delays, Latency};

pub type DepartmentService = CrudService<Department>;

const DELAYS: Delays = Delays {
    list: 250,
    get: 200,
    create: 400,
    update: 400,
    delete: 300,
};

impl CrudService<Department> {
    pub fn from_seed(seed: Vec<Department>, latency: Latency) -> Self {
        CrudService::new(seed, latency, DELAYS)
    }

    pub fn seeded(latency: Latency) -> Result<Self, AppError> {
        Ok(Self::from_seed(seed::departments()?, latency))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::department::{DepartmentPatch, NewDepartment};
    use tokio::time::{Duration, Instant};

    #[tokio::test]
    async fn create_on_empty_collection_starts_at_one() {
        let service = DepartmentService::from_seed(Vec::new(), Latency::disabled());
        let created = service
            .create(NewDepartment {
                name: "Support".to_string(),
                manager_id: Some(404),
                description: None,
            })
            .await;
        assert_eq!(created.id, 1);
        // Dangling manager references are stored as-is.
        assert_eq!(created.manager_id, Some(404));
    }

    #[tokio::test]
    async fn update_can_clear_manager() {
        let service = DepartmentService::seeded(Latency::disabled()).unwrap();
        let before = service.get_by_id(1).await.unwrap();
        assert!(before.manager_id.is_some());

        let after = service
            .update(
                1,
                DepartmentPatch {
                    manager_id: Some(None),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(after.manager_id, None);
        assert_eq!(after.name, before.name);
    }

    #[tokio::test(start_paused = true)]
    async fn list_waits_out_its_delay() {
        let service = DepartmentService::seeded(Latency::simulated()).unwrap();
        let start = Instant::now();
        service.get_all().await;
        assert!(start.elapsed() >= Duration::from_millis(250));
    }
}
