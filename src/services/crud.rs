use crate::db::{Collection, Record};
use crate::errors::AppError;
use crate::services::delay::{Delays, Latency};

/// Create/read/update/delete over one in-memory collection.
///
/// Each call waits out its simulated delay first and only then touches
/// storage, so a mutation always completes in one step once it resumes.
pub struct CrudService<T> {
    pub(crate) store: Collection<T>,
    pub(crate) latency: Latency,
    delays: Delays,
}

impl<T: Record> CrudService<T> {
    pub fn new(seed: Vec<T>, latency: Latency, delays: Delays) -> Self {
        CrudService {
            store: Collection::new(seed),
            latency,
            delays,
        }
    }

    pub async fn get_all(&self) -> Vec<T> {
        self.latency.wait(self.delays.list).await;
        self.store.snapshot().await
    }

    pub async fn get_by_id(&self, id: u32) -> Result<T, AppError> {
        self.latency.wait(self.delays.get).await;
        self.store.get(id).await
    }

    /// No field validation happens here; callers validate payloads.
    pub async fn create(&self, data: T::New) -> T {
        self.latency.wait(self.delays.create).await;
        self.store.insert(data).await
    }

    pub async fn update(&self, id: u32, patch: T::Patch) -> Result<T, AppError> {
        self.latency.wait(self.delays.update).await;
        self.store.update(id, patch).await
    }

    pub async fn delete(&self, id: u32) -> Result<T, AppError> {
        self.latency.wait(self.delays.delete).await;
        self.store.remove(id).await
    }

    pub async fn count(&self) -> usize {
        self.store.len().await
    }
}
