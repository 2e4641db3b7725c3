pub mod seed;

use chrono::{DateTime, Utc};
use log::debug;
use tokio::sync::RwLock;

use crate::errors::AppError;

/// A flat record stored in a [`Collection`], keyed by a sequential integer id.
pub trait Record: Clone + Send + Sync + 'static {
    /// Payload accepted by `create`. Never carries an identifier.
    type New;
    /// Partial payload accepted by `update`.
    type Patch;

    const KIND: &'static str;

    fn id(&self) -> u32;

    fn from_new(id: u32, data: Self::New, now: DateTime<Utc>) -> Self;

    /// Overlays the fields present in `patch`. May touch the identifier;
    /// the collection forces it back afterwards.
    fn apply(&mut self, patch: Self::Patch);

    fn stamp(&mut self, id: u32, now: DateTime<Utc>);
}

/// In-memory ordered storage for one entity kind.
///
/// Every read hands out clones, so callers can never alias the stored
/// records. Writes take the lock, run to completion and release it without
/// awaiting anything in between.
pub struct Collection<T> {
    records: RwLock<Vec<T>>,
}

impl<T: Record> Collection<T> {
    pub fn new(seed: Vec<T>) -> Self {
        Self {
            records: RwLock::new(seed),
        }
    }

    pub async fn snapshot(&self) -> Vec<T> {
        self.records.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    pub async fn get(&self, id: u32) -> Result<T, AppError> {
        self.records
            .read()
            .await
            .iter()
            .find(|record| record.id() == id)
            .cloned()
            .ok_or_else(|| not_found::<T>(id))
    }

    pub async fn filter<F>(&self, predicate: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        self.records
            .read()
            .await
            .iter()
            .filter(|record| predicate(*record))
            .cloned()
            .collect()
    }

    pub async fn insert(&self, data: T::New) -> T {
        let mut records = self.records.write().await;
        let id = next_id(&records);
        let record = T::from_new(id, data, Utc::now());
        records.push(record.clone());
        debug!("created {} {}", T::KIND, id);
        record
    }

    pub async fn update(&self, id: u32, patch: T::Patch) -> Result<T, AppError> {
        let mut records = self.records.write().await;
        let index = position(&records, id).ok_or_else(|| not_found::<T>(id))?;

        let mut updated = records[index].clone();
        updated.apply(patch);
        updated.stamp(id, Utc::now());
        records[index] = updated.clone();
        debug!("updated {} {}", T::KIND, id);
        Ok(updated)
    }

    pub async fn remove(&self, id: u32) -> Result<T, AppError> {
        let mut records = self.records.write().await;
        let index = position(&records, id).ok_or_else(|| not_found::<T>(id))?;
        let removed = records.remove(index);
        debug!("deleted {} {}", T::KIND, id);
        Ok(removed)
    }
}

fn next_id<T: Record>(records: &[T]) -> u32 {
    records.iter().map(|record| record.id()).max().unwrap_or(0) + 1
}

fn position<T: Record>(records: &[T], id: u32) -> Option<usize> {
    records.iter().position(|record| record.id() == id)
}

fn not_found<T: Record>(id: u32) -> AppError {
    AppError::NotFound(format!("{} with Id {} not found", T::KIND, id))
}
