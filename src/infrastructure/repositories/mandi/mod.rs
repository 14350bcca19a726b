use std::collections::HashSet;
use std::path::Path;

use anyhow::Context;
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::domain::{DomainError, Mandi};
use crate::error::AppResult;
use crate::infrastructure::repositories::traits::MandiRepository;

mod record;

pub use record::MandiRecord;
use record::MandiSeed;

/// Mandis held in memory, in seed-file order.
#[derive(Default)]
pub struct InMemoryMandiRepository {
    mandis: RwLock<Vec<Mandi>>,
}

impl InMemoryMandiRepository {
    pub fn new(mandis: Vec<Mandi>) -> Self {
        Self {
            mandis: RwLock::new(mandis),
        }
    }

    /// Parses and validates a JSON array of mandi records. Nothing is loaded
    /// unless every record passes.
    pub fn from_json_str(raw: &str) -> AppResult<Self> {
        let records: Vec<MandiRecord> = serde_json::from_str(raw)?;
        let seed = MandiSeed { records };
        seed.validate()?;

        let mut seen = HashSet::with_capacity(seed.records.len());
        if let Some(duplicate) = seed.records.iter().find(|record| !seen.insert(record.id)) {
            return Err(DomainError::Conflict(format!("duplicate mandi id {}", duplicate.id)).into());
        }

        let mandis: Vec<Mandi> = seed.records.into_iter().map(Mandi::from).collect();
        Ok(Self::new(mandis))
    }

    pub async fn from_json_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read mandi seed file {}", path.display()))?;
        let repository = Self::from_json_str(&raw)?;

        info!(
            path = %path.display(),
            mandis = repository.mandis.read().await.len(),
            "loaded mandi seed file"
        );
        Ok(repository)
    }
}

#[async_trait]
impl MandiRepository for InMemoryMandiRepository {
    async fn find_all(&self) -> AppResult<Vec<Mandi>> {
        Ok(self.mandis.read().await.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Mandi>> {
        Ok(self
            .mandis
            .read()
            .await
            .iter()
            .find(|mandi| mandi.id == id)
            .cloned())
    }

    async fn count(&self) -> AppResult<i64> {
        Ok(self.mandis.read().await.len() as i64)
    }
}
