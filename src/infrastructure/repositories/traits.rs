use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Mandi;
use crate::error::AppResult;

/// Source of mandi candidates. Implementations return records in a stable
/// order; the ranker relies on it for tie-breaking.
#[async_trait]
pub trait MandiRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Mandi>>;
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Mandi>>;
    async fn count(&self) -> AppResult<i64> {
        Ok(self.find_all().await?.len() as i64)
    }
}
