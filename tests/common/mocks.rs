#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mandi_backend::domain::Mandi;
use mandi_backend::error::{AppError, AppResult};
use mandi_backend::infrastructure::repositories::MandiRepository;
use uuid::Uuid;

/// Upstream that is always down.
#[derive(Default)]
pub struct FailingMandiRepository;

#[async_trait]
impl MandiRepository for FailingMandiRepository {
    async fn find_all(&self) -> AppResult<Vec<Mandi>> {
        Err(AppError::mandi_source_unavailable(
            "Mandi listings are temporarily unavailable",
        ))
    }

    async fn find_by_id(&self, _id: Uuid) -> AppResult<Option<Mandi>> {
        Err(AppError::mandi_source_unavailable(
            "Mandi listings are temporarily unavailable",
        ))
    }
}

/// Serves a fixed set of mandis and records how often it was listed.
#[derive(Default, Clone)]
pub struct RecordingMandiRepository {
    pub mandis: Arc<Mutex<Vec<Mandi>>>,
    pub find_all_calls: Arc<Mutex<usize>>,
}

impl RecordingMandiRepository {
    pub fn with_mandis(mandis: Vec<Mandi>) -> Self {
        Self {
            mandis: Arc::new(Mutex::new(mandis)),
            ..Default::default()
        }
    }

    pub fn find_all_calls(&self) -> usize {
        *self.find_all_calls.lock().unwrap()
    }
}

#[async_trait]
impl MandiRepository for RecordingMandiRepository {
    async fn find_all(&self) -> AppResult<Vec<Mandi>> {
        *self.find_all_calls.lock().unwrap() += 1;
        Ok(self.mandis.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Mandi>> {
        Ok(self
            .mandis
            .lock()
            .unwrap()
            .iter()
            .find(|mandi| mandi.id == id)
            .cloned())
    }
}
