use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;
use validator::Validate;

use crate::api::dtos::{MandiQueryParams, MandiResponse, OriginParams, PaginatedResponse};
use crate::config::ListingConfig;
use crate::domain::DomainError;
use crate::error::AppResult;
use crate::infrastructure::repositories::MandiRepository;
use crate::observability::AppMetrics;
use crate::ranking::{compute_distance_km, rank, Candidate, Ranked, RankingOptions};

pub mod mapper;

#[derive(Clone)]
pub struct MandiService {
    mandi_repo: Arc<dyn MandiRepository>,
    listing: ListingConfig,
    metrics: Option<Arc<AppMetrics>>,
}

impl MandiService {
    pub fn new(mandi_repo: Arc<dyn MandiRepository>, listing: ListingConfig) -> Self {
        Self {
            mandi_repo,
            listing,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<AppMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub async fn list(
        &self,
        params: MandiQueryParams,
    ) -> AppResult<PaginatedResponse<MandiResponse>> {
        params.validate()?;
        let options = RankingOptions {
            origin: params.origin()?,
            max_distance_km: params.max_distance_km()?,
            sort_key: params.sort_by.unwrap_or(self.listing.default_sort),
            direction: params.order.unwrap_or(self.listing.default_order),
        };
        let (page, limit) = self.listing.page_window(params.page, params.limit);
        let filter = params.filter()?;

        // A failed fetch returns here, before anything is ranked.
        let candidates = self.mandi_repo.find_all().await?;
        let fetched = candidates.len();
        let candidates = filter.apply(candidates);
        let ranked = rank(candidates, &options);

        if let Some(metrics) = &self.metrics {
            metrics.record_ranking(fetched, ranked.len());
        }

        let total = ranked.len() as i64;
        let offset = usize::try_from((page - 1).saturating_mul(limit)).unwrap_or(usize::MAX);
        let items = ranked
            .into_iter()
            .skip(offset)
            .take(limit as usize)
            .map(mapper::map_ranked_mandi_to_response)
            .collect::<Vec<_>>();

        debug!(
            fetched,
            total,
            page,
            limit,
            returned = items.len(),
            "listed mandis"
        );

        Ok(PaginatedResponse::new(items, total, page, limit))
    }

    pub async fn get_by_id(&self, id: Uuid, params: OriginParams) -> AppResult<MandiResponse> {
        params.validate()?;
        let origin = params.origin()?;

        let mandi = self
            .mandi_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound("mandi not found".to_string()))?;

        let distance_km = origin.map(|origin| compute_distance_km(origin, mandi.geo_point()));
        Ok(mapper::map_ranked_mandi_to_response(Ranked {
            item: mandi,
            distance_km,
        }))
    }

    pub async fn count(&self) -> AppResult<i64> {
        let count = self.mandi_repo.count().await?;
        debug!(mandis = count, "mandi repository checked");
        Ok(count)
    }
}
