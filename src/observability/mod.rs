pub mod error_tracking;

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Default)]
pub struct AppMetrics {
    request_count: AtomicU64,
    error_count: AtomicU64,
    latency_total_ms: AtomicU64,
    latency_count: AtomicU64,
    ranking_count: AtomicU64,
    candidates_ranked: AtomicU64,
    candidates_retained: AtomicU64,
}

impl AppMetrics {
    pub fn record_request(&self, status: u16, latency_ms: u64) {
        self.request_count.fetch_add(1, Ordering::Relaxed);
        if status >= 500 {
            self.error_count.fetch_add(1, Ordering::Relaxed);
        }
        self.latency_total_ms
            .fetch_add(latency_ms, Ordering::Relaxed);
        self.latency_count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_ranking(&self, candidates: usize, retained: usize) {
        self.ranking_count.fetch_add(1, Ordering::Relaxed);
        self.candidates_ranked
            .fetch_add(candidates as u64, Ordering::Relaxed);
        self.candidates_retained
            .fetch_add(retained as u64, Ordering::Relaxed);
    }

    pub fn render_prometheus(&self, mandis_loaded: i64) -> String {
        let count = self.latency_count.load(Ordering::Relaxed).max(1);
        let avg_latency = self.latency_total_ms.load(Ordering::Relaxed) as f64 / count as f64;

        format!(
            concat!(
                "# TYPE http_requests_total counter\n",
                "http_requests_total {}\n",
                "# TYPE http_error_total counter\n",
                "http_error_total {}\n",
                "# TYPE http_latency_avg_ms gauge\n",
                "http_latency_avg_ms {:.2}\n",
                "# TYPE mandi_rankings_total counter\n",
                "mandi_rankings_total {}\n",
                "# TYPE mandi_candidates_ranked_total counter\n",
                "mandi_candidates_ranked_total {}\n",
                "# TYPE mandi_candidates_retained_total counter\n",
                "mandi_candidates_retained_total {}\n",
                "# TYPE mandis_loaded gauge\n",
                "mandis_loaded {}\n",
            ),
            self.request_count.load(Ordering::Relaxed),
            self.error_count.load(Ordering::Relaxed),
            avg_latency,
            self.ranking_count.load(Ordering::Relaxed),
            self.candidates_ranked.load(Ordering::Relaxed),
            self.candidates_retained.load(Ordering::Relaxed),
            mandis_loaded,
        )
    }
}
