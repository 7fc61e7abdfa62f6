use crate::core::fetcher::HttpActivityFetcher;
use crate::core::matcher::ProfileMatcher;
use crate::domain::ports::{ActivitySource, ProfileRepository, ServiceSettings};
use crate::store::InMemoryProfileStore;
use crate::utils::error::Result;
use std::sync::Arc;
use std::time::Duration;

pub struct AppState {
    pub matcher: ProfileMatcher,
    pub profiles: Arc<dyn ProfileRepository>,
}

impl AppState {
    pub fn new(
        source: Arc<dyn ActivitySource>,
        profiles: Arc<dyn ProfileRepository>,
        timeout: Duration,
    ) -> Arc<Self> {
        Arc::new(Self {
            matcher: ProfileMatcher::new(source, timeout),
            profiles,
        })
    }

    /// Upstream fetcher plus an empty in-memory store.
    pub fn from_settings<C: ServiceSettings>(config: &C) -> Result<Arc<Self>> {
        let fetcher = HttpActivityFetcher::new(config.upstream_url())?;
        tracing::info!("Upstream endpoint: {}", fetcher.endpoint());

        Ok(Self::new(
            Arc::new(fetcher),
            Arc::new(InMemoryProfileStore::new()),
            config.match_timeout(),
        ))
    }
}
