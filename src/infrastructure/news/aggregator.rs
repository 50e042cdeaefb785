// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use futures::future::{join_all, BoxFuture, Shared};
use futures::FutureExt;
use metrics::counter;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use crate::domain::models::story::Story;
use crate::domain::news::source::{PageNumber, PageSource, SourceError};
use crate::infrastructure::cache::page_cache::PageCache;

type PendingFetch = Shared<BoxFuture<'static, Result<Arc<Vec<Story>>, SourceError>>>;

pub struct NewsAggregator {
    source: Arc<dyn PageSource>,
    cache: Arc<PageCache>,
    timeout: Duration,
    inflight: Arc<DashMap<PageNumber, PendingFetch>>,
}

impl NewsAggregator {
    pub fn new(source: Arc<dyn PageSource>, cache: Arc<PageCache>, timeout_ms: u64) -> Self {
        Self {
            source,
            cache,
            timeout: Duration::from_millis(timeout_ms),
            inflight: Arc::new(DashMap::new()),
        }
    }

    /// Resolve pages 1..=page_count into one flattened, page-ordered list.
    #[instrument(skip(self))]
    pub async fn resolve(&self, page_count: u32) -> Result<Vec<Story>, SourceError> {
        let page_count = page_count.max(1);
        let target: Vec<PageNumber> = (1..=page_count).collect();
        let to_fetch = self.cache.missing(target.iter().copied());

        let hits = (target.len() - to_fetch.len()) as u64;
        if hits > 0 {
            counter!("news_cache_hits_total").increment(hits);
            debug!("{} of {} pages already cached", hits, target.len());
        }

        if !to_fetch.is_empty() {
            counter!("news_cache_misses_total").increment(to_fetch.len() as u64);
            info!("Fetching {} missing pages: {:?}", to_fetch.len(), to_fetch);

            let fetches: Vec<PendingFetch> = to_fetch
                .iter()
                .map(|&page| self.claim_or_join(page))
                .collect();

            // All fetches in the batch run to completion before the first
            // failure (lowest page number) is reported.
            for outcome in join_all(fetches).await {
                outcome?;
            }
        }

        let mut pages = Vec::with_capacity(target.len());
        for &page in &target {
            let records = self.cache.get(page).ok_or(SourceError::PageMissing(page))?;
            pages.push(records);
        }

        let mut stories: Vec<Story> = Vec::with_capacity(pages.iter().map(|p| p.len()).sum());
        for records in &pages {
            stories.extend(records.iter().cloned());
        }

        info!("Resolved {} pages into {} stories", page_count, stories.len());
        Ok(stories)
    }

    /// Join the in-flight fetch for a page, or claim it and become the owner.
    fn claim_or_join(&self, page: PageNumber) -> PendingFetch {
        if let Some(pending) = self.inflight.get(&page) {
            debug!("Joining in-flight fetch for page {}", page);
            return pending.clone();
        }

        match self.inflight.entry(page) {
            Entry::Occupied(entry) => entry.get().clone(),
            Entry::Vacant(entry) => {
                let fetch = Self::load_page(
                    Arc::clone(&self.source),
                    Arc::clone(&self.cache),
                    Arc::clone(&self.inflight),
                    page,
                    self.timeout,
                )
                .boxed()
                .shared();
                entry.insert(fetch.clone());
                fetch
            }
        }
    }

    /// Owner side of a single-flight fetch: re-check the cache, fetch with a
    /// per-page timeout, commit on success, then release the in-flight slot.
    async fn load_page(
        source: Arc<dyn PageSource>,
        cache: Arc<PageCache>,
        inflight: Arc<DashMap<PageNumber, PendingFetch>>,
        page: PageNumber,
        timeout: Duration,
    ) -> Result<Arc<Vec<Story>>, SourceError> {
        let result = if let Some(records) = cache.get(page) {
            // A fetch completed after the missing-set was computed; the
            // cached entry is authoritative.
            Ok(records)
        } else {
            match tokio::time::timeout(timeout, source.fetch_page(page)).await {
                Ok(Ok(stories)) => {
                    counter!("news_pages_fetched_total").increment(1);
                    debug!("Committing page {} ({} stories)", page, stories.len());
                    Ok(cache.put(page, stories))
                }
                Ok(Err(e)) => {
                    counter!("news_fetch_errors_total").increment(1);
                    warn!("Source {} failed on page {}: {}", source.name(), page, e);
                    Err(e)
                }
                Err(_) => {
                    counter!("news_fetch_errors_total").increment(1);
                    warn!("Source {} timed out on page {}", source.name(), page);
                    Err(SourceError::Timeout)
                }
            }
        };

        // Failed pages leave no slot behind, so a later request retries them.
        inflight.remove(&page);
        result
    }
}
