//! Local-first read of one domain.
//! 单个数据域的本地优先读取。

use std::marker::PhantomData;
use std::sync::Arc;

use tracing::{debug, debug_span, warn, Instrument};

use dh_core::ports::{LocalCachePort, RemoteDocumentPort};
use dh_core::{SyncDomain, SyncOutcome, UserId};

use super::UserWriteLocks;

/// Read-through use case.
///
/// ## Behavior / 行为
/// - Serves the local cache when it holds rows for the user; the remote is not called
/// - On a miss, takes the domain's write lock, checks the cache again and
///   fetches the domain's field from the remote document
/// - Persists fetched rows locally before returning them, still under the lock,
///   so a concurrent write-through cannot be overwritten by an older fetch
/// - Reports `Missing` when neither side has data, `Failed` on any error
pub struct ReadThrough<D: SyncDomain> {
    remote: Arc<dyn RemoteDocumentPort>,
    cache: Arc<dyn LocalCachePort<D::Record>>,
    locks: Arc<UserWriteLocks>,
    _domain: PhantomData<fn() -> D>,
}

impl<D: SyncDomain> ReadThrough<D> {
    pub fn new(
        remote: Arc<dyn RemoteDocumentPort>,
        cache: Arc<dyn LocalCachePort<D::Record>>,
        locks: Arc<UserWriteLocks>,
    ) -> Self {
        Self {
            remote,
            cache,
            locks,
            _domain: PhantomData,
        }
    }

    pub async fn execute(&self, user_id: &UserId) -> SyncOutcome<D::Record> {
        let span = debug_span!(
            "usecase.read_through.execute",
            domain = D::NAME,
            user_id = %user_id
        );

        async {
            if let Some(outcome) = self.cached_for(user_id).await {
                return outcome;
            }

            let _guard = self.locks.acquire(D::NAME, user_id).await;
            // A write-through may have filled the cache while we waited.
            if let Some(outcome) = self.cached_for(user_id).await {
                return outcome;
            }
            debug!("cache miss, fetching remote field");

            let value = match self.remote.fetch_field(user_id, D::FIELD).await {
                Ok(Some(value)) => value,
                Ok(None) => {
                    debug!(field = D::FIELD.as_str(), "remote field absent");
                    return SyncOutcome::Missing;
                }
                Err(err) => {
                    warn!(error = %err, "remote fetch failed");
                    return SyncOutcome::Failed(err.into());
                }
            };

            let records = match D::decode(value) {
                Ok(records) => records,
                Err(err) => {
                    warn!(error = %err, "remote field could not be decoded");
                    return SyncOutcome::Failed(err.into());
                }
            };
            if records.is_empty() {
                return SyncOutcome::Missing;
            }

            // The remote copy stays authoritative even if it cannot be cached.
            if let Err(err) = self.cache.save(user_id, &records).await {
                warn!(error = %err, "failed to populate cache after remote fetch");
            }
            debug!(count = records.len(), "fetched from remote");
            SyncOutcome::Fetched(records)
        }
        .instrument(span)
        .await
    }

    /// `Some` when the cache answers the read on its own: a hit or a failure.
    async fn cached_for(&self, user_id: &UserId) -> Option<SyncOutcome<D::Record>> {
        match self.cache.get(user_id).await {
            Ok(records) if !records.is_empty() => {
                debug!(count = records.len(), "cache hit");
                Some(SyncOutcome::Cached(records))
            }
            Ok(_) => None,
            Err(err) => {
                warn!(error = %err, "cache read failed");
                Some(SyncOutcome::Failed(err.into()))
            }
        }
    }
}
