//! Write-through save of one domain.
//! 单个数据域的直写保存。

use std::marker::PhantomData;
use std::sync::Arc;

use thiserror::Error;
use tracing::{info, info_span, warn, Instrument};

use dh_core::domain::ValidationError;
use dh_core::ports::{CacheError, LocalCachePort, RemoteDocumentError, RemoteDocumentPort};
use dh_core::sync::CodecError;
use dh_core::{ProfilePatch, SyncDomain, UserId};

use super::UserWriteLocks;

#[derive(Debug, Error)]
pub enum WriteThroughError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("encode failed: {0}")]
    Codec(#[from] CodecError),

    #[error("remote write failed: {0}")]
    Remote(#[from] RemoteDocumentError),

    /// The remote holds the new data but the local snapshot could not be
    /// replaced; the snapshot has been dropped so the next read re-fetches.
    #[error("local cache update failed: {0}")]
    Cache(#[from] CacheError),
}

/// Write-through use case.
///
/// ## Behavior / 行为
/// 1. Validate the submitted records; nothing is touched on failure
/// 2. Merge the domain field, together with the domain's setup flag if it has
///    one, into the remote document as a single patch
/// 3. Replace the local snapshot
///
/// Steps 2-3 run under the per-(domain, user) write lock. The field and its
/// flag land in one merge, so the remote never holds new data with a stale
/// flag, and the local cache is never ahead of what the remote has confirmed.
pub struct WriteThrough<D: SyncDomain> {
    remote: Arc<dyn RemoteDocumentPort>,
    cache: Arc<dyn LocalCachePort<D::Record>>,
    locks: Arc<UserWriteLocks>,
    _domain: PhantomData<fn() -> D>,
}

impl<D: SyncDomain> WriteThrough<D> {
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

    pub async fn execute(
        &self,
        user_id: &UserId,
        records: &[D::Record],
    ) -> Result<(), WriteThroughError> {
        let span = info_span!(
            "usecase.write_through.execute",
            domain = D::NAME,
            user_id = %user_id,
            count = records.len()
        );

        async {
            D::validate(records)?;
            let encoded = D::encode(records)?;

            let _guard = self.locks.acquire(D::NAME, user_id).await;

            let mut patch = ProfilePatch::new().field(D::FIELD, encoded);
            if let Some(step) = D::STEP {
                patch = patch.setup_flag(step);
            }
            self.remote.merge(user_id, patch.into_map()).await?;

            if let Err(err) = self.cache.save(user_id, records).await {
                warn!(error = %err, "cache save failed after remote write, dropping snapshot");
                if let Err(clear_err) = self.cache.clear(user_id).await {
                    warn!(error = %clear_err, "failed to drop stale snapshot");
                }
                return Err(err.into());
            }

            info!("saved");
            Ok::<(), WriteThroughError>(())
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::{object, MemoryCache, MockRemote};
    use dh_core::sync::{FuelRecords, NicknameDomain, Payments};
    use dh_core::{FuelRecord, Nickname, PaymentMethod};
    use serde_json::json;
    use std::sync::atomic::Ordering;

    fn use_case(
        remote: MockRemote,
        cache: Arc<MemoryCache<PaymentMethod>>,
    ) -> WriteThrough<Payments> {
        WriteThrough::new(Arc::new(remote), cache, Arc::new(UserWriteLocks::new()))
    }

    #[tokio::test]
    async fn merges_field_and_flag_together_then_saves_locally() {
        let mut remote = MockRemote::new();
        remote
            .expect_merge()
            .withf(|user, patch| {
                user.as_str() == "u1"
                    && *patch
                        == object(json!({
                            "payment": [
                                { "name": "Pix", "active": true },
                                { "name": "Dinheiro", "active": false }
                            ],
                            "setupStatus": { "payment": true }
                        }))
            })
            .times(1)
            .returning(|_, _| Ok(()));
        let cache = Arc::new(MemoryCache::new());

        let records = vec![
            PaymentMethod::new("Pix", true),
            PaymentMethod::new("Dinheiro", false),
        ];
        use_case(remote, cache.clone())
            .execute(&UserId::from("u1"), &records)
            .await
            .unwrap();

        assert_eq!(cache.rows(), records);
    }

    #[tokio::test]
    async fn validation_failure_touches_nothing() {
        let mut remote = MockRemote::new();
        remote.expect_merge().times(0);
        let cache = Arc::new(MemoryCache::new());

        let err = use_case(remote, cache.clone())
            .execute(&UserId::from("u1"), &[PaymentMethod::new("Pix", false)])
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            WriteThroughError::Validation(ValidationError::NoActivePaymentMethod)
        ));
        assert_eq!(cache.saves(), 0);
    }

    #[tokio::test]
    async fn remote_failure_leaves_flag_and_cache_untouched() {
        let mut remote = MockRemote::new();
        remote
            .expect_merge()
            .times(1)
            .returning(|_, _| Err(RemoteDocumentError::Unavailable("offline".into())));
        let before = vec![PaymentMethod::new("Pix", true)];
        let cache = Arc::new(MemoryCache::with_rows(before.clone()));

        let err = use_case(remote, cache.clone())
            .execute(&UserId::from("u1"), &[PaymentMethod::new("Cartão", true)])
            .await
            .unwrap_err();

        assert!(matches!(err, WriteThroughError::Remote(_)));
        assert_eq!(cache.rows(), before);
        assert_eq!(cache.saves(), 0);
    }

    #[tokio::test]
    async fn rejected_flag_keeps_previous_snapshot_and_sends_no_field() {
        let mut remote = MockRemote::new();
        remote
            .expect_merge()
            .times(1)
            .returning(|_, patch| {
                if patch.contains_key("setupStatus") {
                    Err(RemoteDocumentError::PermissionDenied("rules".into()))
                } else {
                    Ok(())
                }
            });
        let before = vec![PaymentMethod::new("Pix", true)];
        let cache = Arc::new(MemoryCache::with_rows(before.clone()));

        let err = use_case(remote, cache.clone())
            .execute(&UserId::from("u1"), &[PaymentMethod::new("Cartão", true)])
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            WriteThroughError::Remote(RemoteDocumentError::PermissionDenied(_))
        ));
        assert_eq!(cache.rows(), before);
        assert_eq!(cache.saves(), 0);
    }

    #[tokio::test]
    async fn cache_failure_after_remote_write_drops_snapshot() {
        let mut remote = MockRemote::new();
        remote.expect_merge().times(1).returning(|_, _| Ok(()));
        let cache = Arc::new(MemoryCache::with_rows(vec![PaymentMethod::new("Pix", true)]));
        cache.fail_save.store(true, Ordering::SeqCst);

        let err = use_case(remote, cache.clone())
            .execute(&UserId::from("u1"), &[PaymentMethod::new("Cartão", true)])
            .await
            .unwrap_err();

        assert!(matches!(err, WriteThroughError::Cache(_)));
        assert_eq!(cache.clears(), 1);
        assert!(cache.rows().is_empty());
    }

    #[tokio::test]
    async fn domain_without_step_merges_once() {
        let mut remote = MockRemote::new();
        remote
            .expect_merge()
            .withf(|_, patch| patch.contains_key("fuelRecords") && patch.len() == 1)
            .times(1)
            .returning(|_, _| Ok(()));
        let cache = Arc::new(MemoryCache::<FuelRecord>::new());

        let uc = WriteThrough::<FuelRecords>::new(
            Arc::new(remote),
            cache.clone(),
            Arc::new(UserWriteLocks::new()),
        );
        uc.execute(&UserId::from("u1"), &[]).await.unwrap();
        assert_eq!(cache.saves(), 1);
    }

    #[tokio::test]
    async fn nickname_is_written_as_bare_string() {
        let mut remote = MockRemote::new();
        remote
            .expect_merge()
            .withf(|_, patch| {
                *patch == object(json!({ "nickname": "Zé", "setupStatus": { "nickname": true } }))
            })
            .times(1)
            .returning(|_, _| Ok(()));
        let cache = Arc::new(MemoryCache::<Nickname>::new());

        let uc = WriteThrough::<NicknameDomain>::new(
            Arc::new(remote),
            cache.clone(),
            Arc::new(UserWriteLocks::new()),
        );
        uc.execute(&UserId::from("u1"), &[Nickname::new("Zé")])
            .await
            .unwrap();
        assert_eq!(cache.rows(), vec![Nickname::new("Zé")]);
    }
}
