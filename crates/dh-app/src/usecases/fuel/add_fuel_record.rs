use std::sync::Arc;

use thiserror::Error;
use tracing::{info, info_span, Instrument};

use dh_core::ports::{ClockPort, LocalCachePort, RemoteDocumentPort};
use dh_core::sync::FuelRecords;
use dh_core::{FuelRecord, FuelRecordId, FuelType, SyncError, UserId};

use crate::usecases::sync::{ReadThrough, UserWriteLocks, WriteThrough, WriteThroughError};

/// Lock key for the read-append-write cycle; distinct from the write-through key.
const APPEND_LOCK: &str = "fuel.append";

#[derive(Debug, Error)]
pub enum AddFuelRecordError {
    #[error("failed to load fuel history: {0}")]
    Load(#[from] SyncError),

    #[error(transparent)]
    Save(#[from] WriteThroughError),
}

/// A fill-up as entered by the driver, before it gets an id and a timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct NewFuelRecord {
    pub station: String,
    pub fuel_type: FuelType,
    pub liters: f64,
    pub price_per_liter: f64,
    pub odometer_km: i64,
}

/// Appends one fill-up to the driver's fuel history.
///
/// Reads the current history local-first, appends the new record stamped with
/// the clock's time and writes the whole list through. Concurrent appends for
/// the same driver are serialized so none is lost.
pub struct AddFuelRecord {
    read: ReadThrough<FuelRecords>,
    write: WriteThrough<FuelRecords>,
    locks: Arc<UserWriteLocks>,
    clock: Arc<dyn ClockPort>,
}

impl AddFuelRecord {
    pub fn new(
        remote: Arc<dyn RemoteDocumentPort>,
        cache: Arc<dyn LocalCachePort<FuelRecord>>,
        locks: Arc<UserWriteLocks>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            read: ReadThrough::new(remote.clone(), cache.clone(), locks.clone()),
            write: WriteThrough::new(remote, cache, locks.clone()),
            locks,
            clock,
        }
    }

    pub async fn execute(
        &self,
        user_id: &UserId,
        entry: NewFuelRecord,
    ) -> Result<FuelRecord, AddFuelRecordError> {
        let span = info_span!("usecase.add_fuel_record.execute", user_id = %user_id);

        async {
            let _guard = self.locks.acquire(APPEND_LOCK, user_id).await;

            let mut history = self.read.execute(user_id).await.into_result()?;
            let record = FuelRecord {
                id: FuelRecordId::new(),
                station: entry.station,
                fuel_type: entry.fuel_type,
                liters: entry.liters,
                price_per_liter: entry.price_per_liter,
                odometer_km: entry.odometer_km,
                filled_at: self.clock.now(),
            };
            history.push(record.clone());

            self.write.execute(user_id, &history).await?;
            info!(record_id = %record.id, total = history.len(), "fuel record added");
            Ok::<FuelRecord, AddFuelRecordError>(record)
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::{MemoryCache, MockRemote};
    use chrono::{DateTime, TimeZone, Utc};
    use dh_core::domain::ValidationError;
    use dh_core::ports::RemoteDocumentError;

    struct FixedClock(DateTime<Utc>);

    impl ClockPort for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn fill_up(station: &str, liters: f64) -> NewFuelRecord {
        NewFuelRecord {
            station: station.to_string(),
            fuel_type: FuelType::Ethanol,
            liters,
            price_per_liter: 3.89,
            odometer_km: 42_000,
        }
    }

    fn use_case(remote: MockRemote, cache: Arc<MemoryCache<FuelRecord>>) -> AddFuelRecord {
        let at = Utc.with_ymd_and_hms(2025, 11, 2, 8, 30, 0).unwrap();
        AddFuelRecord::new(
            Arc::new(remote),
            cache,
            Arc::new(UserWriteLocks::new()),
            Arc::new(FixedClock(at)),
        )
    }

    #[tokio::test]
    async fn first_record_starts_history() {
        let mut remote = MockRemote::new();
        remote.expect_fetch_field().times(1).returning(|_, _| Ok(None));
        remote
            .expect_merge()
            .withf(|_, patch| {
                patch
                    .get("fuelRecords")
                    .and_then(|v| v.as_array())
                    .map(|list| list.len() == 1)
                    .unwrap_or(false)
            })
            .times(1)
            .returning(|_, _| Ok(()));
        let cache = Arc::new(MemoryCache::new());

        let record = use_case(remote, cache.clone())
            .execute(&UserId::from("u1"), fill_up("Posto Shell", 35.0))
            .await
            .unwrap();

        assert_eq!(record.station, "Posto Shell");
        assert_eq!(record.filled_at.to_rfc3339(), "2025-11-02T08:30:00+00:00");
        assert_eq!(cache.rows(), vec![record]);
    }

    #[tokio::test]
    async fn appends_after_cached_history() {
        let mut remote = MockRemote::new();
        remote.expect_fetch_field().times(0);
        remote.expect_merge().times(1).returning(|_, _| Ok(()));

        let existing = FuelRecord {
            id: FuelRecordId::from("f1"),
            station: "Posto Ipiranga".to_string(),
            fuel_type: FuelType::Gasoline,
            liters: 20.0,
            price_per_liter: 5.79,
            odometer_km: 41_500,
            filled_at: Utc.with_ymd_and_hms(2025, 10, 30, 18, 0, 0).unwrap(),
        };
        let cache = Arc::new(MemoryCache::with_rows(vec![existing.clone()]));

        let added = use_case(remote, cache.clone())
            .execute(&UserId::from("u1"), fill_up("Posto Shell", 35.0))
            .await
            .unwrap();

        assert_eq!(cache.rows(), vec![existing, added]);
    }

    #[tokio::test]
    async fn load_failure_does_not_write() {
        let mut remote = MockRemote::new();
        remote
            .expect_fetch_field()
            .returning(|_, _| Err(RemoteDocumentError::Unavailable("offline".into())));
        remote.expect_merge().times(0);

        let err = use_case(remote, Arc::new(MemoryCache::new()))
            .execute(&UserId::from("u1"), fill_up("Posto Shell", 35.0))
            .await
            .unwrap_err();
        assert!(matches!(err, AddFuelRecordError::Load(SyncError::Remote(_))));
    }

    #[tokio::test]
    async fn invalid_entry_is_rejected() {
        let mut remote = MockRemote::new();
        remote.expect_fetch_field().returning(|_, _| Ok(None));
        remote.expect_merge().times(0);

        let err = use_case(remote, Arc::new(MemoryCache::new()))
            .execute(&UserId::from("u1"), fill_up("Posto Shell", 0.0))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AddFuelRecordError::Save(WriteThroughError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn infinite_liters_never_reach_the_remote() {
        let mut remote = MockRemote::new();
        remote.expect_fetch_field().returning(|_, _| Ok(None));
        remote.expect_merge().times(0);
        let cache = Arc::new(MemoryCache::new());

        let err = use_case(remote, cache.clone())
            .execute(&UserId::from("u1"), fill_up("Posto Shell", f64::INFINITY))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AddFuelRecordError::Save(WriteThroughError::Validation(
                ValidationError::InvalidLiters { .. }
            ))
        ));
        assert_eq!(cache.saves(), 0);
    }
}
