use async_trait::async_trait;
use diesel::prelude::*;
use tracing::debug;

use dh_core::ports::{CacheError, LocalCachePort};
use dh_core::{FuelRecord, UserId};

use super::{mapping_err, storage_err, to_rows};
use crate::db::models::{FuelRecordRow, NewFuelRecordRow};
use crate::db::ports::{CacheExecutor, InsertMapper, RowMapper};
use crate::db::schema::fuel_record::dsl::*;

pub struct DieselFuelRecordCache<E, M> {
    executor: E,
    mapper: M,
}

impl<E, M> DieselFuelRecordCache<E, M> {
    pub fn new(executor: E, mapper: M) -> Self {
        Self { executor, mapper }
    }
}

#[async_trait]
impl<E, M> LocalCachePort<FuelRecord> for DieselFuelRecordCache<E, M>
where
    E: CacheExecutor,
    M: InsertMapper<FuelRecord, NewFuelRecordRow>
        + RowMapper<FuelRecordRow, FuelRecord>
        + Send
        + Sync,
{
    async fn get(&self, owner: &UserId) -> Result<Vec<FuelRecord>, CacheError> {
        let owner = owner.as_str().to_string();
        let rows = self
            .executor
            .run(move |conn| {
                Ok(fuel_record
                    .filter(user_id.eq(&owner))
                    .order(position.asc())
                    .load::<FuelRecordRow>(conn)?)
            })
            .map_err(storage_err)?;

        rows.iter()
            .map(|row| self.mapper.to_domain(row).map_err(mapping_err))
            .collect()
    }

    // TODO: fuel history grows without bound; switch to per-record upsert once
    // drivers carry more than a few hundred fill-ups.
    async fn save(&self, owner: &UserId, records: &[FuelRecord]) -> Result<(), CacheError> {
        let owner = owner.as_str().to_string();
        let rows = to_rows(&self.mapper, &owner, records)?;
        debug!(user_id = %owner, count = rows.len(), "replacing fuel record snapshot");

        self.executor
            .run_in_transaction(move |conn| {
                diesel::delete(fuel_record.filter(user_id.eq(&owner))).execute(conn)?;
                for row in &rows {
                    diesel::insert_into(fuel_record).values(row).execute(conn)?;
                }
                Ok(())
            })
            .map_err(storage_err)
    }

    async fn clear(&self, owner: &UserId) -> Result<(), CacheError> {
        let owner = owner.as_str().to_string();
        self.executor
            .run(move |conn| {
                diesel::delete(fuel_record.filter(user_id.eq(&owner))).execute(conn)?;
                Ok(())
            })
            .map_err(storage_err)
    }
}
