use async_trait::async_trait;
use diesel::prelude::*;
use tracing::debug;

use dh_core::ports::{CacheError, LocalCachePort};
use dh_core::{UserId, Vehicle};

use super::{mapping_err, storage_err, to_rows};
use crate::db::models::{NewVehicleRow, VehicleRow};
use crate::db::ports::{CacheExecutor, InsertMapper, RowMapper};
use crate::db::schema::vehicle::dsl::*;

pub struct DieselVehicleCache<E, M> {
    executor: E,
    mapper: M,
}

impl<E, M> DieselVehicleCache<E, M> {
    pub fn new(executor: E, mapper: M) -> Self {
        Self { executor, mapper }
    }
}

#[async_trait]
impl<E, M> LocalCachePort<Vehicle> for DieselVehicleCache<E, M>
where
    E: CacheExecutor,
    M: InsertMapper<Vehicle, NewVehicleRow> + RowMapper<VehicleRow, Vehicle> + Send + Sync,
{
    async fn get(&self, owner: &UserId) -> Result<Vec<Vehicle>, CacheError> {
        let owner = owner.as_str().to_string();
        let rows = self
            .executor
            .run(move |conn| {
                Ok(vehicle
                    .filter(user_id.eq(&owner))
                    .order(position.asc())
                    .load::<VehicleRow>(conn)?)
            })
            .map_err(storage_err)?;

        rows.iter()
            .map(|row| self.mapper.to_domain(row).map_err(mapping_err))
            .collect()
    }

    async fn save(&self, owner: &UserId, records: &[Vehicle]) -> Result<(), CacheError> {
        let owner = owner.as_str().to_string();
        let rows = to_rows(&self.mapper, &owner, records)?;
        debug!(user_id = %owner, count = rows.len(), "replacing vehicle snapshot");

        self.executor
            .run_in_transaction(move |conn| {
                diesel::delete(vehicle.filter(user_id.eq(&owner))).execute(conn)?;
                for row in &rows {
                    diesel::insert_into(vehicle).values(row).execute(conn)?;
                }
                Ok(())
            })
            .map_err(storage_err)
    }

    async fn clear(&self, owner: &UserId) -> Result<(), CacheError> {
        let owner = owner.as_str().to_string();
        self.executor
            .run(move |conn| {
                diesel::delete(vehicle.filter(user_id.eq(&owner))).execute(conn)?;
                Ok(())
            })
            .map_err(storage_err)
    }
}
