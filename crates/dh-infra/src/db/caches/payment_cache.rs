use async_trait::async_trait;
use diesel::prelude::*;
use tracing::debug;

use dh_core::ports::{CacheError, LocalCachePort};
use dh_core::{PaymentMethod, UserId};

use super::{mapping_err, storage_err, to_rows};
use crate::db::models::{NewPaymentMethodRow, PaymentMethodRow};
use crate::db::ports::{CacheExecutor, InsertMapper, RowMapper};
use crate::db::schema::payment_method::dsl::*;

pub struct DieselPaymentCache<E, M> {
    executor: E,
    mapper: M,
}

impl<E, M> DieselPaymentCache<E, M> {
    pub fn new(executor: E, mapper: M) -> Self {
        Self { executor, mapper }
    }
}

#[async_trait]
impl<E, M> LocalCachePort<PaymentMethod> for DieselPaymentCache<E, M>
where
    E: CacheExecutor,
    M: InsertMapper<PaymentMethod, NewPaymentMethodRow>
        + RowMapper<PaymentMethodRow, PaymentMethod>
        + Send
        + Sync,
{
    async fn get(&self, owner: &UserId) -> Result<Vec<PaymentMethod>, CacheError> {
        let owner = owner.as_str().to_string();
        let rows = self
            .executor
            .run(move |conn| {
                Ok(payment_method
                    .filter(user_id.eq(&owner))
                    .order(position.asc())
                    .load::<PaymentMethodRow>(conn)?)
            })
            .map_err(storage_err)?;

        rows.iter()
            .map(|row| self.mapper.to_domain(row).map_err(mapping_err))
            .collect()
    }

    async fn save(&self, owner: &UserId, records: &[PaymentMethod]) -> Result<(), CacheError> {
        let owner = owner.as_str().to_string();
        let rows = to_rows(&self.mapper, &owner, records)?;
        debug!(user_id = %owner, count = rows.len(), "replacing payment method snapshot");

        self.executor
            .run_in_transaction(move |conn| {
                diesel::delete(payment_method.filter(user_id.eq(&owner))).execute(conn)?;
                for row in &rows {
                    diesel::insert_into(payment_method).values(row).execute(conn)?;
                }
                Ok(())
            })
            .map_err(storage_err)
    }

    async fn clear(&self, owner: &UserId) -> Result<(), CacheError> {
        let owner = owner.as_str().to_string();
        self.executor
            .run(move |conn| {
                diesel::delete(payment_method.filter(user_id.eq(&owner))).execute(conn)?;
                Ok(())
            })
            .map_err(storage_err)
    }
}
