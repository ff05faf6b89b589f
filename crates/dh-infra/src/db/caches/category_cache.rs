use async_trait::async_trait;
use diesel::prelude::*;
use tracing::debug;

use dh_core::ports::{CacheError, LocalCachePort};
use dh_core::{Category, UserId};

use super::{mapping_err, storage_err, to_rows};
use crate::db::models::{CategoryRow, NewCategoryRow};
use crate::db::ports::{CacheExecutor, InsertMapper, RowMapper};
use crate::db::schema::category::dsl::{category, position, user_id};

pub struct DieselCategoryCache<E, M> {
    executor: E,
    mapper: M,
}

impl<E, M> DieselCategoryCache<E, M> {
    pub fn new(executor: E, mapper: M) -> Self {
        Self { executor, mapper }
    }
}

#[async_trait]
impl<E, M> LocalCachePort<Category> for DieselCategoryCache<E, M>
where
    E: CacheExecutor,
    M: InsertMapper<Category, NewCategoryRow> + RowMapper<CategoryRow, Category> + Send + Sync,
{
    async fn get(&self, owner: &UserId) -> Result<Vec<Category>, CacheError> {
        let owner = owner.as_str().to_string();
        let rows = self
            .executor
            .run(move |conn| {
                Ok(category
                    .filter(user_id.eq(&owner))
                    .order(position.asc())
                    .load::<CategoryRow>(conn)?)
            })
            .map_err(storage_err)?;

        let mut categories = Vec::with_capacity(rows.len());
        for row in &rows {
            let mapped = self.mapper.to_domain(row).map_err(|e| {
                mapping_err(format!("category {} for user {}: {}", row.id, row.user_id, e))
            })?;
            categories.push(mapped);
        }
        Ok(categories)
    }

    async fn save(&self, owner: &UserId, records: &[Category]) -> Result<(), CacheError> {
        let owner = owner.as_str().to_string();
        let rows = to_rows(&self.mapper, &owner, records)?;
        debug!(user_id = %owner, count = rows.len(), "replacing category snapshot");

        self.executor
            .run_in_transaction(move |conn| {
                diesel::delete(category.filter(user_id.eq(&owner))).execute(conn)?;
                for row in &rows {
                    diesel::insert_into(category).values(row).execute(conn)?;
                }
                Ok(())
            })
            .map_err(storage_err)
    }

    async fn clear(&self, owner: &UserId) -> Result<(), CacheError> {
        let owner = owner.as_str().to_string();
        self.executor
            .run(move |conn| {
                diesel::delete(category.filter(user_id.eq(&owner))).execute(conn)?;
                Ok(())
            })
            .map_err(storage_err)
    }
}
