use async_trait::async_trait;
use diesel::prelude::*;

use dh_core::ports::{CacheError, LocalCachePort};
use dh_core::{Nickname, UserId};

use super::{mapping_err, storage_err, to_rows};
use crate::db::models::{NewNicknameRow, NicknameRow};
use crate::db::ports::{CacheExecutor, InsertMapper, RowMapper};
use crate::db::schema::user_nickname::dsl::*;

/// Single-row snapshot: a user has zero or one cached nickname.
pub struct DieselNicknameCache<E, M> {
    executor: E,
    mapper: M,
}

impl<E, M> DieselNicknameCache<E, M> {
    pub fn new(executor: E, mapper: M) -> Self {
        Self { executor, mapper }
    }
}

#[async_trait]
impl<E, M> LocalCachePort<Nickname> for DieselNicknameCache<E, M>
where
    E: CacheExecutor,
    M: InsertMapper<Nickname, NewNicknameRow> + RowMapper<NicknameRow, Nickname> + Send + Sync,
{
    async fn get(&self, owner: &UserId) -> Result<Vec<Nickname>, CacheError> {
        let owner = owner.as_str().to_string();
        let row = self
            .executor
            .run(move |conn| {
                Ok(user_nickname
                    .filter(user_id.eq(&owner))
                    .order(position.asc())
                    .first::<NicknameRow>(conn)
                    .optional()?)
            })
            .map_err(storage_err)?;

        match row {
            Some(r) => Ok(vec![self.mapper.to_domain(&r).map_err(mapping_err)?]),
            None => Ok(Vec::new()),
        }
    }

    async fn save(&self, owner: &UserId, records: &[Nickname]) -> Result<(), CacheError> {
        if records.len() > 1 {
            return Err(mapping_err(format!(
                "nickname snapshot holds at most one row, got {}",
                records.len()
            )));
        }
        let owner = owner.as_str().to_string();
        let rows = to_rows(&self.mapper, &owner, records)?;

        self.executor
            .run_in_transaction(move |conn| {
                diesel::delete(user_nickname.filter(user_id.eq(&owner))).execute(conn)?;
                for row in &rows {
                    diesel::insert_into(user_nickname).values(row).execute(conn)?;
                }
                Ok(())
            })
            .map_err(storage_err)
    }

    async fn clear(&self, owner: &UserId) -> Result<(), CacheError> {
        let owner = owner.as_str().to_string();
        self.executor
            .run(move |conn| {
                diesel::delete(user_nickname.filter(user_id.eq(&owner))).execute(conn)?;
                Ok(())
            })
            .map_err(storage_err)
    }
}
