use std::sync::Arc;

use anyhow::Context;
use diesel::SqliteConnection;

use crate::db::pool::DbPool;
use crate::db::ports::CacheExecutor;

/// Executor over the pool of a single cache store.
#[derive(Clone)]
pub struct SqliteCacheExecutor {
    pool: Arc<DbPool>,
}

impl SqliteCacheExecutor {
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }
}

impl CacheExecutor for SqliteCacheExecutor {
    fn run<T>(
        &self,
        f: impl FnOnce(&mut SqliteConnection) -> anyhow::Result<T>,
    ) -> anyhow::Result<T> {
        let mut conn = self
            .pool
            .get()
            .context("cache store connection unavailable")?;
        f(&mut conn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool::{open_cache_store, CacheStore};
    use diesel::prelude::*;
    use diesel::sql_types::BigInt;
    use tempfile::TempDir;

    #[derive(QueryableByName)]
    struct Count {
        #[diesel(sql_type = BigInt)]
        n: i64,
    }

    fn count_rows(executor: &SqliteCacheExecutor) -> i64 {
        executor
            .run(|conn| {
                Ok(diesel::sql_query("SELECT COUNT(*) AS n FROM payment_method")
                    .get_result::<Count>(conn)?
                    .n)
            })
            .unwrap()
    }

    #[test]
    fn failed_transaction_rolls_back_every_statement() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let executor = SqliteCacheExecutor::new(
            open_cache_store(dir.path(), CacheStore::Payments).expect("Failed to init db"),
        );

        let result = executor.run_in_transaction(|conn| {
            diesel::sql_query(
                "INSERT INTO payment_method (user_id, name, active, position) VALUES ('u1', 'Pix', 1, 0)",
            )
            .execute(conn)?;
            diesel::sql_query(
                "INSERT INTO payment_method (user_id, name, active, position) VALUES ('u1', 'Pix', 0, 1)",
            )
            .execute(conn)?;
            Ok(())
        });

        assert!(result.is_err());
        assert_eq!(count_rows(&executor), 0);
    }
}
