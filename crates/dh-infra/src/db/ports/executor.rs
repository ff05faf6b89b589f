use diesel::{Connection, QueryResult, SqliteConnection};

/// Access to one cache store's connection.
///
/// Implementations hand out the store's single SQLite connection; callers do
/// their diesel work inside the closure and never hold the connection across
/// an `.await`.
pub trait CacheExecutor: Send + Sync {
    fn run<T>(
        &self,
        f: impl FnOnce(&mut SqliteConnection) -> anyhow::Result<T>,
    ) -> anyhow::Result<T>;

    /// Runs `f` in one transaction; an error from any statement rolls back all of them.
    fn run_in_transaction<T>(
        &self,
        f: impl FnOnce(&mut SqliteConnection) -> QueryResult<T>,
    ) -> anyhow::Result<T> {
        self.run(|conn| Ok(conn.transaction(f)?))
    }
}
