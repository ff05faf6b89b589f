use async_trait::async_trait;

use crate::ids::UserId;
use crate::ports::errors::CacheError;

/// On-device snapshot of one domain's records for each user.
#[async_trait]
pub trait LocalCachePort<R>: Send + Sync
where
    R: Send + Sync + 'static,
{
    /// Rows cached for `user_id`, in the order they were saved.
    /// - Ok(empty) on a cache miss
    async fn get(&self, user_id: &UserId) -> Result<Vec<R>, CacheError>;

    /// Replace the user's snapshot with `records`.
    /// - Must be atomic: either the old snapshot or the new one is visible
    /// - Order of `records` is the order `get` returns
    async fn save(&self, user_id: &UserId, records: &[R]) -> Result<(), CacheError>;

    /// Drop the user's snapshot so the next read goes to the remote.
    async fn clear(&self, user_id: &UserId) -> Result<(), CacheError>;
}
