use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use dh_core::UserId;

/// Per-(domain, user) write serialization.
///
/// Overlapping writes to the same domain for the same user run one after the
/// other; writes to different domains or users never wait on each other.
/// Entries are kept for the lifetime of the map.
#[derive(Default)]
pub struct UserWriteLocks {
    slots: Mutex<HashMap<(&'static str, UserId), Arc<AsyncMutex<()>>>>,
}

impl UserWriteLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for and take the write slot for `domain` and `user_id`.
    pub async fn acquire(&self, domain: &'static str, user_id: &UserId) -> OwnedMutexGuard<()> {
        let slot = {
            let mut slots = self.slots.lock().unwrap_or_else(|poisoned| {
                tracing::error!("write lock map poisoned, recovering");
                poisoned.into_inner()
            });
            slots
                .entry((domain, user_id.clone()))
                .or_insert_with(|| Arc::new(AsyncMutex::new(())))
                .clone()
        };
        slot.lock_owned().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn same_domain_and_user_is_serialized() {
        let locks = UserWriteLocks::new();
        let user = UserId::from("u1");

        let guard = locks.acquire("payments", &user).await;
        let blocked = tokio::time::timeout(
            Duration::from_millis(20),
            locks.acquire("payments", &user),
        )
        .await;
        assert!(blocked.is_err());

        drop(guard);
        let _again = locks.acquire("payments", &user).await;
    }

    #[tokio::test]
    async fn different_domains_and_users_do_not_block() {
        let locks = UserWriteLocks::new();
        let _payments_u1 = locks.acquire("payments", &UserId::from("u1")).await;

        let other_domain = tokio::time::timeout(
            Duration::from_millis(20),
            locks.acquire("vehicles", &UserId::from("u1")),
        )
        .await;
        assert!(other_domain.is_ok());

        let other_user = tokio::time::timeout(
            Duration::from_millis(20),
            locks.acquire("payments", &UserId::from("u2")),
        )
        .await;
        assert!(other_user.is_ok());
    }
}
