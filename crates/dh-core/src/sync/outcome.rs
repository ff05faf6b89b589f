use thiserror::Error;

use crate::ports::errors::{CacheError, RemoteDocumentError};

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("invalid remote field: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unexpected remote value: {0}")]
    Unexpected(String),
}

#[derive(Debug, Error)]
pub enum SyncError {
    #[error(transparent)]
    Cache(#[from] CacheError),

    #[error(transparent)]
    Remote(#[from] RemoteDocumentError),

    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Result of a local-first read.
///
/// Callers must look at it: a remote failure on domain data is never folded
/// into an empty result.
#[must_use]
#[derive(Debug)]
pub enum SyncOutcome<R> {
    /// Served from the local cache; no remote call was made.
    Cached(Vec<R>),
    /// Cache was empty; fetched from the remote.
    Fetched(Vec<R>),
    /// Neither the cache nor the remote holds anything for this user.
    Missing,
    Failed(SyncError),
}

impl<R> SyncOutcome<R> {
    /// Records carried by the outcome; empty for `Missing` and `Failed`.
    pub fn records(&self) -> &[R] {
        match self {
            SyncOutcome::Cached(records) | SyncOutcome::Fetched(records) => records,
            SyncOutcome::Missing | SyncOutcome::Failed(_) => &[],
        }
    }

    pub fn is_cache_hit(&self) -> bool {
        matches!(self, SyncOutcome::Cached(_))
    }

    /// Collapses the outcome: `Missing` becomes an empty vec, `Failed` an error.
    pub fn into_result(self) -> Result<Vec<R>, SyncError> {
        match self {
            SyncOutcome::Cached(records) | SyncOutcome::Fetched(records) => Ok(records),
            SyncOutcome::Missing => Ok(Vec::new()),
            SyncOutcome::Failed(err) => Err(err),
        }
    }
}
