use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CacheError {
    #[error("cache storage error: {0}")]
    Storage(String),

    #[error("cache row mapping error: {0}")]
    Mapping(String),
}

/// Failure talking to the remote profile document store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteDocumentError {
    #[error("remote document store unavailable: {0}")]
    Unavailable(String),

    #[error("permission denied for remote document: {0}")]
    PermissionDenied(String),

    #[error("remote document is corrupt: {0}")]
    Corrupt(String),
}
