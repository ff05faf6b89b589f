//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. The use cases only ever see these
//! traits; the SQLite caches and the remote document store live in `dh-infra`.

mod clock;
pub mod errors;
pub mod local_cache;
pub mod remote_document;

pub use clock::*;
pub use errors::{CacheError, RemoteDocumentError};
pub use local_cache::LocalCachePort;
pub use remote_document::RemoteDocumentPort;
