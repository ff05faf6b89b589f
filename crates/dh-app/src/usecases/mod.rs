//! Business logic use cases
//! 业务用例
//!
//! [Screen] → ReadThrough<D>  → LocalCachePort<R> ─miss→ RemoteDocumentPort
//! [Form]   → WriteThrough<D> → RemoteDocumentPort → setupStatus flag → LocalCachePort<R>
//! [Guard]  → EvaluateSetupGate → RemoteDocumentPort (setupStatus)

pub mod fuel;
pub mod profile;
pub mod setup;
pub mod sync;

#[cfg(test)]
pub(crate) mod test_support;

pub use fuel::{AddFuelRecord, AddFuelRecordError, NewFuelRecord};
pub use profile::{UpdateProfile, UpdateProfileError};
pub use setup::{EvaluateSetupGate, MarkSetupStep};
pub use sync::{ReadThrough, UserWriteLocks, WriteThrough, WriteThroughError};
