//! Local-first synchronization contract.
//!
//! A [`SyncDomain`] describes one vertical data slice: the record type, the
//! remote field it mirrors, the setup step its first save completes, its
//! invariants and its remote encoding. The read-through and write-through use
//! cases are generic over it.

mod domains;
mod outcome;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::domain::ValidationError;
use crate::profile::ProfileField;
use crate::setup::SetupStep;

pub use domains::{Categories, FuelRecords, NicknameDomain, Payments, Vehicles};
pub use outcome::{CodecError, SyncError, SyncOutcome};

pub trait SyncDomain: Send + Sync + 'static {
    type Record: Clone
        + std::fmt::Debug
        + PartialEq
        + Serialize
        + DeserializeOwned
        + Send
        + Sync
        + 'static;

    /// Short name used in logs and lock keys.
    const NAME: &'static str;

    /// Remote document field this domain mirrors.
    const FIELD: ProfileField;

    /// Setup flag raised by a successful save, if any.
    const STEP: Option<SetupStep>;

    fn validate(records: &[Self::Record]) -> Result<(), ValidationError>;

    fn encode(records: &[Self::Record]) -> Result<Value, CodecError> {
        Ok(serde_json::to_value(records)?)
    }

    /// Decodes the remote field; `null` is an empty set.
    fn decode(value: Value) -> Result<Vec<Self::Record>, CodecError> {
        if value.is_null() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_value(value)?)
    }
}
