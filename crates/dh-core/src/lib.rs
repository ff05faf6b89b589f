//! # dh-core
//!
//! Core domain models and business logic for DriverHub.
//!
//! This crate contains pure business logic without any infrastructure dependencies:
//! the cached domain records, the setup flags that gate onboarding, the rules for
//! merging patches into a remote profile document, and the port traits that the
//! infrastructure layer implements.

pub mod domain;
pub mod ids;
pub mod ports;
pub mod profile;
pub mod setup;
pub mod sync;

// Re-export commonly used types at the crate root
pub use domain::{Category, CategoryKind, FuelRecord, FuelType, Nickname, PaymentMethod, Vehicle};
pub use ids::{CategoryId, FuelRecordId, UserId};
pub use profile::{DriverProfile, ProfileField, ProfilePatch};
pub use setup::{GateState, SetupStatus, SetupStep};
pub use sync::{SyncDomain, SyncError, SyncOutcome};
