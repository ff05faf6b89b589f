//! DriverHub Application Layer
//!
//! This crate contains the use cases that move driver data between the local
//! caches and the remote profile document, and the setup gate that guards the
//! main screens.

pub mod deps;
pub mod usecases;

pub use deps::AppDeps;
pub use usecases::{
    AddFuelRecord, AddFuelRecordError, EvaluateSetupGate, MarkSetupStep, NewFuelRecord,
    ReadThrough, UpdateProfile, UpdateProfileError, UserWriteLocks, WriteThrough,
    WriteThroughError,
};
