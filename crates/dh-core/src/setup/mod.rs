//! Setup domain module.
//!
//! This module defines the onboarding completion flags and the gate state machine
//! that decides which setup screen a driver must finish next.

pub mod gate;
pub mod status;

pub use gate::{GateAction, GateEvent, GateState, SetupGate};
pub use status::{SetupStatus, SetupStep};
