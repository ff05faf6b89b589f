//! Setup gate state machine.
//!
//! Defines a pure state transition function for the onboarding gate that guards
//! the main screens. The gate never performs I/O; the use case that drives it
//! executes the returned actions.

use std::fmt;

use super::status::{SetupStatus, SetupStep};

/// Gate state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    /// Setup status is still being fetched.
    Unknown,
    /// The given step is the first one not yet completed.
    Missing(SetupStep),
    /// Every step is complete; guarded content may render.
    Complete,
}

impl GateState {
    /// Step screen to redirect to, if any.
    pub fn redirect(&self) -> Option<SetupStep> {
        match self {
            GateState::Missing(step) => Some(*step),
            GateState::Unknown | GateState::Complete => None,
        }
    }

    pub fn renders_guarded_content(&self) -> bool {
        matches!(self, GateState::Complete)
    }

    pub fn label(&self) -> &'static str {
        match self {
            GateState::Unknown => "unknown",
            GateState::Missing(SetupStep::Profile) => "profile-missing",
            GateState::Missing(SetupStep::Vehicle) => "vehicle-missing",
            GateState::Missing(SetupStep::Payment) => "payment-missing",
            GateState::Missing(SetupStep::Categories) => "categories-missing",
            GateState::Missing(SetupStep::Nickname) => "nickname-missing",
            GateState::Complete => "complete",
        }
    }
}

impl fmt::Display for GateState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Events that drive the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateEvent {
    /// A guarded screen is entered (or re-entered).
    Enter,
    /// The remote setup status arrived.
    StatusLoaded(SetupStatus),
    /// Fetching the setup status failed.
    LoadFailed,
}

/// Side-effects produced by gate transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateAction {
    FetchSetupStatus,
    RedirectTo(SetupStep),
    RenderGuardedContent,
}

/// Pure gate state machine.
pub struct SetupGate;

impl SetupGate {
    /// Maps a setup status onto the state the gate settles in.
    pub fn evaluate(status: &SetupStatus) -> GateState {
        match status.next_missing_step() {
            Some(step) => GateState::Missing(step),
            None => GateState::Complete,
        }
    }

    pub fn transition(state: GateState, event: GateEvent) -> (GateState, Vec<GateAction>) {
        match (state, event) {
            // Re-entry always restarts from a fresh fetch.
            (_, GateEvent::Enter) => (GateState::Unknown, vec![GateAction::FetchSetupStatus]),
            (GateState::Unknown, GateEvent::StatusLoaded(status)) => {
                let next = Self::evaluate(&status);
                let action = match next {
                    GateState::Missing(step) => GateAction::RedirectTo(step),
                    _ => GateAction::RenderGuardedContent,
                };
                (next, vec![action])
            }
            (GateState::Unknown, GateEvent::LoadFailed) => (GateState::Unknown, Vec::new()),
            (state, _event) => (state, Vec::new()),
        }
    }
}
