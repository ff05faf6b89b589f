use std::sync::Arc;

use tracing::{debug, info_span, warn, Instrument};

use dh_core::ports::{RemoteDocumentError, RemoteDocumentPort};
use dh_core::setup::{GateAction, GateEvent, SetupGate};
use dh_core::{GateState, UserId};

/// Use case that decides where a guarded screen sends the driver.
///
/// Drives the [`SetupGate`] state machine: entering the gate fetches the
/// remote `setupStatus` map, and the loaded map settles the gate on the first
/// missing step or on `Complete`.
pub struct EvaluateSetupGate {
    remote: Arc<dyn RemoteDocumentPort>,
}

impl EvaluateSetupGate {
    pub fn new(remote: Arc<dyn RemoteDocumentPort>) -> Self {
        Self { remote }
    }

    /// Returns the settled gate state.
    ///
    /// A failed status fetch leaves the gate on `Unknown` and the error is
    /// returned, so the caller can show the failure instead of guessing.
    pub async fn execute(&self, user_id: &UserId) -> Result<GateState, RemoteDocumentError> {
        let span = info_span!("usecase.evaluate_setup_gate.execute", user_id = %user_id);

        async {
            let (mut state, actions) = SetupGate::transition(GateState::Unknown, GateEvent::Enter);

            for action in actions {
                if action != GateAction::FetchSetupStatus {
                    continue;
                }
                match self.remote.fetch_setup_status(user_id).await {
                    Ok(status) => {
                        let (next, follow_up) =
                            SetupGate::transition(state, GateEvent::StatusLoaded(status));
                        debug!(state = %next, actions = ?follow_up, "gate settled");
                        state = next;
                    }
                    Err(err) => {
                        warn!(error = %err, "failed to load setup status");
                        let (unchanged, _) = SetupGate::transition(state, GateEvent::LoadFailed);
                        debug!(state = %unchanged, "gate stays unresolved");
                        return Err(err);
                    }
                }
            }

            Ok(state)
        }
        .instrument(span)
        .await
    }
}
