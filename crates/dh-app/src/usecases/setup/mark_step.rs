use std::sync::Arc;

use dh_core::ports::{RemoteDocumentError, RemoteDocumentPort};
use dh_core::{ProfilePatch, SetupStep, UserId};

/// Use case for raising a single setup completion flag.
///
/// Only the given flag is sent; the other flags in the remote map are left as
/// they are. Flags are never cleared.
pub struct MarkSetupStep {
    remote: Arc<dyn RemoteDocumentPort>,
}

impl MarkSetupStep {
    pub fn new(remote: Arc<dyn RemoteDocumentPort>) -> Self {
        Self { remote }
    }

    pub async fn execute(&self, user_id: &UserId, step: SetupStep) -> Result<(), RemoteDocumentError> {
        let patch = ProfilePatch::new().setup_flag(step);
        self.remote.merge(user_id, patch.into_map()).await?;
        tracing::info!(user_id = %user_id, step = step.as_str(), "setup step marked complete");
        Ok(())
    }
}
