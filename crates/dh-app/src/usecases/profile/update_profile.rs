use std::sync::Arc;

use thiserror::Error;
use tracing::{info, info_span, Instrument};

use dh_core::domain::ValidationError;
use dh_core::ports::{RemoteDocumentError, RemoteDocumentPort};
use dh_core::{DriverProfile, ProfileField, ProfilePatch, SetupStep, UserId};

#[derive(Debug, Error)]
pub enum UpdateProfileError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("profile could not be encoded: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("remote write failed: {0}")]
    Remote(#[from] RemoteDocumentError),
}

/// Use case for the first setup step: the driver's personal details.
///
/// The profile lives only in the remote document; there is no local cache
/// for it. A successful save raises the `profile` setup flag.
pub struct UpdateProfile {
    remote: Arc<dyn RemoteDocumentPort>,
}

impl UpdateProfile {
    pub fn new(remote: Arc<dyn RemoteDocumentPort>) -> Self {
        Self { remote }
    }

    pub async fn execute(
        &self,
        user_id: &UserId,
        profile: &DriverProfile,
    ) -> Result<(), UpdateProfileError> {
        let span = info_span!("usecase.update_profile.execute", user_id = %user_id);

        async {
            profile.validate()?;
            let value = serde_json::to_value(profile)?;

            let patch = ProfilePatch::new()
                .field(ProfileField::Profile, value)
                .setup_flag(SetupStep::Profile);
            self.remote.merge(user_id, patch.into_map()).await?;

            info!("profile saved");
            Ok::<(), UpdateProfileError>(())
        }
        .instrument(span)
        .await
    }
}
