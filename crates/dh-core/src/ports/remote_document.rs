use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::ids::UserId;
use crate::ports::errors::RemoteDocumentError;
use crate::profile::ProfileField;
use crate::setup::SetupStatus;

/// The remote per-user profile document.
#[async_trait]
pub trait RemoteDocumentPort: Send + Sync {
    /// Read one top-level field.
    /// - Ok(None) if the document or the field does not exist
    async fn fetch_field(
        &self,
        user_id: &UserId,
        field: ProfileField,
    ) -> Result<Option<Value>, RemoteDocumentError>;

    /// Merge `patch` into the user's document, creating it if missing.
    /// Nested objects merge; other values replace.
    async fn merge(
        &self,
        user_id: &UserId,
        patch: Map<String, Value>,
    ) -> Result<(), RemoteDocumentError>;

    /// Read the setup flag map; a missing document or field is an empty status.
    async fn fetch_setup_status(
        &self,
        user_id: &UserId,
    ) -> Result<SetupStatus, RemoteDocumentError> {
        let value = self.fetch_field(user_id, ProfileField::SetupStatus).await?;
        Ok(value
            .as_ref()
            .map(SetupStatus::from_value)
            .unwrap_or_default())
    }
}

#[cfg(test)]
mockall::mock! {
    pub Remote {}

    #[async_trait]
    impl RemoteDocumentPort for Remote {
        async fn fetch_field(
            &self,
            user_id: &UserId,
            field: ProfileField,
        ) -> Result<Option<Value>, RemoteDocumentError>;
        async fn merge(
            &self,
            user_id: &UserId,
            patch: Map<String, Value>,
        ) -> Result<(), RemoteDocumentError>;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::SetupStep;
    use mockall::predicate::eq;
    use serde_json::json;

    #[tokio::test]
    async fn fetch_setup_status_defaults_to_empty_when_field_missing() {
        let mut remote = MockRemote::new();
        remote
            .expect_fetch_field()
            .with(eq(UserId::from("u1")), eq(ProfileField::SetupStatus))
            .times(1)
            .returning(|_, _| Ok(None));

        let status = remote.fetch_setup_status(&UserId::from("u1")).await.unwrap();
        assert_eq!(status, SetupStatus::default());
    }

    #[tokio::test]
    async fn fetch_setup_status_parses_flags() {
        let mut remote = MockRemote::new();
        remote
            .expect_fetch_field()
            .returning(|_, _| Ok(Some(json!({ "profile": true, "vehicle": true }))));

        let status = remote.fetch_setup_status(&UserId::from("u1")).await.unwrap();
        assert_eq!(status.next_missing_step(), Some(SetupStep::Payment));
    }

    #[tokio::test]
    async fn fetch_setup_status_propagates_remote_error() {
        let mut remote = MockRemote::new();
        remote
            .expect_fetch_field()
            .returning(|_, _| Err(RemoteDocumentError::Unavailable("offline".into())));

        let err = remote
            .fetch_setup_status(&UserId::from("u1"))
            .await
            .unwrap_err();
        assert!(matches!(err, RemoteDocumentError::Unavailable(_)));
    }
}
