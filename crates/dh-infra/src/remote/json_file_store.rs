//! File-backed profile document store.
//!
//! Each driver's document is one JSON object at `<root>/<hex(user_id)>.json`.
//! Merges are read-modify-write under a process-wide lock and land on disk via
//! a temp file plus rename, so readers see either the old or the new document.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use dh_core::ports::{RemoteDocumentError, RemoteDocumentPort};
use dh_core::profile::{merge_document, ProfileField};
use dh_core::UserId;

pub struct JsonFileDocumentStore {
    root: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileDocumentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn document_path(&self, user_id: &UserId) -> PathBuf {
        self.root
            .join(format!("{}.json", hex::encode(user_id.as_str())))
    }

    async fn read_document(
        &self,
        path: &Path,
    ) -> Result<Option<Map<String, Value>>, RemoteDocumentError> {
        let content = match fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(io_err(path, e)),
        };

        if content.trim().is_empty() {
            return Ok(None);
        }

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(map)) => Ok(Some(map)),
            Ok(other) => Err(RemoteDocumentError::Corrupt(format!(
                "{}: expected an object, found {}",
                path.display(),
                json_kind(&other)
            ))),
            Err(e) => Err(RemoteDocumentError::Corrupt(format!(
                "{}: {}",
                path.display(),
                e
            ))),
        }
    }

    async fn atomic_write(
        &self,
        path: &Path,
        document: &Map<String, Value>,
    ) -> Result<(), RemoteDocumentError> {
        fs::create_dir_all(&self.root)
            .await
            .map_err(|e| io_err(&self.root, e))?;

        let content = serde_json::to_string_pretty(document)
            .map_err(|e| RemoteDocumentError::Corrupt(format!("serialize document: {e}")))?;

        let tmp_path = path.with_extension(format!("{}.tmp", uuid::Uuid::new_v4()));
        fs::write(&tmp_path, content)
            .await
            .map_err(|e| io_err(&tmp_path, e))?;

        if let Err(e) = fs::rename(&tmp_path, path).await {
            if let Err(cleanup) = fs::remove_file(&tmp_path).await {
                warn!(path = %tmp_path.display(), error = %cleanup, "failed to remove temp document");
            }
            return Err(io_err(path, e));
        }
        Ok(())
    }
}

#[async_trait]
impl RemoteDocumentPort for JsonFileDocumentStore {
    async fn fetch_field(
        &self,
        user_id: &UserId,
        field: ProfileField,
    ) -> Result<Option<Value>, RemoteDocumentError> {
        let path = self.document_path(user_id);
        let document = self.read_document(&path).await?;
        Ok(document.and_then(|mut doc| doc.remove(field.as_str())))
    }

    async fn merge(
        &self,
        user_id: &UserId,
        patch: Map<String, Value>,
    ) -> Result<(), RemoteDocumentError> {
        let path = self.document_path(user_id);
        let _guard = self.write_lock.lock().await;

        let mut document = self.read_document(&path).await?.unwrap_or_default();
        let keys: Vec<String> = patch.keys().cloned().collect();
        merge_document(&mut document, patch);
        self.atomic_write(&path, &document).await?;

        debug!(user_id = %user_id, fields = ?keys, "merged profile document");
        Ok(())
    }
}

fn io_err(path: &Path, e: std::io::Error) -> RemoteDocumentError {
    let message = format!("{}: {}", path.display(), e);
    match e.kind() {
        ErrorKind::PermissionDenied => RemoteDocumentError::PermissionDenied(message),
        _ => RemoteDocumentError::Unavailable(message),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn patch(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("patch must be an object"),
        }
    }

    #[tokio::test]
    async fn fetch_field_missing_document_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileDocumentStore::new(temp_dir.path());

        let value = store
            .fetch_field(&UserId::from("u1"), ProfileField::Payment)
            .await
            .unwrap();
        assert_eq!(value, None);
    }

    #[tokio::test]
    async fn merge_creates_document_and_preserves_other_fields() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileDocumentStore::new(temp_dir.path().join("docs"));
        let user = UserId::from("u1");

        store
            .merge(&user, patch(json!({ "nickname": "Zé" })))
            .await
            .unwrap();
        store
            .merge(
                &user,
                patch(json!({ "payment": [{ "name": "Pix", "active": true }] })),
            )
            .await
            .unwrap();

        assert_eq!(
            store.fetch_field(&user, ProfileField::Nickname).await.unwrap(),
            Some(json!("Zé"))
        );
        assert_eq!(
            store.fetch_field(&user, ProfileField::Payment).await.unwrap(),
            Some(json!([{ "name": "Pix", "active": true }]))
        );
    }

    #[tokio::test]
    async fn setup_flags_merge_without_clobbering_siblings() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileDocumentStore::new(temp_dir.path());
        let user = UserId::from("u1");

        store
            .merge(&user, patch(json!({ "setupStatus": { "profile": true } })))
            .await
            .unwrap();
        store
            .merge(&user, patch(json!({ "setupStatus": { "vehicle": true } })))
            .await
            .unwrap();

        assert_eq!(
            store
                .fetch_field(&user, ProfileField::SetupStatus)
                .await
                .unwrap(),
            Some(json!({ "profile": true, "vehicle": true }))
        );
    }

    #[tokio::test]
    async fn documents_are_isolated_per_user() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileDocumentStore::new(temp_dir.path());

        store
            .merge(&UserId::from("u1"), patch(json!({ "nickname": "A" })))
            .await
            .unwrap();

        let other = store
            .fetch_field(&UserId::from("u2"), ProfileField::Nickname)
            .await
            .unwrap();
        assert_eq!(other, None);
    }

    #[tokio::test]
    async fn unparsable_document_is_corrupt() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileDocumentStore::new(temp_dir.path());
        let user = UserId::from("u1");
        fs::write(store.document_path(&user), "{invalid json")
            .await
            .unwrap();

        let err = store
            .fetch_field(&user, ProfileField::Payment)
            .await
            .unwrap_err();
        assert!(matches!(err, RemoteDocumentError::Corrupt(_)));

        let err = store
            .merge(&user, patch(json!({ "nickname": "Zé" })))
            .await
            .unwrap_err();
        assert!(matches!(err, RemoteDocumentError::Corrupt(_)));
    }

    #[tokio::test]
    async fn non_object_document_is_corrupt() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileDocumentStore::new(temp_dir.path());
        let user = UserId::from("u1");
        fs::write(store.document_path(&user), "[1, 2]").await.unwrap();

        let err = store
            .fetch_field(&user, ProfileField::Payment)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("an array"));
    }

    #[tokio::test]
    async fn concurrent_merges_keep_every_field() {
        let temp_dir = TempDir::new().unwrap();
        let store = Arc::new(JsonFileDocumentStore::new(temp_dir.path()));
        let user = UserId::from("u1");

        let mut handles = Vec::new();
        for step in ["profile", "vehicle", "payment", "categories", "nickname"] {
            let store = store.clone();
            let user = user.clone();
            let mut flags = Map::new();
            flags.insert(step.to_string(), Value::Bool(true));
            let mut update = Map::new();
            update.insert("setupStatus".to_string(), Value::Object(flags));
            handles.push(tokio::spawn(async move { store.merge(&user, update).await }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let flags = store
            .fetch_field(&user, ProfileField::SetupStatus)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(flags.as_object().unwrap().len(), 5);
    }
}
