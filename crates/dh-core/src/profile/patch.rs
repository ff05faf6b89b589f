use serde_json::{Map, Value};

use super::ProfileField;
use crate::setup::SetupStep;

/// A partial profile document to be merged into the remote copy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfilePatch {
    fields: Map<String, Value>,
}

impl ProfilePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, field: ProfileField, value: Value) -> Self {
        self.fields.insert(field.as_str().to_string(), value);
        self
    }

    /// Sets a single completion flag; merging leaves the other flags intact.
    pub fn setup_flag(mut self, step: SetupStep) -> Self {
        let mut flags = Map::new();
        flags.insert(step.as_str().to_string(), Value::Bool(true));
        self.fields.insert(
            ProfileField::SetupStatus.as_str().to_string(),
            Value::Object(flags),
        );
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.fields
    }
}
