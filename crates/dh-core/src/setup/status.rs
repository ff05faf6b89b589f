use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One onboarding step, in the order the gate checks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SetupStep {
    Profile,
    Vehicle,
    Payment,
    Categories,
    Nickname,
}

impl SetupStep {
    /// Fixed evaluation order of the setup gate.
    pub const ORDER: [SetupStep; 5] = [
        SetupStep::Profile,
        SetupStep::Vehicle,
        SetupStep::Payment,
        SetupStep::Categories,
        SetupStep::Nickname,
    ];

    /// Key of this step inside the remote `setupStatus` map.
    pub fn as_str(&self) -> &'static str {
        match self {
            SetupStep::Profile => "profile",
            SetupStep::Vehicle => "vehicle",
            SetupStep::Payment => "payment",
            SetupStep::Categories => "categories",
            SetupStep::Nickname => "nickname",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ORDER.into_iter().find(|step| step.as_str() == key)
    }
}

impl fmt::Display for SetupStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-user map of onboarding completion flags.
///
/// A step that is absent from the map is not complete. Flags only ever go from
/// `false` to `true`; nothing in the system clears one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SetupStatus {
    flags: BTreeMap<SetupStep, bool>,
}

impl SetupStatus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_complete(&self, step: SetupStep) -> bool {
        self.flags.get(&step).copied().unwrap_or(false)
    }

    pub fn mark_complete(&mut self, step: SetupStep) {
        self.flags.insert(step, true);
    }

    pub fn with_complete(mut self, step: SetupStep) -> Self {
        self.mark_complete(step);
        self
    }

    /// First step, in [`SetupStep::ORDER`], whose flag is false or absent.
    pub fn next_missing_step(&self) -> Option<SetupStep> {
        SetupStep::ORDER
            .into_iter()
            .find(|step| !self.is_complete(*step))
    }

    pub fn all_complete(&self) -> bool {
        self.next_missing_step().is_none()
    }

    /// Reads the remote `setupStatus` map.
    ///
    /// Unknown keys and non-boolean values are ignored; anything that is not an
    /// object yields an empty status.
    pub fn from_value(value: &Value) -> Self {
        let mut status = Self::default();
        let Some(map) = value.as_object() else {
            return status;
        };

        for (key, flag) in map {
            match (SetupStep::from_key(key), flag.as_bool()) {
                (Some(step), Some(flag)) => {
                    status.flags.insert(step, flag);
                }
                _ => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(key = %key, "ignoring unrecognized setup status entry");
                }
            }
        }

        status
    }

    pub fn to_value(&self) -> Value {
        let map: Map<String, Value> = self
            .flags
            .iter()
            .map(|(step, flag)| (step.as_str().to_string(), Value::Bool(*flag)))
            .collect();
        Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_flag_counts_as_incomplete() {
        let status = SetupStatus::new();
        assert!(!status.is_complete(SetupStep::Vehicle));
        assert_eq!(status.next_missing_step(), Some(SetupStep::Profile));
    }

    #[test]
    fn next_missing_step_follows_fixed_order_for_every_flag_combination() {
        for mask in 0u8..32 {
            let mut status = SetupStatus::new();
            for (bit, step) in SetupStep::ORDER.iter().enumerate() {
                if mask & (1 << bit) != 0 {
                    status.mark_complete(*step);
                }
            }

            let expected = SetupStep::ORDER
                .iter()
                .enumerate()
                .find(|(bit, _)| mask & (1 << bit) == 0)
                .map(|(_, step)| *step);

            assert_eq!(status.next_missing_step(), expected, "mask {mask:05b}");
        }
    }

    #[test]
    fn explicit_false_is_treated_like_absent() {
        let status = SetupStatus::from_value(&json!({
            "profile": true,
            "vehicle": false,
            "payment": true,
        }));
        assert_eq!(status.next_missing_step(), Some(SetupStep::Vehicle));
    }

    #[test]
    fn from_value_ignores_unknown_keys_and_non_bool_values() {
        let status = SetupStatus::from_value(&json!({
            "profile": true,
            "tutorial": true,
            "vehicle": "yes",
        }));
        assert!(status.is_complete(SetupStep::Profile));
        assert!(!status.is_complete(SetupStep::Vehicle));
        assert_eq!(status.to_value(), json!({ "profile": true }));
    }

    #[test]
    fn from_value_on_non_object_is_empty() {
        assert_eq!(SetupStatus::from_value(&Value::Null), SetupStatus::new());
        assert_eq!(SetupStatus::from_value(&json!([true])), SetupStatus::new());
    }
}
