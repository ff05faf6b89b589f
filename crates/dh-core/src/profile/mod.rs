//! Remote profile document model.
//!
//! One JSON document per driver holds every synchronized field plus the
//! `setupStatus` flag map. This module names those fields, builds merge patches
//! and applies them with the document store's merge rules.

mod merge;
mod patch;

use serde::{Deserialize, Serialize};

use crate::domain::ValidationError;

pub use merge::merge_document;
pub use patch::ProfilePatch;

/// Top-level field of the remote profile document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Profile,
    Vehicle,
    Payment,
    Categories,
    Nickname,
    FuelRecords,
    SetupStatus,
}

impl ProfileField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileField::Profile => "profile",
            ProfileField::Vehicle => "vehicle",
            ProfileField::Payment => "payment",
            ProfileField::Categories => "categories",
            ProfileField::Nickname => "nickname",
            ProfileField::FuelRecords => "fuelRecords",
            ProfileField::SetupStatus => "setupStatus",
        }
    }
}

/// Personal details collected by the first setup step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverProfile {
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

impl DriverProfile {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.full_name.trim().is_empty() {
            return Err(ValidationError::EmptyProfileName);
        }
        Ok(())
    }
}
