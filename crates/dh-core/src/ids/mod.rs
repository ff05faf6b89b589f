mod id_macro;

use serde::{Deserialize, Serialize};

use id_macro::{impl_generated_id, impl_id};

/// Identifier of the authenticated driver that owns a profile document.
///
/// Issued by the remote identity provider; never generated locally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FuelRecordId(String);

impl_id!(UserId, CategoryId, FuelRecordId);
impl_generated_id!(CategoryId, FuelRecordId);
