use serde::{Deserialize, Serialize};

use super::validation::{ensure_named, ensure_unique, ValidationError};
use crate::ids::CategoryId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Income,
    Expense,
}

impl CategoryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryKind::Income => "income",
            CategoryKind::Expense => "expense",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "income" => Some(CategoryKind::Income),
            "expense" => Some(CategoryKind::Expense),
            _ => None,
        }
    }
}

/// A bookkeeping category for income or expense entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CategoryKind,
    pub color: String,
    pub icon: String,
}

pub fn validate_categories(categories: &[Category]) -> Result<(), ValidationError> {
    ensure_named("categories", categories.iter().map(|c| c.name.as_str()))?;
    ensure_unique("categories", categories.iter().map(|c| c.id.as_str()))?;
    if let Some(bad) = categories.iter().find(|c| !is_hex_color(&c.color)) {
        return Err(ValidationError::InvalidColor(bad.color.clone()));
    }
    Ok(())
}

fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}
