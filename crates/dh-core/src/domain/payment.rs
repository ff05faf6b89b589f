use serde::{Deserialize, Serialize};

use super::validation::{ensure_named, ensure_unique, ValidationError};

/// A payment method the driver accepts (e.g. "Pix", "Dinheiro").
///
/// Display order is the order of the list; it is preserved across saves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub name: String,
    pub active: bool,
}

impl PaymentMethod {
    pub fn new(name: impl Into<String>, active: bool) -> Self {
        Self {
            name: name.into(),
            active,
        }
    }
}

pub fn validate_payment_methods(methods: &[PaymentMethod]) -> Result<(), ValidationError> {
    ensure_named("payment", methods.iter().map(|m| m.name.as_str()))?;
    ensure_unique("payment", methods.iter().map(|m| m.name.as_str()))?;
    if !methods.iter().any(|m| m.active) {
        return Err(ValidationError::NoActivePaymentMethod);
    }
    Ok(())
}
