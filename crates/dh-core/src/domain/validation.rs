use thiserror::Error;

/// A submitted record set violates a domain invariant.
///
/// Raised before any adapter is touched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{domain}: name must not be empty")]
    EmptyName { domain: &'static str },

    #[error("{domain}: duplicate key {key:?}")]
    DuplicateKey { domain: &'static str, key: String },

    #[error("at least one payment method must be active")]
    NoActivePaymentMethod,

    #[error("invalid color {0:?}, expected #RRGGBB")]
    InvalidColor(String),

    #[error("expected exactly one nickname, got {0}")]
    NicknameCount(usize),

    #[error("nickname is {len} characters long, at most {max} allowed")]
    NicknameTooLong { len: usize, max: usize },

    #[error("vehicle year {0} is out of range")]
    VehicleYearOutOfRange(i32),

    #[error("fuel record {id}: liters must be a finite number greater than zero")]
    InvalidLiters { id: String },

    #[error("fuel record {id}: price per liter must be a finite, non-negative number")]
    InvalidPrice { id: String },

    #[error("profile full name must not be empty")]
    EmptyProfileName,
}

/// Fails on the first key seen twice.
pub(crate) fn ensure_unique<'a>(
    domain: &'static str,
    keys: impl IntoIterator<Item = &'a str>,
) -> Result<(), ValidationError> {
    let mut seen = std::collections::HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            return Err(ValidationError::DuplicateKey {
                domain,
                key: key.to_string(),
            });
        }
    }
    Ok(())
}

pub(crate) fn ensure_named<'a>(
    domain: &'static str,
    names: impl IntoIterator<Item = &'a str>,
) -> Result<(), ValidationError> {
    if names.into_iter().any(|name| name.trim().is_empty()) {
        return Err(ValidationError::EmptyName { domain });
    }
    Ok(())
}
