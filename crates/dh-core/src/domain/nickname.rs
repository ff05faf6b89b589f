use serde::{Deserialize, Serialize};

use super::validation::ValidationError;

pub const MAX_NICKNAME_LEN: usize = 30;

/// Name the driver is greeted with. Stored remotely as a bare string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Nickname(pub String);

impl Nickname {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A nickname save carries exactly one non-blank name.
pub fn validate_nickname(values: &[Nickname]) -> Result<(), ValidationError> {
    let [nickname] = values else {
        return Err(ValidationError::NicknameCount(values.len()));
    };

    let trimmed = nickname.0.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName { domain: "nickname" });
    }

    let len = trimmed.chars().count();
    if len > MAX_NICKNAME_LEN {
        return Err(ValidationError::NicknameTooLong {
            len,
            max: MAX_NICKNAME_LEN,
        });
    }
    Ok(())
}
