// ABOUTME: Input validation for user-supplied profile data
// ABOUTME: Guards patches before they are issued to the portal API

use thiserror::Error;

use crate::constants::MAX_NAME_LENGTH;
use crate::types::ProfilePatch;

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Patch contains no fields to update")]
    EmptyPatch,

    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Name exceeds maximum length of {MAX_NAME_LENGTH} characters")]
    NameTooLong,
}

/// Validate a profile patch before it is issued as a mutation.
pub fn validate_patch(patch: &ProfilePatch) -> Result<(), ValidationError> {
    if patch.is_empty() {
        return Err(ValidationError::EmptyPatch);
    }

    if let Some(name) = &patch.name {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if trimmed.chars().count() > MAX_NAME_LENGTH {
            return Err(ValidationError::NameTooLong);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_patch() {
        assert_eq!(
            validate_patch(&ProfilePatch::default()),
            Err(ValidationError::EmptyPatch)
        );
    }

    #[test]
    fn rejects_blank_name() {
        assert_eq!(
            validate_patch(&ProfilePatch::rename("   ")),
            Err(ValidationError::EmptyName)
        );
    }

    #[test]
    fn rejects_oversized_name() {
        let name = "x".repeat(MAX_NAME_LENGTH + 1);
        assert_eq!(
            validate_patch(&ProfilePatch::rename(name)),
            Err(ValidationError::NameTooLong)
        );
    }

    #[test]
    fn accepts_flag_only_patch() {
        assert_eq!(validate_patch(&ProfilePatch::anonymous(true)), Ok(()));
    }
}
