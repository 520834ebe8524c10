//! Input validation for passkeep operations.
//!
//! The backing file has no quoting, so anything that would break a record
//! line is refused before it reaches the store.

use crate::core::constants::DELIMITER;
use crate::error::{Result, ValidationError};

/// Validate one credential field.
///
/// Fields cannot contain the record delimiter or a line break. Empty values
/// are allowed.
///
/// # Arguments
///
/// * `field` - Field name (for error messages)
/// * `value` - The value to validate
///
/// # Errors
///
/// Returns `ValidationError::ForbiddenChar` naming the offending character.
pub fn validate_field(field: &'static str, value: &str) -> Result<()> {
    if value.contains(DELIMITER) {
        return Err(ValidationError::ForbiddenChar {
            field,
            found: "a comma",
        }
        .into());
    }

    if value.contains(|c: char| c == '\n' || c == '\r') {
        return Err(ValidationError::ForbiddenChar {
            field,
            found: "a line break",
        }
        .into());
    }

    Ok(())
}

/// Validate every field of a credential before it is stored.
pub fn validate_credential(credential: &crate::core::domain::Credential) -> Result<()> {
    validate_field("identity", credential.identity())?;
    validate_field("secret", credential.secret())?;
    validate_field(credential.kind().target_label(), credential.target())?;
    Ok(())
}

/// Check that the backing file is private to its owner (Unix only).
///
/// Returns the actual mode when it is looser than `0600`.
#[cfg(unix)]
pub fn loose_permissions(path: &std::path::Path) -> Option<u32> {
    use std::os::unix::fs::PermissionsExt;

    let mode = std::fs::metadata(path).ok()?.permissions().mode() & 0o777;
    if mode & 0o077 != 0 {
        Some(mode)
    } else {
        None
    }
}

#[cfg(not(unix))]
pub fn loose_permissions(_path: &std::path::Path) -> Option<u32> {
    None
}
