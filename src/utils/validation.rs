use crate::utils::error::{PlaytextError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if allowed.contains(&value) {
        return Ok(());
    }

    Err(PlaytextError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: format!("Allowed values: {}", allowed.join(", ")),
    })
}

pub fn validate_no_nul(field_name: &str, value: &str) -> Result<()> {
    if value.contains('\0') {
        return Err(PlaytextError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.escape_default().to_string(),
            reason: "Value contains null bytes".to_string(),
        });
    }
    Ok(())
}
