use super::types::{JeepModel, TRIM_MAX_LENGTH};

/// A model/trim pair that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedQuery {
    pub model: JeepModel,
    pub trim: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid model: {0}")]
    InvalidModel(String),

    #[error("Invalid trim: {0}")]
    InvalidTrim(String),
}

fn is_trim_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == ' ' || c == '-'
}

/// Validate a caller-supplied model and trim pair.
///
/// The model must match the canonical form of a [`JeepModel`] variant
/// exactly. The trim must be non-empty, at most [`TRIM_MAX_LENGTH`]
/// characters, and contain only letters, digits, spaces, and hyphens.
/// Pure function of its inputs.
pub fn validate(model: &str, trim: &str) -> Result<ValidatedQuery, ValidationError> {
    let model: JeepModel = model
        .parse()
        .map_err(|_| ValidationError::InvalidModel(format!("unknown model '{}'", model)))?;

    if trim.is_empty() {
        return Err(ValidationError::InvalidTrim("trim must not be empty".to_string()));
    }
    if trim.chars().count() > TRIM_MAX_LENGTH {
        return Err(ValidationError::InvalidTrim(format!(
            "trim exceeds maximum length of {} characters",
            TRIM_MAX_LENGTH
        )));
    }
    if !trim.chars().all(is_trim_char) {
        return Err(ValidationError::InvalidTrim(
            "trim contains characters outside letters, digits, spaces, and hyphens".to_string(),
        ));
    }

    Ok(ValidatedQuery {
        model,
        trim: trim.to_string(),
    })
}
