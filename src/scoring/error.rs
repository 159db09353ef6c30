use thiserror::Error;

/// Input problem that stops a house from being scored.
///
/// Field names are the camelCase names used on the wire (`maxPrice`,
/// `crimeIndex`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{field} is invalid: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl ScoreError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ScoreError::InvalidValue {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the offending attribute
    pub fn field(&self) -> &'static str {
        match self {
            ScoreError::MissingField(field) => field,
            ScoreError::InvalidValue { field, .. } => field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message() {
        let err = ScoreError::MissingField("crimeIndex");
        assert_eq!(err.to_string(), "crimeIndex is required");
        assert_eq!(err.field(), "crimeIndex");
    }

    #[test]
    fn test_invalid_value_message() {
        let err = ScoreError::invalid("maxPrice", "must be > 0");
        assert_eq!(err.to_string(), "maxPrice is invalid: must be > 0");
        assert_eq!(err.field(), "maxPrice");
    }
}
